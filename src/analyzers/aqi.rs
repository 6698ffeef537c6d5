use serde::Serialize;

use crate::models::Variable;

/// EPA-style qualitative bands, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The four pollutants the index is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AqiPollutant {
    No2,
    Pm10,
    Pm25,
    O3,
}

impl AqiPollutant {
    pub const ALL: [AqiPollutant; 4] = [
        AqiPollutant::No2,
        AqiPollutant::Pm10,
        AqiPollutant::Pm25,
        AqiPollutant::O3,
    ];

    pub fn variable(&self) -> Variable {
        match self {
            AqiPollutant::No2 => Variable::No2,
            AqiPollutant::Pm10 => Variable::Pm10,
            AqiPollutant::Pm25 => Variable::Pm25,
            AqiPollutant::O3 => Variable::O3,
        }
    }

    fn breakpoints(&self) -> &'static [Breakpoint] {
        match self {
            AqiPollutant::No2 => &NO2_BREAKPOINTS,
            AqiPollutant::Pm10 => &PM10_BREAKPOINTS,
            AqiPollutant::Pm25 => &PM25_BREAKPOINTS,
            AqiPollutant::O3 => &O3_BREAKPOINTS,
        }
    }

    /// Truncation applied before the bracket scan: PM2.5 keeps one decimal,
    /// the others are whole numbers. This is what makes the upper bound of
    /// each bracket inclusive. The nudge keeps values already on the decimal
    /// grid from being pushed down by binary representation error.
    fn truncate(&self, concentration: f64) -> f64 {
        match self {
            AqiPollutant::Pm25 => (concentration * 10.0 + 1e-9).floor() / 10.0,
            _ => (concentration + 1e-9).floor(),
        }
    }
}

impl std::fmt::Display for AqiPollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.variable().column_name())
    }
}

#[derive(Debug, Clone, Copy)]
struct Breakpoint {
    conc_lo: f64,
    conc_hi: f64,
    index_lo: f64,
    index_hi: f64,
    category: AqiCategory,
}

const fn bp(
    conc_lo: f64,
    conc_hi: f64,
    index_lo: f64,
    index_hi: f64,
    category: AqiCategory,
) -> Breakpoint {
    Breakpoint {
        conc_lo,
        conc_hi,
        index_lo,
        index_hi,
        category,
    }
}

const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 12.0, 0.0, 50.0, AqiCategory::Good),
    bp(12.1, 35.4, 51.0, 100.0, AqiCategory::Moderate),
    bp(35.5, 55.4, 101.0, 150.0, AqiCategory::UnhealthyForSensitiveGroups),
    bp(55.5, 150.4, 151.0, 200.0, AqiCategory::Unhealthy),
    bp(150.5, 250.4, 201.0, 300.0, AqiCategory::VeryUnhealthy),
    bp(250.5, 350.4, 301.0, 400.0, AqiCategory::Hazardous),
    bp(350.5, 500.4, 401.0, 500.0, AqiCategory::Hazardous),
];

const PM10_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 54.0, 0.0, 50.0, AqiCategory::Good),
    bp(55.0, 154.0, 51.0, 100.0, AqiCategory::Moderate),
    bp(155.0, 254.0, 101.0, 150.0, AqiCategory::UnhealthyForSensitiveGroups),
    bp(255.0, 354.0, 151.0, 200.0, AqiCategory::Unhealthy),
    bp(355.0, 424.0, 201.0, 300.0, AqiCategory::VeryUnhealthy),
    bp(425.0, 504.0, 301.0, 400.0, AqiCategory::Hazardous),
    bp(505.0, 604.0, 401.0, 500.0, AqiCategory::Hazardous),
];

const NO2_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 53.0, 0.0, 50.0, AqiCategory::Good),
    bp(54.0, 100.0, 51.0, 100.0, AqiCategory::Moderate),
    bp(101.0, 360.0, 101.0, 150.0, AqiCategory::UnhealthyForSensitiveGroups),
    bp(361.0, 649.0, 151.0, 200.0, AqiCategory::Unhealthy),
    bp(650.0, 1249.0, 201.0, 300.0, AqiCategory::VeryUnhealthy),
    bp(1250.0, 1649.0, 301.0, 400.0, AqiCategory::Hazardous),
    bp(1650.0, 2049.0, 401.0, 500.0, AqiCategory::Hazardous),
];

const O3_BREAKPOINTS: [Breakpoint; 5] = [
    bp(0.0, 54.0, 0.0, 50.0, AqiCategory::Good),
    bp(55.0, 70.0, 51.0, 100.0, AqiCategory::Moderate),
    bp(71.0, 85.0, 101.0, 150.0, AqiCategory::UnhealthyForSensitiveGroups),
    bp(86.0, 105.0, 151.0, 200.0, AqiCategory::Unhealthy),
    bp(106.0, 200.0, 201.0, 300.0, AqiCategory::VeryUnhealthy),
];

/// One pollutant's contribution to the composite index.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubIndex {
    pub pollutant: AqiPollutant,
    pub value: f64,
    pub category: AqiCategory,
}

/// Piecewise-linear sub-index for a single pollutant concentration.
/// `None` when the concentration falls outside every defined bracket.
pub fn sub_index(pollutant: AqiPollutant, concentration: f64) -> Option<SubIndex> {
    if !concentration.is_finite() || concentration < 0.0 {
        return None;
    }

    let c = pollutant.truncate(concentration);
    for breakpoint in pollutant.breakpoints() {
        if c >= breakpoint.conc_lo && c <= breakpoint.conc_hi {
            let value = breakpoint.index_lo
                + (breakpoint.index_hi - breakpoint.index_lo)
                    / (breakpoint.conc_hi - breakpoint.conc_lo)
                    * (c - breakpoint.conc_lo);
            return Some(SubIndex {
                pollutant,
                value,
                category: breakpoint.category,
            });
        }
    }

    None
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AirQualityIndex {
    pub value: f64,
    pub category: AqiCategory,
    pub dominant: AqiPollutant,
}

/// Composite index: the maximum over the sub-indices that are defined.
/// `None` only when every pollutant is outside its table.
pub fn overall_aqi(no2: f64, pm10: f64, pm2_5: f64, o3: f64) -> Option<AirQualityIndex> {
    let concentrations = [
        (AqiPollutant::No2, no2),
        (AqiPollutant::Pm10, pm10),
        (AqiPollutant::Pm25, pm2_5),
        (AqiPollutant::O3, o3),
    ];

    concentrations
        .into_iter()
        .filter_map(|(pollutant, concentration)| sub_index(pollutant, concentration))
        .max_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|sub| AirQualityIndex {
            value: sub.value,
            category: sub.category,
            dominant: sub.pollutant,
        })
}
