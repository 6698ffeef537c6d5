use serde::{Deserialize, Serialize};

/// The twelve monitoring stations covered by the PRSA dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    Aotizhongxin,
    Changping,
    Dingling,
    Dongsi,
    Guanyuan,
    Gucheng,
    Huairou,
    Nongzhanguan,
    Shunyi,
    Tiantan,
    Wanliu,
    Wanshouxigong,
}

impl Station {
    pub const ALL: [Station; 12] = [
        Station::Aotizhongxin,
        Station::Changping,
        Station::Dingling,
        Station::Dongsi,
        Station::Guanyuan,
        Station::Gucheng,
        Station::Huairou,
        Station::Nongzhanguan,
        Station::Shunyi,
        Station::Tiantan,
        Station::Wanliu,
        Station::Wanshouxigong,
    ];

    /// Station identifier as it appears in dataset file names and the
    /// `station` column.
    pub fn name(&self) -> &'static str {
        match self {
            Station::Aotizhongxin => "Aotizhongxin",
            Station::Changping => "Changping",
            Station::Dingling => "Dingling",
            Station::Dongsi => "Dongsi",
            Station::Guanyuan => "Guanyuan",
            Station::Gucheng => "Gucheng",
            Station::Huairou => "Huairou",
            Station::Nongzhanguan => "Nongzhanguan",
            Station::Shunyi => "Shunyi",
            Station::Tiantan => "Tiantan",
            Station::Wanliu => "Wanliu",
            Station::Wanshouxigong => "Wanshouxigong",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Station::ALL
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .copied()
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
