pub mod aqi;
pub mod caqi;
pub mod resampler;
pub mod summary;

pub use aqi::{overall_aqi, sub_index, AirQualityIndex, AqiCategory, AqiPollutant, SubIndex};
pub use caqi::{caqi, CaqiCategory, CaqiResult};
pub use resampler::DailyResampler;
pub use summary::{DatasetSummary, SummaryAnalyzer};
