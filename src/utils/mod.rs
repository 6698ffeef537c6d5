pub mod constants;
pub mod filename;
pub mod progress;
pub mod settings;

pub use constants::*;
pub use filename::station_csv_filename;
pub use progress::ProgressReporter;
pub use settings::Settings;
