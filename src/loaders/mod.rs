pub mod csv_reader;
pub mod fetcher;
pub mod source;

pub use csv_reader::{ColumnCatalog, CsvReader, REQUIRED_COLUMNS};
pub use fetcher::{FetchOutcome, StationFetcher};
pub use source::DataSource;
