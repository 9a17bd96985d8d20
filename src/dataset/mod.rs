mod dataset;
mod loader;
mod record;

pub use dataset::Dataset;
pub use loader::{DatasetLoader, count_rows};
pub use record::{Record, RecordParser};
