pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod reverse;

pub use error::ScrapeError;
pub use record::{Record, RecordSet, HEADER};
