pub mod error;
pub mod types;

pub use error::{AnalyzeError, ClassificationError, FetchError, UrlError};
pub use types::{Category, ClassifiedBuckets, VideoId};
