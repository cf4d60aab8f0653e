pub mod conversion;
pub mod convert;
pub mod pipeline;

pub use crate::domain::model::{ConvertedRecord, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
