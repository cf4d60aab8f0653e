pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::conversion::Conversion;
pub use core::convert::{
    camel_to_dot_notation, camel_to_kebab, camel_to_pascal, camel_to_snake, camel_to_title,
    camel_to_upper_snake, dot_notation_to_camel, kebab_to_camel, pascal_to_camel,
    snake_to_camel, to_lower_case, to_sentence_case, to_upper_case, upper_snake_to_camel,
};
pub use core::pipeline::{render, ConversionPipeline};
pub use domain::model::{ConvertedRecord, OutputFormat};
pub use utils::error::{CaseError, Result};
