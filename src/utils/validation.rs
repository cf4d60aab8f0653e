use crate::core::conversion::Conversion;
use crate::domain::model::OutputFormat;
use crate::utils::error::{CaseError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CaseError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(CaseError::ValidationError {
            field: field_name.to_string(),
            message: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_conversion_names(field_name: &str, names: &[String]) -> Result<()> {
    for name in names {
        if name.parse::<Conversion>().is_err() {
            let valid: Vec<&str> = Conversion::ALL.iter().map(Conversion::name).collect();
            return Err(CaseError::ValidationError {
                field: field_name.to_string(),
                message: format!(
                    "Unknown conversion '{}'. Valid conversions: {}",
                    name,
                    valid.join(", ")
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, value: &str) -> Result<()> {
    value
        .parse::<OutputFormat>()
        .map(|_| ())
        .map_err(|_| CaseError::ValidationError {
            field: field_name.to_string(),
            message: format!(
                "Unsupported format '{}'. Valid formats: {}",
                value,
                OutputFormat::VALID.join(", ")
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pipeline.name", "columns").is_ok());
        assert!(validate_non_empty_string("pipeline.name", "").is_err());
        assert!(validate_non_empty_string("pipeline.name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("steps", &["camel-to-snake"]).is_ok());
        assert!(validate_non_empty_list::<String>("steps", &[]).is_err());
    }

    #[test]
    fn test_validate_conversion_names() {
        let names = vec!["camel-to-snake".to_string(), "toUpperCase".to_string()];
        assert!(validate_conversion_names("steps", &names).is_ok());

        let invalid = vec!["camel-to-snake".to_string(), "reverse".to_string()];
        let err = validate_conversion_names("steps", &invalid).unwrap_err();
        assert!(err.to_string().contains("reverse"));
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format("format", "text").is_ok());
        assert!(validate_output_format("format", "JSON").is_ok());
        assert!(validate_output_format("format", "csv").is_err());
    }
}
