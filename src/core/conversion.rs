use crate::core::convert;
use crate::utils::error::{CaseError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A named reference to one of the conversion functions, so conversions can
/// be picked from config files and command lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    CamelToSnake,
    SnakeToCamel,
    CamelToPascal,
    PascalToCamel,
    CamelToKebab,
    KebabToCamel,
    CamelToUpperSnake,
    UpperSnakeToCamel,
    ToLowerCase,
    ToUpperCase,
    CamelToTitle,
    ToSentenceCase,
    CamelToDotNotation,
    DotNotationToCamel,
}

impl Conversion {
    pub const ALL: [Conversion; 14] = [
        Conversion::CamelToSnake,
        Conversion::SnakeToCamel,
        Conversion::CamelToPascal,
        Conversion::PascalToCamel,
        Conversion::CamelToKebab,
        Conversion::KebabToCamel,
        Conversion::CamelToUpperSnake,
        Conversion::UpperSnakeToCamel,
        Conversion::ToLowerCase,
        Conversion::ToUpperCase,
        Conversion::CamelToTitle,
        Conversion::ToSentenceCase,
        Conversion::CamelToDotNotation,
        Conversion::DotNotationToCamel,
    ];

    /// Canonical kebab-case name, e.g. `camel-to-snake`.
    pub fn name(&self) -> &'static str {
        match self {
            Conversion::CamelToSnake => "camel-to-snake",
            Conversion::SnakeToCamel => "snake-to-camel",
            Conversion::CamelToPascal => "camel-to-pascal",
            Conversion::PascalToCamel => "pascal-to-camel",
            Conversion::CamelToKebab => "camel-to-kebab",
            Conversion::KebabToCamel => "kebab-to-camel",
            Conversion::CamelToUpperSnake => "camel-to-upper-snake",
            Conversion::UpperSnakeToCamel => "upper-snake-to-camel",
            Conversion::ToLowerCase => "to-lower-case",
            Conversion::ToUpperCase => "to-upper-case",
            Conversion::CamelToTitle => "camel-to-title",
            Conversion::ToSentenceCase => "to-sentence-case",
            Conversion::CamelToDotNotation => "camel-to-dot-notation",
            Conversion::DotNotationToCamel => "dot-notation-to-camel",
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Conversion::CamelToSnake => convert::camel_to_snake(input),
            Conversion::SnakeToCamel => convert::snake_to_camel(input),
            Conversion::CamelToPascal => convert::camel_to_pascal(input),
            Conversion::PascalToCamel => convert::pascal_to_camel(input),
            Conversion::CamelToKebab => convert::camel_to_kebab(input),
            Conversion::KebabToCamel => convert::kebab_to_camel(input),
            Conversion::CamelToUpperSnake => convert::camel_to_upper_snake(input),
            Conversion::UpperSnakeToCamel => convert::upper_snake_to_camel(input),
            Conversion::ToLowerCase => convert::to_lower_case(input),
            Conversion::ToUpperCase => convert::to_upper_case(input),
            Conversion::CamelToTitle => convert::camel_to_title(input),
            Conversion::ToSentenceCase => convert::to_sentence_case(input),
            Conversion::CamelToDotNotation => convert::camel_to_dot_notation(input),
            Conversion::DotNotationToCamel => convert::dot_notation_to_camel(input),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conversion {
    type Err = CaseError;

    /// Accepts `camel-to-snake`, `camel_to_snake` and `camelToSnake`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = convert::camel_to_kebab(&s.trim().replace('_', "-"));
        Conversion::ALL
            .into_iter()
            .find(|conversion| conversion.name() == normalized)
            .ok_or_else(|| CaseError::UnknownConversion {
                name: s.to_string(),
            })
    }
}

impl Serialize for Conversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Conversion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_styles() {
        assert_eq!(
            "camel-to-snake".parse::<Conversion>().unwrap(),
            Conversion::CamelToSnake
        );
        assert_eq!(
            "camel_to_upper_snake".parse::<Conversion>().unwrap(),
            Conversion::CamelToUpperSnake
        );
        assert_eq!(
            "dotNotationToCamel".parse::<Conversion>().unwrap(),
            Conversion::DotNotationToCamel
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "camel-to-shout".parse::<Conversion>().unwrap_err();
        assert!(matches!(err, CaseError::UnknownConversion { ref name } if name == "camel-to-shout"));
        assert!("".parse::<Conversion>().is_err());
        // A leading capital would need a leading separator to match anything.
        assert!("CamelToSnake".parse::<Conversion>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for conversion in Conversion::ALL {
            assert_eq!(conversion.name().parse::<Conversion>().unwrap(), conversion);
            assert_eq!(conversion.to_string(), conversion.name());
        }
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Conversion::CamelToTitle.apply("helloWorld"), "Hello World");
        assert_eq!(Conversion::ToSentenceCase.apply("hello world"), "Hello world");
        assert_eq!(Conversion::UpperSnakeToCamel.apply("HELLO_WORLD"), "helloWorld");
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Conversion::KebabToCamel).unwrap();
        assert_eq!(json, "\"kebab-to-camel\"");
        let parsed: Conversion = serde_json::from_str("\"to_upper_case\"").unwrap();
        assert_eq!(parsed, Conversion::ToUpperCase);
        assert!(serde_json::from_str::<Conversion>("\"nope\"").is_err());
    }
}
