//! Flag schema - `"l,p#,d*"` style descriptors
//!
//! | Descriptor | Kind | Default |
//! |------------|------|---------|
//! | `l` | boolean | `false` |
//! | `p#` | integer | `0` |
//! | `d*` | string | `""` |

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ParseError, SchemaError};

/// Declared type of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Bool,
    Int,
    Str,
}

impl FlagKind {
    /// Kind for the marker after the flag letter (`None` means no marker)
    pub fn from_marker(marker: Option<char>) -> Option<Self> {
        match marker {
            None => Some(FlagKind::Bool),
            Some('#') => Some(FlagKind::Int),
            Some('*') => Some(FlagKind::Str),
            Some(_) => None,
        }
    }

    pub fn default_value(self) -> FlagValue {
        match self {
            FlagKind::Bool => FlagValue::Bool(false),
            FlagKind::Int => FlagValue::Int(0),
            FlagKind::Str => FlagValue::Str(String::new()),
        }
    }

    /// Convert a raw argument to this kind.
    ///
    /// Booleans accept `1 t T TRUE true True` and `0 f F FALSE false False`.
    pub fn convert(self, flag: char, raw: &str) -> Result<FlagValue, ParseError> {
        let mismatch = || ParseError::Conversion {
            flag,
            value: raw.to_string(),
            kind: self,
        };
        match self {
            FlagKind::Bool => match raw {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(FlagValue::Bool(true)),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(FlagValue::Bool(false)),
                _ => Err(mismatch()),
            },
            FlagKind::Int => raw
                .parse::<i64>()
                .map(FlagValue::Int)
                .map_err(|_| mismatch()),
            FlagKind::Str => Ok(FlagValue::Str(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlagKind::Bool => "bool",
            FlagKind::Int => "int",
            FlagKind::Str => "string",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl FlagValue {
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Int(_) => FlagKind::Int,
            FlagValue::Str(_) => FlagKind::Str,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(n) => write!(f, "{}", n),
            FlagValue::Str(s) => f.write_str(s),
        }
    }
}

/// Split one descriptor into its flag letter and kind.
pub fn parse_descriptor(descriptor: &str) -> Result<(char, FlagKind), SchemaError> {
    let invalid_name = || SchemaError::InvalidName {
        descriptor: descriptor.to_string(),
    };

    let mut chars = descriptor.chars();
    let name = chars
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .ok_or_else(invalid_name)?;
    let marker = chars.next();
    if chars.next().is_some() {
        return Err(invalid_name());
    }

    let kind = FlagKind::from_marker(marker).ok_or_else(|| SchemaError::InvalidMarker {
        descriptor: descriptor.to_string(),
        marker: marker.unwrap_or_default(),
    })?;
    Ok((name, kind))
}

/// Declared flags, keyed by letter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    kinds: BTreeMap<char, FlagKind>,
}

impl Schema {
    /// Parse a comma-separated schema. Empty descriptors are skipped, so `""`
    /// is a schema with no flags.
    pub fn parse(schema: &str) -> Result<Self, SchemaError> {
        let mut kinds = BTreeMap::new();
        for descriptor in schema.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let (name, kind) = parse_descriptor(descriptor)?;
            if kinds.insert(name, kind).is_some() {
                return Err(SchemaError::Duplicate(name));
            }
        }
        Ok(Self { kinds })
    }

    pub fn kind(&self, flag: char) -> Option<FlagKind> {
        self.kinds.get(&flag).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Flags in letter order
    pub fn iter(&self) -> impl Iterator<Item = (char, FlagKind)> + '_ {
        self.kinds.iter().map(|(name, kind)| (*name, *kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_kinds() {
        assert_eq!(parse_descriptor("p#"), Ok(('p', FlagKind::Int)));
        assert_eq!(parse_descriptor("d*"), Ok(('d', FlagKind::Str)));
        assert_eq!(parse_descriptor("l"), Ok(('l', FlagKind::Bool)));
    }

    #[test]
    fn test_descriptor_rejects_unknown_marker() {
        assert_eq!(
            parse_descriptor("g+"),
            Err(SchemaError::InvalidMarker {
                descriptor: "g+".to_string(),
                marker: '+'
            })
        );
    }

    #[test]
    fn test_descriptor_rejects_bad_names() {
        for descriptor in ["1", "#", "ab#", "p##"] {
            assert!(
                matches!(parse_descriptor(descriptor), Err(SchemaError::InvalidName { .. })),
                "{:?} should be rejected",
                descriptor
            );
        }
    }

    #[test]
    fn test_schema_defaults() {
        let schema = Schema::parse("l,p*,d#").unwrap();
        let defaults: Vec<(char, FlagValue)> = schema
            .iter()
            .map(|(name, kind)| (name, kind.default_value()))
            .collect();
        assert_eq!(
            defaults,
            vec![
                ('d', FlagValue::Int(0)),
                ('l', FlagValue::Bool(false)),
                ('p', FlagValue::Str(String::new())),
            ]
        );
    }

    #[test]
    fn test_schema_skips_empty_descriptors() {
        assert!(Schema::parse("").unwrap().is_empty());
        assert_eq!(Schema::parse("l,,p#").unwrap().len(), 2);
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        assert_eq!(Schema::parse("l,l#"), Err(SchemaError::Duplicate('l')));
    }

    #[test]
    fn test_convert_valid_values() {
        assert_eq!(FlagKind::Int.convert('p', "1"), Ok(FlagValue::Int(1)));
        assert_eq!(
            FlagKind::Str.convert('d', "hi"),
            Ok(FlagValue::Str("hi".to_string()))
        );
        assert_eq!(FlagKind::Bool.convert('l', "true"), Ok(FlagValue::Bool(true)));
        assert_eq!(FlagKind::Bool.convert('l', "F"), Ok(FlagValue::Bool(false)));
    }

    #[test]
    fn test_convert_invalid_values() {
        assert!(FlagKind::Int.convert('p', "hello").is_err());
        assert!(FlagKind::Bool.convert('l', "321").is_err());
        assert!(FlagKind::Bool.convert('l', "yes").is_err());
    }
}
