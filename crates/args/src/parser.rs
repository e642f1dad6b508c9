//! Argument parser - typed flag values from process arguments

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{ArgsError, ParseError};
use crate::schema::{FlagKind, FlagValue, Schema};

/// Flags declared by a schema, with their parsed or default values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    schema: Schema,
    args: Vec<String>,
    values: BTreeMap<char, FlagValue>,
}

impl Parser {
    /// Build a parser from a schema and the full process arguments
    /// (`std::env::args()`); the first argument is the program name and is
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_args::{FlagValue, Parser};
    ///
    /// let parser = Parser::new("l,p#,d*", ["prog", "-p", "8080", "-d", "/usr/logs"]).unwrap();
    /// assert_eq!(parser.get_value("p").unwrap(), &FlagValue::Int(8080));
    /// assert_eq!(parser.get_str("d").unwrap(), "/usr/logs");
    /// assert!(!parser.get_bool("l").unwrap());
    /// ```
    pub fn new<I, S>(schema: &str, process_args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schema = Schema::parse(schema)?;
        let args: Vec<String> = process_args.into_iter().skip(1).map(Into::into).collect();
        let values = schema
            .iter()
            .map(|(name, kind)| (name, kind.default_value()))
            .collect();

        let mut parser = Self {
            schema,
            args,
            values,
        };
        parser.parse_args()?;
        Ok(parser)
    }

    /// A flag token is `-` followed by the flag letter. The token after it is
    /// its value unless it is another flag; a flag without a value keeps its
    /// default. Tokens that are neither are ignored.
    fn parse_args(&mut self) -> Result<(), ParseError> {
        let mut tokens = self.args.iter().peekable();
        while let Some(token) = tokens.next() {
            let Some(rest) = token.strip_prefix('-') else {
                continue;
            };
            let (flag, kind) = rest
                .chars()
                .next()
                .and_then(|flag| self.schema.kind(flag).map(|kind| (flag, kind)))
                .ok_or_else(|| ParseError::UnknownFlag(token.clone()))?;

            if let Some(raw) = tokens.next_if(|next| !next.starts_with('-')) {
                let value = kind.convert(flag, raw)?;
                debug!(flag = %flag, value = %value, "parsed flag");
                self.values.insert(flag, value);
            }
        }
        Ok(())
    }

    /// Current value of `flag`, or an error if the schema does not declare it.
    pub fn get_value(&self, flag: &str) -> Result<&FlagValue, ArgsError> {
        let mut chars = flag.chars();
        let value = match (chars.next(), chars.next()) {
            (Some(name), None) => self.values.get(&name),
            _ => None,
        };
        value.ok_or_else(|| ArgsError::NotInSchema(flag.to_string()))
    }

    pub fn get_bool(&self, flag: &str) -> Result<bool, ArgsError> {
        let value = self.get_value(flag)?;
        value.as_bool().ok_or_else(|| mismatch(flag, FlagKind::Bool, value))
    }

    pub fn get_int(&self, flag: &str) -> Result<i64, ArgsError> {
        let value = self.get_value(flag)?;
        value.as_int().ok_or_else(|| mismatch(flag, FlagKind::Int, value))
    }

    pub fn get_str(&self, flag: &str) -> Result<&str, ArgsError> {
        let value = self.get_value(flag)?;
        value.as_str().ok_or_else(|| mismatch(flag, FlagKind::Str, value))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Process arguments without the program name
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn mismatch(flag: &str, requested: FlagKind, value: &FlagValue) -> ArgsError {
    ArgsError::KindMismatch {
        flag: flag.chars().next().unwrap_or_default(),
        requested,
        actual: value.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_stores_args_without_program_name() {
        let parser = Parser::new("l,p,d", ["go run", "-l", "-p"]).unwrap();
        assert_eq!(parser.args(), &["-l".to_string(), "-p".to_string()]);
        assert_eq!(parser.schema().len(), 3);
    }

    #[test]
    fn test_flag_without_value_keeps_default() {
        let args = ["prog", "-l", "-p", "8080", "-d", "/usr/logs"];
        let parser = Parser::new("l,p#,d*", args).unwrap();
        assert_eq!(parser.get_value("l"), Ok(&FlagValue::Bool(false)));
        assert_eq!(parser.get_value("p"), Ok(&FlagValue::Int(8080)));
        assert_eq!(
            parser.get_value("d"),
            Ok(&FlagValue::Str("/usr/logs".to_string()))
        );
    }

    #[test]
    fn test_flag_letter_is_first_character() {
        let parser = Parser::new("p#", ["prog", "-port", "7"]).unwrap();
        assert_eq!(parser.get_int("p"), Ok(7));
    }

    #[test]
    fn test_stray_positional_tokens_are_ignored() {
        let parser = Parser::new("g*", ["prog", "extra", "-g", "X", "more"]).unwrap();
        assert_eq!(parser.get_str("g"), Ok("X"));
    }

    #[test]
    fn test_unknown_flag_fails() {
        let err = Parser::new("l,p*,d#", ["prog", "-l", "-p", "-a", "Hello"]).unwrap_err();
        assert_eq!(
            err,
            ArgsError::Parse(ParseError::UnknownFlag("-a".to_string()))
        );
        assert_eq!(err.code(), "unknown_flag");

        let err = Parser::new("l", ["prog", "-"]).unwrap_err();
        assert_eq!(err, ArgsError::Parse(ParseError::UnknownFlag("-".to_string())));
    }

    #[test]
    fn test_schema_errors_are_wrapped() {
        let err = Parser::new("l,p*,d#,g+", ["prog"]).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::Schema(SchemaError::InvalidMarker { marker: '+', .. })
        ));
        assert!(err.to_string().starts_with("error creating schema"));
    }

    #[test]
    fn test_conversion_errors_are_wrapped() {
        let err = Parser::new("l,p*,d#", ["prog", "-d", "hello"]).unwrap_err();
        assert_eq!(
            err,
            ArgsError::Parse(ParseError::Conversion {
                flag: 'd',
                value: "hello".to_string(),
                kind: FlagKind::Int,
            })
        );
        assert!(err.to_string().starts_with("error parsing arguments"));
    }

    #[test]
    fn test_accessors() {
        let parser = Parser::new("l,p#,d*", ["prog", "-p", "8080", "-l", "true"]).unwrap();
        assert_eq!(parser.get_bool("l"), Ok(true));
        assert_eq!(parser.get_int("p"), Ok(8080));
        assert_eq!(parser.get_str("d"), Ok(""));

        assert_eq!(
            parser.get_value("g"),
            Err(ArgsError::NotInSchema("g".to_string()))
        );
        assert_eq!(
            parser.get_value("lp"),
            Err(ArgsError::NotInSchema("lp".to_string()))
        );
        assert_eq!(
            parser.get_int("l"),
            Err(ArgsError::KindMismatch {
                flag: 'l',
                requested: FlagKind::Int,
                actual: FlagKind::Bool,
            })
        );
    }
}
