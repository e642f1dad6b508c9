//! Schema-driven command-line flag parser.
//!
//! A schema such as `"l,p#,d*"` declares single-letter flags and their kinds
//! (boolean, integer, string). [`Parser::new`] applies the schema to the
//! process arguments and exposes each flag's parsed or default value as a
//! tagged [`FlagValue`].
//!
//! ```
//! use bowling_args::Parser;
//!
//! let parser = Parser::new("g*,j", ["bowling", "-g", "X5-", "-j", "true"]).unwrap();
//! assert_eq!(parser.get_str("g").unwrap(), "X5-");
//! assert!(parser.get_bool("j").unwrap());
//! ```

pub mod error;
pub mod parser;
pub mod schema;

pub use error::{ArgsError, ParseError, SchemaError};
pub use parser::Parser;
pub use schema::{parse_descriptor, FlagKind, FlagValue, Schema};
