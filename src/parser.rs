mod base;
mod printer;

pub use base::{ConfigError, ParseError, ParseFailure, Parsed};
pub(crate) use base::validate;
pub(crate) use printer::{Entry, Printer};
