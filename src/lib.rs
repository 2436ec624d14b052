//! `argot` is a declarative command line parser for Rust.
//!
//! Although other crates provide command line parser functionality, we have found they prioritize different concerns than those we are interested in.
//! `argot` attempts to prioritize the following design concerns:
//! * *Declarative, typed parameters*:
//! The user registers integer, text, and flag parameters up front; the parser converts and validates, so the user never calls a `&str -> T` conversion directly.
//! * *Configuration is immutable*:
//! A parameter is assembled as a [`Parameter`] record and handed over; parsing only ever touches per-run recorded values.
//! * *Structured outcomes*:
//! Bad input is reported as data ([`ParseFailure`], aggregating every validation defect), never as a panic or a process exit.
//! Requesting help is a *successful* outcome, distinct from ordinary success; branch on [`Parsed::help_requested`] before consulting values.
//! * *Detailed yet basic UX*:
//! The help output states every parameter's names, value markers, and description.
//! We do not aim for rich display configuration, such as colour output or shell completions.
//!
//! # Usage
//! ```
//! use argot::{ArgParser, Parameter};
//!
//! let mut verbose = false;
//! let mut paths: Vec<String> = Vec::default();
//!
//! let parser = ArgParser::new("Concatenate files to standard output.")
//!     .add_help(Some('h'), "help", "Show this help message and exit.")
//!     .add_flag(
//!         Parameter::new("verbose")
//!             .short('v')
//!             .help("Narrate the work.")
//!             .store(&mut verbose),
//!     )
//!     .unwrap()
//!     .add_int(
//!         Parameter::new("repeat")
//!             .short('r')
//!             .default(1)
//!             .help("Repeat each file this many times."),
//!     )
//!     .unwrap()
//!     .add_string(
//!         Parameter::new("path")
//!             .multi_value(1)
//!             .positional()
//!             .help("The files to concatenate.")
//!             .store_many(&mut paths),
//!     )
//!     .unwrap();
//!
//! let parsed = parser
//!     .parse_tokens(&["-v", "--repeat=2", "a.txt", "b.txt"])
//!     .unwrap();
//!
//! if parsed.help_requested() {
//!     print!("{}", parsed.help_text());
//!     return;
//! }
//!
//! assert_eq!(parsed.get_int("repeat"), Some(2));
//! assert!(verbose);
//! assert_eq!(paths, vec!["a.txt".to_string(), "b.txt".to_string()]);
//! ```
//!
//! # Parameters
//! Every parameter carries a short and/or long name, and is one of three value kinds:
//! * integer (`i64`), registered via [`ArgParser::add_int`];
//! * text (`String`), registered via [`ArgParser::add_string`];
//! * flag (`bool`), registered via [`ArgParser::add_flag`]: takes no value, records `true` per occurrence, and defaults to `false`.
//!
//! Shape is configured on the [`Parameter`]: [`multi_value`](Parameter::multi_value) to accumulate repeated occurrences (with a minimum),
//! [`positional`](Parameter::positional) to match by position instead of by name, [`default`](Parameter::default) for a fallback value,
//! and [`store`](Parameter::store)/[`store_many`](Parameter::store_many) to write values through into caller variables as they are recorded.
//!
//! # Token syntax
//! * `--name value`, `--name=value` (an empty attached value, `--name=`, is a real value);
//! * `-n value`, `-n=value`;
//! * short clusters: `-abc` sets the flags `a`, `b`, `c`; the first character of a cluster may instead name a value-taking parameter;
//! * positional tokens fill positional parameters in registration order, one token per parameter (a multi-value positional takes the remainder);
//! * everything after a bare `--` is positional.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, ParseError, ParseFailure, Parsed};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
