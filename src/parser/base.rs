use thiserror::Error;

use crate::matcher::{AnyArgument, AnyValues, Values};
use crate::parser::printer::Printer;

/// A defect in the parser configuration, reported at registration time.
///
/// These indicate programmer error rather than bad Cli input, so they are
/// reasonable to treat as fatal (ex: `unwrap`/`expect` during startup).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two parameters share a long name.
    #[error("Cannot duplicate the parameter '{0}'.")]
    DuplicateName(String),

    /// Two parameters share a short name.
    #[error("Cannot duplicate the short name '{0}'.")]
    DuplicateShortName(char),

    /// A single-value target is bound to a multi-value parameter, or an
    /// accumulating target is bound to a single-value parameter.
    #[error("The bound targets for parameter '{0}' do not match its multiplicity.")]
    BindingMismatch(String),
}

/// A single defect encountered while scanning or validating the token stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A value-taking parameter sits at the end of the stream with neither an
    /// attached nor a following value token.
    #[error("No value provided for the parameter '{0}'.")]
    MissingValue(String),

    /// A value token failed integer conversion.
    #[error("Cannot convert '{token}' to an integer for the parameter '{name}'.")]
    InvalidValue {
        /// The parameter the value was destined for.
        name: String,
        /// The offending text.
        token: String,
    },

    /// A multi-value parameter was supplied fewer times than its minimum.
    #[error("Not enough values provided for the parameter '{name}' (provided={provided}, expected={expected}).")]
    InsufficientValues {
        /// The parameter in question.
        name: String,
        /// The number of values recorded.
        provided: usize,
        /// The declared minimum.
        expected: usize,
    },

    /// A single-value parameter was supplied more than once.
    #[error("Too many values provided for the parameter '{0}'.")]
    TooManyValues(String),

    /// A parameter with no default was never supplied.
    #[error("The required parameter '{0}' was never provided.")]
    MissingRequiredArgument(String),

    /// A positional token arrived after every positional parameter was filled.
    #[error("The positional token '{0}' does not match any parameter.")]
    UnexpectedPositional(String),

    /// A `--`-prefixed name matched no registered parameter.
    #[error("Option '{0}' does not exist.")]
    UnknownOption(String),

    /// A short-cluster character matched no registered parameter.
    #[error("Short option '{0}' does not exist.")]
    UnknownShortOption(char),
}

/// The aggregated outcome of a failed parse.
///
/// A scan defect (ex: an unknown option) stops the pass and reports alone;
/// validation defects are collected across every parameter, in registration
/// order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {}", summarize(.errors))]
pub struct ParseFailure {
    errors: Vec<ParseError>,
}

fn summarize(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

impl ParseFailure {
    pub(crate) fn new(errors: Vec<ParseError>) -> Self {
        Self { errors }
    }

    /// The individual defects, in the order they were encountered.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// Run every argument's validity verdict, aggregating the failures.
pub(crate) fn validate(mut slots: Vec<AnyArgument<'_>>) -> Result<Vec<AnyValues>, ParseFailure> {
    let mut errors = Vec::default();

    for slot in slots.iter_mut() {
        if let Err(error) = slot.finalize() {
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(slots.into_iter().map(AnyArgument::into_values).collect())
    } else {
        Err(ParseFailure::new(errors))
    }
}

/// The result of a successful parse: the values recorded for every
/// parameter, retrievable by long name.
///
/// Check [`Parsed::help_requested`] before consulting any values: when the
/// registered help name was encountered, the scan stopped early and no
/// validation ran.
#[derive(Debug)]
pub struct Parsed {
    help_requested: bool,
    printer: Printer,
    slots: Vec<AnyValues>,
}

impl Parsed {
    pub(crate) fn new(help_requested: bool, printer: Printer, slots: Vec<AnyValues>) -> Self {
        Self {
            help_requested,
            printer,
            slots,
        }
    }

    /// Whether the registered help name was encountered during the scan.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// The rendered help message.
    pub fn help_text(&self) -> String {
        self.printer.render()
    }

    /// The first recorded value of the flag `long_name`, falling back to its
    /// default.
    /// `None` when no flag with that long name exists.
    pub fn get_flag(&self, long_name: &str) -> Option<bool> {
        self.flags(long_name)?.representative().copied()
    }

    /// The recorded value of the flag `long_name` at `index`.
    /// `None` when the flag does not exist or fewer values were recorded.
    pub fn get_flag_at(&self, long_name: &str, index: usize) -> Option<bool> {
        self.flags(long_name)?.at(index).copied()
    }

    /// Every recorded value of the flag `long_name`, or a one-element
    /// sequence holding its default when none were recorded.
    pub fn get_flags(&self, long_name: &str) -> Option<Vec<bool>> {
        Some(self.flags(long_name)?.all())
    }

    /// The first recorded value of the integer parameter `long_name`,
    /// falling back to its default.
    /// `None` when no integer parameter with that long name exists, or when
    /// it has neither a value nor a default.
    pub fn get_int(&self, long_name: &str) -> Option<i64> {
        self.ints(long_name)?.representative().copied()
    }

    /// The recorded value of the integer parameter `long_name` at `index`.
    /// `None` when the parameter does not exist or fewer values were recorded.
    pub fn get_int_at(&self, long_name: &str, index: usize) -> Option<i64> {
        self.ints(long_name)?.at(index).copied()
    }

    /// Every recorded value of the integer parameter `long_name`, or a
    /// one-element sequence holding its default when none were recorded.
    pub fn get_ints(&self, long_name: &str) -> Option<Vec<i64>> {
        Some(self.ints(long_name)?.all())
    }

    /// The first recorded value of the text parameter `long_name`, falling
    /// back to its default.
    /// `None` when no text parameter with that long name exists, or when it
    /// has neither a value nor a default.
    pub fn get_string(&self, long_name: &str) -> Option<&str> {
        self.texts(long_name)?.representative().map(String::as_str)
    }

    /// The recorded value of the text parameter `long_name` at `index`.
    /// `None` when the parameter does not exist or fewer values were recorded.
    pub fn get_string_at(&self, long_name: &str, index: usize) -> Option<&str> {
        self.texts(long_name)?.at(index).map(String::as_str)
    }

    /// Every recorded value of the text parameter `long_name`, or a
    /// one-element sequence holding its default when none were recorded.
    pub fn get_strings(&self, long_name: &str) -> Option<Vec<String>> {
        Some(self.texts(long_name)?.all())
    }

    fn flags(&self, long_name: &str) -> Option<&Values<bool>> {
        self.slots.iter().find_map(|slot| match slot {
            AnyValues::Flag(values) if values.declaration().long.as_deref() == Some(long_name) => {
                Some(values)
            }
            _ => None,
        })
    }

    fn ints(&self, long_name: &str) -> Option<&Values<i64>> {
        self.slots.iter().find_map(|slot| match slot {
            AnyValues::Int(values) if values.declaration().long.as_deref() == Some(long_name) => {
                Some(values)
            }
            _ => None,
        })
    }

    fn texts(&self, long_name: &str) -> Option<&Values<String>> {
        self.slots.iter().find_map(|slot| match slot {
            AnyValues::Text(values) if values.declaration().long.as_deref() == Some(long_name) => {
                Some(values)
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Parameter;

    fn parsed(slots: Vec<AnyArgument<'_>>) -> Parsed {
        let values = validate(slots).unwrap();
        Parsed::new(false, Printer::new(String::default(), None, Vec::default()), values)
    }

    #[test]
    fn validate_aggregates() {
        // Setup
        let slots = vec![
            AnyArgument::Text(Parameter::new("name").into()),
            AnyArgument::Int(Parameter::new("count").multi_value(2).into()),
        ];

        // Execute
        let failure = validate(slots).unwrap_err();

        // Verify
        assert_eq!(
            failure.errors(),
            &[
                ParseError::MissingRequiredArgument("name".to_string()),
                ParseError::InsufficientValues {
                    name: "count".to_string(),
                    provided: 0,
                    expected: 2,
                },
            ]
        );
    }

    #[test]
    fn retrieval_defaults() {
        // Setup
        let parsed = parsed(vec![
            AnyArgument::Int(Parameter::new("count").default(5).into()),
            AnyArgument::Text(Parameter::new("name").default("x".to_string()).into()),
            AnyArgument::Flag(Parameter::new("verbose").default(false).into()),
        ]);

        // Execute & Verify
        assert_eq!(parsed.get_int("count"), Some(5));
        assert_eq!(parsed.get_string("name"), Some("x"));
        assert_eq!(parsed.get_flag("verbose"), Some(false));
        assert_eq!(parsed.get_ints("count"), Some(vec![5]));
        assert_eq!(parsed.get_strings("name"), Some(vec!["x".to_string()]));
        assert_eq!(parsed.get_flags("verbose"), Some(vec![false]));
    }

    #[test]
    fn retrieval_recorded() {
        // Setup
        let mut count = AnyArgument::Int(Parameter::new("count").multi_value(0).into());
        count.record_token("3").unwrap();
        count.record_token("7").unwrap();
        let parsed = parsed(vec![count]);

        // Execute & Verify
        assert_eq!(parsed.get_int("count"), Some(3));
        assert_eq!(parsed.get_int_at("count", 0), Some(3));
        assert_eq!(parsed.get_int_at("count", 1), Some(7));
        assert_eq!(parsed.get_int_at("count", 2), None);
        assert_eq!(parsed.get_ints("count"), Some(vec![3, 7]));
    }

    #[test]
    fn retrieval_unknown_name() {
        // Setup
        let parsed = parsed(vec![AnyArgument::Int(
            Parameter::new("count").default(5).into(),
        )]);

        // Execute & Verify
        assert_eq!(parsed.get_int("moot"), None);
        assert_eq!(parsed.get_string("count"), None);
        assert_eq!(parsed.get_flag("count"), None);
        assert_eq!(parsed.get_ints("moot"), None);
    }

    #[test]
    fn parse_failure_message() {
        // Setup
        let failure = ParseFailure::new(vec![
            ParseError::MissingRequiredArgument("name".to_string()),
            ParseError::TooManyValues("count".to_string()),
        ]);

        // Execute & Verify
        assert_eq!(
            failure.to_string(),
            "Parse error: The required parameter 'name' was never provided. \
             Too many values provided for the parameter 'count'."
                .to_string()
        );
    }
}
