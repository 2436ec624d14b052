use crate::api::Parameter;
use crate::model::Cardinality;
use crate::parser::ParseError;

/// The name/shape half of a registered parameter, shared across value kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) cardinality: Cardinality,
    pub(crate) positional: bool,
}

impl Declaration {
    pub(crate) fn name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => unreachable!("internal error - a parameter must carry at least one name"),
        }
    }
}

/// The designated help parameter.
/// Encountering its long or short name terminates the scan immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HelpDeclaration {
    pub(crate) short: Option<char>,
    pub(crate) long: String,
    pub(crate) description: Option<String>,
}

/// The runtime state of one registered parameter: its declaration, the
/// values recorded during the scan (in encounter order), and the bound
/// write-through targets.
pub(crate) struct Argument<'a, T> {
    declaration: Declaration,
    default: Option<T>,
    single: Option<&'a mut T>,
    many: Option<&'a mut Vec<T>>,
    values: Vec<T>,
}

impl<'a, T> From<Parameter<'a, T>> for Argument<'a, T> {
    fn from(parameter: Parameter<'a, T>) -> Self {
        Self {
            declaration: Declaration {
                short: parameter.short,
                long: parameter.long,
                description: parameter.description,
                cardinality: parameter.cardinality,
                positional: parameter.positional,
            },
            default: parameter.default,
            single: parameter.single,
            many: parameter.many,
            values: Vec::default(),
        }
    }
}

impl<'a, T: Clone> Argument<'a, T> {
    pub(crate) fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// Append a value, writing through to the bound targets.
    /// The single target is overwritten on every call; the accumulating
    /// target is appended.
    pub(crate) fn record(&mut self, value: T) {
        if let Some(target) = self.many.as_mut() {
            target.push(value.clone());
        }

        if let Some(target) = self.single.as_mut() {
            **target = value.clone();
        }

        self.values.push(value);
    }

    /// Settle the argument after the scan: synthesize the default when
    /// nothing was recorded, then derive the validity verdict.
    pub(crate) fn finalize(&mut self) -> Result<(), ParseError> {
        if self.values.is_empty() {
            if let Some(default) = self.default.clone() {
                self.record(default);
            }
        }

        if let Cardinality::AtLeast(minimum) = self.declaration.cardinality {
            if self.values.len() < minimum {
                return Err(ParseError::InsufficientValues {
                    name: self.declaration.name(),
                    provided: self.values.len(),
                    expected: minimum,
                });
            }
        }

        if !self.declaration.cardinality.is_multi() && self.values.len() > 1 {
            return Err(ParseError::TooManyValues(self.declaration.name()));
        }

        if self.default.is_none() && self.values.is_empty() {
            return Err(ParseError::MissingRequiredArgument(self.declaration.name()));
        }

        Ok(())
    }

    /// Release the bound targets, keeping only the recorded values.
    pub(crate) fn into_values(self) -> Values<T> {
        Values {
            declaration: self.declaration,
            default: self.default,
            values: self.values,
        }
    }
}

/// The post-parse view of one parameter's recorded values.
#[derive(Debug)]
pub(crate) struct Values<T> {
    declaration: Declaration,
    default: Option<T>,
    values: Vec<T>,
}

impl<T: Clone> Values<T> {
    pub(crate) fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// The first recorded value, falling back to the default.
    pub(crate) fn representative(&self) -> Option<&T> {
        self.values.first().or(self.default.as_ref())
    }

    pub(crate) fn at(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Every recorded value, or a one-element sequence holding the default
    /// when nothing was recorded.
    pub(crate) fn all(&self) -> Vec<T> {
        if self.values.is_empty() {
            self.default.iter().cloned().collect()
        } else {
            self.values.clone()
        }
    }
}

/// The closed set of value kinds the parser understands.
/// One collection of these, in registration order, drives both the token
/// scan and the validation pass.
pub(crate) enum AnyArgument<'a> {
    Int(Argument<'a, i64>),
    Text(Argument<'a, String>),
    Flag(Argument<'a, bool>),
}

impl<'a> AnyArgument<'a> {
    pub(crate) fn declaration(&self) -> &Declaration {
        match self {
            AnyArgument::Int(argument) => argument.declaration(),
            AnyArgument::Text(argument) => argument.declaration(),
            AnyArgument::Flag(argument) => argument.declaration(),
        }
    }

    pub(crate) fn takes_value(&self) -> bool {
        !matches!(self, AnyArgument::Flag(_))
    }

    /// Record a raw token, converting it per the value kind.
    pub(crate) fn record_token(&mut self, token: &str) -> Result<(), ParseError> {
        match self {
            AnyArgument::Int(argument) => {
                let value: i64 = token.parse().map_err(|_| ParseError::InvalidValue {
                    name: argument.declaration().name(),
                    token: token.to_string(),
                })?;
                argument.record(value);
            }
            AnyArgument::Text(argument) => argument.record(token.to_string()),
            AnyArgument::Flag(_) => {
                unreachable!("internal error - flags record occurrences, not tokens")
            }
        }

        Ok(())
    }

    /// Record one occurrence of a flag.
    pub(crate) fn record_flag(&mut self) {
        match self {
            AnyArgument::Flag(argument) => argument.record(true),
            _ => unreachable!("internal error - only flags record bare occurrences"),
        }
    }

    /// Whether this argument may still receive a positional token.
    /// A single-value positional closes after one token; a multi-value
    /// positional never closes.
    pub(crate) fn open_positional(&self) -> bool {
        if !self.declaration().positional {
            return false;
        }

        match self.declaration().cardinality {
            Cardinality::Single => self.recorded() == 0,
            Cardinality::AtLeast(_) => true,
        }
    }

    fn recorded(&self) -> usize {
        match self {
            AnyArgument::Int(argument) => argument.values.len(),
            AnyArgument::Text(argument) => argument.values.len(),
            AnyArgument::Flag(argument) => argument.values.len(),
        }
    }

    pub(crate) fn finalize(&mut self) -> Result<(), ParseError> {
        match self {
            AnyArgument::Int(argument) => argument.finalize(),
            AnyArgument::Text(argument) => argument.finalize(),
            AnyArgument::Flag(argument) => argument.finalize(),
        }
    }

    pub(crate) fn into_values(self) -> AnyValues {
        match self {
            AnyArgument::Int(argument) => AnyValues::Int(argument.into_values()),
            AnyArgument::Text(argument) => AnyValues::Text(argument.into_values()),
            AnyArgument::Flag(argument) => AnyValues::Flag(argument.into_values()),
        }
    }
}

/// The post-parse counterpart of [`AnyArgument`].
#[derive(Debug)]
pub(crate) enum AnyValues {
    Int(Values<i64>),
    Text(Values<String>),
    Flag(Values<bool>),
}
