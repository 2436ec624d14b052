use crate::model::Cardinality;

/// Marker trait for value kinds that may be supplied positionally.
///
/// Implemented for `i64` and `String`.
/// Notably *not* implemented for `bool`: a flag is identified by its name
/// token alone, so a positional flag cannot be expressed on the Cli.
pub trait PositionalValue {}

impl PositionalValue for i64 {}
impl PositionalValue for String {}

/// The configuration record for a single parameter.
///
/// A `Parameter` is assembled with by-value builder methods and then handed
/// to the parser via [`ArgParser::add_int`](./struct.ArgParser.html#method.add_int),
/// [`ArgParser::add_string`](./struct.ArgParser.html#method.add_string), or
/// [`ArgParser::add_flag`](./struct.ArgParser.html#method.add_flag).
/// Once registered, the configuration never changes; parsing only touches the
/// per-run recorded values.
///
/// ### Example
/// ```
/// use argot::Parameter;
///
/// let mut count: i64 = 0;
/// Parameter::new("count")
///     .short('c')
///     .help("The number of times to repeat.")
///     .default(1)
///     .store(&mut count);
/// ```
pub struct Parameter<'a, T> {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) cardinality: Cardinality,
    pub(crate) positional: bool,
    pub(crate) default: Option<T>,
    pub(crate) single: Option<&'a mut T>,
    pub(crate) many: Option<&'a mut Vec<T>>,
}

impl<'a, T> Parameter<'a, T> {
    /// Create a parameter addressed by a long name (ex: `--verbose`).
    pub fn new(long: impl Into<String>) -> Self {
        Self {
            short: None,
            long: Some(long.into()),
            description: None,
            cardinality: Cardinality::Single,
            positional: false,
            default: None,
            single: None,
            many: None,
        }
    }

    /// Create a parameter addressed only by a single-character short name (ex: `-v`).
    ///
    /// A short-only parameter cannot be retrieved by name after parsing;
    /// bind a target with [`Parameter::store`] or [`Parameter::store_many`]
    /// to observe its values.
    pub fn short_only(short: char) -> Self {
        Self {
            short: Some(short),
            long: None,
            description: None,
            cardinality: Cardinality::Single,
            positional: false,
            default: None,
            single: None,
            many: None,
        }
    }

    /// Attach a single-character short name (ex: `-v`).
    /// If repeated, only the final short name will apply.
    pub fn short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Allow the parameter to be supplied repeatedly, accumulating values in
    /// encounter order.
    /// A successful parse requires at least `min_count` occurrences (or a
    /// default, which counts as one).
    pub fn multi_value(mut self, min_count: usize) -> Self {
        self.cardinality = Cardinality::AtLeast(min_count);
        self
    }

    /// Use `value` when the parameter is never supplied on the Cli.
    pub fn default(mut self, value: T) -> Self {
        self.default.replace(value);
        self
    }

    /// Bind a target variable that receives the recorded value.
    /// The target is written every time a value is recorded; combine with
    /// single-value parameters.
    pub fn store(mut self, target: &'a mut T) -> Self {
        self.single.replace(target);
        self
    }

    /// Bind a target vector that accumulates every recorded value.
    /// Combine with multi-value parameters.
    pub fn store_many(mut self, target: &'a mut Vec<T>) -> Self {
        self.many.replace(target);
        self
    }

    pub(crate) fn name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => unreachable!("internal error - a parameter must carry at least one name"),
        }
    }
}

impl<'a, T: PositionalValue> Parameter<'a, T> {
    /// Identify the parameter by position rather than by a name token.
    ///
    /// Positional tokens are distributed across positional parameters in
    /// registration order, one token per parameter; a multi-value positional
    /// absorbs every remaining positional token, so declare it last.
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter() {
        let parameter: Parameter<i64> = Parameter::new("count");

        assert_eq!(parameter.short, None);
        assert_eq!(parameter.long, Some("count".to_string()));
        assert_eq!(parameter.description, None);
        assert_eq!(parameter.cardinality, Cardinality::Single);
        assert!(!parameter.positional);
        assert_eq!(parameter.default, None);
        assert!(parameter.single.is_none());
        assert!(parameter.many.is_none());
    }

    #[test]
    fn parameter_configured() {
        let parameter: Parameter<i64> = Parameter::new("count")
            .short('c')
            .help("--this will get discarded--")
            .help("help message")
            .multi_value(2)
            .positional()
            .default(5);

        assert_eq!(parameter.short, Some('c'));
        assert_eq!(parameter.long, Some("count".to_string()));
        assert_eq!(parameter.description, Some("help message".to_string()));
        assert_eq!(parameter.cardinality, Cardinality::AtLeast(2));
        assert!(parameter.positional);
        assert_eq!(parameter.default, Some(5));
    }

    #[test]
    fn parameter_short_only() {
        let parameter: Parameter<String> = Parameter::short_only('x');

        assert_eq!(parameter.short, Some('x'));
        assert_eq!(parameter.long, None);
        assert_eq!(parameter.name(), "x".to_string());
    }

    #[test]
    fn parameter_bindings() {
        let mut single: i64 = 0;
        let parameter = Parameter::new("count").store(&mut single);
        assert!(parameter.single.is_some());
        assert!(parameter.many.is_none());

        let mut many: Vec<i64> = Vec::default();
        let parameter = Parameter::new("count").multi_value(0).store_many(&mut many);
        assert!(parameter.single.is_none());
        assert!(parameter.many.is_some());
    }

    #[test]
    fn parameter_name() {
        let parameter: Parameter<bool> = Parameter::new("verbose").short('v');
        assert_eq!(parameter.name(), "verbose".to_string());
    }
}
