use std::env;

use crate::api::Parameter;
use crate::matcher::{AnyArgument, HelpDeclaration, ScanOutcome, TokenScanner};
use crate::model::Cardinality;
use crate::parser::{validate, ConfigError, Entry, ParseFailure, Parsed, Printer};

/// The declarative command line parser.
///
/// Register typed parameters (integer, text, boolean flag), then run one
/// parse over the raw tokens and retrieve the validated values from the
/// resulting [`Parsed`].
///
/// A parser is single shot: [`ArgParser::parse`] and
/// [`ArgParser::parse_tokens`] consume it, which also releases any variables
/// bound via [`Parameter::store`](./struct.Parameter.html#method.store) or
/// [`Parameter::store_many`](./struct.Parameter.html#method.store_many).
///
/// ### Example
/// ```
/// use argot::{ArgParser, Parameter};
///
/// let mut verbose = false;
/// let parser = ArgParser::new("An example program.")
///     .add_help(Some('h'), "help", "Show this help message and exit.")
///     .add_flag(Parameter::new("verbose").short('v').store(&mut verbose))
///     .unwrap()
///     .add_int(Parameter::new("count").short('c').default(1))
///     .unwrap();
///
/// let parsed = parser.parse_tokens(&["-v", "--count=5"]).unwrap();
/// assert!(!parsed.help_requested());
/// assert_eq!(parsed.get_flag("verbose"), Some(true));
/// assert_eq!(parsed.get_int("count"), Some(5));
/// assert!(verbose);
/// ```
pub struct ArgParser<'a> {
    description: String,
    slots: Vec<AnyArgument<'a>>,
    help: Option<HelpDeclaration>,
}

impl<'a> std::fmt::Debug for ArgParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgParser")
            .field("description", &self.description)
            .finish()
    }
}

impl<'a> ArgParser<'a> {
    /// Create a command line parser with a free-text description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            slots: Vec::default(),
            help: None,
        }
    }

    /// Register an integer parameter.
    ///
    /// Fails when the parameter repeats an already registered long or short
    /// name, or when its bound targets do not match its multiplicity.
    ///
    /// ### Example
    /// ```
    /// use argot::{ArgParser, Parameter};
    ///
    /// let parser = ArgParser::new("program")
    ///     .add_int(Parameter::new("count").short('c').default(1))
    ///     .unwrap();
    ///
    /// let parsed = parser.parse_tokens(&["-c", "5"]).unwrap();
    /// assert_eq!(parsed.get_int("count"), Some(5));
    /// ```
    pub fn add_int(self, parameter: Parameter<'a, i64>) -> Result<Self, ConfigError> {
        let parameter = checked(parameter)?;
        self.register(AnyArgument::Int(parameter.into()))
    }

    /// Register a text parameter.
    ///
    /// Fails when the parameter repeats an already registered long or short
    /// name, or when its bound targets do not match its multiplicity.
    ///
    /// ### Example
    /// ```
    /// use argot::{ArgParser, Parameter};
    ///
    /// let parser = ArgParser::new("program")
    ///     .add_string(Parameter::new("item").multi_value(1).positional())
    ///     .unwrap();
    ///
    /// let parsed = parser.parse_tokens(&["a", "b"]).unwrap();
    /// assert_eq!(
    ///     parsed.get_strings("item"),
    ///     Some(vec!["a".to_string(), "b".to_string()])
    /// );
    /// ```
    pub fn add_string(self, parameter: Parameter<'a, String>) -> Result<Self, ConfigError> {
        let parameter = checked(parameter)?;
        self.register(AnyArgument::Text(parameter.into()))
    }

    /// Register a boolean flag.
    ///
    /// A flag takes no value on the Cli; each occurrence of its name records
    /// `true`.
    /// Unless configured otherwise, flags default to `false`.
    ///
    /// Fails when the parameter repeats an already registered long or short
    /// name, or when its bound targets do not match its multiplicity.
    pub fn add_flag(self, parameter: Parameter<'a, bool>) -> Result<Self, ConfigError> {
        let mut parameter = checked(parameter)?;

        // A flag that never appears is simply false.
        if parameter.default.is_none() {
            parameter.default.replace(false);
        }

        self.register(AnyArgument::Flag(parameter.into()))
    }

    /// Register the designated help parameter.
    ///
    /// Encountering `--<long>` (or `-<short>`) anywhere in the token stream
    /// terminates the scan immediately with a successful [`Parsed`] whose
    /// [`Parsed::help_requested`] is set; no validation runs.
    /// If repeated, only the final registration will apply.
    pub fn add_help(
        mut self,
        short: Option<char>,
        long: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.help.replace(HelpDeclaration {
            short,
            long: long.into(),
            description: Some(description.into()),
        });
        self
    }

    /// The rendered help message: the parser description, then one line per
    /// parameter with its names, a `<value>`/`<value>...` marker for
    /// value-taking parameters, and its description.
    pub fn help_text(&self) -> String {
        self.printer().render()
    }

    /// Run the parser against the input tokens.
    ///
    /// The tokens must not include the program name; see [`ArgParser::parse`]
    /// for the `std::env::args` entry point.
    ///
    /// Parsing happens in two phases:
    /// 1. The scan walks the tokens left to right, mapping each onto a
    ///    registered parameter and recording values (bound targets are
    ///    written through as values are recorded).
    ///    The registered help name short-circuits this phase.
    /// 2. Validation settles every parameter: defaults are synthesized and
    ///    each parameter's multiplicity rules are checked, aggregating every
    ///    defect into the [`ParseFailure`].
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Parsed, ParseFailure> {
        let ArgParser {
            description,
            mut slots,
            help,
        } = self;
        let printer = Printer::new(
            description,
            help.clone(),
            slots.iter().map(Entry::from_argument).collect(),
        );

        let outcome = TokenScanner::new(&mut slots, help.as_ref())
            .scan(tokens)
            .map_err(|error| ParseFailure::new(vec![error]))?;

        match outcome {
            ScanOutcome::HelpRequested => Ok(Parsed::new(
                true,
                printer,
                slots.into_iter().map(AnyArgument::into_values).collect(),
            )),
            ScanOutcome::Completed => {
                let values = validate(slots)?;
                Ok(Parsed::new(false, printer, values))
            }
        }
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// The program name (the first element) is skipped; parsing starts at
    /// the first real token.
    pub fn parse(self) -> Result<Parsed, ParseFailure> {
        let tokens: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    fn register(mut self, slot: AnyArgument<'a>) -> Result<Self, ConfigError> {
        {
            let declaration = slot.declaration();

            if let Some(long) = &declaration.long {
                if self
                    .slots
                    .iter()
                    .any(|existing| existing.declaration().long.as_deref() == Some(long.as_str()))
                {
                    return Err(ConfigError::DuplicateName(long.clone()));
                }
            }

            if let Some(short) = declaration.short {
                if self
                    .slots
                    .iter()
                    .any(|existing| existing.declaration().short == Some(short))
                {
                    return Err(ConfigError::DuplicateShortName(short));
                }
            }
        }

        self.slots.push(slot);
        Ok(self)
    }

    fn printer(&self) -> Printer {
        Printer::new(
            self.description.clone(),
            self.help.clone(),
            self.slots.iter().map(Entry::from_argument).collect(),
        )
    }
}

fn checked<'a, T>(parameter: Parameter<'a, T>) -> Result<Parameter<'a, T>, ConfigError> {
    let mismatch = match parameter.cardinality {
        Cardinality::Single => parameter.many.is_some(),
        Cardinality::AtLeast(_) => parameter.single.is_some(),
    };

    if mismatch {
        Err(ConfigError::BindingMismatch(parameter.name()))
    } else {
        Ok(parameter)
    }
}
