use crate::matcher::model::{AnyArgument, HelpDeclaration};
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ScanOutcome {
    Completed,
    HelpRequested,
}

enum ScanStep {
    Help,
    Matched,
}

/// One left-to-right pass over the token stream, mapping each token onto the
/// registered arguments.
/// A lookahead of exactly one token consumes detached values; there is no
/// backtracking.
pub(crate) struct TokenScanner<'s, 'a> {
    slots: &'s mut Vec<AnyArgument<'a>>,
    help: Option<&'s HelpDeclaration>,
}

impl<'s, 'a> TokenScanner<'s, 'a> {
    pub(crate) fn new(
        slots: &'s mut Vec<AnyArgument<'a>>,
        help: Option<&'s HelpDeclaration>,
    ) -> Self {
        Self { slots, help }
    }

    pub(crate) fn scan<'t>(mut self, tokens: &[&'t str]) -> Result<ScanOutcome, ParseError> {
        let mut cursor = 0;
        let mut literal_only = false;

        while cursor < tokens.len() {
            let token = tokens[cursor];
            cursor += 1;

            if literal_only {
                self.assign_positional(token)?;
                continue;
            }

            if token == "--" {
                // Everything after a bare '--' is positional.
                literal_only = true;
                continue;
            }

            if let Some(rest) = token.strip_prefix("--") {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("classifying '{token}' as a long option");
                }

                match self.long_option(rest, tokens, &mut cursor)? {
                    ScanStep::Help => return Ok(ScanOutcome::HelpRequested),
                    ScanStep::Matched => {}
                }
            } else if let Some(cluster) = token.strip_prefix('-').filter(|rest| !rest.is_empty()) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("classifying '{token}' as a short cluster");
                }

                match self.short_cluster(cluster, tokens, &mut cursor)? {
                    ScanStep::Help => return Ok(ScanOutcome::HelpRequested),
                    ScanStep::Matched => {}
                }
            } else {
                // Includes a bare '-', the conventional stdin placeholder.
                self.assign_positional(token)?;
            }
        }

        Ok(ScanOutcome::Completed)
    }

    fn long_option<'t>(
        &mut self,
        rest: &'t str,
        tokens: &[&'t str],
        cursor: &mut usize,
    ) -> Result<ScanStep, ParseError> {
        let (name, attached) = split_attached(rest);

        if let Some(help) = self.help {
            if help.long == name {
                return Ok(ScanStep::Help);
            }
        }

        let index = self
            .find(|slot| slot.declaration().long.as_deref() == Some(name))
            .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;

        if self.slots[index].takes_value() {
            let value = self.resolve_value(index, attached, tokens, cursor)?;
            self.slots[index].record_token(value)?;
        } else {
            // A flag is its own value; any '='-attached text is dropped.
            self.slots[index].record_flag();
        }

        Ok(ScanStep::Matched)
    }

    fn short_cluster<'t>(
        &mut self,
        cluster: &'t str,
        tokens: &[&'t str],
        cursor: &mut usize,
    ) -> Result<ScanStep, ParseError> {
        let (names, attached) = split_attached(cluster);

        if let Some(short) = self.help.and_then(|help| help.short) {
            if is_exactly(names, short) {
                return Ok(ScanStep::Help);
            }
        }

        for (position, single) in names.chars().enumerate() {
            let flag = self.find(|slot| {
                !slot.takes_value() && slot.declaration().short == Some(single)
            });

            if let Some(index) = flag {
                self.slots[index].record_flag();
            } else if position == 0 {
                // Only the first character may name a value-taking option.
                let index = self
                    .find(|slot| slot.takes_value() && slot.declaration().short == Some(single))
                    .ok_or(ParseError::UnknownShortOption(single))?;
                let value = self.resolve_value(index, attached, tokens, cursor)?;
                self.slots[index].record_token(value)?;
            } else {
                return Err(ParseError::UnknownShortOption(single));
            }
        }

        Ok(ScanStep::Matched)
    }

    fn assign_positional(&mut self, token: &str) -> Result<(), ParseError> {
        let index = self
            .find(AnyArgument::open_positional)
            .ok_or_else(|| ParseError::UnexpectedPositional(token.to_string()))?;
        self.slots[index].record_token(token)
    }

    /// Resolve the value for a value-taking option: the '='-attached text if
    /// present (the empty string counts), else the next token in the stream.
    fn resolve_value<'t>(
        &self,
        index: usize,
        attached: Option<&'t str>,
        tokens: &[&'t str],
        cursor: &mut usize,
    ) -> Result<&'t str, ParseError> {
        match attached {
            Some(value) => Ok(value),
            None => {
                if *cursor < tokens.len() {
                    let value = tokens[*cursor];
                    *cursor += 1;
                    Ok(value)
                } else {
                    Err(ParseError::MissingValue(
                        self.slots[index].declaration().name(),
                    ))
                }
            }
        }
    }

    fn find(&self, predicate: impl Fn(&AnyArgument<'a>) -> bool) -> Option<usize> {
        self.slots.iter().position(predicate)
    }
}

fn split_attached(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

fn is_exactly(text: &str, single: char) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(single) && chars.next().is_none()
}
