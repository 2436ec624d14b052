use terminal_size::{terminal_size, Width};

use crate::matcher::{AnyArgument, Declaration, HelpDeclaration};
use crate::model::Cardinality;

const FALLBACK_WIDTH: usize = 80;

// Let's assume the average word length is 5.
// Then 17 allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// One help line: the name/marker column plus the wrapped description.
#[derive(Debug)]
pub(crate) struct Entry {
    left: String,
    description: Option<String>,
}

impl Entry {
    fn new(declaration: &Declaration, takes_value: bool) -> Self {
        let mut left = String::from("  ");

        match (declaration.short, &declaration.long) {
            (Some(short), Some(long)) => {
                left.push_str(&format!("-{short}, --{long}"));
            }
            (Some(short), None) => {
                left.push_str(&format!("-{short}"));
            }
            (None, Some(long)) => {
                left.push_str(&format!("--{long}"));
            }
            (None, None) => {
                unreachable!("internal error - a parameter must carry at least one name")
            }
        };

        if takes_value {
            match declaration.cardinality {
                Cardinality::Single => left.push_str(" <value>"),
                Cardinality::AtLeast(_) => left.push_str(" <value>..."),
            };
        }

        Self {
            left,
            description: declaration.description.clone().filter(|d| !d.is_empty()),
        }
    }

    pub(crate) fn from_argument(slot: &AnyArgument<'_>) -> Self {
        Self::new(slot.declaration(), slot.takes_value())
    }

    fn from_help(help: &HelpDeclaration) -> Self {
        let left = match help.short {
            Some(short) => format!("  -{short}, --{long}", long = help.long),
            None => format!("  --{long}", long = help.long),
        };

        Self {
            left,
            description: help.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

/// Renders the help message: the parser description, then one line per
/// parameter (the help parameter first), descriptions aligned into a single
/// column and wrapped to the terminal width.
#[derive(Debug)]
pub(crate) struct Printer {
    description: String,
    help: Option<HelpDeclaration>,
    entries: Vec<Entry>,
}

impl Printer {
    pub(crate) fn new(
        description: String,
        help: Option<HelpDeclaration>,
        entries: Vec<Entry>,
    ) -> Self {
        Self {
            description,
            help,
            entries,
        }
    }

    pub(crate) fn render(&self) -> String {
        let total_width = match terminal_size() {
            Some((Width(width), _)) => width as usize,
            None => FALLBACK_WIDTH,
        };
        self.render_width(total_width)
    }

    fn render_width(&self, total_width: usize) -> String {
        let mut lines: Vec<&Entry> = Vec::default();
        let help_entry = self.help.as_ref().map(Entry::from_help);

        if let Some(entry) = &help_entry {
            lines.push(entry);
        }

        lines.extend(self.entries.iter());

        let column = lines.iter().map(|entry| entry.left.len()).max().unwrap_or(0);
        let description_width = std::cmp::max(
            total_width.saturating_sub(column + 2),
            MINIMUM_DESCRIPTION_WIDTH,
        );

        let mut out = String::default();

        if !self.description.is_empty() {
            out.push_str(&self.description);
            out.push('\n');
        }

        for entry in lines {
            match &entry.description {
                None => {
                    out.push_str(&entry.left);
                    out.push('\n');
                }
                Some(description) => {
                    for (index, part) in wrap(description, description_width).iter().enumerate() {
                        if index == 0 {
                            out.push_str(&format!("{:<column$}  {part}", entry.left));
                        } else {
                            out.push_str(&format!("{:<column$}  {part}", ""));
                        }

                        out.push('\n');
                    }
                }
            };
        }

        out
    }
}

fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            split_word(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            split_word(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn split_word(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let mut remainder = word;

    while remainder.len() > width {
        let (head, tail) = remainder.split_at(width - 1);
        lines.push(format!("{head}-"));
        remainder = tail;
    }

    current.push_str(remainder);
}
