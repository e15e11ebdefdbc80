use terminal_size::{terminal_size, Width};

use crate::model::Opt;
use crate::registry::Options;

const PADDING_WIDTH: usize = 2;
const MAIN_INDENT: usize = 1;
// Allows precisely 3 average words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
const DEFAULT_TOTAL_WIDTH: usize = 80;

/// Composes the help message from the registered option definitions.
/// Pure string composition; nothing here affects parsing.
pub(crate) struct Printer<'a> {
    definitions: &'a [Opt],
    total_width: usize,
}

impl<'a> Printer<'a> {
    pub(crate) fn terminal(definitions: &'a [Opt]) -> Self {
        let total_width = match terminal_size() {
            Some((Width(width), _)) => width as usize,
            None => DEFAULT_TOTAL_WIDTH,
        };

        Self::new(definitions, total_width)
    }

    pub(crate) fn new(definitions: &'a [Opt], total_width: usize) -> Self {
        Self {
            definitions,
            total_width,
        }
    }

    pub(crate) fn help(&self, program: &str) -> String {
        let mut lines = vec![self.usage(program)];

        if !self.definitions.is_empty() {
            let labels: Vec<String> = self.definitions.iter().map(label).collect();
            let label_width = labels
                .iter()
                .map(|l| l.chars().count())
                .max()
                .expect("internal error - definitions are non-empty");
            let description_width = std::cmp::max(
                self.total_width
                    .saturating_sub(MAIN_INDENT + label_width + PADDING_WIDTH),
                MINIMUM_DESCRIPTION_WIDTH,
            );

            lines.push(String::default());
            lines.push("options:".to_string());

            for (opt, label) in self.definitions.iter().zip(labels) {
                lines.extend(render(
                    &label,
                    &opt.description,
                    label_width,
                    description_width,
                ));
            }
        }

        lines.join("\n")
    }

    fn usage(&self, program: &str) -> String {
        let mut usage = format!("usage: {program}");

        for opt in self.definitions {
            usage.push(' ');
            usage.push_str(&summarize(opt));
        }

        usage
    }
}

impl Options {
    /// Compose the help message for the registered options.
    ///
    /// One `usage:` summary line, then a wrapped two-column entry per option in
    /// registration order.
    /// The column layout adapts to the current terminal width when one is detectable.
    ///
    /// ### Example
    /// ```
    /// use clopt::Options;
    ///
    /// let options = Options::default().flag("h", "help", "Show this help message and exit.");
    ///
    /// let help = options.help("program");
    ///
    /// assert!(help.starts_with("usage: program [-h]"));
    /// ```
    pub fn help(&self, program: &str) -> String {
        Printer::terminal(&self.definitions).help(program)
    }
}

/// The usage-line form, ex: `[-c PATH]`.
fn summarize(opt: &Opt) -> String {
    let name = if opt.short.is_empty() {
        format!("--{long}", long = opt.long)
    } else {
        format!("-{short}", short = opt.short)
    };

    if opt.hint.is_empty() {
        format!("[{name}]")
    } else {
        format!("[{name} {hint}]", hint = opt.hint)
    }
}

/// The left-column form, ex: `-c, --config PATH`.
fn label(opt: &Opt) -> String {
    let mut label = match (opt.short.is_empty(), opt.long.is_empty()) {
        (false, false) => format!("-{short}, --{long}", short = opt.short, long = opt.long),
        (false, true) => format!("-{short}", short = opt.short),
        (true, false) => format!("    --{long}", long = opt.long),
        (true, true) => unreachable!("internal error - an option carries at least one name"),
    };

    if !opt.hint.is_empty() {
        label.push(' ');
        label.push_str(&opt.hint);
    }

    label
}

fn render(label: &str, description: &str, label_width: usize, description_width: usize) -> Vec<String> {
    let indent = MAIN_INDENT;
    let padding = PADDING_WIDTH;
    let mut parts: Vec<String> = Vec::default();

    // Embedded newlines break paragraphs; each paragraph wraps independently.
    for paragraph in description.split('\n') {
        let chunks = chunk(paragraph, description_width);

        if chunks.is_empty() {
            parts.push(String::default());
        } else {
            parts.extend(chunks);
        }
    }

    let mut out = Vec::default();

    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            if part.is_empty() {
                out.push(format!("{:indent$}{label}", ""));
            } else {
                out.push(format!("{:indent$}{label:<label_width$}{:padding$}{part}", "", ""));
            }
        } else if part.is_empty() {
            out.push(String::default());
        } else {
            out.push(format!("{:indent$}{:label_width$}{:padding$}{part}", "", "", ""));
        }
    }

    out
}

/// Greedy word wrap.
/// A word longer than the width overflows on its own line.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
