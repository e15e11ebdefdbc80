use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::lexer::{Token, Tokenizer};
use crate::model::{OptKind, Value};
use crate::parser::Matches;
use crate::registry::Options;

/// A failure to parse the argument vector.
///
/// Parse errors are recoverable: the caller decides whether to report and exit, retry with
/// different input, or ignore.
/// No partial [`Matches`] is produced on failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The named option is not registered.
    #[error("the option '{0}' is unrecognized")]
    InvalidOption(String),

    /// A flag or single-value option occurred more than once.
    #[error("the option '{0}' is already specified")]
    DuplicateOption(String),

    /// A value-taking option was not followed by a value.
    #[error("the option '{0}' requires an argument")]
    MissingValue(String),

    /// A flag was given a `--name=value` style value.
    #[error("the option '{0}' doesn't accept any arguments")]
    UnexpectedValue(String),
}

impl Options {
    /// Parse the argument vector against the registered options.
    ///
    /// The arguments are consumed in a single forward pass; on the first failure parsing
    /// aborts with the corresponding [`ParseError`].
    /// The registry itself is untouched, so one `Options` may parse any number of
    /// argument vectors.
    ///
    /// ### Example
    /// ```
    /// use clopt::{Options, ParseError};
    ///
    /// let options = Options::default().flag("v", "verbose", "Noisy output.");
    ///
    /// let matches = options.parse(["-v", "input.txt"]).unwrap();
    /// assert!(matches.contains("verbose"));
    /// assert_eq!(matches.remaining(), &["input.txt".to_string()]);
    ///
    /// let error = options.parse(["--quiet"]).unwrap_err();
    /// assert_eq!(error, ParseError::InvalidOption("quiet".to_string()));
    /// ```
    pub fn parse<I>(&self, arguments: I) -> Result<Matches, ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = Tokenizer::new(
            arguments
                .into_iter()
                .map(|argument| argument.as_ref().to_string()),
        );
        let mut matches = Matches::new(self.index.clone(), self.definitions.len());

        while let Some(token) = tokens.next() {
            #[cfg(feature = "tracing_debug")]
            debug!("token: {token:?}");

            match token {
                Token::Short(name) | Token::Long(name) => {
                    let (index, opt) = self
                        .lookup(&name)
                        .ok_or_else(|| ParseError::InvalidOption(name.clone()))?;

                    match opt.kind {
                        OptKind::Flag => {
                            if matches.recorded(index) {
                                return Err(ParseError::DuplicateOption(name));
                            }

                            matches.record(index, Value::Flag);
                        }
                        OptKind::Single if matches.recorded(index) => {
                            return Err(ParseError::DuplicateOption(name));
                        }
                        OptKind::Single | OptKind::Multiple => match tokens.next() {
                            Some(Token::Value(value)) => {
                                matches.record(index, Value::Text(value));
                            }
                            _ => {
                                return Err(ParseError::MissingValue(name));
                            }
                        },
                    }
                }
                Token::LongPair(name, value) => {
                    let (index, opt) = self
                        .lookup(&name)
                        .ok_or_else(|| ParseError::InvalidOption(name.clone()))?;

                    match opt.kind {
                        OptKind::Flag => {
                            return Err(ParseError::UnexpectedValue(name));
                        }
                        OptKind::Single if matches.recorded(index) => {
                            return Err(ParseError::DuplicateOption(name));
                        }
                        OptKind::Single | OptKind::Multiple => {
                            matches.record(index, Value::Text(value));
                        }
                    }
                }
                Token::Value(value) => {
                    matches.push_remaining(value);

                    if self.stop_at_first_non_option {
                        // Hand the rest through in its textual form, options included.
                        for token in tokens.by_ref() {
                            matches.push_remaining(token.to_string());
                        }

                        break;
                    }
                }
                Token::Separator => {
                    // The tokenizer is in passthrough mode now; everything left is a value.
                    for token in tokens.by_ref() {
                        matches.push_remaining(token.to_string());
                    }

                    break;
                }
            }
        }

        Ok(matches)
    }

    /// Parse [`std::env::args`], skipping the program name.
    ///
    /// ### Example
    /// ```no_run
    /// use clopt::Options;
    ///
    /// let options = Options::default().flag("h", "help", "Show this help message and exit.");
    ///
    /// match options.parse_env() {
    ///     Ok(matches) => {
    ///         if matches.contains("help") {
    ///             println!("{}", options.help("program"));
    ///         }
    ///     }
    ///     Err(error) => {
    ///         eprintln!("{error}");
    ///         std::process::exit(1);
    ///     }
    /// }
    /// ```
    pub fn parse_env(&self) -> Result<Matches, ParseError> {
        self.parse(std::env::args().skip(1))
    }
}
