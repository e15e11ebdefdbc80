use unicode_segmentation::UnicodeSegmentation;

use crate::lexer::model::Token;

/// Lexing state carried between arguments.
#[derive(Debug)]
enum State {
    /// Normal lexing.
    Default,
    /// Passthrough after `--`; every remaining argument is a plain value.
    Rest,
    /// The tail attached to a short option, pending emission as the next value.
    Buffered(String),
}

/// A lazy, forward-only pass over the argument vector.
/// The sequence is finite and not restartable; a second pass requires a new `Tokenizer`
/// over the same arguments.
#[derive(Debug)]
pub(crate) struct Tokenizer<I> {
    arguments: I,
    state: State,
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = String>,
{
    pub(crate) fn new(arguments: I) -> Self {
        Self {
            arguments,
            state: State::Default,
        }
    }

    fn scan(&mut self, argument: String) -> Token {
        if argument == "--" {
            self.state = State::Rest;
            return Token::Separator;
        }

        if let Some(name) = argument.strip_prefix("--") {
            // Scanning for '=' by byte is safe: both '-' and '=' are single-byte ASCII,
            // so a multi-byte name or value cannot straddle the split point.
            return match name.split_once('=') {
                Some((name, value)) => Token::LongPair(name.to_string(), value.to_string()),
                None => Token::Long(name.to_string()),
            };
        }

        if argument.len() >= 2 && argument.starts_with('-') {
            let rest = &argument[1..];
            // The name is the first extended grapheme cluster after the hyphen.
            // A fully basic-latin argument can skip the cluster computation: one byte is
            // one cluster there, with CRLF the lone ASCII sequence forming a wider cluster.
            let cut = if argument.is_ascii() && !rest.starts_with("\r\n") {
                1
            } else {
                rest.graphemes(true)
                    .next()
                    .expect("internal error - a short form has a non-empty name")
                    .len()
            };
            let (name, tail) = rest.split_at(cut);

            if !tail.is_empty() {
                // Buffered verbatim, leading '=' included: `-v=x` is `-v` with the value
                // `=x`, matching getopts.
                self.state = State::Buffered(tail.to_string());
            }

            return Token::Short(name.to_string());
        }

        Token::Value(argument)
    }
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = String>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match std::mem::replace(&mut self.state, State::Default) {
            State::Buffered(text) => Some(Token::Value(text)),
            State::Rest => {
                self.state = State::Rest;
                self.arguments.next().map(Token::Value)
            }
            State::Default => {
                let argument = self.arguments.next()?;
                Some(self.scan(argument))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lex(arguments: Vec<&str>) -> Vec<Token> {
        Tokenizer::new(arguments.into_iter().map(String::from)).collect()
    }

    fn short(name: &str) -> Token {
        Token::Short(name.to_string())
    }

    fn long(name: &str) -> Token {
        Token::Long(name.to_string())
    }

    fn long_pair(name: &str, value: &str) -> Token {
        Token::LongPair(name.to_string(), value.to_string())
    }

    fn value(text: &str) -> Token {
        Token::Value(text.to_string())
    }

    #[test]
    fn lex_empty() {
        assert_eq!(lex(vec![]), vec![]);
    }

    #[rstest]
    #[case(vec!["foo"], vec![value("foo")])]
    #[case(vec![""], vec![value("")])]
    #[case(vec!["-"], vec![value("-")])]
    #[case(vec!["a", "b"], vec![value("a"), value("b")])]
    fn lex_values(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(lex(arguments), expected);
    }

    #[rstest]
    #[case(vec!["-h"], vec![short("h")])]
    #[case(vec!["-é"], vec![short("é")])]
    #[case(vec!["-😮"], vec![short("😮")])]
    #[case(vec!["-e\u{301}"], vec![short("e\u{301}")])]
    fn lex_short(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(lex(arguments), expected);
    }

    #[rstest]
    #[case(vec!["-help"], vec![short("h"), value("elp")])]
    #[case(vec!["-v="], vec![short("v"), value("=")])]
    #[case(vec!["-v=x"], vec![short("v"), value("=x")])]
    #[case(vec!["-émile"], vec![short("é"), value("mile")])]
    #[case(vec!["-😮ops"], vec![short("😮"), value("ops")])]
    #[case(vec!["-\r\nx"], vec![short("\r\n"), value("x")])]
    fn lex_short_attached(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(lex(arguments), expected);
    }

    #[rstest]
    #[case(vec!["--help"], vec![long("help")])]
    #[case(vec!["--h"], vec![long("h")])]
    #[case(vec!["---x"], vec![long("-x")])]
    #[case(vec!["--v="], vec![long_pair("v", "")])]
    #[case(vec!["--config=app.toml"], vec![long_pair("config", "app.toml")])]
    #[case(vec!["--config=a=b"], vec![long_pair("config", "a=b")])]
    #[case(vec!["--émile=x"], vec![long_pair("émile", "x")])]
    fn lex_long(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(lex(arguments), expected);
    }

    #[test]
    fn lex_separator() {
        assert_eq!(
            lex(vec!["-v", "--", "-a", "b"]),
            vec![short("v"), Token::Separator, value("-a"), value("b")]
        );
    }

    #[test]
    fn lex_separator_repeated() {
        // Only the first `--` separates; later ones pass through.
        assert_eq!(
            lex(vec!["--", "--", "-a"]),
            vec![Token::Separator, value("--"), value("-a")]
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["foo"])]
    #[case(vec!["-v", "foo"])]
    #[case(vec!["--verbose", "-x", "a b", ""])]
    #[case(vec!["-v", "--", "-a", "b"])]
    fn reconstruction(#[case] arguments: Vec<&str>) {
        // None of these arguments carry attached short values or long pairs, so
        // re-rendering each token gives back the original arguments.
        let rendered: Vec<String> = lex(arguments.clone())
            .iter()
            .map(|token| token.to_string())
            .collect();

        assert_eq!(rendered, arguments);
    }

    #[test]
    fn reconstruction_canonical() {
        let rendered: Vec<String> = lex(vec!["--config=app.toml", "--config="])
            .iter()
            .map(|token| token.to_string())
            .collect();

        assert_eq!(
            rendered,
            vec!["--config=app.toml".to_string(), "--config=".to_string()]
        );
    }

    #[test]
    fn single_pass() {
        let mut tokenizer = Tokenizer::new(vec!["-v".to_string()].into_iter());

        assert_eq!(tokenizer.next(), Some(short("v")));
        assert_eq!(tokenizer.next(), None);
        assert_eq!(tokenizer.next(), None);
    }
}
