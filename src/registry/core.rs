use std::collections::HashMap;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::model::{Opt, OptKind};

/// A mistake in the option definitions.
/// These are programmer errors, not runtime conditions; the public registration methods
/// panic with this message to abort program setup immediately.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub(crate) struct ConfigError(pub(crate) String);

/// The set of recognized options.
///
/// Build one incrementally via [`Options::flag`], [`Options::single`], and
/// [`Options::multiple`], then run it against an argument vector with
/// [`Options::parse`](Options::parse).
/// The registry is read-only during parsing and may be reused across any number of parse
/// invocations.
#[derive(Debug, Default)]
pub struct Options {
    pub(crate) definitions: Vec<Opt>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) stop_at_first_non_option: bool,
}

impl Options {
    /// Register an option which takes no value.
    ///
    /// `short` must be empty or exactly one extended grapheme cluster; `long` must be
    /// empty or at least two characters; they must not both be empty.
    /// Panics on a malformed name or a name collision.
    ///
    /// ### Example
    /// ```
    /// use clopt::Options;
    ///
    /// let options = Options::default().flag("v", "verbose", "Noisy output.");
    /// let matches = options.parse(["--verbose"]).unwrap();
    ///
    /// assert!(matches.contains("v"));
    /// ```
    pub fn flag(mut self, short: &str, long: &str, description: &str) -> Self {
        self.must_register(Opt::new(OptKind::Flag, short, long, "", description));
        self
    }

    /// Register an option which takes exactly one value and may appear at most once.
    ///
    /// The `hint` names the value in the help message, ex: `PATH`.
    /// Panics on a malformed name or a name collision.
    ///
    /// ### Example
    /// ```
    /// use clopt::Options;
    ///
    /// let options = Options::default().single("o", "output", "FILE", "Write to FILE.");
    /// let matches = options.parse(["--output=out.bin"]).unwrap();
    ///
    /// assert_eq!(matches.value("o"), Some("out.bin"));
    /// ```
    pub fn single(mut self, short: &str, long: &str, hint: &str, description: &str) -> Self {
        self.must_register(Opt::new(OptKind::Single, short, long, hint, description));
        self
    }

    /// Register an option which takes one value per occurrence and may repeat.
    ///
    /// Panics on a malformed name or a name collision.
    ///
    /// ### Example
    /// ```
    /// use clopt::Options;
    ///
    /// let options = Options::default().multiple("D", "define", "KEY=VALUE", "Define a macro.");
    /// let matches = options.parse(["-DFOO=1", "-D", "BAR=2"]).unwrap();
    ///
    /// assert_eq!(matches.values("define"), vec!["FOO=1", "BAR=2"]);
    /// ```
    pub fn multiple(mut self, short: &str, long: &str, hint: &str, description: &str) -> Self {
        self.must_register(Opt::new(OptKind::Multiple, short, long, hint, description));
        self
    }

    /// Stop parsing options at the first free-standing argument.
    ///
    /// When enabled, everything from the first non-option argument onwards lands in
    /// [`Matches::remaining`](crate::Matches::remaining) untouched, even tokens that look
    /// like options.
    /// Useful for wrapper programs which forward a tail command line.
    ///
    /// ### Example
    /// ```
    /// use clopt::Options;
    ///
    /// let options = Options::default()
    ///     .flag("v", "verbose", "Noisy output.")
    ///     .stop_at_first_non_option(true);
    /// let matches = options.parse(["status", "--branch"]).unwrap();
    ///
    /// assert_eq!(matches.remaining(), &["status".to_string(), "--branch".to_string()]);
    /// ```
    pub fn stop_at_first_non_option(mut self, enabled: bool) -> Self {
        self.stop_at_first_non_option = enabled;
        self
    }

    fn must_register(&mut self, opt: Opt) {
        if let Err(error) = self.register(opt) {
            panic!("{error}");
        }
    }

    pub(crate) fn register(&mut self, opt: Opt) -> Result<(), ConfigError> {
        if opt.short.is_empty() && opt.long.is_empty() {
            return Err(ConfigError(
                "An option requires a short or long name.".to_string(),
            ));
        }

        if !opt.short.is_empty() && opt.short.graphemes(true).count() != 1 {
            return Err(ConfigError(format!(
                "The short name '{short}' must be a single character.",
                short = opt.short
            )));
        }

        if opt.long.chars().count() == 1 {
            return Err(ConfigError(format!(
                "The long name '{long}' must be at least two characters.",
                long = opt.long
            )));
        }

        for name in [&opt.short, &opt.long] {
            if !name.is_empty() && self.index.contains_key(name.as_str()) {
                return Err(ConfigError(format!("Cannot duplicate the option '{name}'.")));
            }
        }

        let index = self.definitions.len();

        for name in [&opt.short, &opt.long] {
            if !name.is_empty() {
                self.index.insert(name.clone(), index);
            }
        }

        self.definitions.push(opt);
        Ok(())
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<(usize, &Opt)> {
        self.index
            .get(name)
            .map(|&index| (index, &self.definitions[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn flag(short: &str, long: &str) -> Opt {
        Opt::new(OptKind::Flag, short, long, "", "")
    }

    #[rstest]
    #[case("h", "help")]
    #[case("h", "")]
    #[case("", "help")]
    #[case("é", "émile")]
    #[case("😮", "surprise")]
    #[case("e\u{301}", "accent")]
    fn register_ok(#[case] short: &str, #[case] long: &str) {
        let mut options = Options::default();

        options.register(flag(short, long)).unwrap();

        assert_eq!(options.definitions.len(), 1);
    }

    #[test]
    fn register_nameless() {
        let mut options = Options::default();

        let error = options.register(flag("", "")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Config error: An option requires a short or long name."
        );
    }

    #[rstest]
    #[case("he")]
    #[case("éé")]
    #[case("hé")]
    fn register_short_too_long(#[case] short: &str) {
        let mut options = Options::default();

        let error = options.register(flag(short, "help")).unwrap_err();

        assert_eq!(
            error.to_string(),
            format!("Config error: The short name '{short}' must be a single character.")
        );
    }

    #[rstest]
    #[case("x")]
    #[case("é")]
    fn register_long_too_short(#[case] long: &str) {
        let mut options = Options::default();

        let error = options.register(flag("h", long)).unwrap_err();

        assert_eq!(
            error.to_string(),
            format!("Config error: The long name '{long}' must be at least two characters.")
        );
    }

    #[rstest]
    #[case("h", "other")]
    #[case("x", "help")]
    #[case("h", "help")]
    fn register_duplicate(#[case] short: &str, #[case] long: &str) {
        let mut options = Options::default();
        options.register(flag("h", "help")).unwrap();

        let result = options.register(flag(short, long));

        assert_matches!(result, Err(ConfigError(_)));
        assert_eq!(options.definitions.len(), 1);
    }

    #[test]
    fn register_duplicate_across_kinds() {
        // A long name colliding with an existing short name is still a collision.
        let mut options = Options::default();
        options.register(flag("", "hh")).unwrap();

        let result = options.register(Opt::new(OptKind::Single, "x", "hh", "HINT", ""));

        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn lookup_shared() {
        let options = Options::default()
            .flag("h", "help", "")
            .single("c", "config", "PATH", "");

        let (by_short, _) = options.lookup("c").unwrap();
        let (by_long, _) = options.lookup("config").unwrap();

        assert_eq!(by_short, by_long);
        assert_ne!(options.lookup("h").unwrap().0, by_short);
        assert_eq!(options.lookup("x"), None);
        assert_eq!(options.lookup(""), None);
    }

    #[test]
    #[should_panic(expected = "Config error: Cannot duplicate the option 'h'.")]
    fn flag_duplicate_panics() {
        Options::default()
            .flag("h", "help", "")
            .single("h", "height", "H", "");
    }

    #[test]
    #[should_panic(expected = "Config error: The long name 'x' must be at least two characters.")]
    fn single_invalid_long_panics() {
        Options::default().single("", "x", "HINT", "");
    }
}
