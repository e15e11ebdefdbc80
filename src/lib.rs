//! `clopt` is a getopts-style command line option parser for Rust.
//!
//! Plenty of crates parse command lines; `clopt` deliberately stays close to the classic
//! getopts conventions instead of building a framework on top of them.
//! Specifically, `clopt` prioritizes the following design concerns:
//! * *Getopts compatibility*:
//! Short options (`-o`), long options (`--option`), `--option=value`, attached short values
//! (`-ovalue`), and the `--` separator behave the way decades of command line tools expect.
//! Notably, `-o=value` passes the literal `=value` through as the option's value; the `=` is
//! only meaningful for long options.
//! * *Unicode awareness*:
//! A short option name is one extended grapheme cluster, not one byte.
//! `-é` and `-😮` are single short options, never truncated mid-cluster.
//! * *Raw values*:
//! Option values are uninterpreted text.
//! Type conversion, validation, and defaulting belong to the caller.
//! * *Two-tier failures*:
//! Mistakes in the option definitions are programmer errors and abort setup immediately,
//! while mistakes in the parsed input are returned as a typed [`ParseError`] for the caller
//! to report however it sees fit.
//!
//! # Usage
//! ```
//! use clopt::Options;
//!
//! let options = Options::default()
//!     .flag("h", "help", "Show this help message and exit.")
//!     .single("c", "config", "PATH", "Read configuration from PATH.")
//!     .multiple("I", "include", "DIR", "Add DIR to the search path.");
//!
//! let matches = options
//!     .parse(["-c", "app.toml", "--include=lib", "build"])
//!     .unwrap();
//!
//! assert!(matches.contains("config"));
//! assert_eq!(matches.value("c"), Some("app.toml"));
//! assert_eq!(matches.values("include"), vec!["lib"]);
//! assert_eq!(matches.remaining(), &["build".to_string()]);
//! ```
//!
//! Arguments after `--` are never treated as options, which keeps them intact for
//! forwarding to a subcommand or subprocess:
//! ```
//! use clopt::Options;
//!
//! let options = Options::default().flag("v", "verbose", "Noisy output.");
//! let matches = options.parse(["-v", "--", "-x", "--yes"]).unwrap();
//!
//! assert!(matches.contains("v"));
//! assert_eq!(matches.remaining(), &["-x".to_string(), "--yes".to_string()]);
//! ```
#![deny(missing_docs)]
mod lexer;
mod model;
mod parser;
mod registry;

pub use parser::{Matches, ParseError};
pub use registry::Options;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
