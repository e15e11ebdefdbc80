/// The cardinality of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OptKind {
    /// Presence only; takes no value.
    Flag,
    /// Takes exactly one value; may appear at most once.
    Single,
    /// Takes one value per occurrence; repeatable.
    Multiple,
}

/// A validated option definition.
/// Invariant: `short` and `long` are never both empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Opt {
    pub(crate) kind: OptKind,
    pub(crate) short: String,
    pub(crate) long: String,
    pub(crate) hint: String,
    pub(crate) description: String,
}

impl Opt {
    pub(crate) fn new(
        kind: OptKind,
        short: impl Into<String>,
        long: impl Into<String>,
        hint: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            short: short.into(),
            long: long.into(),
            hint: hint.into(),
            description: description.into(),
        }
    }
}

/// A datum recorded against an option during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    /// The option occurred; no payload.
    Flag,
    /// The option occurred with this text.
    Text(String),
}

impl Value {
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            Value::Flag => None,
            Value::Text(text) => Some(text.as_str()),
        }
    }
}
