use std::collections::HashMap;

use crate::model::Value;

/// The result of a successful parse.
///
/// An option's values are queryable by either of its names; the short and long name of one
/// option observe the identical value list.
/// A `Matches` owns all of its strings, so it may outlive the [`Options`](crate::Options)
/// it came from, and it is never mutated after [`parse`](crate::Options::parse) returns.
#[derive(Debug, Clone)]
pub struct Matches {
    index: HashMap<String, usize>,
    values: Vec<Vec<Value>>,
    remaining: Vec<String>,
}

impl Matches {
    pub(crate) fn new(index: HashMap<String, usize>, definitions: usize) -> Self {
        Self {
            index,
            values: vec![Vec::default(); definitions],
            remaining: Vec::default(),
        }
    }

    pub(crate) fn recorded(&self, index: usize) -> bool {
        !self.values[index].is_empty()
    }

    pub(crate) fn record(&mut self, index: usize, value: Value) {
        self.values[index].push(value);
    }

    pub(crate) fn push_remaining(&mut self, argument: String) {
        self.remaining.push(argument);
    }

    /// Check whether the option occurred, by either of its names.
    pub fn contains(&self, name: &str) -> bool {
        match self.index.get(name) {
            Some(&index) => self.recorded(index),
            None => false,
        }
    }

    /// The first value recorded for the option.
    ///
    /// Flags carry no text, so `value` on a flag yields `None` even when the flag occurred;
    /// use [`Matches::contains`] to test for presence.
    pub fn value(&self, name: &str) -> Option<&str> {
        let index = self.index.get(name)?;
        self.values[*index].first().and_then(Value::text)
    }

    /// Every value recorded for the option, in occurrence order.
    ///
    /// Empty when the option did not occur, is unknown, or carries no text.
    pub fn values(&self, name: &str) -> Vec<&str> {
        match self.index.get(name) {
            Some(&index) => self.values[index].iter().filter_map(Value::text).collect(),
            None => Vec::default(),
        }
    }

    /// The arguments left over after option parsing, in order.
    ///
    /// These are the free-standing values, plus everything behind a `--` separator or (with
    /// the stop policy) behind the first free-standing value.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }
}
