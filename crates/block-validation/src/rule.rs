//! Rule table types.

use serde_json::Value;
use std::fmt;

/// A named predicate and the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Validator {
    predicate: fn(&Value) -> bool,
    /// Message reported for a failing value.
    pub message: &'static str,
}

impl Validator {
    pub const fn new(predicate: fn(&Value) -> bool, message: &'static str) -> Self {
        Self { predicate, message }
    }

    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("message", &self.message).finish()
    }
}

/// How a single field is validated.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Apply a predicate to the value.
    Check(Validator),
    /// Validate the value's fields against another table.
    Nested(RuleTable),
    /// Fixed outcome, independent of the value.
    Always(bool),
    /// Pass when the value is absent or null, otherwise apply the inner rule.
    Optional(Box<Rule>),
    /// Require an array and apply the inner rule to every element.
    Each(Box<Rule>),
}

impl Rule {
    pub fn optional(rule: impl Into<Rule>) -> Self {
        Rule::Optional(Box::new(rule.into()))
    }

    pub fn each(rule: impl Into<Rule>) -> Self {
        Rule::Each(Box::new(rule.into()))
    }
}

impl From<Validator> for Rule {
    fn from(validator: Validator) -> Self {
        Rule::Check(validator)
    }
}

impl From<RuleTable> for Rule {
    fn from(table: RuleTable) -> Self {
        Rule::Nested(table)
    }
}

/// Ordered mapping of field name to rule.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<(String, Rule)>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `name`. A later rule for the same name replaces the earlier one
    /// but keeps its position.
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        let name = name.into();
        let rule = rule.into();
        match self.rules.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = rule,
            None => self.rules.push((name, rule)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
