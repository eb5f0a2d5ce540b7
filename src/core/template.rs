//! Placeholder substitution over template files.
//!
//! A [`TokenSet`] is an ordered list of `(token, value)` pairs. Applying it
//! replaces every literal occurrence of each token, one pair at a time, and
//! feeds each step's output into the next. The order is part of the data so
//! callers can inspect and test it.

use std::fmt;

use zeroize::Zeroizing;

/// Ordered placeholder substitutions.
///
/// Values are wiped from memory when the set is dropped, since they usually
/// include credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    pairs: Vec<(String, Zeroizing<String>)>,
}

/// Number of occurrences replaced for a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub token: String,
    pub count: usize,
}

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a substitution, returning the set for chaining.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(token, value);
        self
    }

    /// Append a substitution. It is applied after every pair already present.
    pub fn push(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((token.into(), Zeroizing::new(value.into())));
    }

    /// Tokens in application order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(token, _)| token.as_str())
    }

    /// Value bound to `token`, if any.
    pub fn value(&self, token: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Apply every substitution in order.
    pub fn apply(&self, content: &str) -> String {
        self.apply_counted(content).0
    }

    /// Apply every substitution in order, reporting how many occurrences of
    /// each token were replaced.
    pub fn apply_counted(&self, content: &str) -> (String, Vec<Replacement>) {
        let mut current = content.to_string();
        let mut report = Vec::with_capacity(self.pairs.len());

        for (token, value) in &self.pairs {
            // An empty pattern would match between every character.
            let count = if token.is_empty() {
                0
            } else {
                current.matches(token.as_str()).count()
            };
            if count > 0 {
                current = current.replace(token.as_str(), value);
            }
            report.push(Replacement {
                token: token.clone(),
                count,
            });
        }

        (current, report)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("tokens", &self.tokens().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Into<String>, V: Into<String>> FromIterator<(T, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (token, value) in iter {
            set.push(token, value);
        }
        set
    }
}

/// Substitute `pairs` into `content` in the given order.
pub fn substitute(content: &str, pairs: &[(&str, &str)]) -> String {
    pairs.iter().copied().collect::<TokenSet>().apply(content)
}
