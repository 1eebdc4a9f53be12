use std::fmt;
use std::slice;

use crate::pattern::Pattern;

/// An ordered list of compiled patterns forming one filter expression.
///
/// The order of patterns is preserved exactly as supplied. Evaluation is last-match-wins:
/// every pattern matching the input overwrites the verdict with its sign, and an input matched by no
/// pattern is rejected. Consequently an empty rule set matches nothing.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct RuleSet {
    patterns: Vec<Pattern>,
}

impl RuleSet {
    /// Compiles raw filter strings into a rule set.
    pub fn compile<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        raw.into_iter().map(Pattern::new).collect()
    }

    /// Returns the verdict for `input`.
    pub fn evaluate(&self, input: &str) -> bool {
        let mut verdict = false;
        for pattern in &self.patterns {
            if pattern.matches(input) {
                verdict = pattern.sign().verdict();
            }
        }
        verdict
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl FromIterator<Pattern> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Pattern>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Pattern;
    type IntoIter = slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

/// Compiles raw filter strings into a [`RuleSet`].
#[inline]
pub fn compile<I>(raw: I) -> RuleSet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    RuleSet::compile(raw)
}

/// Evaluates `input` against `rules`, see [`RuleSet::evaluate`].
#[inline]
pub fn evaluate(rules: &RuleSet, input: &str) -> bool {
    rules.evaluate(input)
}
