use std::fmt;

use memchr::memmem;

/// Marker that negates a pattern when it is the first character.
pub const NEGATION: char = '!';

/// Wildcard marker matching zero or more characters.
pub const WILDCARD: char = '*';

/// Whether a matching pattern selects or rejects the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum Sign {
    #[default]
    Include,
    Exclude,
}

impl Sign {
    /// Returns the verdict a matching pattern with this sign produces.
    #[inline]
    pub fn verdict(self) -> bool {
        matches!(self, Self::Include)
    }
}

/// A single compiled filter pattern.
///
/// The body of the pattern (everything after an optional leading `!`) is split on `*` into literal
/// segments, so a pattern always has exactly one more segment than it has wildcards. An empty first
/// segment means the pattern starts with a wildcard and an empty last segment means it ends with one.
///
/// # Examples
///
/// ```
/// use wildcard::{Pattern, Sign};
///
/// let pattern = Pattern::new("!*plugin*");
/// assert_eq!(pattern.sign(), Sign::Exclude);
/// assert_eq!(pattern.segments(), ["", "plugin", ""]);
/// assert!(pattern.matches("@eslint/plugin-foo"));
/// assert!(!pattern.matches("express"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Pattern {
    sign: Sign,
    segments: Vec<String>,
}

impl Pattern {
    /// Compiles a raw filter string.
    ///
    /// This function is infallible; every string is a valid pattern.
    /// Only one leading `!` is stripped, so `!!a` excludes the literal `!a`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        let (sign, body) = match raw.strip_prefix(NEGATION) {
            Some(body) => (Sign::Exclude, body),
            None => (Sign::Include, raw),
        };

        Self {
            sign,
            segments: body.split(WILDCARD).map(String::from).collect(),
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Tests whether the pattern body matches the whole text, ignoring the sign.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        match_segments(text, &self.segments)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Exclude {
            write!(f, "{}", NEGATION)?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", WILDCARD)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Tests whether `text` matches the literal `segments` of a pattern body split on `*`.
///
/// Interior segments are placed at their earliest position left to right and never overlap.
/// The last segment must fit after everything consumed so far.
///
/// # Examples
///
/// ```
/// use wildcard::match_segments;
///
/// assert!(match_segments("eslint-plugin-foo", &["eslint-", ""]));
/// assert!(!match_segments("@eslint/plugin-x", &["eslint-", ""]));
/// assert!(match_segments("", &[""]));
/// assert!(!match_segments("a", &[""]));
/// ```
pub fn match_segments<S: AsRef<str>>(text: &str, segments: &[S]) -> bool {
    let (first, rest) = match segments.split_first() {
        Some((first, rest)) => (first.as_ref(), rest),
        None => return text.is_empty(),
    };
    let Some((last, middle)) = rest.split_last() else {
        return text == first;
    };
    let last = last.as_ref();

    if first.is_empty() && last.is_empty() && middle.iter().all(|s| s.as_ref().is_empty()) {
        return true;
    }

    let Some(mut tail) = text.strip_prefix(first) else {
        return false;
    };

    for segment in middle {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        match memmem::find(tail.as_bytes(), segment.as_bytes()) {
            Some(i) => tail = &tail[i + segment.len()..],
            None => return false,
        }
    }

    tail.ends_with(last)
}

#[cfg(test)]
mod tests;
