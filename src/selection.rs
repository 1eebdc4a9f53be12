//! Selecting workspace packages with a filter made of several patterns.
//!
//! The combined rule set of a filter decides which candidates are selected. Independently, every
//! pattern of the filter is checked on its own to find the patterns that matched no candidate at
//! all, which usually means a typo in the filter.

// std imports
use std::borrow::Cow;
use std::path::{Path, PathBuf};

// third-party imports
use clap::ValueEnum;
use serde::Deserialize;
use wildcard::{NEGATION, RuleSet};

// local imports
use crate::context::{ContextOptions, MatchContext};
use crate::error::{Error, Result};

// ---

/// A package found in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    dir: PathBuf,
    name: Option<String>,
}

impl Candidate {
    pub fn new(dir: impl Into<PathBuf>, name: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.filter(|name| !name.is_empty()),
        }
    }

    /// Parses a `<dir>[<TAB><name>]` line.
    pub fn parse(line: &str) -> Result<Self> {
        let (dir, name) = match line.split_once('\t') {
            Some((dir, name)) => (dir, Some(name.to_owned())),
            None => (line, None),
        };
        let candidate = Self::new(dir, name);
        if candidate.key().is_empty() {
            return Err(Error::InvalidCandidate(line.to_owned()));
        }
        Ok(candidate)
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the name filters are matched against: the declared name, or the directory name
    /// when the package declares none.
    pub fn key(&self) -> Cow<'_, str> {
        match (&self.name, self.dir.file_name()) {
            (Some(name), _) => Cow::Borrowed(name),
            (None, Some(dir)) => dir.to_string_lossy(),
            (None, None) => self.dir.to_string_lossy(),
        }
    }
}

// ---

/// Matching implementation used for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Run filters in the match engine.
    #[default]
    Accelerated,
    /// Evaluate compiled rule sets directly.
    Interpreted,
}

// ---

/// Something that can tell whether a candidate name is selected.
pub trait NameMatcher {
    fn is_match(&mut self, name: &str) -> Result<bool>;

    /// Releases resources held by the matcher.
    fn finish(&mut self) {}
}

impl NameMatcher for RuleSet {
    #[inline]
    fn is_match(&mut self, name: &str) -> Result<bool> {
        Ok(self.evaluate(name))
    }
}

impl NameMatcher for MatchContext {
    #[inline]
    fn is_match(&mut self, name: &str) -> Result<bool> {
        self.matches(name)
    }

    fn finish(&mut self) {
        self.dispose();
    }
}

// ---

/// Outcome of applying a filter to a list of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub selected: Vec<&'a Candidate>,
    pub unmatched_filters: Vec<String>,
}

/// Applies filters to candidates.
#[derive(Clone)]
pub struct Selector {
    backend: Backend,
    options: ContextOptions,
    report_unmatched: bool,
}

impl Selector {
    pub fn new(backend: Backend, options: ContextOptions) -> Self {
        Self {
            backend,
            options,
            report_unmatched: true,
        }
    }

    pub fn report_unmatched(mut self, enabled: bool) -> Self {
        self.report_unmatched = enabled;
        self
    }

    /// Selects the candidates accepted by `filter`.
    ///
    /// A filter consisting only of exclusions starts from all candidates,
    /// so `!foo` alone selects everything except `foo`.
    pub fn select<'a, S: AsRef<str>>(&self, filter: &[S], candidates: &'a [Candidate]) -> Result<Selection<'a>> {
        let mut patterns: Vec<&str> = filter.iter().map(|p| p.as_ref()).collect();
        if !patterns.is_empty() && patterns.iter().all(|p| p.starts_with(NEGATION)) {
            patterns.insert(0, "*");
        }

        let mut matcher = self.matcher(&patterns)?;
        let selected = Self::collect(matcher.as_mut(), candidates);
        matcher.finish();
        let selected = selected?;

        let unmatched_filters = if self.report_unmatched {
            self.unmatched(filter, candidates)?
        } else {
            Vec::new()
        };

        log::debug!(
            "filter {:?} selected {} of {} candidates",
            patterns,
            selected.len(),
            candidates.len()
        );

        Ok(Selection {
            selected,
            unmatched_filters,
        })
    }

    fn unmatched<S: AsRef<str>>(&self, filter: &[S], candidates: &[Candidate]) -> Result<Vec<String>> {
        let mut result = Vec::new();
        for pattern in filter {
            let pattern = pattern.as_ref();
            let body = pattern.strip_prefix(NEGATION).unwrap_or(pattern);
            let mut matcher = self.matcher(&[body])?;
            let found = Self::any(matcher.as_mut(), candidates);
            matcher.finish();
            if !found? {
                result.push(pattern.to_owned());
            }
        }
        Ok(result)
    }

    fn matcher(&self, patterns: &[&str]) -> Result<Box<dyn NameMatcher>> {
        let matcher: Box<dyn NameMatcher> = match self.backend {
            Backend::Interpreted => Box::new(RuleSet::compile(patterns)),
            Backend::Accelerated => Box::new(MatchContext::with_options(patterns, self.options.clone())?),
        };
        Ok(matcher)
    }

    fn collect<'a>(matcher: &mut dyn NameMatcher, candidates: &'a [Candidate]) -> Result<Vec<&'a Candidate>> {
        let mut selected = Vec::new();
        for candidate in candidates {
            if matcher.is_match(&candidate.key())? {
                selected.push(candidate);
            }
        }
        Ok(selected)
    }

    fn any(matcher: &mut dyn NameMatcher, candidates: &[Candidate]) -> Result<bool> {
        for candidate in candidates {
            if matcher.is_match(&candidate.key())? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests;
