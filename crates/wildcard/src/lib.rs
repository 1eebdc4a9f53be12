//! Wildcard filter rules for selecting workspace packages by name.
//!
//! A filter is an ordered list of patterns. Each pattern is a string where `*` matches zero or more
//! characters, and a single leading `!` turns the pattern into an exclusion. There is no `?`, no
//! character classes and no escaping.
//!
//! Patterns are combined into a [`RuleSet`]. A rule set is evaluated left to right, and the last
//! pattern that matches the input decides the verdict. If no pattern matches, the input is rejected.
//!
//! # Examples
//!
//! ```
//! use wildcard::RuleSet;
//!
//! let rules = RuleSet::compile(["eslint-*", "!eslint-plugin-*", "eslint-plugin-bar"]);
//! assert!(rules.evaluate("eslint-config-foo"));
//! assert!(!rules.evaluate("eslint-plugin-foo"));
//! assert!(rules.evaluate("eslint-plugin-bar"));
//! ```
//!
//! Order matters:
//!
//! ```
//! use wildcard::RuleSet;
//!
//! assert!(!RuleSet::compile(["eslint-*", "!eslint-plugin-bar"]).evaluate("eslint-plugin-bar"));
//! assert!(RuleSet::compile(["!eslint-plugin-bar", "eslint-*"]).evaluate("eslint-plugin-bar"));
//! ```

mod pattern;
mod ruleset;

pub use pattern::*;
pub use ruleset::*;
