use rstest::rstest;
use wildmatch::WildMatch;

use super::*;

fn pattern(s: &str) -> Pattern {
    Pattern::new(s)
}

fn matches(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern).matches(text)
}

#[test]
fn test_pattern_parsing_literal() {
    let p = pattern("hello");
    assert_eq!(p.sign(), Sign::Include);
    assert_eq!(p.segments(), ["hello"]);
}

#[test]
fn test_pattern_parsing_empty() {
    let p = pattern("");
    assert_eq!(p.sign(), Sign::Include);
    assert_eq!(p.segments(), [""]);
}

#[test]
fn test_pattern_parsing_single_asterisk() {
    let p = pattern("*");
    assert_eq!(p.segments(), ["", ""]);
}

#[test]
fn test_pattern_parsing_double_asterisk() {
    let p = pattern("a**b");
    assert_eq!(p.segments(), ["a", "", "b"]);
}

#[test]
fn test_pattern_parsing_negated() {
    let p = pattern("!eslint-plugin-*");
    assert_eq!(p.sign(), Sign::Exclude);
    assert_eq!(p.segments(), ["eslint-plugin-", ""]);
}

#[test]
fn test_pattern_parsing_only_one_negation_stripped() {
    let p = pattern("!!a");
    assert_eq!(p.sign(), Sign::Exclude);
    assert_eq!(p.segments(), ["!a"]);
}

#[test]
fn test_pattern_parsing_negation_not_leading() {
    let p = pattern("a!b");
    assert_eq!(p.sign(), Sign::Include);
    assert_eq!(p.segments(), ["a!b"]);
}

#[rstest]
#[case("")]
#[case("*")]
#[case("a*b*c")]
#[case("**x**")]
#[case("!@scope/*")]
fn test_segment_count_invariant(#[case] raw: &str) {
    let body = raw.strip_prefix('!').unwrap_or(raw);
    assert_eq!(pattern(raw).segments().len(), body.matches('*').count() + 1);
}

#[rstest]
#[case("")]
#[case("*")]
#[case("eslint-*")]
#[case("!eslint-plugin-*")]
#[case("a**b")]
#[case("!!x")]
fn test_display(#[case] raw: &str) {
    assert_eq!(pattern(raw).to_string(), raw);
}

#[rstest]
#[case("hello", "hello", true)]
#[case("hello", "world", false)]
#[case("hello", "hell", false)]
#[case("hello", "helloo", false)]
#[case("hello", "Hello", false)]
fn test_exact_match(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("", "", true)]
#[case("", "a", false)]
#[case("", " ", false)]
fn test_empty_pattern(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*", "")]
#[case("*", "anything")]
#[case("*", "@scope/name")]
#[case("**", "")]
#[case("***", "multiple words")]
fn test_asterisk_match_any(#[case] pattern: &str, #[case] text: &str) {
    assert!(matches(pattern, text));
}

#[rstest]
#[case("*world", "world", true)]
#[case("*world", "hello world", true)]
#[case("*world", "world!", false)]
#[case("*world", "wor", false)]
fn test_asterisk_prefix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("eslint-*", "eslint-plugin-foo", true)]
#[case("eslint-*", "eslint-", true)]
#[case("eslint-*", "@eslint/plugin-x", false)]
#[case("eslint-*", "eslint", false)]
fn test_asterisk_suffix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("foo*bar", "foobar", true)]
#[case("foo*bar", "foo and bar", true)]
#[case("foo*bar", "foobarx", false)]
#[case("foo*bar", "xfoobar", false)]
#[case("ab*ba", "aba", false)]
#[case("ab*ba", "abba", true)]
#[case("a*a", "a", false)]
#[case("a*a", "aa", true)]
fn test_asterisk_middle(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*plugin*", "@eslint/plugin-foo", true)]
#[case("*plugin*", "express", false)]
#[case("*foo*bar*", "xxxfooxbarxxx", true)]
#[case("*foo*bar*", "barfoo", false)]
#[case("a*b*c", "abc", true)]
#[case("a*b*c", "acb", false)]
#[case("a*b*b", "abxb", true)]
#[case("a*b*b", "ab", false)]
fn test_multiple_asterisks(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("a**b", "ab", true)]
#[case("a**b", "a/x/b", true)]
#[case("a**b", "ba", false)]
fn test_double_asterisk_is_single(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
    assert_eq!(matches(pattern, text), matches("a*b", text));
}

#[rstest]
#[case("@scope/*", "@scope/pkg", true)]
#[case("@*/pkg", "@scope/nested/pkg", true)]
#[case("aaa/b-*", "aaa/b-1", true)]
#[case("aaa/b-*", "aaa/cb-2", false)]
fn test_asterisk_crosses_slash(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("пакет-*", "пакет-один", true)]
#[case("*🦀*", "crab🦀crab", true)]
#[case("*🦀", "🦀🎉", false)]
fn test_utf8(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[test]
fn test_sign_ignored_by_matches() {
    assert!(pattern("!foo").matches("foo"));
}

#[test]
fn test_agrees_with_wildmatch() {
    let patterns = ["", "*", "a", "a*", "*a", "a*b", "*a*b*", "ab*ba", "a**a", "b*a*b"];
    let inputs = ["", "a", "b", "ab", "ba", "aba", "abba", "baab", "abab", "bab", "aaa"];
    for p in patterns {
        let oracle = WildMatch::new(p);
        for text in inputs {
            assert_eq!(matches(p, text), oracle.matches(text), "pattern {:?} text {:?}", p, text);
        }
    }
}
