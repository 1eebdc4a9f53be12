use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("packages/eslint-config-foo", None),
        Candidate::new("packages/eslint-plugin-foo", None),
        Candidate::new("packages/bar", Some("eslint-plugin-bar".into())),
        Candidate::new("packages/express", Some("express".into())),
        Candidate::new("packages/scoped", Some("@eslint/plugin-x".into())),
    ]
}

fn keys(selection: &Selection<'_>) -> Vec<String> {
    selection.selected.iter().map(|c| c.key().into_owned()).collect()
}

#[rstest]
#[case("packages/foo", "foo")]
#[case("packages/foo/", "foo")]
#[case("packages/foo\tbar", "bar")]
#[case("packages/foo\t", "foo")]
#[case("@scope\t@scope/pkg", "@scope/pkg")]
fn test_candidate_key(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(Candidate::parse(line).unwrap().key(), expected);
}

#[test]
fn test_candidate_parse_empty() {
    assert_matches!(Candidate::parse(""), Err(Error::InvalidCandidate(_)));
}

#[test]
fn test_candidate_accessors() {
    let c = Candidate::parse("a/b\tname").unwrap();
    assert_eq!(c.dir(), Path::new("a/b"));
    assert_eq!(c.name(), Some("name"));
    assert_eq!(Candidate::new("a", Some(String::new())).name(), None);
}

#[rstest]
#[case(Backend::Accelerated)]
#[case(Backend::Interpreted)]
fn test_select(#[case] backend: Backend) {
    let candidates = candidates();
    let selector = Selector::new(backend, ContextOptions::default());
    let selection = selector
        .select(&["eslint-*", "!eslint-plugin-*", "eslint-plugin-bar"], &candidates)
        .unwrap();
    assert_eq!(keys(&selection), ["eslint-config-foo", "eslint-plugin-bar"]);
    assert!(selection.unmatched_filters.is_empty());
}

#[rstest]
#[case(Backend::Accelerated)]
#[case(Backend::Interpreted)]
fn test_select_exclusions_only(#[case] backend: Backend) {
    let candidates = candidates();
    let selector = Selector::new(backend, ContextOptions::default());
    let selection = selector.select(&["!eslint-*"], &candidates).unwrap();
    assert_eq!(keys(&selection), ["express", "@eslint/plugin-x"]);
}

#[rstest]
#[case(Backend::Accelerated)]
#[case(Backend::Interpreted)]
fn test_unmatched_filters(#[case] backend: Backend) {
    let candidates = candidates();
    let selector = Selector::new(backend, ContextOptions::default());
    let selection = selector
        .select(&["*plugin*", "!koa", "expres", "express"], &candidates)
        .unwrap();
    assert_eq!(
        keys(&selection),
        ["eslint-plugin-foo", "eslint-plugin-bar", "express", "@eslint/plugin-x"]
    );
    assert_eq!(selection.unmatched_filters, ["!koa", "expres"]);
}

#[test]
fn test_unmatched_disabled() {
    let candidates = candidates();
    let selector = Selector::new(Backend::Interpreted, ContextOptions::default()).report_unmatched(false);
    let selection = selector.select(&["nothing"], &candidates).unwrap();
    assert!(selection.selected.is_empty());
    assert!(selection.unmatched_filters.is_empty());
}

#[test]
fn test_empty_filter_selects_nothing() {
    let candidates = candidates();
    let selector = Selector::new(Backend::Accelerated, ContextOptions::default());
    let selection = selector.select::<&str>(&[], &candidates).unwrap();
    assert!(selection.selected.is_empty());
    assert!(selection.unmatched_filters.is_empty());
}

#[test]
fn test_no_candidates() {
    let selector = Selector::new(Backend::Accelerated, ContextOptions::default());
    let selection = selector.select(&["a", "!b"], &[]).unwrap();
    assert!(selection.selected.is_empty());
    assert_eq!(selection.unmatched_filters, ["a", "!b"]);
}

#[test]
fn test_context_finish_disposes() {
    let mut ctx = MatchContext::create(["*"], false).unwrap();
    assert!(ctx.is_match("x").unwrap());
    ctx.finish();
    assert!(ctx.is_disposed());
}
