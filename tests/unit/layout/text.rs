use super::*;

#[test]
fn split_honors_literal_newlines_only() {
    assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    assert_eq!(split_lines("one line"), vec!["one line"]);
}

#[test]
fn split_empty_string_is_one_empty_line() {
    assert_eq!(split_lines(""), vec![""]);
}

#[test]
fn split_keeps_empty_interior_lines() {
    assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
}

// Character-count measure: every char is 10px wide.
fn char_measure(s: &str) -> f32 {
    s.chars().count() as f32 * 10.0
}

#[test]
fn greedy_wrap_accumulates_until_width() {
    // "aa bb cc dd" with a 70px budget: "aa bb" is 50px, adding " cc" makes
    // 80px which does not fit, so a new line starts at "cc".
    let lines = wrap_greedy("aa bb cc dd", 70.0, char_measure);
    assert_eq!(lines, vec!["aa bb", "cc dd"]);
}

#[test]
fn greedy_wrap_single_word_per_line_when_tight() {
    let lines = wrap_greedy("alpha beta gamma", 10.0, char_measure);
    assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn greedy_wrap_never_splits_an_oversized_word() {
    let lines = wrap_greedy("tiny enormousword tiny", 50.0, char_measure);
    assert_eq!(lines, vec!["tiny", "enormousword", "tiny"]);
}

#[test]
fn greedy_wrap_of_empty_text_is_one_empty_line() {
    assert_eq!(wrap_greedy("", 100.0, char_measure), vec![""]);
}
