use crate::matcher::Matcher;
use crate::{Flags, Pattern};

fn pattern(source: &str, flags: Flags) -> Pattern {
    Pattern::new(source, flags).unwrap()
}

#[test]
fn test_match_str_case_insensitive() {
    assert!(Matcher::test(&pattern("abc", Flags::IGNORE_CASE), "xABCx").unwrap());
    assert!(!Matcher::test(&pattern("abc", Flags::empty()), "xABCx").unwrap());
}

#[test]
fn test_multiline() {
    assert!(Matcher::test(&pattern("^b", Flags::MULTILINE), "a\nb").unwrap());
    assert!(!Matcher::test(&pattern("^b", Flags::empty()), "a\nb").unwrap());
}

#[test]
fn test_dot_all() {
    assert!(Matcher::test(&pattern("a.b", Flags::DOT_ALL), "a\nb").unwrap());
    assert!(!Matcher::test(&pattern("a.b", Flags::empty()), "a\nb").unwrap());
}

#[test]
fn test_match_first_groups() {
    let p = pattern(r"(\w+)-(\d+)", Flags::GLOBAL);
    assert_eq!(Matcher::match_first(&p, "a-1 b-2").unwrap(), vec!["a-1", "a", "1"]);
    assert_eq!(Matcher::match_first(&p, "none").unwrap(), vec![""]);
}

#[test]
fn test_absent_groups() {
    let p = pattern("(a)|(b)", Flags::GLOBAL);
    assert_eq!(Matcher::match_first(&p, "b").unwrap(), vec!["b", "", "b"]);
    assert_eq!(Matcher::match_all(&p, "ba", false).unwrap(), vec!["b", "b", "a", "a"]);
    assert_eq!(Matcher::match_all(&p, "ba", true).unwrap(), vec!["b", "a"]);
}

#[test]
fn test_match_all_requires_global() {
    let p = pattern(r"(\d)", Flags::empty());
    assert_eq!(Matcher::match_all(&p, "1 2 3", true).unwrap(), vec!["1"]);
    let p = pattern(r"(\d)", Flags::GLOBAL);
    assert_eq!(Matcher::match_all(&p, "1 2 3", true).unwrap(), vec!["1", "2", "3"]);
    assert!(Matcher::match_all(&p, "abc", true).unwrap().is_empty());
}

#[test]
fn test_sticky() {
    let p = pattern(r"\d", Flags::GLOBAL | Flags::STICKY);
    assert_eq!(Matcher::match_all(&p, "12a3", false).unwrap(), vec!["1", "2"]);
    assert!(!Matcher::test(&p, "a1").unwrap());
    assert_eq!(Matcher::match_first(&p, "a1").unwrap(), vec![""]);
}

#[test]
fn test_replace_first_or_all() {
    let p = pattern(r"\d", Flags::empty());
    assert_eq!(Matcher::replace(&p, "1 2", "x").unwrap(), "x 2");
    let p = pattern(r"\d", Flags::GLOBAL);
    assert_eq!(Matcher::replace(&p, "1 2", "x").unwrap(), "x x");
    assert_eq!(Matcher::replace(&p, "none", "x").unwrap(), "none");
}

#[test]
fn test_replace_backreferences() {
    let p = pattern(r"(\w+)-(\d+)", Flags::GLOBAL);
    assert_eq!(Matcher::replace(&p, "p-2 w-9", "$2-$1").unwrap(), "2-p 9-w");
}

#[test]
fn test_lookaround_fragment() {
    let p = pattern(r"\b\w+(?=\s+example\b)", Flags::GLOBAL);
    assert_eq!(Matcher::match_all(&p, "an example, one more example", false).unwrap(), vec!["an", "more"]);
}

#[test]
fn test_compile_error() {
    assert!(matches!(
        Pattern::new("(unclosed", Flags::empty()),
        Err(crate::Error::Compile { .. })
    ));
}

#[test]
fn test_pattern_display() {
    let p = pattern(r"a\.b", Flags::GLOBAL | Flags::IGNORE_CASE);
    assert_eq!(p.to_string(), r"/a\.b/gi");
    assert_eq!(p.source(), r"a\.b");
}

#[test]
fn test_alternate() {
    let left = pattern("a", Flags::GLOBAL);
    let right = pattern("b", Flags::empty());
    let both = left.alternate(&right, Flags::IGNORE_CASE).unwrap();
    assert_eq!(both.source(), "a|b");
    assert_eq!(both.flags(), Flags::IGNORE_CASE);
    assert!(Matcher::test(&both, "B").unwrap());
}

#[test]
fn test_empty_matches_after_a_match_are_skipped() {
    let p = pattern("a*", Flags::GLOBAL);
    assert_eq!(Matcher::replace(&p, "aab", "x").unwrap(), "xbx");
    let p = pattern("a*", Flags::GLOBAL | Flags::STICKY);
    assert_eq!(Matcher::replace(&p, "aab", "x").unwrap(), "xb");
}

#[test]
fn test_builtin_classes_are_unicode() {
    let p = pattern(r"id-(\d+)", Flags::empty());
    assert_eq!(Matcher::match_first(&p, "id-٣").unwrap(), vec!["id-٣", "٣"]);
    assert!(Matcher::test(&pattern(r"^\w+$", Flags::empty()), "é").unwrap());
    assert!(!Matcher::test(&pattern(r"id-([0-9]+)", Flags::empty()), "id-٣").unwrap());
}

#[test]
fn test_test_without_sticky() {
    assert!(Matcher::test(&pattern("", Flags::empty()), "").unwrap());
    assert!(Matcher::test(&pattern(r"(?<=a)b", Flags::GLOBAL), "ab").unwrap());
    assert!(!Matcher::test(&pattern(r"(?<=a)b", Flags::GLOBAL), "cb").unwrap());
    assert!(!Matcher::test(&pattern(r"\d", Flags::empty()), "abc").unwrap());
}
