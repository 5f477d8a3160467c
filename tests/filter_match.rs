use mailrule::FilterExpr;

fn filter(clauses: &[(&str, bool)]) -> FilterExpr {
    clauses.iter().copied().collect()
}

#[test]
fn ordered_conjunction() {
    let f = filter(&[("foo", true), ("bar", true)]);
    assert!(f.matches("xxfooyybarzz"));
    assert!(!f.matches("xxbaryyfoozz"));
    assert!(!f.matches("xxfooyyzz"));
    // The final connector does not matter.
    let f = filter(&[("foo", true), ("bar", false)]);
    assert!(f.matches("xxfooyybarzz"));
    assert!(!f.matches("xxbaryyfoozz"));
}

#[test]
fn plain_disjunction() {
    let f = filter(&[("cat", false), ("dog", false)]);
    assert!(f.matches("I have a dog"));
    assert!(f.matches("my cat sleeps"));
    assert!(!f.matches("a bird flew"));
}

#[test]
fn backtracking_into_second_alternative() {
    // ("a" or "ab") and then "c"
    let f = filter(&[("a", false), ("ab", true), ("c", true)]);
    assert!(f.matches("xaxxabcxx"));
    assert!(f.matches("abxc"));
    assert!(f.matches("ac"));
    assert!(!f.matches("cab"));
    assert!(!f.matches("xab"));
    assert!(!f.matches("c"));
}

#[test]
fn backtracking_restarts_from_original_position() {
    // When "ab" cannot lead to "q", "x" is searched from the start again.
    let f = filter(&[("ab", false), ("x", true), ("q", true)]);
    assert!(f.matches("abxq"));
    assert!(f.matches("xqab"));
    assert!(!f.matches("qabx"));
}

#[test]
fn mixed_chain_groups_alternatives() {
    // "A" or "B" and then "C" or "D": (A | B) followed by (C | D).
    let f = filter(&[("A", false), ("B", true), ("C", false), ("D", true)]);
    assert_eq!(f.to_string(), r#""A" or "B" and then "C" or "D""#);

    assert!(f.matches("A C"));
    assert!(f.matches("A D"));
    assert!(f.matches("B C"));
    assert!(f.matches("B D"));
    assert!(f.matches("D B A C"));
    assert!(!f.matches("C A"));
    assert!(!f.matches("D B"));
    assert!(!f.matches("C D"));
    assert!(!f.matches("A B"));
}

#[test]
fn leading_conjunct_before_alternatives() {
    // "A" and then ("B" or "C")
    let f = filter(&[("A", true), ("B", false), ("C", false)]);
    assert!(f.matches("A C"));
    assert!(f.matches("xAxB"));
    assert!(!f.matches("B C A"));
    assert!(!f.matches("B C"));
}

#[test]
fn missing_conjunct_fails_even_with_later_alternatives() {
    let f = filter(&[("x", true), ("y", false), ("z", false)]);
    assert!(!f.matches("y z"));
    assert!(f.matches("x z"));
}

#[test]
fn three_groups() {
    // (a | b) then c then (d | e)
    let f = filter(&[
        ("a", false),
        ("b", true),
        ("c", true),
        ("d", false),
        ("e", false),
    ]);
    assert!(f.matches("bce"));
    assert!(f.matches("a..c..d"));
    assert!(!f.matches("a..d..c"));
    assert!(!f.matches("ce"));
}

#[test]
fn repeated_text_needs_separate_occurrences() {
    let f = filter(&[("ab", true), ("ab", true)]);
    assert!(f.matches("abab"));
    assert!(!f.matches("aba"));
}

#[test]
fn empty_clause_text() {
    assert!(filter(&[("", false)]).matches(""));
    assert!(filter(&[("", true), ("z", true)]).matches("z"));
    assert!(!filter(&[("", true), ("z", true)]).matches("y"));
}

#[test]
fn debug_flag_does_not_change_result() {
    let mut f = filter(&[("a", false), ("ab", true), ("c", true)]);
    let plain: Vec<bool> = ["xaxxabcxx", "cab", "xab"].iter().map(|s| f.matches(s)).collect();
    f.set_debug(true);
    let traced: Vec<bool> = ["xaxxabcxx", "cab", "xab"].iter().map(|s| f.matches(s)).collect();
    assert_eq!(plain, traced);
}

#[test]
fn long_chain_matches() {
    let words: Vec<String> = (0..200).map(|i| format!("w{i:03}")).collect();
    let f: FilterExpr = words.iter().map(|w| (w.as_str(), true)).collect();
    let text = words.join(" ");
    assert!(f.matches(&text));
    assert!(!f.matches(&text.replace("w150", "w15x")));
}

#[test]
fn long_disjunction_uses_constant_stack() {
    let f: FilterExpr = (0..100_000).map(|i| (format!("w{i}"), false)).collect();
    assert!(!f.matches("nothing here"));
    assert!(f.matches("only w99999 is present"));
}

#[test]
fn long_groups_between_conjuncts() {
    // (w0 | ... | w49999) and then "end"
    let mut f: FilterExpr = (0..50_000).map(|i| (format!("w{i}"), false)).collect();
    f.set_conjunctive(49_999, true).unwrap();
    f.push("end", true);
    assert!(f.matches("w49999 end"));
    assert!(!f.matches("end w49999"));
    assert!(!f.matches("no words end"));
}
