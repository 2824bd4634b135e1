//! Left-to-right fold semantics.
//!
//! Each term is folded into the running result as soon as it is read. These
//! tests pin down the orderings where that differs from boolean algebra.

use crate::common::{ids, scenario_index, tiny_index, RAINBOW, SEUSS, SHOPPING};
use lexis::{evaluate, find_query_matches, parse_query, Modifier, QueryTerm};

#[test]
fn test_order_matters_across_modifiers() {
    let index = scenario_index();

    assert_eq!(find_query_matches(&index, "fish -red"), ids(&[SHOPPING]));
    assert_eq!(find_query_matches(&index, "-red fish"), ids(&[SHOPPING, SEUSS]));
}

#[test]
fn test_leading_require_narrows_empty_seed() {
    let index = scenario_index();
    assert!(find_query_matches(&index, "+fish").is_empty());
    assert!(find_query_matches(&index, "+fish +red").is_empty());
}

#[test]
fn test_leading_exclude_subtracts_from_empty_seed() {
    let index = scenario_index();
    assert!(find_query_matches(&index, "-fish").is_empty());
}

#[test]
fn test_later_union_restores_after_narrowing() {
    let index = scenario_index();
    // fish → {S,D}; +red → {D}; eggs → {D} ∪ {S}
    assert_eq!(
        find_query_matches(&index, "fish +red eggs"),
        ids(&[SEUSS, SHOPPING])
    );
}

#[test]
fn test_require_does_not_apply_retroactively() {
    let index = tiny_index();
    // "red" is unioned after the narrowing, so rainbow comes back.
    assert_eq!(
        find_query_matches(&index, "fish +one red"),
        ids(&[SEUSS, RAINBOW])
    );
}

#[test]
fn test_require_narrows_monotonically() {
    let index = tiny_index();
    let broad = find_query_matches(&index, "fish blue");
    let narrow = find_query_matches(&index, "fish blue +red");
    let narrower = find_query_matches(&index, "fish blue +red +one");

    assert!(narrow.is_subset(&broad));
    assert!(narrower.is_subset(&narrow));
}

#[test]
fn test_parse_then_evaluate_matches_find() {
    let index = tiny_index();
    let query = "fish red -one +blue";

    let terms = parse_query(query);
    assert_eq!(
        terms,
        vec![
            QueryTerm::new(Modifier::Union, "fish"),
            QueryTerm::new(Modifier::Union, "red"),
            QueryTerm::new(Modifier::Exclude, "one"),
            QueryTerm::new(Modifier::Require, "blue"),
        ]
    );
    assert_eq!(evaluate(&index, &terms), find_query_matches(&index, query));
    assert_eq!(evaluate(&index, &terms), ids(&[RAINBOW]));
}

#[test]
fn test_modifier_resets_each_term() {
    let terms = parse_query("+red fish -blue eggs");
    let modifiers: Vec<Modifier> = terms.iter().map(|t| t.modifier).collect();
    assert_eq!(
        modifiers,
        vec![
            Modifier::Require,
            Modifier::Union,
            Modifier::Exclude,
            Modifier::Union,
        ]
    );
}
