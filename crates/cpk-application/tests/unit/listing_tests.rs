//! Tests for rule and category listing

use crate::test_utils::{category, noop_rule};
use cpk_application::{SpecRegistry, list_categories, list_rules};
use cpk_domain::{RuleType, Spec};

fn registry(reversed: bool) -> SpecRegistry {
    let mut rules = vec![
        noop_rule("RULE_AAAA").with_categories(["STYLE"]).with_default(true),
        noop_rule("RULE_MMMM").with_categories(["WIRE"]),
        noop_rule("RULE_ZZZZ").deprecated_by(["RULE_AAAA"]),
    ];
    let mut categories = vec![category("STYLE"), category("WIRE")];
    if reversed {
        rules.reverse();
        categories.reverse();
    }
    SpecRegistry::new(Spec::new(rules).with_categories(categories)).unwrap()
}

#[test]
fn test_list_rules_sorted_regardless_of_declaration_order() {
    for reversed in [false, true] {
        let listing = list_rules(&registry(reversed));
        let ids: Vec<&str> = listing.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RULE_AAAA", "RULE_MMMM", "RULE_ZZZZ"]);
        let categories: Vec<&str> = listing.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(categories, vec!["STYLE", "WIRE"]);
    }
}

#[test]
fn test_list_rules_carries_declared_fields() {
    let listing = list_rules(&registry(false));
    let first = &listing.rules[0];
    assert!(first.is_default);
    assert_eq!(first.categories, vec!["STYLE"]);
    assert_eq!(first.rule_type, RuleType::Lint);

    let last = &listing.rules[2];
    assert!(last.deprecated);
    assert_eq!(last.replacement_ids, vec!["RULE_AAAA"]);
}

#[test]
fn test_list_categories_sorted() {
    let listing = list_categories(&registry(true));
    let ids: Vec<&str> = listing.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["STYLE", "WIRE"]);
}

#[test]
fn test_list_categories_empty() {
    let registry = SpecRegistry::new(Spec::new(vec![noop_rule("RULE_AAAA")])).unwrap();
    assert!(list_categories(&registry).categories.is_empty());
}
