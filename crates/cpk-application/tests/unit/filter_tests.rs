//! Tests for category-based rule filtering

use crate::test_utils::{category, noop_rule};
use cpk_application::{RuleFilter, SpecRegistry, list_rules};
use cpk_domain::{Error, ListRulesResponse, Spec};

fn listing() -> ListRulesResponse {
    let registry = SpecRegistry::new(
        Spec::new(vec![
            noop_rule("FIELD_LOWER_SNAKE")
                .with_categories(["STYLE"])
                .with_default(true),
            noop_rule("ENUM_PASCAL").with_categories(["STYLE"]),
            noop_rule("FIELD_NO_DELETE")
                .with_categories(["WIRE"])
                .with_default(true),
            noop_rule("ENUM_OLD_NAME")
                .with_categories(["STYLE"])
                .deprecated_by(["ENUM_PASCAL"]),
        ])
        .with_categories(vec![category("STYLE"), category("WIRE")]),
    )
    .unwrap();
    list_rules(&registry)
}

#[test]
fn test_empty_filter_selects_defaults() {
    let ids = RuleFilter::new().apply(&listing()).unwrap();
    assert_eq!(ids, vec!["FIELD_LOWER_SNAKE", "FIELD_NO_DELETE"]);
}

#[test]
fn test_category_expands_to_live_rules() {
    let ids = RuleFilter::new().with_use(["STYLE"]).apply(&listing()).unwrap();
    assert_eq!(ids, vec!["ENUM_PASCAL", "FIELD_LOWER_SNAKE"]);
}

#[test]
fn test_deprecated_rule_selectable_by_id() {
    let ids = RuleFilter::new()
        .with_use(["ENUM_OLD_NAME", "WIRE"])
        .apply(&listing())
        .unwrap();
    assert_eq!(ids, vec!["ENUM_OLD_NAME", "FIELD_NO_DELETE"]);
}

#[test]
fn test_except_removes_from_selection() {
    let ids = RuleFilter::new()
        .with_use(["STYLE", "WIRE"])
        .with_except(["FIELD_LOWER_SNAKE"])
        .apply(&listing())
        .unwrap();
    assert_eq!(ids, vec!["ENUM_PASCAL", "FIELD_NO_DELETE"]);
}

#[test]
fn test_except_category_applies_to_defaults() {
    let ids = RuleFilter::new().with_except(["WIRE"]).apply(&listing()).unwrap();
    assert_eq!(ids, vec!["FIELD_LOWER_SNAKE"]);
}

#[test]
fn test_unknown_ids_rejected() {
    let result = RuleFilter::new()
        .with_use(["STYLE", "NOPE_ONE"])
        .with_except(["NOPE_TWO"])
        .apply(&listing());
    match result {
        Err(Error::InvalidArgument { message }) => {
            assert!(message.contains("NOPE_ONE, NOPE_TWO"));
        }
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}
