//! Demo plugin rule tests

use cpk::application::{CheckService, RuleFilter, SpecRegistry, list_rules};
use cpk::rules::{demo_spec, field_no_delete, syntax_unspecified, timestamp_suffix};
use cpk::{
    CheckContext, CheckRequest, CheckResponse, FieldDescriptor, FileDescriptor,
    MessageDescriptor, RuleType,
};
use serde_json::json;
use std::sync::Arc;

fn service() -> CheckService {
    CheckService::new(Arc::new(SpecRegistry::new(demo_spec()).unwrap()))
}

async fn check(request: CheckRequest) -> CheckResponse {
    service().check(CheckContext::new(), request).await.unwrap()
}

fn event_file(created_field: &str) -> FileDescriptor {
    FileDescriptor::new("acme/v1/event.proto")
        .with_package("acme.v1")
        .with_syntax("proto3")
        .with_message(
            MessageDescriptor::new("Event", "acme.v1.Event")
                .with_field(FieldDescriptor::new("id", 1))
                .with_field(
                    FieldDescriptor::new(created_field, 2)
                        .with_type_name(".google.protobuf.Timestamp"),
                ),
        )
}

#[test]
fn test_demo_spec_is_valid() {
    let registry = SpecRegistry::new(demo_spec()).unwrap();
    let listing = list_rules(&registry);
    let ids: Vec<&str> = listing.rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            field_no_delete::RULE_ID,
            syntax_unspecified::RULE_ID,
            timestamp_suffix::RULE_ID
        ]
    );
    assert_eq!(listing.rules[0].rule_type, RuleType::Breaking);
    assert!(!listing.rules[1].is_default);
}

#[test]
fn test_filter_by_category() {
    let registry = SpecRegistry::new(demo_spec()).unwrap();
    let ids = RuleFilter::new()
        .with_use(["STYLE_BASIC"])
        .apply(&list_rules(&registry))
        .unwrap();
    assert_eq!(ids, vec!["SYNTAX_UNSPECIFIED", "TIMESTAMP_SUFFIX"]);
}

#[tokio::test]
async fn test_timestamp_suffix_flags_field() {
    let response = check(CheckRequest::new(vec![event_file("created")])).await;
    assert_eq!(response.annotations.len(), 1);
    let annotation = &response.annotations[0];
    assert_eq!(annotation.rule_id, timestamp_suffix::RULE_ID);
    assert!(annotation.message.contains("\"created\""));
    let location = annotation.location.as_ref().unwrap();
    assert_eq!(location.element.as_deref(), Some("acme.v1.Event.created"));
}

#[tokio::test]
async fn test_timestamp_suffix_accepts_suffix() {
    let response = check(CheckRequest::new(vec![event_file("create_time")])).await;
    assert!(response.annotations.is_empty());
}

#[tokio::test]
async fn test_timestamp_suffix_option() {
    let request = CheckRequest::new(vec![event_file("created_at")])
        .with_option(timestamp_suffix::SUFFIX_OPTION, json!("_at"));
    assert!(check(request).await.annotations.is_empty());
}

#[tokio::test]
async fn test_timestamp_suffix_bad_option_is_rule_failure() {
    let request = CheckRequest::new(vec![event_file("created")])
        .with_option(timestamp_suffix::SUFFIX_OPTION, json!(5));
    let response = check(request).await;
    assert_eq!(response.execution_failures.len(), 1);
    assert_eq!(
        response.execution_failures[0].rule_id,
        timestamp_suffix::RULE_ID
    );
}

#[tokio::test]
async fn test_syntax_unspecified_opt_in() {
    let request = CheckRequest::new(vec![
        event_file("create_time"),
        FileDescriptor::new("legacy.proto"),
    ])
    .with_rule_ids([syntax_unspecified::RULE_ID]);
    let response = check(request).await;
    assert_eq!(response.annotations.len(), 1);
    assert_eq!(
        response.annotations[0].message,
        "Syntax should not be specified but was \"proto3\"."
    );
}

#[tokio::test]
async fn test_field_no_delete() {
    let previous = event_file("create_time");
    let current = FileDescriptor::new("acme/v1/event.proto").with_message(
        MessageDescriptor::new("Event", "acme.v1.Event").with_field(FieldDescriptor::new("id", 1)),
    );
    let request = CheckRequest::new(vec![current])
        .with_against_files(vec![previous])
        .with_rule_ids([field_no_delete::RULE_ID]);

    let response = check(request).await;
    assert_eq!(response.annotations.len(), 1);
    assert!(response.annotations[0].message.contains("\"2\""));
    assert!(response.annotations[0].message.contains("create_time"));
}

#[tokio::test]
async fn test_field_no_delete_without_against_files() {
    let request = CheckRequest::new(vec![event_file("create_time")])
        .with_rule_ids([field_no_delete::RULE_ID]);
    let response = check(request).await;
    assert!(response.annotations.is_empty());
    assert!(response.is_complete());
}
