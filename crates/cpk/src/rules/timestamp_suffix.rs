//! `TIMESTAMP_SUFFIX`
//!
//! The suffix can be changed per request with the `timestamp_suffix` option.

use super::CATEGORY_STYLE_BASIC;
use cpk_application::handlers::FieldRuleHandler;
use cpk_domain::{CheckRequest, Error, Result, RuleSpec, RuleType};

/// Rule id
pub const RULE_ID: &str = "TIMESTAMP_SUFFIX";

/// Request option overriding the required suffix
pub const SUFFIX_OPTION: &str = "timestamp_suffix";

/// Suffix required when the option is absent
pub const DEFAULT_SUFFIX: &str = "_time";

const TIMESTAMP_FULL_NAME: &str = "google.protobuf.Timestamp";

/// Flags timestamp fields whose name lacks the suffix
pub fn rule() -> RuleSpec {
    RuleSpec::new(
        RULE_ID,
        "Checks that all google.protobuf.Timestamps end in _time.",
        RuleType::Lint,
        FieldRuleHandler::new(|_, writer, request, field| {
            let is_timestamp = field
                .field
                .type_name
                .as_deref()
                .is_some_and(|name| name.trim_start_matches('.') == TIMESTAMP_FULL_NAME);
            if !is_timestamp {
                return Ok(());
            }
            let suffix = required_suffix(request)?;
            if !field.field.name.ends_with(suffix) {
                writer.add_annotation(
                    format!(
                        "Fields of type {TIMESTAMP_FULL_NAME} must end in {suffix} but field name was {:?}.",
                        field.field.name
                    ),
                    Some(field.location()),
                );
            }
            Ok(())
        }),
    )
    .with_categories([CATEGORY_STYLE_BASIC])
    .with_default(true)
}

fn required_suffix(request: &CheckRequest) -> Result<&str> {
    match request.option(SUFFIX_OPTION) {
        None => Ok(DEFAULT_SUFFIX),
        Some(value) => value.as_str().filter(|s| !s.is_empty()).ok_or_else(|| {
            Error::handler(format!(
                "option {SUFFIX_OPTION} must be a non-empty string, got {value}"
            ))
        }),
    }
}
