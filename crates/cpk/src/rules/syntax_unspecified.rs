//! `SYNTAX_UNSPECIFIED`

use super::CATEGORY_STYLE_BASIC;
use cpk_application::handlers::FileRuleHandler;
use cpk_domain::{Location, RuleSpec, RuleType};

/// Rule id
pub const RULE_ID: &str = "SYNTAX_UNSPECIFIED";

/// Flags every file that declares a syntax
pub fn rule() -> RuleSpec {
    RuleSpec::new(
        RULE_ID,
        "Checks that syntax is never specified.",
        RuleType::Lint,
        FileRuleHandler::new(|_, writer, _, file| {
            if let Some(syntax) = file.syntax.as_deref().filter(|s| !s.is_empty()) {
                writer.add_annotation(
                    format!("Syntax should not be specified but was {syntax:?}."),
                    Some(Location::file(&file.name)),
                );
            }
            Ok(())
        }),
    )
    .with_categories([CATEGORY_STYLE_BASIC])
}
