//! `FIELD_NO_DELETE`

use super::CATEGORY_WIRE_SAFETY;
use cpk_application::handlers::{FilePairRuleHandler, walk_messages};
use cpk_domain::{Location, RuleSpec, RuleType};

/// Rule id
pub const RULE_ID: &str = "FIELD_NO_DELETE";

/// Flags field numbers that existed in the previous version of a message
/// but are gone now
///
/// Messages removed entirely are left to rules about message deletion.
pub fn rule() -> RuleSpec {
    RuleSpec::new(
        RULE_ID,
        "Checks that no message field is deleted.",
        RuleType::Breaking,
        FilePairRuleHandler::new(|ctx, writer, _, file, against| {
            walk_messages(against, |previous| {
                ctx.ensure_active()?;
                let Some(current) = file.find_message(&previous.message.full_name) else {
                    return Ok(());
                };
                for field in &previous.message.fields {
                    if current.field_by_number(field.number).is_none() {
                        writer.add_annotation(
                            format!(
                                "Previously present field \"{}\" with name {:?} on message {:?} was deleted.",
                                field.number, field.name, current.name
                            ),
                            Some(Location::element(&file.name, &current.full_name)),
                        );
                    }
                }
                Ok(())
            })
        }),
    )
    .with_categories([CATEGORY_WIRE_SAFETY])
    .with_default(true)
}
