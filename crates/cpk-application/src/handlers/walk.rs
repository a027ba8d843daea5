//! Descriptor walking
//!
//! Depth-first traversal over messages and fields of a file. Nested messages
//! are visited right after their parent; the first callback error stops the
//! walk.

use cpk_domain::error::Result;
use cpk_domain::{FieldDescriptor, FileDescriptor, Location, MessageDescriptor};

/// A message together with the file that declares it
#[derive(Debug, Clone, Copy)]
pub struct MessageRef<'a> {
    /// Declaring file
    pub file: &'a FileDescriptor,
    /// The message
    pub message: &'a MessageDescriptor,
}

impl MessageRef<'_> {
    /// Location of the message
    pub fn location(&self) -> Location {
        Location::element(&self.file.name, &self.message.full_name)
    }
}

/// A field together with its message and file
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    /// Declaring file
    pub file: &'a FileDescriptor,
    /// Declaring message
    pub message: &'a MessageDescriptor,
    /// The field
    pub field: &'a FieldDescriptor,
}

impl FieldRef<'_> {
    /// Fully qualified field name (`pkg.Message.field`)
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.message.full_name, self.field.name)
    }

    /// Location of the field
    pub fn location(&self) -> Location {
        Location::element(&self.file.name, self.full_name())
    }
}

/// Visit every message of `file`, nested ones included
pub fn walk_messages<'a, F>(file: &'a FileDescriptor, mut f: F) -> Result<()>
where
    F: FnMut(MessageRef<'a>) -> Result<()>,
{
    fn visit<'a, F>(
        file: &'a FileDescriptor,
        messages: &'a [MessageDescriptor],
        f: &mut F,
    ) -> Result<()>
    where
        F: FnMut(MessageRef<'a>) -> Result<()>,
    {
        for message in messages {
            f(MessageRef { file, message })?;
            visit(file, &message.nested_messages, f)?;
        }
        Ok(())
    }
    visit(file, &file.messages, &mut f)
}

/// Visit every field of every message of `file`
pub fn walk_fields<'a, F>(file: &'a FileDescriptor, mut f: F) -> Result<()>
where
    F: FnMut(FieldRef<'a>) -> Result<()>,
{
    walk_messages(file, |message_ref| {
        for field in &message_ref.message.fields {
            f(FieldRef {
                file: message_ref.file,
                message: message_ref.message,
                field,
            })?;
        }
        Ok(())
    })
}
