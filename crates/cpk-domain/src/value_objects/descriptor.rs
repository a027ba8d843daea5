//! Descriptor tree value objects
//!
//! A read-only, already-parsed view of schema files. The engine never builds
//! or mutates these; it hands them to rule handlers, which navigate them at
//! whatever granularity they need.

use serde::{Deserialize, Serialize};

/// Field cardinality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    /// Singular field
    #[default]
    Optional,
    /// Proto2 required field
    Required,
    /// Repeated field
    Repeated,
}

/// A single message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: String,
    /// Field number
    pub number: i32,
    /// Cardinality
    #[serde(default)]
    pub label: FieldLabel,
    /// Full name of the message or enum type, absent for scalars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl FieldDescriptor {
    /// Create a scalar field
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
            label: FieldLabel::Optional,
            type_name: None,
        }
    }

    /// Set the message or enum type of the field
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the field label
    pub fn with_label(mut self, label: FieldLabel) -> Self {
        self.label = label;
        self
    }
}

/// A message definition, possibly with nested messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Short name
    pub name: String,
    /// Fully qualified name (`pkg.Outer.Inner`)
    pub full_name: String,
    /// Declared fields
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Messages declared inside this one
    #[serde(default)]
    pub nested_messages: Vec<MessageDescriptor>,
}

impl MessageDescriptor {
    /// Create an empty message
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            fields: Vec::new(),
            nested_messages: Vec::new(),
        }
    }

    /// Add a field
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a nested message
    pub fn with_nested(mut self, message: MessageDescriptor) -> Self {
        self.nested_messages.push(message);
        self
    }

    /// Find a field by number
    pub fn field_by_number(&self, number: i32) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.number == number)
    }
}

/// An enum definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Short name
    pub name: String,
    /// Fully qualified name
    pub full_name: String,
    /// Value names in declaration order
    #[serde(default)]
    pub values: Vec<String>,
}

/// A schema file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Path of the file relative to its root (`acme/v1/user.proto`)
    pub name: String,
    /// Package name, empty when none is declared
    #[serde(default)]
    pub package: String,
    /// Declared syntax (`proto2`, `proto3`, `editions`); `None` when unspecified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    /// Paths of imported files
    #[serde(default)]
    pub imports: Vec<String>,
    /// Top-level messages
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,
    /// Top-level enums
    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
    /// Present only to resolve imports, not a target of checks
    #[serde(default)]
    pub is_import: bool,
}

impl FileDescriptor {
    /// Create an empty file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Set the declared syntax
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    /// Add a top-level message
    pub fn with_message(mut self, message: MessageDescriptor) -> Self {
        self.messages.push(message);
        self
    }

    /// Mark the file as an import-only dependency
    pub fn as_import(mut self) -> Self {
        self.is_import = true;
        self
    }

    /// Whether no syntax was declared
    pub fn is_syntax_unspecified(&self) -> bool {
        self.syntax.as_deref().is_none_or(str::is_empty)
    }

    /// Find a message anywhere in the file by full name
    pub fn find_message(&self, full_name: &str) -> Option<&MessageDescriptor> {
        fn search<'a>(
            messages: &'a [MessageDescriptor],
            full_name: &str,
        ) -> Option<&'a MessageDescriptor> {
            messages.iter().find_map(|m| {
                if m.full_name == full_name {
                    Some(m)
                } else {
                    search(&m.nested_messages, full_name)
                }
            })
        }
        search(&self.messages, full_name)
    }
}

/// The set of files a request covers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorSet {
    files: Vec<FileDescriptor>,
}

impl DescriptorSet {
    /// Create a set from files
    pub fn new(files: Vec<FileDescriptor>) -> Self {
        Self { files }
    }

    /// All files, imports included
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    /// Files that are targets of checks
    pub fn target_files(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.files.iter().filter(|f| !f.is_import)
    }

    /// Look up a file by name
    pub fn file(&self, name: &str) -> Option<&FileDescriptor> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the set has no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl From<Vec<FileDescriptor>> for DescriptorSet {
    fn from(files: Vec<FileDescriptor>) -> Self {
        Self::new(files)
    }
}
