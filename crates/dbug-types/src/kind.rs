use std::fmt;

/// Runtime kind of a [`crate::Value`], decided once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Composite,
    Structured,
    Resource,
    Null,
    Bool,
    Text,
    Int,
    Float,
}

impl ValueKind {
    /// Type name shown in dump titles and error notices.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Composite => "array",
            ValueKind::Structured => "object",
            ValueKind::Resource => "resource",
            ValueKind::Null => "NULL",
            ValueKind::Bool => "boolean",
            ValueKind::Text => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
        }
    }

    pub fn is_scalar(self) -> bool {
        !matches!(self, ValueKind::Composite | ValueKind::Structured)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
