use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Primitive,
    Class,
    Interface,
}

/// A reference to a type by qualified name.
///
/// `Display` renders the platform `toString` form (`int`, `class
/// java.lang.String`, `interface java.util.List`), while [`TypeRef::name`]
/// is the bare qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    name: String,
    kind: TypeKind,
}

impl TypeRef {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Primitive,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Interface,
        }
    }

    pub fn void() -> Self {
        Self::primitive("void")
    }

    pub fn boolean() -> Self {
        Self::primitive("boolean")
    }

    pub fn int() -> Self {
        Self::primitive("int")
    }

    pub fn long() -> Self {
        Self::primitive("long")
    }

    pub fn double() -> Self {
        Self::primitive("double")
    }

    pub fn string() -> Self {
        Self::class("java.lang.String")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Primitive && self.name == "void"
    }

    pub fn is_boolean(&self) -> bool {
        self.kind == TypeKind::Primitive && self.name == "boolean"
    }

    /// Local variable slots occupied by a value of this type.
    pub fn slot_width(&self) -> u16 {
        match (self.kind, self.name.as_str()) {
            (TypeKind::Primitive, "long") | (TypeKind::Primitive, "double") => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Primitive => write!(f, "{}", self.name),
            TypeKind::Class => write!(f, "class {}", self.name),
            TypeKind::Interface => write!(f, "interface {}", self.name),
        }
    }
}
