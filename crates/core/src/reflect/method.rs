use super::TypeRef;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One row of a method's local variable table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
    pub slot: u16,
    pub name: String,
    pub descriptor: String,
    pub start_pc: u16,
    pub length: u16,
}

impl LocalVariable {
    pub fn new(slot: u16, name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            descriptor: descriptor.into(),
            start_pc: 0,
            length: 0,
        }
    }

    pub fn with_range(mut self, start_pc: u16, length: u16) -> Self {
        self.start_pc = start_pc;
        self.length = length;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalVariableTable {
    entries: Vec<LocalVariable>,
}

impl LocalVariableTable {
    pub fn new(entries: Vec<LocalVariable>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LocalVariable] {
        &self.entries
    }

    /// Finds the variable stored in `slot` on method entry.
    ///
    /// A slot can be reused by later locals, so the entry whose range starts
    /// at pc 0 is preferred. Tables written by some compilers omit ranges, in
    /// which case any entry for the slot is accepted.
    pub fn lookup(&self, slot: u16) -> Option<&LocalVariable> {
        self.entries
            .iter()
            .find(|v| v.slot == slot && v.start_pc == 0)
            .or_else(|| self.entries.iter().find(|v| v.slot == slot))
    }
}

impl FromIterator<LocalVariable> for LocalVariableTable {
    fn from_iter<I: IntoIterator<Item = LocalVariable>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Name and parameter types; two methods with equal signatures override
/// one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    pub name: String,
    pub parameter_types: Vec<TypeRef>,
}

#[derive(Debug, Clone)]
struct MethodMeta {
    owner: String,
    name: String,
    parameter_types: Vec<TypeRef>,
    return_type: TypeRef,
    is_static: bool,
    parameter_names: Option<Vec<String>>,
    local_variables: Option<LocalVariableTable>,
}

/// Shared handle to a method's compiled metadata.
///
/// Equality and hashing consider the owning class, name, parameter types and
/// return type. Debug records are not part of a method's identity.
#[derive(Debug, Clone)]
pub struct MethodHandle {
    inner: Arc<MethodMeta>,
}

impl MethodHandle {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            inner: Arc::new(MethodMeta {
                owner: owner.into(),
                name: name.into(),
                parameter_types: Vec::new(),
                return_type,
                is_static: false,
                parameter_names: None,
                local_variables: None,
            }),
        }
    }

    pub fn with_parameter(mut self, ty: TypeRef) -> Self {
        Arc::make_mut(&mut self.inner).parameter_types.push(ty);
        self
    }

    pub fn with_parameters(mut self, types: Vec<TypeRef>) -> Self {
        Arc::make_mut(&mut self.inner).parameter_types = types;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        Arc::make_mut(&mut self.inner).is_static = is_static;
        self
    }

    /// Attaches a declared parameter-name record, as emitted by compilers
    /// asked to retain parameter names.
    pub fn with_parameter_names<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        Arc::make_mut(&mut self.inner).parameter_names =
            Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_local_variables(mut self, table: LocalVariableTable) -> Self {
        Arc::make_mut(&mut self.inner).local_variables = Some(table);
        self
    }

    pub fn owner(&self) -> &str {
        &self.inner.owner
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn parameter_types(&self) -> &[TypeRef] {
        &self.inner.parameter_types
    }

    pub fn parameter_count(&self) -> usize {
        self.inner.parameter_types.len()
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.inner.return_type
    }

    pub fn is_static(&self) -> bool {
        self.inner.is_static
    }

    pub fn parameter_names(&self) -> Option<&[String]> {
        self.inner.parameter_names.as_deref()
    }

    pub fn local_variables(&self) -> Option<&LocalVariableTable> {
        self.inner.local_variables.as_ref()
    }

    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.inner.name.clone(),
            parameter_types: self.inner.parameter_types.clone(),
        }
    }
}

impl PartialEq for MethodHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.owner == other.inner.owner
                && self.inner.name == other.inner.name
                && self.inner.parameter_types == other.inner.parameter_types
                && self.inner.return_type == other.inner.return_type)
    }
}

impl Eq for MethodHandle {}

impl Hash for MethodHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.owner.hash(state);
        self.inner.name.hash(state);
        self.inner.parameter_types.hash(state);
        self.inner.return_type.hash(state);
    }
}

impl fmt::Display for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.inner.parameter_types.iter().map(TypeRef::name).collect();
        write!(f, "{}.{}({})", self.inner.owner, self.inner.name, params.join(","))
    }
}
