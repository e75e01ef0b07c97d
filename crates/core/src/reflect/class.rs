use super::{Marker, MethodHandle};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

/// A method as declared by one class, with the markers attached to that
/// declaration.
#[derive(Debug, Clone)]
pub struct DeclaredMethod {
    pub method: MethodHandle,
    pub markers: Vec<Arc<dyn Marker>>,
}

impl DeclaredMethod {
    pub fn new(method: MethodHandle) -> Self {
        Self {
            method,
            markers: Vec::new(),
        }
    }

    pub fn with_marker<M: Marker + 'static>(mut self, marker: M) -> Self {
        self.markers.push(Arc::new(marker));
        self
    }
}

#[derive(Debug, Clone)]
struct ClassMeta {
    name: String,
    kind: ClassKind,
    superclass: Option<ClassHandle>,
    interfaces: Vec<ClassHandle>,
    methods: Vec<DeclaredMethod>,
}

/// Shared handle to a class or interface and the methods it declares.
#[derive(Debug, Clone)]
pub struct ClassHandle {
    inner: Arc<ClassMeta>,
}

impl ClassHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, ClassKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(name, ClassKind::Interface)
    }

    fn with_kind(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            inner: Arc::new(ClassMeta {
                name: name.into(),
                kind,
                superclass: None,
                interfaces: Vec::new(),
                methods: Vec::new(),
            }),
        }
    }

    pub fn with_superclass(mut self, superclass: ClassHandle) -> Self {
        Arc::make_mut(&mut self.inner).superclass = Some(superclass);
        self
    }

    pub fn with_interface(mut self, interface: ClassHandle) -> Self {
        Arc::make_mut(&mut self.inner).interfaces.push(interface);
        self
    }

    pub fn with_declared(mut self, declared: DeclaredMethod) -> Self {
        Arc::make_mut(&mut self.inner).methods.push(declared);
        self
    }

    pub fn with_method(self, method: MethodHandle) -> Self {
        self.with_declared(DeclaredMethod::new(method))
    }

    pub fn with_annotated_method<M: Marker + 'static>(
        self,
        method: MethodHandle,
        marker: M,
    ) -> Self {
        self.with_declared(DeclaredMethod::new(method).with_marker(marker))
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn kind(&self) -> ClassKind {
        self.inner.kind
    }

    pub fn is_interface(&self) -> bool {
        self.inner.kind == ClassKind::Interface
    }

    pub fn superclass(&self) -> Option<&ClassHandle> {
        self.inner.superclass.as_ref()
    }

    pub fn interfaces(&self) -> &[ClassHandle] {
        &self.inner.interfaces
    }

    pub fn declared_methods(&self) -> &[DeclaredMethod] {
        &self.inner.methods
    }
}
