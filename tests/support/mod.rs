use mbeaninfo_core::reflect::{
    Annotation, ClassHandle, LocalVariable, LocalVariableTable, MethodHandle, TypeRef,
};

pub const OWNER: &str = "com.example.Server";
pub const MANAGED: &str = "org.weakref.jmx.Managed";
pub const RESERVED_PREFIX: &str = "org.weakref.jmx.";

pub fn managed() -> Annotation {
    Annotation::new(MANAGED)
}

pub fn described(description: &str) -> Annotation {
    managed().with_description(description)
}

pub fn getter(name: &str, ty: TypeRef) -> MethodHandle {
    MethodHandle::new(OWNER, name, ty)
}

/// A `void` setter whose local variable table names its parameter `value`.
pub fn setter(name: &str, ty: TypeRef) -> MethodHandle {
    let descriptor = descriptor_of(&ty);
    MethodHandle::new(OWNER, name, TypeRef::void())
        .with_parameter(ty)
        .with_local_variables(LocalVariableTable::new(vec![
            LocalVariable::new(0, "this", "Lcom/example/Server;"),
            LocalVariable::new(1, "value", descriptor),
        ]))
}

fn descriptor_of(ty: &TypeRef) -> String {
    match ty.name() {
        "int" => "I".to_string(),
        "long" => "J".to_string(),
        "boolean" => "Z".to_string(),
        "double" => "D".to_string(),
        other => format!("L{};", other.replace('.', "/")),
    }
}

pub fn server() -> ClassHandle {
    ClassHandle::new(OWNER)
}
