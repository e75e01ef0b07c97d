use super::{AnnotatedMethods, AnnotationFinder};
use mbeaninfo_core::reflect::{ClassHandle, Marker, MethodHandle, MethodSignature};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::trace;

pub const MANAGED_ANNOTATION: &str = "org.weakref.jmx.Managed";

/// Finds exported methods on a class and everything it inherits from.
///
/// The class is visited first, then its superclass chain, then every
/// implemented interface depth first. For each method signature the first
/// declaration seen is the one that gets exported, and the marker comes from
/// the first declaration carrying an accepted marker type. A marker on an
/// overridden superclass or interface method therefore exports the override.
pub struct HierarchyAnnotationFinder {
    marker_types: HashSet<String>,
}

impl HierarchyAnnotationFinder {
    pub fn new() -> Self {
        Self {
            marker_types: HashSet::from([MANAGED_ANNOTATION.to_string()]),
        }
    }

    /// Accepts nothing until marker types are added.
    pub fn empty() -> Self {
        Self {
            marker_types: HashSet::new(),
        }
    }

    pub fn with_marker_type(mut self, marker_type: impl Into<String>) -> Self {
        self.marker_types.insert(marker_type.into());
        self
    }

    fn accepted_marker(&self, markers: &[Arc<dyn Marker>]) -> Option<Arc<dyn Marker>> {
        markers
            .iter()
            .find(|m| self.marker_types.contains(m.annotation_type()))
            .cloned()
    }
}

impl Default for HierarchyAnnotationFinder {
    fn default() -> Self {
        Self::new()
    }
}

fn lineage(class: &ClassHandle) -> Vec<ClassHandle> {
    let mut order = Vec::new();
    let mut seen = HashSet::new();

    let mut current = Some(class);
    while let Some(c) = current {
        if seen.insert(c.name().to_string()) {
            order.push(c.clone());
        }
        current = c.superclass();
    }

    let classes = order.clone();
    for c in &classes {
        push_interfaces(c, &mut order, &mut seen);
    }

    order
}

fn push_interfaces(class: &ClassHandle, order: &mut Vec<ClassHandle>, seen: &mut HashSet<String>) {
    for interface in class.interfaces() {
        if seen.insert(interface.name().to_string()) {
            order.push(interface.clone());
            push_interfaces(interface, order, seen);
        }
    }
}

impl AnnotationFinder for HierarchyAnnotationFinder {
    fn find_annotated_methods(&self, class: &ClassHandle) -> AnnotatedMethods {
        let mut declarations: HashMap<MethodSignature, MethodHandle> = HashMap::new();
        let mut markers: HashMap<MethodSignature, Arc<dyn Marker>> = HashMap::new();

        for c in lineage(class) {
            for declared in c.declared_methods() {
                if declared.method.is_static() {
                    continue;
                }

                let signature = declared.method.signature();
                declarations
                    .entry(signature.clone())
                    .or_insert_with(|| declared.method.clone());

                if markers.contains_key(&signature) {
                    continue;
                }
                if let Some(marker) = self.accepted_marker(&declared.markers) {
                    trace!(
                        method = %declared.method,
                        marker = marker.annotation_type(),
                        "Found exported declaration"
                    );
                    markers.insert(signature, marker);
                }
            }
        }

        markers
            .into_iter()
            .filter_map(|(signature, marker)| {
                declarations
                    .remove(&signature)
                    .map(|method| (method, marker))
            })
            .collect()
    }
}
