//! Management descriptor construction
//!
//! [`MBeanInfoBuilder::build_info`] runs four phases over one class:
//!
//! 1. **Collect**: ask the [`AnnotationFinder`] for exported methods.
//! 2. **Classify**: register an operation for every method and sort it into
//!    getter, setter or plain operation by its name.
//! 3. **Fold**: merge accessors sharing an attribute name into one attribute.
//! 4. **Materialize**: recover parameter names and build the immutable
//!    attribute and operation records.
//!
//! Getters and setters show up twice in the result: once as part of an
//! attribute and once as an operation of their own.

mod classify;
mod entry;
mod materialize;

use crate::finder::{AnnotatedMethods, AnnotationFinder, HierarchyAnnotationFinder};
use crate::paranamer::{LocalVariableTableParanamer, Paranamer};
use classify::{Classifier, ACCESSOR_PATTERN};
use mbeaninfo_core::config::{BuilderConfig, ConfigError};
use mbeaninfo_core::error::IntrospectionError;
use mbeaninfo_core::model::{AttributeInfo, ManagementDescriptor, OperationInfo};
use mbeaninfo_core::reflect::ClassHandle;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// Stateless builder turning an annotated class into a
/// [`ManagementDescriptor`].
///
/// # Example
///
/// ```
/// use mbeaninfo::MBeanInfoBuilder;
/// use mbeaninfo_core::reflect::{Annotation, ClassHandle, MethodHandle, TypeRef};
///
/// let class = ClassHandle::new("com.example.Server").with_annotated_method(
///     MethodHandle::new("com.example.Server", "getCount", TypeRef::int()),
///     Annotation::new("org.weakref.jmx.Managed").with_description("requests served"),
/// );
///
/// let info = MBeanInfoBuilder::new().build_info(&class).unwrap();
/// assert_eq!(info.attribute("Count").unwrap().description, "requests served");
/// assert_eq!(info.operations.len(), 1);
/// ```
pub struct MBeanInfoBuilder {
    finder: Arc<dyn AnnotationFinder>,
    paranamer: Arc<dyn Paranamer>,
    config: BuilderConfig,
    accessor_pattern: Regex,
}

impl MBeanInfoBuilder {
    pub fn new() -> Self {
        Self {
            finder: Arc::new(HierarchyAnnotationFinder::new()),
            paranamer: Arc::new(LocalVariableTableParanamer::new()),
            config: BuilderConfig::default(),
            accessor_pattern: Regex::new(ACCESSOR_PATTERN).expect("valid regex"),
        }
    }

    pub fn with_finder(mut self, finder: Arc<dyn AnnotationFinder>) -> Self {
        self.finder = finder;
        self
    }

    pub fn with_paranamer(mut self, paranamer: Arc<dyn Paranamer>) -> Self {
        self.paranamer = paranamer;
        self
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn build_info(
        &self,
        class: &ClassHandle,
    ) -> Result<ManagementDescriptor, IntrospectionError> {
        let methods = self.collect(class);

        let classification =
            Classifier::new(&self.accessor_pattern, &self.config).classify(class, methods)?;
        debug!(
            class = class.name(),
            attributes = classification.attributes.len(),
            operations = classification.operations.len(),
            "Classified exported methods"
        );

        let prefix = self.config.reserved_prefix.as_str();

        let attributes = classification
            .attributes
            .into_values()
            .map(|entry| materialize::attribute_info(entry, prefix))
            .collect::<Result<Vec<AttributeInfo>, _>>()?;

        let operations = classification
            .operations
            .into_iter()
            .map(|entry| materialize::operation_info(entry, self.paranamer.as_ref(), prefix))
            .collect::<Result<Vec<OperationInfo>, _>>()?;

        debug!(
            class = class.name(),
            attributes = attributes.len(),
            operations = operations.len(),
            "Built management descriptor"
        );

        Ok(ManagementDescriptor::new(
            class.name(),
            None,
            attributes,
            Vec::new(),
            operations,
            Vec::new(),
        ))
    }

    fn collect(&self, class: &ClassHandle) -> AnnotatedMethods {
        let methods = self.finder.find_annotated_methods(class);
        debug!(class = class.name(), exported = methods.len(), "Collected exported methods");
        methods
    }
}

impl Default for MBeanInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::MockAnnotationFinder;
    use crate::paranamer::MockParanamer;
    use mbeaninfo_core::config::DuplicatePolicy;
    use mbeaninfo_core::model::Role;
    use mbeaninfo_core::reflect::{Annotation, Marker, MethodHandle, TypeRef};
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts events carrying one exact message.
    struct MessageCounter {
        message: &'static str,
        seen: Arc<AtomicUsize>,
    }

    struct MessageVisitor(Option<String>);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for MessageCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(None);
            event.record(&mut visitor);
            if visitor.0.as_deref() == Some(self.message) {
                self.seen.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    const OWNER: &str = "com.example.Server";

    fn managed(description: &str) -> Arc<dyn Marker> {
        Arc::new(Annotation::new("org.weakref.jmx.Managed").with_description(description))
    }

    fn finder_returning(methods: Vec<(MethodHandle, Arc<dyn Marker>)>) -> MockAnnotationFinder {
        let mut finder = MockAnnotationFinder::new();
        finder
            .expect_find_annotated_methods()
            .times(1)
            .returning(move |_| methods.clone().into_iter().collect());
        finder
    }

    #[test]
    fn test_uses_injected_collaborators() {
        let method =
            MethodHandle::new(OWNER, "resize", TypeRef::void()).with_parameter(TypeRef::int());
        let finder = finder_returning(vec![(method, managed("resizes"))]);
        let mut paranamer = MockParanamer::new();
        paranamer
            .expect_lookup_parameter_names()
            .times(1)
            .returning(|_| Ok(vec!["size".to_string()]));

        let info = MBeanInfoBuilder::new()
            .with_finder(Arc::new(finder))
            .with_paranamer(Arc::new(paranamer))
            .build_info(&ClassHandle::new(OWNER))
            .unwrap();

        assert_eq!(info.class_name, OWNER);
        assert!(info.class_loader_name.is_none());
        assert!(info.constructors.is_empty());
        assert!(info.notifications.is_empty());
        assert_eq!(info.operations.len(), 1);
        assert_eq!(info.operations[0].signature[0].name, "size");
        assert_eq!(info.operations[0].signature[0].type_name, "int");
        assert_eq!(info.operations[0].description, "resizes");
    }

    #[test]
    fn test_finder_result_is_not_filtered() {
        let finder = finder_returning(vec![
            (
                MethodHandle::new("com.example.Base", "getUptime", TypeRef::long()),
                managed("uptime"),
            ),
            (
                MethodHandle::new(OWNER, "reset", TypeRef::void()).with_static(true),
                managed("resets"),
            ),
        ]);

        let info = MBeanInfoBuilder::new()
            .with_finder(Arc::new(finder))
            .build_info(&ClassHandle::new(OWNER))
            .unwrap();

        assert_eq!(info.operations.len(), 2);
        assert!(info
            .operations
            .iter()
            .all(|op| op.descriptor.field("class") == Some(OWNER)));
        assert_eq!(info.attribute("Uptime").map(|a| a.attribute_type.as_str()), Some("long"));
    }

    #[test]
    fn test_collection_is_logged_once() {
        let seen = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(MessageCounter {
            message: "Collected exported methods",
            seen: seen.clone(),
        });
        let class = ClassHandle::new(OWNER).with_annotated_method(
            MethodHandle::new(OWNER, "start", TypeRef::void()),
            Annotation::new("org.weakref.jmx.Managed"),
        );

        let info = tracing::subscriber::with_default(subscriber, || {
            MBeanInfoBuilder::new().build_info(&class)
        })
        .unwrap();

        assert_eq!(info.operations.len(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_class() {
        let info = MBeanInfoBuilder::new()
            .build_info(&ClassHandle::new(OWNER))
            .unwrap();

        assert!(info.attributes.is_empty());
        assert!(info.operations.is_empty());
    }

    #[test]
    fn test_with_config_validates() {
        let bad = BuilderConfig {
            reserved_prefix: String::new(),
            ..Default::default()
        };
        assert!(MBeanInfoBuilder::new().with_config(bad).is_err());

        let builder = MBeanInfoBuilder::new()
            .with_config(BuilderConfig::strict())
            .unwrap();
        assert_eq!(builder.config().duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_strict_config_rejects_duplicate_getters() {
        let finder = finder_returning(vec![
            (MethodHandle::new(OWNER, "getOk", TypeRef::boolean()), managed("")),
            (MethodHandle::new(OWNER, "isOk", TypeRef::boolean()), managed("")),
        ]);

        let result = MBeanInfoBuilder::new()
            .with_config(BuilderConfig::strict())
            .unwrap()
            .with_finder(Arc::new(finder))
            .build_info(&ClassHandle::new(OWNER));

        assert!(matches!(
            result,
            Err(IntrospectionError::DuplicateAccessor { .. })
        ));
    }

    #[test]
    fn test_accessor_operations_keep_roles() {
        let finder = finder_returning(vec![
            (MethodHandle::new(OWNER, "getLevel", TypeRef::int()), managed("level")),
            (
                MethodHandle::new(OWNER, "setLevel", TypeRef::void())
                    .with_parameter(TypeRef::int()),
                managed("level"),
            ),
        ]);
        let mut paranamer = MockParanamer::new();
        paranamer
            .expect_lookup_parameter_names()
            .returning(|m| Ok(vec!["value".to_string(); m.parameter_count()]));

        let info = MBeanInfoBuilder::new()
            .with_finder(Arc::new(finder))
            .with_paranamer(Arc::new(paranamer))
            .build_info(&ClassHandle::new(OWNER))
            .unwrap();

        let get_role = info.operations_named("getLevel").next().and_then(|op| op.role());
        let set_role = info.operations_named("setLevel").next().and_then(|op| op.role());
        assert_eq!(get_role, Some(Role::Getter));
        assert_eq!(set_role, Some(Role::Setter));

        let level = info.attribute("Level").unwrap();
        assert!(level.readable && level.writable);
        assert_eq!(level.descriptor.field("getMethod"), Some("getLevel"));
        assert_eq!(level.descriptor.field("setMethod"), Some("setLevel"));
    }
}
