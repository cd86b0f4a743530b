//! Per-call table configuration.
//!
//! Nothing here is global: a [`TableConfig`] is built by the caller and
//! borrowed for the duration of one table build.

use std::any::{type_name, Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;

/// Record types whose fields are spliced into the parent instead of forming
/// one column.
///
/// Membership is by exact type identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSet {
    types: HashSet<TypeId>,
}

impl InlineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `T` to the set.
    pub fn with<T: ?Sized + 'static>(mut self) -> Self {
        self.insert(TypeId::of::<T>());
        self
    }

    pub fn insert(&mut self, type_id: TypeId) -> bool {
        self.types.insert(type_id)
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.types.contains(&type_id)
    }

    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains(TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

type Specializer = Arc<dyn Fn(&dyn Any) -> Result<String, BoxError> + Send + Sync>;

struct Specialization {
    type_id: TypeId,
    type_name: &'static str,
    format: Specializer,
}

/// Caller-registered formatters keyed by exact runtime type.
///
/// Entries are kept in registration order; when a type is registered more
/// than once the first entry wins.
#[derive(Clone, Default)]
pub struct Specializations {
    entries: Vec<Arc<Specialization>>,
}

impl Specializations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formatter for values of type `T`.
    pub fn register<T, F, E>(mut self, format: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let formatter: Specializer =
            Arc::new(move |value: &dyn Any| match value.downcast_ref::<T>() {
                Some(value) => format(value).map_err(Into::into),
                None => Err(format!("expected a value of type {}", type_name::<T>()).into()),
            });
        self.entries.push(Arc::new(Specialization {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            format: formatter,
        }));
        self
    }

    /// Format `value` with the first formatter registered for its type.
    ///
    /// `None` means no formatter is registered for the type.
    pub fn apply(&self, value: &dyn Any) -> Option<Result<String, BoxError>> {
        let type_id = (*value).type_id();
        self.entries
            .iter()
            .find(|entry| entry.type_id == type_id)
            .map(|entry| (entry.format)(value))
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.entries.iter().any(|entry| entry.type_id == type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Specializations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.type_name))
            .finish()
    }
}

/// Inline set and specialization registry for one table build.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    pub inline: InlineSet,
    pub specializations: Specializations,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline fields of record type `T`.
    pub fn inline<T: ?Sized + 'static>(mut self) -> Self {
        self.inline = self.inline.with::<T>();
        self
    }

    /// Format values of type `T` with `format`.
    pub fn specialize<T, F, E>(mut self, format: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.specializations = self.specializations.register::<T, F, E>(format);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Celsius(f64);

    #[test]
    fn test_inline_set_is_exact() {
        let set = InlineSet::new().with::<Celsius>();
        assert!(set.contains_type::<Celsius>());
        assert!(!set.contains_type::<f64>());
        assert!(!set.contains_type::<Box<Celsius>>());
    }

    #[test]
    fn test_apply_unregistered_type() {
        let registry = Specializations::new().register(|c: &Celsius| {
            Ok::<_, Infallible>(format!("{}C", c.0))
        });
        assert!(registry.apply(&1.5f64).is_none());
    }

    #[test]
    fn test_apply_registered_type() {
        let registry = Specializations::new().register(|c: &Celsius| {
            Ok::<_, Infallible>(format!("{}C", c.0))
        });
        let result = registry.apply(&Celsius(21.0)).unwrap();
        assert_eq!(result.unwrap(), "21C");
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = Specializations::new()
            .register(|_: &Celsius| Ok::<_, Infallible>("first".to_string()))
            .register(|_: &Celsius| Ok::<_, Infallible>("second".to_string()));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.apply(&Celsius(0.0)).unwrap().unwrap(), "first");
    }

    #[test]
    fn test_failure_is_reported() {
        let registry =
            Specializations::new().register(|_: &Celsius| Err::<String, _>("sensor offline"));
        let err = registry.apply(&Celsius(0.0)).unwrap().unwrap_err();
        assert_eq!(err.to_string(), "sensor offline");
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TableConfig>();

        let config = TableConfig::new()
            .inline::<Celsius>()
            .specialize(|c: &Celsius| Ok::<_, Infallible>(c.0.to_string()));
        let copy = config.clone();
        assert!(copy.inline.contains_type::<Celsius>());
        assert!(copy.specializations.contains(TypeId::of::<Celsius>()));
    }
}
