//! Placeholder sets and the process-wide registry
//!
//! A [`PlaceholderSet`] is an immutable, ordered snapshot of definitions with
//! their compiled token patterns. Removing a member yields a new set and leaves
//! the receiver untouched. The engine uses this to keep a
//! definition out of its own default-value expansion.
//!
//! [`PlaceholderRegistry`] is the mutable owner. Writers register and
//! unregister definitions; the engine only ever receives a snapshot.

use std::sync::Arc;

use parking_lot::RwLock;
use shellvars_domain::{PlaceholderName, validate_parameters};
use tracing::debug;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::PlaceholderDefinition;
use crate::substitution::TokenPattern;

/// A definition paired with its compiled token pattern.
#[derive(Clone)]
pub struct PlaceholderEntry {
    definition: Arc<dyn PlaceholderDefinition>,
    pattern: TokenPattern,
}

impl PlaceholderEntry {
    /// Validates `definition` and compiles its pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter list repeats a name or the pattern
    /// cannot be compiled.
    pub fn new(definition: Arc<dyn PlaceholderDefinition>) -> ApplicationResult<Self> {
        validate_parameters(definition.name().as_str(), definition.parameters())?;
        let pattern = TokenPattern::compile(definition.as_ref())?;
        Ok(Self {
            definition,
            pattern,
        })
    }

    /// Returns the definition.
    #[must_use]
    pub fn definition(&self) -> &Arc<dyn PlaceholderDefinition> {
        &self.definition
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub const fn pattern(&self) -> &TokenPattern {
        &self.pattern
    }

    /// Returns the definition's name.
    #[must_use]
    pub fn name(&self) -> &PlaceholderName {
        self.definition.name()
    }
}

impl std::fmt::Debug for PlaceholderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderEntry")
            .field("name", self.name())
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// An ordered collection of placeholder definitions with unique names.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderSet {
    entries: Vec<PlaceholderEntry>,
}

impl PlaceholderSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from definitions, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails on the first definition that cannot be inserted.
    pub fn from_definitions<I>(definitions: I) -> ApplicationResult<Self>
    where
        I: IntoIterator<Item = Arc<dyn PlaceholderDefinition>>,
    {
        let mut set = Self::new();
        for definition in definitions {
            set.insert(definition)?;
        }
        Ok(set)
    }

    /// Appends a definition.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DuplicatePlaceholder`] if a definition with
    /// the same name (ignoring case) is already present, or any error from
    /// [`PlaceholderEntry::new`].
    pub fn insert(&mut self, definition: Arc<dyn PlaceholderDefinition>) -> ApplicationResult<()> {
        if self.contains(definition.name()) {
            return Err(ApplicationError::DuplicatePlaceholder(
                definition.name().to_string(),
            ));
        }
        self.entries.push(PlaceholderEntry::new(definition)?);
        Ok(())
    }

    /// Returns a copy of this set without `name`. The receiver is unchanged.
    #[must_use]
    pub fn without(&self, name: &PlaceholderName) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.name() != name)
                .cloned()
                .collect(),
        }
    }

    /// Removes and returns the definition called `name`.
    pub fn remove(&mut self, name: &PlaceholderName) -> Option<Arc<dyn PlaceholderDefinition>> {
        let index = self.entries.iter().position(|entry| entry.name() == name)?;
        Some(self.entries.remove(index).definition)
    }

    /// Looks up a definition by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn PlaceholderDefinition>> {
        self.entries
            .iter()
            .find(|entry| entry.name().matches(name))
            .map(PlaceholderEntry::definition)
    }

    /// Returns true if a definition called `name` is present.
    #[must_use]
    pub fn contains(&self, name: &PlaceholderName) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in set order.
    pub fn entries(&self) -> impl Iterator<Item = &PlaceholderEntry> {
        self.entries.iter()
    }

    /// Iterates over definitions in set order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PlaceholderDefinition>> {
        self.entries.iter().map(PlaceholderEntry::definition)
    }
}

/// Process-wide, mutable collection of placeholder definitions.
///
/// Readers take a [`PlaceholderSet`] snapshot and are unaffected by later writes.
#[derive(Debug, Default)]
pub struct PlaceholderRegistry {
    set: RwLock<PlaceholderSet>,
}

impl PlaceholderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with `set`.
    #[must_use]
    pub fn with_set(set: PlaceholderSet) -> Self {
        Self {
            set: RwLock::new(set),
        }
    }

    /// Adds a definition.
    ///
    /// # Errors
    ///
    /// See [`PlaceholderSet::insert`].
    pub fn register(&self, definition: Arc<dyn PlaceholderDefinition>) -> ApplicationResult<()> {
        let name = definition.name().to_string();
        self.set.write().insert(definition)?;
        debug!(placeholder = %name, "Registered placeholder");
        Ok(())
    }

    /// Removes a definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if no such definition is registered.
    pub fn unregister(&self, name: &PlaceholderName) -> ApplicationResult<Arc<dyn PlaceholderDefinition>> {
        let removed = self
            .set
            .write()
            .remove(name)
            .ok_or_else(|| ApplicationError::NotFound(name.to_string()))?;
        debug!(placeholder = %name, "Unregistered placeholder");
        Ok(removed)
    }

    /// Returns the current contents.
    #[must_use]
    pub fn snapshot(&self) -> PlaceholderSet {
        self.set.read().clone()
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::substitution::fixtures::StaticDefinition;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> Arc<dyn PlaceholderDefinition> {
        Arc::new(StaticDefinition::resolving(name, "v"))
    }

    #[test]
    fn test_duplicate_names_rejected_ignoring_case() {
        let mut set = PlaceholderSet::new();
        set.insert(named("title")).unwrap();
        let err = set.insert(named("TITLE")).unwrap_err();
        assert!(matches!(err, ApplicationError::DuplicatePlaceholder(_)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_without_leaves_original_untouched() {
        let set = PlaceholderSet::from_definitions([named("a"), named("b"), named("c")]).unwrap();
        let reduced = set.without(&PlaceholderName::new("B").unwrap());

        assert_eq!(set.len(), 3);
        assert_eq!(reduced.len(), 2);
        assert!(reduced.get("b").is_none());
        let order: Vec<_> = reduced.iter().map(|d| d.name().to_string()).collect();
        assert_eq!(order, vec!["a", "c"]);
    }

    #[test]
    fn test_duplicate_parameters_rejected() {
        let definition = StaticDefinition::resolving("x", "v").with_parameters(vec![
            shellvars_domain::ParameterSpec::optional("p").unwrap(),
            shellvars_domain::ParameterSpec::optional("p").unwrap(),
        ]);
        let err = PlaceholderSet::from_definitions([Arc::new(definition) as Arc<dyn PlaceholderDefinition>])
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn test_registry_snapshot_is_isolated() {
        let registry = PlaceholderRegistry::new();
        registry.register(named("a")).unwrap();
        let snapshot = registry.snapshot();

        registry.register(named("b")).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.len(), 2);

        registry.unregister(&PlaceholderName::new("a").unwrap()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_unregister_unknown() {
        let registry = PlaceholderRegistry::new();
        let err = registry
            .unregister(&PlaceholderName::new("missing").unwrap())
            .err()
            .unwrap();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }
}
