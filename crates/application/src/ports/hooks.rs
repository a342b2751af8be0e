//! Augmentation hooks port

use shellvars_domain::ValueOutcome;

use super::placeholder::PlaceholderDefinition;

/// Caller-supplied callbacks invoked once per resolved occurrence.
///
/// Both default to pass-through. They let a caller log, preview or reshape
/// output without touching the engine's algorithm.
pub trait AugmentationHooks: Send + Sync {
    /// Inspects or replaces the outcome before it is checked and escaped.
    fn before_escape(&self, definition: &dyn PlaceholderDefinition, outcome: &mut ValueOutcome) {
        let _ = (definition, outcome);
    }

    /// Transforms the escaped text right before it is inserted.
    fn after_escape(
        &self,
        definition: &dyn PlaceholderDefinition,
        escaped_value: String,
        raw_value: &str,
    ) -> String {
        let _ = (definition, raw_value);
        escaped_value
    }
}

/// Hooks that change nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl AugmentationHooks for NoHooks {}
