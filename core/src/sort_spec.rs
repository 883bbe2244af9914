//! `SortSpec` — sort-key derivation for match ordering
//!
//! A `SortSpec` turns an entry into a comparable string key. It is the
//! ordering half of a rule: the rule decides *whether* its matches are
//! sorted (by exposing a spec or not), the spec decides *how* (by the
//! key it derives).

use std::fmt::Debug;

/// Derives a sort key string from an entry.
///
/// The key drives the stable insertion sort inside
/// [`MatchSet`](crate::MatchSet): entries are kept non-decreasing by
/// key, with arrival order preserved among equal keys.
///
/// # Type Parameters
///
/// - `E`: The entry type this spec operates on
///
/// # Determinism (contract)
///
/// The same entry must yield the same key for the lifetime of one
/// classification pass. The engine re-derives keys during each
/// insertion scan and never caches them; a spec that answers
/// differently across calls leaves the match set in an unspecified
/// order. This is a documented precondition, not a runtime check.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct ByName;
///
/// impl SortSpec<Method> for ByName {
///     fn sort_key(&self, entry: &Method) -> String {
///         entry.name.clone()
///     }
/// }
/// ```
pub trait SortSpec<E>: Send + Sync + Debug {
    /// Derive the sort key for the given entry.
    fn sort_key(&self, entry: &E) -> String;
}

// Blanket implementation for boxed specs
impl<E> SortSpec<E> for Box<dyn SortSpec<E>> {
    fn sort_key(&self, entry: &E) -> String {
        (**self).sort_key(entry)
    }
}
