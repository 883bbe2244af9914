//! `Rule` — the owning rule seen through its ordering capabilities
//!
//! The engine never inspects what a rule *filters* — classification is
//! the caller's job. A rule is visible here only as a display label and
//! an optional [`SortSpec`]: present means "keep my matches sorted",
//! absent means "keep arrival order".

use crate::SortSpec;
use std::fmt::Debug;

/// A classification rule, seen from the ordering engine's side.
///
/// # Type Parameters
///
/// - `E`: The entry type this rule's matches hold
///
/// # Capability, not identity
///
/// Whether matches are sorted is decided by *presence* of a sort spec,
/// never by downcasting to a concrete rule kind. A rule that does not
/// override [`sort_spec`](Self::sort_spec) gets arrival-order matches.
pub trait Rule<E>: Send + Sync + Debug {
    /// The rule's display string, used to label its preview header.
    fn label(&self) -> String;

    /// The sort-key derivation for this rule's matches, if it sorts.
    ///
    /// Returns `None` by default: matches stay in arrival order.
    fn sort_spec(&self) -> Option<&dyn SortSpec<E>> {
        None
    }
}
