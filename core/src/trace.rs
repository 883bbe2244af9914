//! Insertion trace for debugging match-set ordering.
//!
//! [`MatchSet::add_entry_traced`](crate::MatchSet::add_entry_traced)
//! returns an [`InsertTrace`] describing the decision path of one
//! insertion: the derived key, every stored key it was compared
//! against, and where the entry landed. The plain
//! [`add_entry`](crate::MatchSet::add_entry) path records nothing.
//!
//! # Example
//!
//! ```ignore
//! let trace = set.add_entry_traced(entry);
//! println!("key={:?} index={} appended={}", trace.key, trace.index, trace.appended);
//! ```

/// Trace of a single `add_entry` call.
///
/// # INV: `index` is where the entry now lives
///
/// Immediately after the traced call, `set.matches()[trace.index]` is
/// the inserted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertTrace {
    /// The derived sort key, or `None` when the rule has no sort spec
    /// (arrival-order append).
    pub key: Option<String>,
    /// The position the entry was inserted at.
    pub index: usize,
    /// Whether the entry was appended at the end (no strictly-greater
    /// key was found, or the rule does not sort).
    pub appended: bool,
    /// Keys of the stored entries compared against, in scan order.
    /// Empty for arrival-order appends.
    pub compared: Vec<String>,
}
