//! `EmitSink` — the outbound boundary of the engine
//!
//! Once a match set is finalized, its entries are handed to a sink one
//! at a time, in stored order. The sink owns serialization and the
//! failure type; the engine only guarantees order and fail-fast abort.

/// Receives entries in their final order and produces output from them.
///
/// # Type Parameters
///
/// - `E`: The entry type being emitted
///
/// # Fail-fast
///
/// [`MatchSet::emit`](crate::MatchSet::emit) stops at the first error
/// and propagates it. A partially rewritten source file is worse than an
/// aborted rewrite, so there is no skip-and-continue mode.
pub trait EmitSink<E> {
    /// The sink's failure type.
    type Error;

    /// Emit one entry.
    ///
    /// # Errors
    ///
    /// Any error returned here aborts the emission of the remaining
    /// entries in the current match set.
    fn emit(&mut self, entry: &E) -> Result<(), Self::Error>;
}
