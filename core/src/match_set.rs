//! `MatchSet` — per-rule ordered match container
//!
//! A `MatchSet` accumulates the entries an external classifier assigned
//! to one rule, keeping them ordered as it goes. When the owning rule
//! exposes a [`SortSpec`], every insertion runs a stable insertion sort
//! on the derived string key; otherwise entries keep arrival order.

use crate::{EmitSink, InsertTrace, Rule, SortSpec};
use std::fmt;

/// Ordered container of one rule's matched entries.
///
/// Created once per rule per classification pass, populated through
/// repeated [`add_entry`](Self::add_entry) calls, then read out via
/// [`matches`](Self::matches), [`emit`](Self::emit), or the preview
/// builder. A set is not reused across passes; the next pass builds a
/// fresh one.
///
/// # Type Parameters
///
/// - `E`: The entry type. Entries are owned by the classifier; a set
///   instantiated with `E = &Entity` holds only borrows.
///
/// # INV: order
///
/// With a sort spec, `matches` is non-decreasing by sort key and
/// entries with equal keys keep their arrival order (stable). Without
/// one, `matches` is exactly arrival order.
///
/// # Example
///
/// ```ignore
/// let mut set = MatchSet::new(&rule);
/// set.add_entry(method_b);
/// set.add_entry(method_a);
/// assert_eq!(set.len(), 2);
/// set.emit(&mut sink)?;
/// ```
pub struct MatchSet<'r, E> {
    /// The owning rule. Set at construction, immutable thereafter.
    rule: &'r dyn Rule<E>,

    /// The ordered matches.
    matches: Vec<E>,
}

impl<'r, E> MatchSet<'r, E> {
    /// Create an empty match set for the given rule.
    #[must_use]
    pub fn new(rule: &'r dyn Rule<E>) -> Self {
        Self {
            rule,
            matches: Vec::new(),
        }
    }

    /// The rule this set belongs to.
    #[must_use]
    pub fn rule(&self) -> &'r dyn Rule<E> {
        self.rule
    }

    /// Add one classified entry, in correct order.
    ///
    /// If the rule exposes a sort spec, the entry is inserted before
    /// the first stored entry whose key is strictly greater than its
    /// own; ties therefore land after all existing equal keys,
    /// preserving arrival order among them. With no strictly-greater
    /// entry, or with no sort spec at all, the entry is appended.
    ///
    /// Duplicates are stored as distinct elements; nothing is ever
    /// dropped or deduplicated.
    pub fn add_entry(&mut self, entry: E) {
        match self.rule.sort_spec() {
            Some(spec) => self.insert_sorted(entry, spec),
            None => self.matches.push(entry),
        }
    }

    /// Add one entry and report the insertion decision path.
    ///
    /// Same ordering semantics as [`add_entry`](Self::add_entry), plus
    /// an [`InsertTrace`] recording the derived key, every key compared
    /// during the scan, and the final position. Use the untraced call
    /// in hot paths; the trace allocates.
    pub fn add_entry_traced(&mut self, entry: E) -> InsertTrace {
        let Some(spec) = self.rule.sort_spec() else {
            self.matches.push(entry);
            return InsertTrace {
                key: None,
                index: self.matches.len() - 1,
                appended: true,
                compared: Vec::new(),
            };
        };

        let key = spec.sort_key(&entry);
        let mut compared = Vec::new();
        let mut insert_at = None;
        for (index, existing) in self.matches.iter().enumerate() {
            let existing_key = spec.sort_key(existing);
            let greater = existing_key > key;
            compared.push(existing_key);
            if greater {
                insert_at = Some(index);
                break;
            }
        }

        match insert_at {
            Some(index) => {
                self.matches.insert(index, entry);
                InsertTrace {
                    key: Some(key),
                    index,
                    appended: false,
                    compared,
                }
            }
            None => {
                self.matches.push(entry);
                InsertTrace {
                    key: Some(key),
                    index: self.matches.len() - 1,
                    appended: true,
                    compared,
                }
            }
        }
    }

    /// Returns `true` if at least one entry matched this rule.
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// The live ordered view of the matches.
    ///
    /// This is the stored sequence itself, not a defensive copy.
    #[must_use]
    pub fn matches(&self) -> &[E] {
        &self.matches
    }

    /// Returns the number of matched entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns `true` if no entry matched this rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Forward every entry to the sink, in stored order.
    ///
    /// # Errors
    ///
    /// Fail-fast: the first sink error is returned as-is and the
    /// remaining entries are not emitted. A partial rewrite of a source
    /// file is worse than an aborted one.
    pub fn emit<S: EmitSink<E>>(&self, sink: &mut S) -> Result<(), S::Error> {
        for entry in &self.matches {
            sink.emit(entry)?;
        }
        Ok(())
    }

    // Stable insertion: scan from the front, insert before the first
    // strictly-greater key, append when none exists.
    fn insert_sorted(&mut self, entry: E, spec: &dyn SortSpec<E>) {
        let key = spec.sort_key(&entry);
        match self
            .matches
            .iter()
            .position(|existing| spec.sort_key(existing) > key)
        {
            Some(index) => self.matches.insert(index, entry),
            None => self.matches.push(entry),
        }
    }
}

impl<E> fmt::Display for MatchSet<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule.label())
    }
}

impl<E> fmt::Debug for MatchSet<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchSet")
            .field("rule", &self.rule.label())
            .field("matches_len", &self.matches.len())
            .finish()
    }
}
