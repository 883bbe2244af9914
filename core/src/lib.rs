//! remi - rule-instance matching & ordered-insertion engine
//!
//! The ordering core of a source-code reorganizer. An external
//! classifier decides which rule each syntactic entity (field, method,
//! class) belongs to and feeds it in; remi accumulates the matches per
//! rule, keeps them ordered, and hands the result to two consumers: an
//! emit sink that regenerates source text, and a preview builder that
//! produces a rule → entries display hierarchy.
//!
//! # Architecture
//!
//! - [`Rule<E>`] — the owning rule as a label + optional ordering capability
//! - [`SortSpec<E>`] — deterministic entry → sort-key-string derivation
//! - [`MatchSet<E>`](MatchSet) — per-rule container, stable insertion sort
//! - [`EmitSink<E>`] — outbound boundary, fail-fast on the first error
//! - [`PreviewBuilder`] — turns a match set into a [`PreviewNode`] subtree
//! - [`InsertTrace`] — decision path of one insertion, for debugging
//!
//! # Key Design Insights
//!
//! 1. **Capability, not identity**: a rule sorts its matches iff it
//!    exposes a [`SortSpec`]. Nothing downcasts to concrete rule kinds.
//!
//! 2. **Stable ties**: insertion goes before the first *strictly*
//!    greater key, so equal keys keep their arrival order.
//!
//! 3. **Ordering and display are separate components**: [`MatchSet`]
//!    never renders, [`PreviewBuilder`] never mutates; the caller
//!    composes them.
//!
//! # Example
//!
//! ```
//! use remi::prelude::*;
//!
//! // The classifier's entity type
//! #[derive(Debug)]
//! struct Method { name: String }
//!
//! impl TreeEntry for Method {
//!     fn add_to_preview(&self, parent: &mut PreviewNode) {
//!         parent.push(PreviewNode::entry(self.name.clone()));
//!     }
//! }
//!
//! // A rule that keeps its matches alphabetical
//! #[derive(Debug)]
//! struct ByName;
//!
//! impl SortSpec<Method> for ByName {
//!     fn sort_key(&self, entry: &Method) -> String {
//!         entry.name.clone()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MethodsRule;
//!
//! impl Rule<Method> for MethodsRule {
//!     fn label(&self) -> String {
//!         "methods".to_string()
//!     }
//!     fn sort_spec(&self) -> Option<&dyn SortSpec<Method>> {
//!         Some(&ByName)
//!     }
//! }
//!
//! // Classification pass: the classifier calls add_entry per match
//! let rule = MethodsRule;
//! let mut set = MatchSet::new(&rule);
//! set.add_entry(Method { name: "beta".to_string() });
//! set.add_entry(Method { name: "alpha".to_string() });
//!
//! let names: Vec<_> = set.matches().iter().map(|m| m.name.as_str()).collect();
//! assert_eq!(names, ["alpha", "beta"]);
//!
//! // Preview pass: one subtree per rule under the renderer's root
//! let mut root = PreviewNode::entry("Example.java");
//! PreviewBuilder::new(DisplayConfig::default()).build(&set, &mut root);
//! assert!(root.children()[0].is_rule_header());
//! assert_eq!(root.children()[0].label(), "methods");
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod emit;
mod match_set;
mod preview;
mod rule;
mod sort_spec;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use emit::EmitSink;
pub use match_set::MatchSet;
pub use preview::{DisplayConfig, NodeKind, PreviewBuilder, PreviewNode, TreeEntry};
pub use rule::Rule;
pub use sort_spec::SortSpec;
pub use trace::InsertTrace;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use remi::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DisplayConfig,
        // Traits
        EmitSink,
        // Trace types
        InsertTrace,
        // Core types
        MatchSet,
        NodeKind,
        PreviewBuilder,
        PreviewNode,
        Rule,
        SortSpec,
        TreeEntry,
    };
}
