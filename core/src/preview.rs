//! Preview tree construction — (rule, matches) pairs as a display hierarchy
//!
//! The renderer hands the engine a parent node; [`PreviewBuilder`]
//! appends either a rule-header node with the matches below it, or the
//! matches directly (flattened), per [`DisplayConfig`]. The engine
//! supplies plain labels plus the rule-header marker; fonts, icons and
//! styling belong to the renderer.
//!
//! Display is deliberately a separate component from
//! [`MatchSet`](crate::MatchSet): the container orders, the builder
//! presents, and the caller composes the two.

use crate::MatchSet;
use std::fmt;

/// What kind of node a preview node is.
///
/// The renderer styles rule headers differently from entries (the
/// reference UI renders them in italics); the engine only supplies the
/// marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    /// A header node labeled with a rule's display string.
    RuleHeader,
    /// A node contributed by a matched entry.
    Entry,
}

/// One node of the preview hierarchy.
///
/// A plain owned tree: label, kind, children. The renderer walks it to
/// produce whatever its UI toolkit needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewNode {
    kind: NodeKind,
    label: String,
    children: Vec<PreviewNode>,
}

impl PreviewNode {
    /// Create a rule-header node with the given label.
    #[must_use]
    pub fn rule_header(label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::RuleHeader,
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create an entry node with the given label.
    #[must_use]
    pub fn entry(label: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Entry,
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn push(&mut self, child: PreviewNode) {
        self.children.push(child);
    }

    /// The node's kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The node's plain display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node's children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[PreviewNode] {
        &self.children
    }

    /// Returns `true` for rule-header nodes.
    #[must_use]
    pub fn is_rule_header(&self) -> bool {
        self.kind == NodeKind::RuleHeader
    }
}

impl fmt::Display for PreviewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// An entry's capability to contribute its own node(s) to the preview.
///
/// Entries may be composite and push a whole subtree; the builder does
/// not look inside what they contribute.
pub trait TreeEntry {
    /// Append this entry's node(s) under `parent`.
    fn add_to_preview(&self, parent: &mut PreviewNode);
}

/// Display preferences for preview construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Show a header node per rule. When `false` the tree is flattened
    /// and entries attach directly to the parent.
    pub show_rules: bool,
    /// Suppress the header of a rule with zero matches.
    pub show_only_matched_rules: bool,
}

impl Default for DisplayConfig {
    /// Rules shown, empty rules not suppressed.
    fn default() -> Self {
        Self {
            show_rules: true,
            show_only_matched_rules: false,
        }
    }
}

/// Builds the preview subtree for one match set.
///
/// # Example
///
/// ```ignore
/// let builder = PreviewBuilder::new(DisplayConfig::default());
/// let mut root = PreviewNode::entry("Outer.java");
/// builder.build(&fields_set, &mut root);
/// builder.build(&methods_set, &mut root);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewBuilder {
    config: DisplayConfig,
}

impl PreviewBuilder {
    /// Create a builder with the given display preferences.
    #[must_use]
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// The builder's display preferences.
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Append the match set's subtree under `parent`.
    ///
    /// A rule-header child labeled with the rule's display string is
    /// created iff `show_rules` is on and either suppression is off or
    /// the set has at least one match. Otherwise entries attach
    /// directly to `parent`. Entries contribute in match order; with a
    /// suppression-off empty set the header is created empty.
    pub fn build<E: TreeEntry>(&self, set: &MatchSet<'_, E>, parent: &mut PreviewNode) {
        let own_header = self.config.show_rules
            && (!self.config.show_only_matched_rules || set.has_matches());

        if own_header {
            let mut header = PreviewNode::rule_header(set.rule().label());
            for entry in set.matches() {
                entry.add_to_preview(&mut header);
            }
            parent.push(header);
        } else {
            for entry in set.matches() {
                entry.add_to_preview(parent);
            }
        }
    }
}
