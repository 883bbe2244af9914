//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the remi engine.

use remi::prelude::*;
use serde::Deserialize;

use crate::{Member, TestRule};

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    pub rule: RuleConfig,
    #[serde(default)]
    pub entries: Vec<String>,
    pub expect: Expectation,
}

/// Rule configuration from YAML
#[derive(Debug, Deserialize)]
pub struct RuleConfig {
    pub label: String,
    #[serde(default)]
    pub sort_by_name: bool,
}

/// What the fixture asserts after the classification pass
#[derive(Debug, Deserialize)]
pub struct Expectation {
    /// Expected `matches()` order (member names).
    #[serde(default)]
    pub order: Option<Vec<String>>,
    /// Preview cases: display config + expected subtree under the root.
    #[serde(default)]
    pub previews: Vec<PreviewCase>,
}

/// One preview expectation
#[derive(Debug, Deserialize)]
pub struct PreviewCase {
    #[serde(default)]
    pub display: DisplayConfig,
    pub tree: Vec<ExpectedNode>,
}

/// Expected node: a bare string is an entry leaf, a map is a rule
/// header with its children.
/// Uses untagged deserialization - order matters!
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ExpectedNode {
    // Try the header shape first (it has a specific key)
    Header(HeaderNode),
    // Bare entry label last (most general structure)
    Entry(String),
}

#[derive(Debug, Deserialize)]
pub struct HeaderNode {
    pub rule_header: String,
    #[serde(default)]
    pub children: Vec<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Convert config to remi types
// ═══════════════════════════════════════════════════════════════════════════════

impl RuleConfig {
    /// Build a [`TestRule`] from this config
    pub fn build(&self) -> TestRule {
        let rule = TestRule::new(self.label.clone());
        if self.sort_by_name {
            rule.sorted_by_name()
        } else {
            rule
        }
    }
}

impl ExpectedNode {
    fn matches(&self, node: &PreviewNode) -> bool {
        match self {
            Self::Entry(label) => !node.is_rule_header() && node.label() == label,
            Self::Header(header) => {
                node.is_rule_header()
                    && node.label() == header.rule_header
                    && node.children().len() == header.children.len()
                    && node
                        .children()
                        .iter()
                        .zip(&header.children)
                        .all(|(child, expected)| child.label() == expected)
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single check
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run the classification pass and all checks, returning results
    pub fn run(&self) -> Vec<CaseResult> {
        let rule = self.rule.build();
        let mut set = MatchSet::new(&rule);
        for name in &self.entries {
            set.add_entry(Member::method(name.clone()));
        }

        let mut results = Vec::new();

        if let Some(expected) = &self.expect.order {
            let actual: Vec<_> = set.matches().iter().map(Member::name).collect();
            results.push(CaseResult {
                case_name: "order".to_string(),
                passed: actual == expected.iter().map(String::as_str).collect::<Vec<_>>(),
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }

        for (i, case) in self.expect.previews.iter().enumerate() {
            let mut root = PreviewNode::entry("root");
            PreviewBuilder::new(case.display).build(&set, &mut root);

            let passed = root.children().len() == case.tree.len()
                && root
                    .children()
                    .iter()
                    .zip(&case.tree)
                    .all(|(node, expected)| expected.matches(node));

            results.push(CaseResult {
                case_name: format!("preview[{i}]"),
                passed,
                expected: format!("{:?}", case.tree),
                actual: format!("{:?}", root.children()),
            });
        }

        results
    }

    /// Run all checks and panic on first failure
    pub fn run_and_assert(&self) {
        for result in self.run() {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {}, got {}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}
