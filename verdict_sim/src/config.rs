//! Simulation configuration and JSON network definitions.

use crate::error::SimError;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use verdict_core::NodeSpec;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Master seed for determinism
    pub seed: u64,

    /// Number of predictions generated per node
    pub length: usize,

    /// Report generation progress (ternary networks)
    pub progress: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            length: 1000,
            progress: false,
        }
    }
}

/// Decision cardinality of a defined network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Binary,
    Ternary,
}

fn default_length() -> usize {
    SimConfig::default().length
}

/// A network described in a JSON file.
///
/// ```json
/// {
///   "name": "panel",
///   "variant": "ternary",
///   "length": 500,
///   "reference": "truth",
///   "nodes": [
///     { "name": "truth", "seed": 1 },
///     { "name": "judge", "correlates": { "truth": 1.0 }, "p_neutral": 0.2 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    /// Label used in reports (defaults to the file stem)
    #[serde(default)]
    pub name: Option<String>,

    pub variant: VariantKind,

    #[serde(default = "default_length")]
    pub length: usize,

    /// Node every other node is compared against
    #[serde(default)]
    pub reference: Option<String>,

    pub nodes: Vec<NodeSpec>,
}

impl NetworkDefinition {
    /// Parses and validates a definition.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Reads a definition file; an unnamed network takes the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let mut definition = Self::from_json(&fs::read_to_string(path)?)?;

        if definition.name.is_none() {
            definition.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(definition)
    }

    /// Replaces the sequence length (at least 1).
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.max(1);
        self
    }

    /// Label for reports.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("custom")
    }

    fn validate(&self) -> Result<(), SimError> {
        if self.nodes.is_empty() {
            return Err(SimError::invalid("no nodes defined"));
        }
        if self.length == 0 {
            return Err(SimError::invalid("length must be at least 1"));
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.name.as_str()) {
                return Err(SimError::invalid(format!("duplicate node '{}'", node.name)));
            }
        }

        if let Some(reference) = &self.reference {
            if !seen.contains(reference.as_str()) {
                return Err(SimError::invalid(format!(
                    "reference '{}' is not a defined node",
                    reference
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: &str = r#"{
        "variant": "ternary",
        "length": 200,
        "reference": "truth",
        "nodes": [
            { "name": "truth", "seed": 1 },
            { "name": "judge", "correlates": { "truth": 1.0 }, "p_neutral": 0.2 }
        ]
    }"#;

    #[test]
    fn test_parse_definition() {
        let definition = NetworkDefinition::from_json(PANEL).unwrap();

        assert_eq!(definition.variant, VariantKind::Ternary);
        assert_eq!(definition.length, 200);
        assert_eq!(definition.nodes.len(), 2);
        assert_eq!(definition.nodes[1].p_neutral, Some(0.2));
        assert_eq!(definition.label(), "custom");
    }

    #[test]
    fn test_default_length() {
        let definition = NetworkDefinition::from_json(
            r#"{ "variant": "binary", "nodes": [{ "name": "a" }] }"#,
        )
        .unwrap();
        assert_eq!(definition.length, SimConfig::default().length);
    }

    #[test]
    fn test_length_override() {
        let definition = NetworkDefinition::from_json(PANEL).unwrap().with_length(50);
        assert_eq!(definition.length, 50);
        assert_eq!(definition.with_length(0).length, 1);
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = NetworkDefinition::from_json(
            r#"{ "variant": "binary", "nodes": [{ "name": "a" }, { "name": "a" }] }"#,
        );
        assert!(matches!(result, Err(SimError::InvalidDefinition(_))));
    }

    #[test]
    fn test_rejects_unknown_reference() {
        let result = NetworkDefinition::from_json(
            r#"{ "variant": "binary", "reference": "b", "nodes": [{ "name": "a" }] }"#,
        );
        assert!(matches!(result, Err(SimError::InvalidDefinition(_))));
    }

    #[test]
    fn test_rejects_bad_variant() {
        let result = NetworkDefinition::from_json(r#"{ "variant": "quaternary", "nodes": [] }"#);
        assert!(matches!(result, Err(SimError::Serialization(_))));
    }

    #[test]
    fn test_load_names_from_file_stem() {
        let path = std::env::temp_dir().join(format!("verdict_panel_{}.json", std::process::id()));
        fs::write(&path, PANEL).unwrap();

        let definition = NetworkDefinition::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(definition.label().starts_with("verdict_panel_"));
    }
}
