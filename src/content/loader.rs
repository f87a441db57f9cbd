//! Load technology tables from TOML files

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::content::tech::{TechNode, TechTree};
use crate::core::error::{RaceError, Result};

#[derive(Debug, Deserialize)]
struct TechTreeFile {
    #[serde(default)]
    tech: Vec<TechNode>,
}

/// Load a tech tree from a TOML file.
///
/// Expected shape:
///
/// ```toml
/// [[tech]]
/// id = "scaling_laws"
/// branch = "capabilities"
/// cost = 30.0
/// prereqs = []
///
/// [[tech.effects]]
/// kind = "score"
/// score = "capability"
/// amount = 8.0
/// ```
pub fn load_tech_tree(path: &Path) -> Result<TechTree> {
    let content = fs::read_to_string(path)?;
    parse_tech_tree(&content)
}

/// Parse and validate a tech tree from TOML text.
pub fn parse_tech_tree(content: &str) -> Result<TechTree> {
    let file: TechTreeFile = toml::from_str(content)?;
    let tree = TechTree::new(file.tech);
    validate_tech_tree(&tree)?;
    Ok(tree)
}

fn validate_tech_tree(tree: &TechTree) -> Result<()> {
    let mut seen = HashSet::new();
    for node in &tree.nodes {
        if !seen.insert(&node.id) {
            return Err(RaceError::InvalidContent(format!(
                "duplicate tech id '{}'",
                node.id
            )));
        }
        if node.cost <= 0.0 || !node.cost.is_finite() {
            return Err(RaceError::InvalidContent(format!(
                "tech '{}' has invalid cost {}",
                node.id, node.cost
            )));
        }
    }
    for node in &tree.nodes {
        for prereq in &node.prereqs {
            if tree.get(prereq).is_none() {
                return Err(RaceError::InvalidContent(format!(
                    "tech '{}' requires unknown prereq '{}'",
                    node.id, prereq
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TechId;

    #[test]
    fn test_parse_tech_tree() {
        let toml_str = r#"
[[tech]]
id = "scaling_laws"
branch = "capabilities"
cost = 30.0
prereqs = []

[[tech.effects]]
kind = "score"
score = "capability"
amount = 8.0

[[tech]]
id = "agentic_systems"
branch = "capabilities"
cost = 70.0
prereqs = ["scaling_laws"]

[[tech.effects]]
kind = "unlock_agi"
"#;
        let tree = parse_tech_tree(toml_str).unwrap();
        assert_eq!(tree.nodes.len(), 2);
        let node = tree.get(&TechId::new("agentic_systems")).unwrap();
        assert_eq!(node.prereqs, vec![TechId::new("scaling_laws")]);
        assert_eq!(node.effects, vec![crate::content::Effect::UnlockAgi]);
    }

    #[test]
    fn test_shipped_tree_matches_builtin() {
        let shipped = parse_tech_tree(include_str!("../../data/tech_tree.toml")).unwrap();
        assert_eq!(shipped, crate::content::standard_tech_tree());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let toml_str = r#"
[[tech]]
id = "a"
branch = "ops"
cost = 10.0

[[tech]]
id = "a"
branch = "ops"
cost = 20.0
"#;
        assert!(parse_tech_tree(toml_str).is_err());
    }

    #[test]
    fn test_rejects_unknown_prereq() {
        let toml_str = r#"
[[tech]]
id = "a"
branch = "safety"
cost = 10.0
prereqs = ["missing"]
"#;
        assert!(parse_tech_tree(toml_str).is_err());
    }

    #[test]
    fn test_rejects_nonpositive_cost() {
        let toml_str = r#"
[[tech]]
id = "a"
branch = "safety"
cost = 0.0
"#;
        assert!(parse_tech_tree(toml_str).is_err());
    }
}
