//! Technology tree - externally supplied, immutable content

use serde::{Deserialize, Serialize};

use crate::content::Effect;
use crate::core::types::{Branch, ScoreKind, StatKind, TechId};

/// One node in the technology tree.
///
/// A node is available once every prereq is unlocked, and unlocks once
/// the owning faction's accumulated branch research reaches `cost`.
/// Its effects are applied exactly once at unlock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechNode {
    pub id: TechId,
    pub branch: Branch,
    pub cost: f64,
    #[serde(default)]
    pub prereqs: Vec<TechId>,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

/// An ordered technology table. The engine walks nodes in table order
/// during the unlock pass, which keeps unlock logs deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechTree {
    pub nodes: Vec<TechNode>,
}

impl TechTree {
    pub fn new(nodes: Vec<TechNode>) -> Self {
        Self { nodes }
    }

    pub fn get(&self, id: &TechId) -> Option<&TechNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}

/// The built-in tech table used by the standard scenario and the
/// headless driver. External tables loaded from TOML replace it
/// wholesale.
pub fn standard_tech_tree() -> TechTree {
    let node = |id: &str, branch: Branch, cost: f64, prereqs: &[&str], effects: Vec<Effect>| {
        TechNode {
            id: TechId::new(id),
            branch,
            cost,
            prereqs: prereqs.iter().map(|p| TechId::new(*p)).collect(),
            effects,
        }
    };

    TechTree::new(vec![
        node(
            "scaling_laws",
            Branch::Capabilities,
            30.0,
            &[],
            vec![Effect::Score {
                score: ScoreKind::Capability,
                amount: 8.0,
            }],
        ),
        node(
            "agentic_systems",
            Branch::Capabilities,
            70.0,
            &["scaling_laws"],
            vec![
                Effect::Score {
                    score: ScoreKind::Capability,
                    amount: 12.0,
                },
                Effect::GlobalSafety { amount: -2.0 },
            ],
        ),
        node(
            "recursive_self_improvement",
            Branch::Capabilities,
            130.0,
            &["agentic_systems"],
            vec![
                Effect::UnlockAgi,
                Effect::Score {
                    score: ScoreKind::Capability,
                    amount: 15.0,
                },
            ],
        ),
        node(
            "interpretability",
            Branch::Safety,
            30.0,
            &[],
            vec![Effect::Score {
                score: ScoreKind::Safety,
                amount: 10.0,
            }],
        ),
        node(
            "scalable_oversight",
            Branch::Safety,
            70.0,
            &["interpretability"],
            vec![
                Effect::Score {
                    score: ScoreKind::Safety,
                    amount: 15.0,
                },
                Effect::GlobalSafety { amount: 3.0 },
            ],
        ),
        node(
            "alignment_verification",
            Branch::Safety,
            120.0,
            &["scalable_oversight"],
            vec![
                Effect::Score {
                    score: ScoreKind::Safety,
                    amount: 20.0,
                },
                Effect::Stat {
                    stat: StatKind::SafetyCulture,
                    amount: 10.0,
                },
                Effect::GlobalSafety { amount: 5.0 },
            ],
        ),
        node(
            "secure_enclaves",
            Branch::Ops,
            40.0,
            &[],
            vec![Effect::Stat {
                stat: StatKind::Opsec,
                amount: 15.0,
            }],
        ),
        node(
            "insider_threat_program",
            Branch::Ops,
            80.0,
            &["secure_enclaves"],
            vec![
                Effect::Stat {
                    stat: StatKind::Opsec,
                    amount: 20.0,
                },
                Effect::Exposure { amount: -10.0 },
            ],
        ),
        node(
            "compute_governance",
            Branch::Policy,
            50.0,
            &[],
            vec![
                Effect::Resource {
                    resource: crate::core::types::ResourceKind::Influence,
                    amount: 10.0,
                },
                Effect::GlobalSafety { amount: 4.0 },
            ],
        ),
        node(
            "international_accord",
            Branch::Policy,
            100.0,
            &["compute_governance"],
            vec![
                Effect::Resource {
                    resource: crate::core::types::ResourceKind::Trust,
                    amount: 10.0,
                },
                Effect::GlobalSafety { amount: 8.0 },
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tree_lookup() {
        let tree = standard_tech_tree();
        assert!(tree.get(&TechId::new("scaling_laws")).is_some());
        assert!(tree.get(&TechId::new("perpetual_motion")).is_none());
    }

    #[test]
    fn test_standard_tree_prereqs_exist() {
        let tree = standard_tech_tree();
        for node in &tree.nodes {
            for prereq in &node.prereqs {
                assert!(
                    tree.get(prereq).is_some(),
                    "{} names missing prereq {}",
                    node.id,
                    prereq
                );
            }
        }
    }

    #[test]
    fn test_capstone_unlocks_agi() {
        let tree = standard_tech_tree();
        let capstone = tree.get(&TechId::new("recursive_self_improvement")).unwrap();
        assert!(capstone.effects.contains(&Effect::UnlockAgi));
    }
}
