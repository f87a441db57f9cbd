//! Action catalog: identifiers, validity, and cost/delta tables

use serde::{Deserialize, Serialize};

use crate::content::Effect;
use crate::core::types::{Branch, FactionId, FactionKind, Openness, ResourceKind, ScoreKind, StatKind};

/// Every action a faction can spend an action point on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    // Lab actions
    BuildCompute,
    RecruitTalent,
    DeployProducts,
    ResearchCapabilities,
    ResearchSafety,
    ResearchOps,
    DeployAgi,

    // Government actions
    Subsidize,
    Regulate,
    Counterintel,
    Policy,
    ResearchPolicy,

    // Available to both
    Espionage,
}

impl ActionId {
    /// Whether a faction of the given kind may issue this action.
    pub fn valid_for(self, kind: FactionKind) -> bool {
        match self {
            ActionId::BuildCompute
            | ActionId::RecruitTalent
            | ActionId::DeployProducts
            | ActionId::ResearchCapabilities
            | ActionId::ResearchSafety
            | ActionId::ResearchOps
            | ActionId::DeployAgi => kind == FactionKind::Lab,

            ActionId::Subsidize
            | ActionId::Regulate
            | ActionId::Counterintel
            | ActionId::Policy
            | ActionId::ResearchPolicy => kind == FactionKind::Government,

            ActionId::Espionage => true,
        }
    }

    /// The research branch this action contributes to, if any.
    pub fn research_branch(self) -> Option<Branch> {
        match self {
            ActionId::ResearchCapabilities => Some(Branch::Capabilities),
            ActionId::ResearchSafety => Some(Branch::Safety),
            ActionId::ResearchOps => Some(Branch::Ops),
            ActionId::ResearchPolicy => Some(Branch::Policy),
            _ => None,
        }
    }

    /// Fixed resource/score/stat deltas applied when the action
    /// resolves. Research gain is handled separately because openness
    /// scales it; espionage, subsidize, regulate and deploy_agi have
    /// bespoke resolution in the engine on top of (or instead of)
    /// these tables.
    pub fn base_effects(self) -> &'static [Effect] {
        match self {
            ActionId::BuildCompute => &[
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount: -10.0,
                },
                Effect::Resource {
                    resource: ResourceKind::Compute,
                    amount: 8.0,
                },
            ],
            ActionId::RecruitTalent => &[
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount: -8.0,
                },
                Effect::Resource {
                    resource: ResourceKind::Talent,
                    amount: 6.0,
                },
            ],
            ActionId::DeployProducts => &[
                Effect::Resource {
                    resource: ResourceKind::Compute,
                    amount: -5.0,
                },
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount: 14.0,
                },
                Effect::Resource {
                    resource: ResourceKind::Influence,
                    amount: 2.0,
                },
                Effect::Resource {
                    resource: ResourceKind::Data,
                    amount: 3.0,
                },
            ],
            ActionId::ResearchCapabilities => &[
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount: -4.0,
                },
                Effect::Score {
                    score: ScoreKind::Capability,
                    amount: 2.0,
                },
            ],
            ActionId::ResearchSafety => &[
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount: -4.0,
                },
                Effect::Score {
                    score: ScoreKind::Safety,
                    amount: 2.0,
                },
                Effect::Stat {
                    stat: StatKind::SafetyCulture,
                    amount: 1.0,
                },
            ],
            ActionId::ResearchOps => &[
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount: -3.0,
                },
                Effect::Stat {
                    stat: StatKind::Opsec,
                    amount: 2.0,
                },
            ],
            ActionId::ResearchPolicy => &[Effect::Resource {
                resource: ResourceKind::Influence,
                amount: 1.0,
            }],
            ActionId::Counterintel => &[Effect::Stat {
                stat: StatKind::Opsec,
                amount: 10.0,
            }],
            ActionId::Policy => &[
                Effect::Resource {
                    resource: ResourceKind::Influence,
                    amount: 4.0,
                },
                Effect::Resource {
                    resource: ResourceKind::Trust,
                    amount: 2.0,
                },
            ],
            ActionId::Espionage => &[Effect::Resource {
                resource: ResourceKind::Capital,
                amount: -5.0,
            }],
            // Resolved entirely in the engine
            ActionId::Subsidize | ActionId::Regulate | ActionId::DeployAgi => &[],
        }
    }

    /// Total capital this action spends up front (used for the
    /// affordability check; earnings do not offset it).
    pub fn capital_cost(self) -> f64 {
        self.base_effects()
            .iter()
            .filter_map(|e| match e {
                Effect::Resource {
                    resource: ResourceKind::Capital,
                    amount,
                } if *amount < 0.0 => Some(-amount),
                _ => None,
            })
            .sum()
    }

    /// Human-readable name for log lines.
    pub fn label(self) -> &'static str {
        match self {
            ActionId::BuildCompute => "build compute",
            ActionId::RecruitTalent => "recruit talent",
            ActionId::DeployProducts => "deploy products",
            ActionId::ResearchCapabilities => "capabilities research",
            ActionId::ResearchSafety => "safety research",
            ActionId::ResearchOps => "ops research",
            ActionId::ResearchPolicy => "policy research",
            ActionId::DeployAgi => "deploy AGI",
            ActionId::Subsidize => "subsidize",
            ActionId::Regulate => "regulate",
            ActionId::Counterintel => "counterintelligence",
            ActionId::Policy => "policy work",
            ActionId::Espionage => "espionage",
        }
    }
}

/// One action choice submitted for a faction.
///
/// Choices are inputs to the engine, not owned state. Espionage is
/// always treated as secret regardless of the declared openness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionChoice {
    pub action: ActionId,
    pub openness: Openness,
    #[serde(default)]
    pub target: Option<FactionId>,
}

impl ActionChoice {
    pub fn open(action: ActionId) -> Self {
        Self {
            action,
            openness: Openness::Open,
            target: None,
        }
    }

    pub fn secret(action: ActionId) -> Self {
        Self {
            action,
            openness: Openness::Secret,
            target: None,
        }
    }

    pub fn targeting(mut self, target: FactionId) -> Self {
        self.target = Some(target);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_actions_invalid_for_governments() {
        assert!(ActionId::BuildCompute.valid_for(FactionKind::Lab));
        assert!(!ActionId::BuildCompute.valid_for(FactionKind::Government));
        assert!(!ActionId::DeployAgi.valid_for(FactionKind::Government));
    }

    #[test]
    fn test_government_actions_invalid_for_labs() {
        assert!(ActionId::Regulate.valid_for(FactionKind::Government));
        assert!(!ActionId::Regulate.valid_for(FactionKind::Lab));
        assert!(!ActionId::Subsidize.valid_for(FactionKind::Lab));
    }

    #[test]
    fn test_espionage_valid_for_both() {
        assert!(ActionId::Espionage.valid_for(FactionKind::Lab));
        assert!(ActionId::Espionage.valid_for(FactionKind::Government));
    }

    #[test]
    fn test_build_compute_table() {
        let effects = ActionId::BuildCompute.base_effects();
        assert!(effects.contains(&Effect::Resource {
            resource: ResourceKind::Capital,
            amount: -10.0
        }));
        assert!(effects.contains(&Effect::Resource {
            resource: ResourceKind::Compute,
            amount: 8.0
        }));
    }

    #[test]
    fn test_capital_cost() {
        assert_eq!(ActionId::BuildCompute.capital_cost(), 10.0);
        assert_eq!(ActionId::Policy.capital_cost(), 0.0);
        // Earnings never offset costs
        assert_eq!(ActionId::DeployProducts.capital_cost(), 0.0);
    }

    #[test]
    fn test_research_branch_mapping() {
        assert_eq!(
            ActionId::ResearchCapabilities.research_branch(),
            Some(Branch::Capabilities)
        );
        assert_eq!(ActionId::ResearchPolicy.research_branch(), Some(Branch::Policy));
        assert_eq!(ActionId::BuildCompute.research_branch(), None);
    }
}
