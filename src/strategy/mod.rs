//! AI decision profiles and turn planners
//!
//! Profiles are plain data consumed by drivers; the turn resolver never
//! reads them. Planners are deterministic: same state and profile, same
//! choices.

use serde::{Deserialize, Serialize};

use crate::actions::{ActionChoice, ActionId};
use crate::core::config::{SAFETY_THRESHOLDS, SUBSIDY};
use crate::core::types::{FactionId, FactionKind};
use crate::engine::{regulate_target, subsidize_target};
use crate::state::GameState;

/// Tunable dispositions in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Appetite for secret work and early AGI deployment.
    pub risk_tolerance: f64,
    /// Preference for stealing research over doing it.
    pub espionage_focus: f64,
    /// Weight given to safety research over capabilities.
    pub safety_focus: f64,
}

impl StrategyProfile {
    pub fn balanced() -> Self {
        Self {
            risk_tolerance: 0.5,
            espionage_focus: 0.3,
            safety_focus: 0.4,
        }
    }

    pub fn aggressive() -> Self {
        Self {
            risk_tolerance: 0.8,
            espionage_focus: 0.6,
            safety_focus: 0.15,
        }
    }

    pub fn cautious() -> Self {
        Self {
            risk_tolerance: 0.2,
            espionage_focus: 0.1,
            safety_focus: 0.7,
        }
    }
}

impl Default for StrategyProfile {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Plan a turn's worth of action choices for one faction. Returns an
/// empty plan for unknown or eliminated factions.
pub fn plan_turn(
    state: &GameState,
    faction_id: &FactionId,
    profile: &StrategyProfile,
) -> Vec<ActionChoice> {
    let Some(faction) = state.faction(faction_id).filter(|f| f.active()) else {
        return Vec::new();
    };
    match faction.kind {
        FactionKind::Government => plan_government(state, faction_id, profile),
        FactionKind::Lab => plan_lab(state, faction_id, profile),
    }
}

fn plan_government(
    state: &GameState,
    id: &FactionId,
    profile: &StrategyProfile,
) -> Vec<ActionChoice> {
    let Some(government) = state.faction(id) else {
        return Vec::new();
    };
    let mut plan = Vec::with_capacity(2);

    if state.global_safety < SAFETY_THRESHOLDS.global {
        if let Some(target) = regulate_target(state, id) {
            plan.push(ActionChoice::open(ActionId::Regulate).targeting(target));
        }
    }
    if plan.is_empty() && government.resources.capital >= SUBSIDY.min_capital {
        if let Some(target) = subsidize_target(state, id) {
            plan.push(ActionChoice::open(ActionId::Subsidize).targeting(target));
        }
    }
    if plan.is_empty() {
        let choice = if profile.espionage_focus < 0.3 {
            ActionChoice::open(ActionId::Counterintel)
        } else {
            ActionChoice::open(ActionId::Policy)
        };
        plan.push(choice);
    }

    // Second action point: policy research keeps influence flowing.
    plan.push(ActionChoice::open(ActionId::ResearchPolicy));
    plan
}

fn plan_lab(state: &GameState, id: &FactionId, profile: &StrategyProfile) -> Vec<ActionChoice> {
    let Some(lab) = state.faction(id) else {
        return Vec::new();
    };
    let mut plan = Vec::with_capacity(2);

    let deploy_bar = SAFETY_THRESHOLDS.faction * (1.0 - 0.4 * profile.risk_tolerance);
    if lab.can_deploy_agi && lab.safety_score >= deploy_bar {
        plan.push(ActionChoice::open(ActionId::DeployAgi));
    }

    if plan.is_empty() && lab.resources.compute < 20.0 && lab.resources.capital >= 10.0 {
        plan.push(ActionChoice::open(ActionId::BuildCompute));
    }
    if plan.is_empty() && lab.resources.capital < 10.0 {
        plan.push(ActionChoice::open(ActionId::DeployProducts));
    }
    if plan.is_empty() && profile.espionage_focus > 0.5 {
        if let Some(target) = espionage_target(state, id) {
            plan.push(ActionChoice::secret(ActionId::Espionage).targeting(target));
        }
    }
    if plan.is_empty() {
        plan.push(research_choice(lab.safety_score, profile));
    }

    // Second action point: keep researching, favoring the neglected axis.
    plan.push(research_choice(lab.safety_score, profile));
    plan
}

fn research_choice(safety_score: f64, profile: &StrategyProfile) -> ActionChoice {
    let action = if safety_score < SAFETY_THRESHOLDS.faction * profile.safety_focus * 2.0 {
        ActionId::ResearchSafety
    } else {
        ActionId::ResearchCapabilities
    };
    if profile.risk_tolerance > 0.6 && action == ActionId::ResearchCapabilities {
        ActionChoice::secret(action)
    } else {
        ActionChoice::open(action)
    }
}

/// The rival-bloc lab with the most capabilities research to steal.
fn espionage_target(state: &GameState, id: &FactionId) -> Option<FactionId> {
    let mut best: Option<(&FactionId, f64)> = None;
    for lab in state.labs() {
        if lab.id.same_bloc(id) {
            continue;
        }
        let haul = lab.research.capabilities;
        if best.map_or(true, |(_, b)| haul > b) {
            best = Some((&lab.id, haul));
        }
    }
    best.map(|(id, _)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Openness;
    use crate::state::scenario::standard_game;

    #[test]
    fn test_government_regulates_when_world_is_unsafe() {
        let mut state = standard_game();
        state.global_safety = 20.0;
        let plan = plan_turn(
            &state,
            &FactionId::new("us_gov"),
            &StrategyProfile::balanced(),
        );
        assert_eq!(plan[0].action, ActionId::Regulate);
        let target = plan[0].target.as_ref().unwrap();
        assert!(!target.same_bloc(&FactionId::new("us_gov")));
    }

    #[test]
    fn test_government_subsidizes_laggard_when_safe() {
        let mut state = standard_game();
        state.global_safety = 80.0;
        state
            .faction_mut(&FactionId::new("us_gov"))
            .unwrap()
            .resources
            .capital = 50.0;
        let plan = plan_turn(
            &state,
            &FactionId::new("us_gov"),
            &StrategyProfile::balanced(),
        );
        assert_eq!(plan[0].action, ActionId::Subsidize);
        assert!(plan[0]
            .target
            .as_ref()
            .unwrap()
            .same_bloc(&FactionId::new("us_gov")));
    }

    #[test]
    fn test_broke_low_espionage_government_runs_counterintel() {
        let mut state = standard_game();
        state.global_safety = 80.0;
        state
            .faction_mut(&FactionId::new("cn_gov"))
            .unwrap()
            .resources
            .capital = 0.0;
        let plan = plan_turn(
            &state,
            &FactionId::new("cn_gov"),
            &StrategyProfile::cautious(),
        );
        assert_eq!(plan[0].action, ActionId::Counterintel);
    }

    #[test]
    fn test_lab_deploys_when_ready() {
        let mut state = standard_game();
        let lab = state.faction_mut(&FactionId::new("us_nimbus")).unwrap();
        lab.can_deploy_agi = true;
        lab.safety_score = 90.0;
        let plan = plan_turn(
            &state,
            &FactionId::new("us_nimbus"),
            &StrategyProfile::balanced(),
        );
        assert_eq!(plan[0].action, ActionId::DeployAgi);
    }

    #[test]
    fn test_spy_profile_targets_rival_bloc() {
        let mut state = standard_game();
        {
            let lab = state.faction_mut(&FactionId::new("us_nimbus")).unwrap();
            lab.resources.compute = 50.0;
            lab.resources.capital = 50.0;
        }
        state
            .faction_mut(&FactionId::new("cn_tianshu"))
            .unwrap()
            .research
            .capabilities = 200.0;
        let plan = plan_turn(
            &state,
            &FactionId::new("us_nimbus"),
            &StrategyProfile::aggressive(),
        );
        assert_eq!(plan[0].action, ActionId::Espionage);
        assert_eq!(plan[0].openness, Openness::Secret);
        assert_eq!(plan[0].target, Some(FactionId::new("cn_tianshu")));
    }

    #[test]
    fn test_eliminated_faction_plans_nothing() {
        let mut state = standard_game();
        state
            .faction_mut(&FactionId::new("us_helios"))
            .unwrap()
            .eliminated = true;
        let plan = plan_turn(
            &state,
            &FactionId::new("us_helios"),
            &StrategyProfile::balanced(),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_planner_is_deterministic() {
        let state = standard_game();
        let a = plan_turn(
            &state,
            &FactionId::new("cn_tianshu"),
            &StrategyProfile::aggressive(),
        );
        let b = plan_turn(
            &state,
            &FactionId::new("cn_tianshu"),
            &StrategyProfile::aggressive(),
        );
        assert_eq!(a, b);
    }
}
