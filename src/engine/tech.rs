//! Technology unlock pass
//!
//! Single pass per faction in table order. Prereqs are checked against
//! the set of techs unlocked *before* the pass, so a tech unlocked this
//! turn cannot satisfy a dependent's prereqs until next turn. This is a
//! known pacing limitation, applied consistently.

use crate::content::{TechNode, TechTree};
use crate::state::mutators;
use crate::state::GameState;

pub(crate) fn unlock_pass(state: &mut GameState, tree: &TechTree) {
    for id in state.faction_ids() {
        let (already, name) = match state.faction(&id) {
            Some(f) if f.active() => (f.unlocked_techs.clone(), f.name.clone()),
            _ => continue,
        };

        let newly: Vec<&TechNode> = tree
            .nodes
            .iter()
            .filter(|node| {
                !already.contains(&node.id)
                    && node.prereqs.iter().all(|p| already.contains(p))
                    && state
                        .faction(&id)
                        .map_or(false, |f| f.research.get(node.branch) >= node.cost)
            })
            .collect();

        for node in newly {
            if let Some(faction) = state.faction_mut(&id) {
                faction.unlocked_techs.insert(node.id.clone());
            }
            // Effects apply exactly once, at unlock.
            for effect in &node.effects {
                mutators::apply_effect(state, &id, effect);
            }
            state.push_log(format!("{name} unlocks {}.", node.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Effect, TechNode};
    use crate::core::types::{Branch, FactionId, FactionKind, ScoreKind, TechId};
    use crate::state::{FactionState, Resources};

    fn tree() -> TechTree {
        TechTree::new(vec![
            TechNode {
                id: TechId::new("base"),
                branch: Branch::Capabilities,
                cost: 10.0,
                prereqs: vec![],
                effects: vec![Effect::Score {
                    score: ScoreKind::Capability,
                    amount: 5.0,
                }],
            },
            TechNode {
                id: TechId::new("advanced"),
                branch: Branch::Capabilities,
                cost: 20.0,
                prereqs: vec![TechId::new("base")],
                effects: vec![Effect::UnlockAgi],
            },
        ])
    }

    fn researcher(capabilities: f64) -> GameState {
        let mut f = FactionState::new(
            FactionId::new("us_lab"),
            "Lab",
            FactionKind::Lab,
            Resources::default(),
        );
        f.research.capabilities = capabilities;
        GameState::new(vec![f])
    }

    #[test]
    fn test_unlock_applies_effects_once() {
        let mut state = researcher(15.0);
        let tree = tree();
        unlock_pass(&mut state, &tree);
        let f = state.faction(&FactionId::new("us_lab")).unwrap();
        assert!(f.unlocked_techs.contains(&TechId::new("base")));
        assert_eq!(f.capability_score, 5.0);

        // A second pass must not re-apply
        unlock_pass(&mut state, &tree);
        let f = state.faction(&FactionId::new("us_lab")).unwrap();
        assert_eq!(f.capability_score, 5.0);
    }

    #[test]
    fn test_no_same_turn_prereq_chaining() {
        // Research covers both nodes, but "advanced" needs "base" to
        // have been unlocked before this pass started.
        let mut state = researcher(50.0);
        let tree = tree();
        unlock_pass(&mut state, &tree);
        let f = state.faction(&FactionId::new("us_lab")).unwrap();
        assert!(f.unlocked_techs.contains(&TechId::new("base")));
        assert!(!f.unlocked_techs.contains(&TechId::new("advanced")));
        assert!(!f.can_deploy_agi);

        // Next turn's pass unlocks the dependent
        unlock_pass(&mut state, &tree);
        let f = state.faction(&FactionId::new("us_lab")).unwrap();
        assert!(f.unlocked_techs.contains(&TechId::new("advanced")));
        assert!(f.can_deploy_agi);
    }

    #[test]
    fn test_insufficient_research_stays_locked() {
        let mut state = researcher(5.0);
        unlock_pass(&mut state, &tree());
        let f = state.faction(&FactionId::new("us_lab")).unwrap();
        assert!(f.unlocked_techs.is_empty());
    }
}
