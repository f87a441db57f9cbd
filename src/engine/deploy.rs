//! AGI deployment check
//!
//! Runs after the tech unlock pass so a breakthrough unlocked this
//! turn can back a same-turn deployment.

use crate::core::config::SAFETY_THRESHOLDS;
use crate::core::types::FactionId;
use crate::state::{Ending, GameState};

pub(crate) fn process(state: &mut GameState, pending: &[FactionId]) {
    for id in pending {
        if state.game_over {
            // A prior deployment already ended the game for everyone.
            return;
        }
        let (can_deploy, safety_score, name) = match state.faction(id) {
            Some(f) if f.active() => (f.can_deploy_agi, f.safety_score, f.name.clone()),
            _ => continue,
        };

        if !can_deploy {
            state.push_log(format!(
                "{name} attempts to deploy AGI without the breakthrough to back it."
            ));
            continue;
        }

        let safe = safety_score >= SAFETY_THRESHOLDS.faction
            && state.global_safety >= SAFETY_THRESHOLDS.global;
        tracing::info!(
            faction = %id,
            safety_score,
            global_safety = state.global_safety,
            safe,
            "AGI deployment resolving"
        );
        state.game_over = true;
        if safe {
            state.winner = Some(id.clone());
            state.ending = Some(Ending::SafeAgi);
            state.push_log(format!("{name} deploys safe AGI. The race is won."));
        } else {
            state.winner = None;
            state.ending = Some(Ending::Catastrophe);
            state.push_log(format!(
                "{name} deploys AGI without adequate safeguards. Global catastrophe."
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FactionKind;
    use crate::state::{FactionState, Resources};

    fn deployer(safety_score: f64, can_deploy: bool) -> GameState {
        let mut f = FactionState::new(
            FactionId::new("us_lab"),
            "Lab",
            FactionKind::Lab,
            Resources::default(),
        );
        f.safety_score = safety_score;
        f.can_deploy_agi = can_deploy;
        GameState::new(vec![f])
    }

    #[test]
    fn test_safe_deployment_wins() {
        let mut state = deployer(SAFETY_THRESHOLDS.faction + 10.0, true);
        state.global_safety = SAFETY_THRESHOLDS.global + 10.0;
        process(&mut state, &[FactionId::new("us_lab")]);
        assert!(state.game_over);
        assert_eq!(state.winner, Some(FactionId::new("us_lab")));
        assert_eq!(state.ending, Some(Ending::SafeAgi));
        assert!(state.log.iter().any(|l| l.contains("safe AGI")));
    }

    #[test]
    fn test_unsafe_deployment_is_catastrophe() {
        let mut state = deployer(0.0, true);
        state.global_safety = 0.0;
        process(&mut state, &[FactionId::new("us_lab")]);
        assert!(state.game_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.ending, Some(Ending::Catastrophe));
        assert!(state.log.iter().any(|l| l.to_lowercase().contains("catastrophe")));
    }

    #[test]
    fn test_deploy_without_breakthrough_is_noop() {
        let mut state = deployer(100.0, false);
        state.global_safety = 100.0;
        process(&mut state, &[FactionId::new("us_lab")]);
        assert!(!state.game_over);
        assert!(state
            .log
            .iter()
            .any(|l| l.contains("without the breakthrough")));
    }

    #[test]
    fn test_second_deployment_moot_after_terminal() {
        let mut state = GameState::new(vec![
            {
                let mut f = FactionState::new(
                    FactionId::new("us_a"),
                    "A",
                    FactionKind::Lab,
                    Resources::default(),
                );
                f.can_deploy_agi = true;
                f
            },
            {
                let mut f = FactionState::new(
                    FactionId::new("cn_b"),
                    "B",
                    FactionKind::Lab,
                    Resources::default(),
                );
                f.can_deploy_agi = true;
                f.safety_score = 100.0;
                f
            },
        ]);
        state.global_safety = 0.0;
        // First deploy is a catastrophe; the second never resolves.
        process(
            &mut state,
            &[FactionId::new("us_a"), FactionId::new("cn_b")],
        );
        assert_eq!(state.ending, Some(Ending::Catastrophe));
        assert_eq!(state.winner, None);
    }
}
