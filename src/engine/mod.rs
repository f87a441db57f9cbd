//! Turn resolution engine
//!
//! [`resolve_turn`] is the authoritative reducer for [`GameState`]: one
//! call fully resolves one turn, synchronously and in place. Phases run
//! in a fixed order:
//!
//! 1. calendar advance
//! 2. passive income (no RNG)
//! 3. action resolution, faction by faction in state order
//! 4. detection sweep
//! 5. tech unlock (single pass, no same-turn prereq chaining)
//! 6. queued AGI deployments
//! 7. global safety recompute
//! 8. terminal evaluation
//!
//! # Determinism
//!
//! RNG draws happen in a documented order and nowhere else: one draw
//! per valid espionage action as actions resolve, then one draw per
//! exposed faction (state order) in the detection sweep. Faction
//! iteration always follows `GameState::factions` insertion order, so
//! identical (state, choices, seed) triples replay identically.

mod deploy;
mod detection;
mod espionage;
mod income;
mod resolve;
mod targeting;
mod tech;
pub mod victory;

pub use targeting::{regulate_target, subsidize_target};
pub use victory::{check_government_victory, GovernmentVictory};

use std::collections::HashMap;

use rand::Rng;

use crate::actions::ActionChoice;
use crate::content::TechTree;
use crate::core::config::GLOBAL_SAFETY_BLEND;
use crate::core::types::FactionId;
use crate::state::GameState;

/// Resolve one turn. No-op (plus a log line) if the game is over.
pub fn resolve_turn<R: Rng>(
    state: &mut GameState,
    choices: &HashMap<FactionId, Vec<ActionChoice>>,
    tree: &TechTree,
    rng: &mut R,
) {
    if state.game_over {
        state.push_log("The game is over; no further turns can be resolved.");
        return;
    }

    state.turn += 1;
    state.calendar.advance();
    state.push_log(format!("=== {} ===", state.calendar.label()));

    income::apply(state);
    let pending_deploys = resolve::resolve_actions(state, choices, rng);
    detection::run(state, rng);
    tech::unlock_pass(state, tree);
    deploy::process(state, &pending_deploys);

    recompute_global_safety(state);

    if !state.game_over {
        victory::evaluate(state);
    }
}

/// Reconcile the world safety metric against faction safety scores.
///
/// Explicit global-safety effects applied during the turn persist
/// through the carry term of the blend.
fn recompute_global_safety(state: &mut GameState) {
    let scores: Vec<f64> = state
        .factions
        .iter()
        .filter(|f| f.active())
        .map(|f| f.safety_score.min(100.0))
        .collect();
    if scores.is_empty() {
        return;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    state.global_safety = (GLOBAL_SAFETY_BLEND.carry_weight * state.global_safety
        + GLOBAL_SAFETY_BLEND.score_weight * mean)
        .clamp(0.0, 100.0);
}
