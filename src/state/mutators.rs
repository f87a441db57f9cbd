//! Bounded-delta appliers
//!
//! Every change to faction state from outside the engine core (tech
//! effects, event choices, gamemaster directives) flows through these
//! functions, so the values they accept bound the blast radius of any
//! external collaborator.

use crate::content::Effect;
use crate::core::types::{Branch, FactionId, ResourceKind, ScoreKind, StatKind};
use crate::state::{FactionState, GameState};

/// Apply a resource delta. Pools are floored at 0; `trust` is also
/// capped at 100.
pub fn apply_resource_delta(faction: &mut FactionState, kind: ResourceKind, amount: f64) {
    let slot = match kind {
        ResourceKind::Compute => &mut faction.resources.compute,
        ResourceKind::Talent => &mut faction.resources.talent,
        ResourceKind::Capital => &mut faction.resources.capital,
        ResourceKind::Data => &mut faction.resources.data,
        ResourceKind::Influence => &mut faction.resources.influence,
        ResourceKind::Trust => &mut faction.resources.trust,
    };
    *slot = (*slot + amount).max(0.0);
    if kind == ResourceKind::Trust {
        faction.resources.trust = faction.resources.trust.min(100.0);
    }
}

/// Apply a score delta. Scores are unbounded upward, floored at 0.
pub fn apply_score_delta(faction: &mut FactionState, kind: ScoreKind, amount: f64) {
    let slot = match kind {
        ScoreKind::Capability => &mut faction.capability_score,
        ScoreKind::Safety => &mut faction.safety_score,
    };
    *slot = (*slot + amount).max(0.0);
}

/// Apply a stat delta, clamped [0,100].
pub fn apply_stat_delta(faction: &mut FactionState, kind: StatKind, amount: f64) {
    let slot = match kind {
        StatKind::SafetyCulture => &mut faction.safety_culture,
        StatKind::Opsec => &mut faction.opsec,
    };
    *slot = (*slot + amount).clamp(0.0, 100.0);
}

/// Accumulate branch research, floored at 0.
pub fn apply_research_delta(faction: &mut FactionState, branch: Branch, amount: f64) {
    let slot = faction.research.get_mut(branch);
    *slot = (*slot + amount).max(0.0);
}

/// Accumulate exposure, floored at 0.
pub fn add_exposure(faction: &mut FactionState, amount: f64) {
    faction.exposure = (faction.exposure + amount).max(0.0);
}

/// Adjust the world safety metric, clamped [0,100].
pub fn apply_global_safety_delta(state: &mut GameState, amount: f64) {
    state.global_safety = (state.global_safety + amount).clamp(0.0, 100.0);
}

/// Apply one tagged effect to a faction (or to the world metric for
/// global-safety effects). Returns false if the faction is unknown.
///
/// This is the single consumption site for externally-produced effects;
/// the match is exhaustive so a new effect kind is a compile error here.
pub fn apply_effect(state: &mut GameState, faction_id: &FactionId, effect: &Effect) -> bool {
    match effect {
        Effect::GlobalSafety { amount } => {
            apply_global_safety_delta(state, *amount);
            true
        }
        Effect::Resource { resource, amount } => {
            with_faction(state, faction_id, |f| {
                apply_resource_delta(f, *resource, *amount)
            })
        }
        Effect::Score { score, amount } => {
            with_faction(state, faction_id, |f| apply_score_delta(f, *score, *amount))
        }
        Effect::Stat { stat, amount } => {
            with_faction(state, faction_id, |f| apply_stat_delta(f, *stat, *amount))
        }
        Effect::Research { branch, amount } => {
            with_faction(state, faction_id, |f| {
                apply_research_delta(f, *branch, *amount)
            })
        }
        Effect::Exposure { amount } => {
            with_faction(state, faction_id, |f| add_exposure(f, *amount))
        }
        Effect::UnlockAgi => with_faction(state, faction_id, |f| f.can_deploy_agi = true),
    }
}

fn with_faction(
    state: &mut GameState,
    faction_id: &FactionId,
    apply: impl FnOnce(&mut FactionState),
) -> bool {
    match state.faction_mut(faction_id) {
        Some(faction) => {
            apply(faction);
            true
        }
        None => false,
    }
}
