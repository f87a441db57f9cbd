//! Action resolution phase

use std::collections::HashMap;

use rand::Rng;

use crate::actions::{ActionChoice, ActionId};
use crate::core::config::{
    ACTION_POINTS_PER_TURN, BASE_RESEARCH_GAIN, EXPOSURE_PER_SECRET_ACTION, OPEN_MODIFIERS,
    REGULATE_CAPABILITY_PENALTY, SECRET_MODIFIERS, SUBSIDY,
};
use crate::core::types::{FactionId, FactionKind, Openness, ResourceKind, ScoreKind};
use crate::engine::{espionage, targeting};
use crate::state::mutators;
use crate::state::GameState;

/// Resolve every faction's honored action choices in state order.
///
/// Returns the factions that issued `deploy_agi`, in submission order;
/// deployment itself is deferred until after the tech unlock pass so a
/// breakthrough unlocked this turn can back a same-turn deployment.
pub(crate) fn resolve_actions<R: Rng>(
    state: &mut GameState,
    choices: &HashMap<FactionId, Vec<ActionChoice>>,
    rng: &mut R,
) -> Vec<FactionId> {
    let mut pending_deploys = Vec::new();

    for id in state.faction_ids() {
        let kind = match state.faction(&id) {
            Some(f) if f.active() => f.kind,
            _ => continue,
        };
        let Some(faction_choices) = choices.get(&id) else {
            continue;
        };
        // Action-point cap: excess choices are silently truncated.
        for choice in faction_choices.iter().take(ACTION_POINTS_PER_TURN) {
            resolve_choice(state, &id, kind, choice, rng, &mut pending_deploys);
        }
    }

    pending_deploys
}

fn resolve_choice<R: Rng>(
    state: &mut GameState,
    id: &FactionId,
    kind: FactionKind,
    choice: &ActionChoice,
    rng: &mut R,
    pending_deploys: &mut Vec<FactionId>,
) {
    let name = match state.faction(id) {
        Some(f) => f.name.clone(),
        None => return,
    };
    let action = choice.action;

    if !action.valid_for(kind) {
        state.push_log(format!(
            "{name}: invalid action, {} is not available to this faction.",
            action.label()
        ));
        return;
    }

    // Espionage is covert by definition; the declared openness is
    // overridden rather than trusted.
    let openness = if action == ActionId::Espionage {
        Openness::Secret
    } else {
        choice.openness
    };

    let resolved = match action {
        ActionId::DeployAgi => {
            // Queued; eligibility and consequences are judged after the
            // tech unlock pass. No openness side effects until then.
            pending_deploys.push(id.clone());
            return;
        }
        ActionId::Subsidize => resolve_subsidize(state, id, &name, choice, openness),
        ActionId::Regulate => resolve_regulate(state, id, &name, choice),
        ActionId::Espionage => {
            espionage::resolve(state, id, &name, choice.target.as_ref(), rng)
        }
        _ => resolve_standard(state, id, &name, action, openness),
    };

    if resolved {
        apply_openness(state, id, openness);
    }
}

/// Apply a table-driven action: affordability check, fixed deltas,
/// branch research scaled by openness.
fn resolve_standard(
    state: &mut GameState,
    id: &FactionId,
    name: &str,
    action: ActionId,
    openness: Openness,
) -> bool {
    let affordable = state
        .faction(id)
        .map_or(false, |f| f.resources.capital >= action.capital_cost());
    if !affordable {
        state.push_log(format!(
            "{name} cannot afford {} and stands down.",
            action.label()
        ));
        return false;
    }

    for effect in action.base_effects() {
        mutators::apply_effect(state, id, effect);
    }

    if let Some(branch) = action.research_branch() {
        let multiplier = match openness {
            Openness::Open => OPEN_MODIFIERS.research_multiplier,
            Openness::Secret => SECRET_MODIFIERS.research_multiplier,
        };
        if let Some(faction) = state.faction_mut(id) {
            mutators::apply_research_delta(faction, branch, BASE_RESEARCH_GAIN * multiplier);
        }
    }

    let how = match openness {
        Openness::Open => "openly",
        Openness::Secret => "in secret",
    };
    state.push_log(format!("{name} carries out {} {how}.", action.label()));
    true
}

/// Transfer capital to the bloc's weakest lab, or fall back to policy
/// work when the treasury cannot cover the subsidy.
fn resolve_subsidize(
    state: &mut GameState,
    id: &FactionId,
    name: &str,
    choice: &ActionChoice,
    openness: Openness,
) -> bool {
    let capital = state.faction(id).map_or(0.0, |f| f.resources.capital);
    if capital < SUBSIDY.min_capital {
        state.push_log(format!(
            "{name} lacks the capital to subsidize and falls back to policy work."
        ));
        return resolve_standard(state, id, name, ActionId::Policy, openness);
    }

    let target_id = choice
        .target
        .clone()
        .or_else(|| targeting::subsidize_target(state, id));
    let Some(target_id) = target_id else {
        state.push_log(format!("{name} finds no allied lab to subsidize."));
        return false;
    };

    let valid_target = state
        .faction(&target_id)
        .map_or(false, |t| t.is_lab() && t.active() && t.id.same_bloc(id));
    if !valid_target {
        state.push_log(format!(
            "{name}: invalid action, {target_id} is not an allied lab to subsidize."
        ));
        return false;
    }

    let target_name = match state.faction(&target_id) {
        Some(t) => t.name.clone(),
        None => return false,
    };
    if let Some(government) = state.faction_mut(id) {
        mutators::apply_resource_delta(government, ResourceKind::Capital, -SUBSIDY.amount);
    }
    if let Some(lab) = state.faction_mut(&target_id) {
        mutators::apply_resource_delta(lab, ResourceKind::Capital, SUBSIDY.amount);
    }
    state.push_log(format!(
        "{name} subsidizes {target_name} with {} capital.",
        SUBSIDY.amount
    ));
    true
}

/// Curb the strongest rival-bloc lab's capability score.
fn resolve_regulate(
    state: &mut GameState,
    id: &FactionId,
    name: &str,
    choice: &ActionChoice,
) -> bool {
    let target_id = choice
        .target
        .clone()
        .or_else(|| targeting::regulate_target(state, id));
    let Some(target_id) = target_id else {
        // No non-allied lab exists; the action is simply omitted.
        state.push_log(format!("{name} finds no rival lab to regulate."));
        return false;
    };

    let valid_target = state
        .faction(&target_id)
        .map_or(false, |t| t.is_lab() && t.active() && !t.id.same_bloc(id));
    if !valid_target {
        state.push_log(format!(
            "{name}: invalid action, {target_id} is not a rival lab subject to regulation."
        ));
        return false;
    }

    let target_name = match state.faction(&target_id) {
        Some(t) => t.name.clone(),
        None => return false,
    };
    if let Some(lab) = state.faction_mut(&target_id) {
        mutators::apply_score_delta(lab, ScoreKind::Capability, -REGULATE_CAPABILITY_PENALTY);
    }
    if let Some(government) = state.faction_mut(id) {
        mutators::apply_resource_delta(government, ResourceKind::Influence, 2.0);
    }
    mutators::apply_global_safety_delta(state, 1.0);
    state.push_log(format!(
        "{name} regulates {target_name}, curbing its capability program."
    ));
    true
}

/// Openness side effects shared by every resolved action.
fn apply_openness(state: &mut GameState, id: &FactionId, openness: Openness) {
    let modifiers = match openness {
        Openness::Open => OPEN_MODIFIERS,
        Openness::Secret => SECRET_MODIFIERS,
    };
    if let Some(faction) = state.faction_mut(id) {
        mutators::apply_resource_delta(faction, ResourceKind::Trust, modifiers.trust_delta);
        mutators::apply_score_delta(faction, ScoreKind::Safety, modifiers.safety_delta);
        mutators::apply_score_delta(faction, ScoreKind::Capability, modifiers.capability_delta);
        if openness == Openness::Secret {
            mutators::add_exposure(faction, EXPOSURE_PER_SECRET_ACTION);
        }
    }
    mutators::apply_global_safety_delta(state, modifiers.global_safety_delta);
}
