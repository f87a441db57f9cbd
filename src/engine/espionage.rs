//! Espionage resolution

use rand::Rng;

use crate::core::config::ESPIONAGE;
use crate::core::types::{Branch, FactionId, ResourceKind};
use crate::state::mutators;
use crate::state::GameState;

/// Resolve one espionage attempt. Returns whether the action resolved
/// (invalid targets are rejected without consuming an RNG draw).
///
/// Success copies a fraction of the target's capabilities research into
/// the attacker's ledger; the target's own total is unaffected. Failure
/// raises the attacker's exposure.
pub(crate) fn resolve<R: Rng>(
    state: &mut GameState,
    attacker_id: &FactionId,
    attacker_name: &str,
    target: Option<&FactionId>,
    rng: &mut R,
) -> bool {
    let valid_target = target.filter(|t| {
        *t != attacker_id
            && state
                .faction(t)
                .map_or(false, |f| f.active())
    });
    let Some(target_id) = valid_target else {
        state.push_log(format!(
            "{attacker_name}: invalid action, espionage needs a known rival target."
        ));
        return false;
    };
    let target_id = target_id.clone();

    let cost = crate::actions::ActionId::Espionage.capital_cost();
    let (attacker_opsec, attacker_capital) = match state.faction(attacker_id) {
        Some(f) => (f.opsec, f.resources.capital),
        None => return false,
    };
    if attacker_capital < cost {
        state.push_log(format!(
            "{attacker_name} cannot afford espionage and stands down."
        ));
        return false;
    }

    let (target_opsec, target_capabilities, target_name) = match state.faction(&target_id) {
        Some(f) => (f.opsec, f.research.capabilities, f.name.clone()),
        None => return false,
    };

    if let Some(attacker) = state.faction_mut(attacker_id) {
        mutators::apply_resource_delta(attacker, ResourceKind::Capital, -cost);
    }

    let success_chance = (ESPIONAGE.base_success
        + attacker_opsec * ESPIONAGE.opsec_attack_factor
        - target_opsec * ESPIONAGE.opsec_defense_factor)
        .clamp(ESPIONAGE.min_success, ESPIONAGE.max_success);

    let draw = rng.gen::<f64>();
    if draw < success_chance {
        let stolen = target_capabilities * ESPIONAGE.steal_fraction;
        if let Some(attacker) = state.faction_mut(attacker_id) {
            mutators::apply_research_delta(attacker, Branch::Capabilities, stolen);
        }
        state.push_log(format!(
            "{attacker_name} steals capabilities research from {target_name}."
        ));
    } else {
        if let Some(attacker) = state.faction_mut(attacker_id) {
            mutators::add_exposure(attacker, ESPIONAGE.failure_exposure);
        }
        state.push_log(format!(
            "{attacker_name}'s espionage against {target_name} fails, raising its exposure."
        ));
    }
    true
}
