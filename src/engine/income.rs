//! Passive income phase

use crate::core::config::INCOME;
use crate::core::types::FactionKind;
use crate::state::GameState;

/// Credit every active faction its quarterly income. Labs earn capital
/// scaled by public standing (trust + influence); governments draw a
/// flat baseline. Draws no RNG.
pub(crate) fn apply(state: &mut GameState) {
    for faction in state.factions.iter_mut().filter(|f| f.active()) {
        let income = match faction.kind {
            FactionKind::Lab => {
                let standing = faction.resources.trust + faction.resources.influence;
                INCOME.lab_base * (1.0 + standing / INCOME.standing_scale)
            }
            FactionKind::Government => INCOME.government_base,
        };
        faction.resources.capital += income.max(0.0);
    }
}
