//! Detection sweep
//!
//! After actions resolve, every faction carrying exposure is checked
//! once, in state order. The sweep consumes exactly one RNG draw per
//! exposed faction so replays stay aligned.

use rand::Rng;

use crate::core::config::DETECTION;
use crate::core::types::ResourceKind;
use crate::state::mutators;
use crate::state::GameState;

pub(crate) fn run<R: Rng>(state: &mut GameState, rng: &mut R) {
    for id in state.faction_ids() {
        let (chance, name) = match state.faction(&id) {
            Some(f) if f.active() && f.exposure > 0.0 => {
                let chance = (DETECTION.base_chance + f.exposure * DETECTION.per_exposure
                    - f.opsec * DETECTION.opsec_factor)
                    .min(DETECTION.max_chance);
                (chance, f.name.clone())
            }
            _ => continue,
        };

        let draw = rng.gen::<f64>();
        if draw < chance {
            if let Some(faction) = state.faction_mut(&id) {
                mutators::apply_resource_delta(
                    faction,
                    ResourceKind::Trust,
                    -DETECTION.trust_penalty,
                );
                faction.exposure = 0.0;
            }
            state.push_log(format!(
                "{name}'s covert activity is detected; public trust plummets."
            ));
        }
    }
}
