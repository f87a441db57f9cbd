//! Bloc-aware targeting heuristics for government actions

use crate::core::types::FactionId;
use crate::state::{FactionState, GameState};

/// Lab a government supports with a subsidy: the same-bloc lab with the
/// lowest capability score (prop up the laggard).
pub fn subsidize_target(state: &GameState, government: &FactionId) -> Option<FactionId> {
    let mut best: Option<&FactionState> = None;
    for lab in state.labs().filter(|l| l.id.same_bloc(government)) {
        if best.map_or(true, |b| lab.capability_score < b.capability_score) {
            best = Some(lab);
        }
    }
    best.map(|l| l.id.clone())
}

/// Lab a government regulates: the highest-capability lab outside its
/// own bloc. `None` when every lab is allied.
pub fn regulate_target(state: &GameState, government: &FactionId) -> Option<FactionId> {
    let mut best: Option<&FactionState> = None;
    for lab in state.labs().filter(|l| !l.id.same_bloc(government)) {
        if best.map_or(true, |b| lab.capability_score > b.capability_score) {
            best = Some(lab);
        }
    }
    best.map(|l| l.id.clone())
}
