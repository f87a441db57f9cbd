//! Terminal evaluation
//!
//! Classifications are checked in a fixed priority order so at most
//! one applies per resolved turn: dominance, public trust, alliance,
//! control, regulatory, elimination sweep, stalemate. Safe-AGI and
//! catastrophe endings are produced earlier, by the deployment check.

use crate::core::config::{MAX_TURN, SAFETY_THRESHOLDS, VICTORY};
use crate::core::types::{FactionId, FactionKind};
use crate::state::{Ending, FactionState, GameState};

/// Result of the pure regulatory-victory check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernmentVictory {
    pub victory: bool,
    pub winner: Option<FactionId>,
}

/// Pure check for the government "regulatory" victory: the game has
/// reached its final turn with every active lab above the faction
/// safety threshold and the world metric above the global threshold.
/// The winner is the government with the highest influence.
pub fn check_government_victory(state: &GameState) -> GovernmentVictory {
    let none = GovernmentVictory {
        victory: false,
        winner: None,
    };

    if state.turn < MAX_TURN {
        return none;
    }
    let mut labs = state.labs().peekable();
    if labs.peek().is_none() {
        return none;
    }
    if !labs.all(|l| l.safety_score >= SAFETY_THRESHOLDS.faction) {
        return none;
    }
    if state.global_safety < SAFETY_THRESHOLDS.global {
        return none;
    }

    let mut best: Option<&FactionState> = None;
    for government in state.governments() {
        if best.map_or(true, |b| government.resources.influence > b.resources.influence) {
            best = Some(government);
        }
    }
    match best {
        Some(government) => GovernmentVictory {
            victory: true,
            winner: Some(government.id.clone()),
        },
        None => none,
    }
}

/// Evaluate terminal conditions and end the game if one fires.
pub(crate) fn evaluate(state: &mut GameState) {
    if let Some(winner) = dominance_winner(state) {
        let name = faction_name(state, &winner);
        end(state, Ending::Dominance, Some(winner));
        state.push_log(format!(
            "{name} establishes decisive capability dominance."
        ));
        return;
    }

    if let Some(winner) = public_trust_winner(state) {
        let name = faction_name(state, &winner);
        end(state, Ending::PublicTrust, Some(winner));
        state.push_log(format!("{name} wins the public's lasting trust."));
        return;
    }

    if let Some(winner) = alliance_winner(state) {
        let name = faction_name(state, &winner);
        end(state, Ending::Alliance, Some(winner));
        state.push_log(format!(
            "{name} leads a bloc alliance that now sets the terms of the race."
        ));
        return;
    }

    if let Some(winner) = control_winner(state) {
        let name = faction_name(state, &winner);
        end(state, Ending::Control, Some(winner));
        state.push_log(format!("{name} assumes effective control of the field."));
        return;
    }

    let regulatory = check_government_victory(state);
    if regulatory.victory {
        if let Some(winner) = regulatory.winner {
            let name = faction_name(state, &winner);
            end(state, Ending::Regulatory, Some(winner));
            state.push_log(format!(
                "{name} shepherds the race to a safe conclusion. Regulatory victory."
            ));
            return;
        }
    }

    eliminate_failed_factions(state);
    if state.factions.iter().filter(|f| f.active()).count() < 2 {
        end(state, Ending::Collapse, None);
        state.push_log("The race collapses with no credible contender left.");
        return;
    }

    if state.turn >= MAX_TURN {
        end(state, Ending::Stalemate, None);
        state.push_log("The decade closes without resolution. Stalemate.");
    }
}

fn end(state: &mut GameState, ending: Ending, winner: Option<FactionId>) {
    state.game_over = true;
    state.ending = Some(ending);
    state.winner = winner;
}

fn faction_name(state: &GameState, id: &FactionId) -> String {
    state
        .faction(id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// A lab both past the absolute capability bar and clear of the
/// runner-up by the dominance margin.
fn dominance_winner(state: &GameState) -> Option<FactionId> {
    let mut leader: Option<&FactionState> = None;
    let mut runner_up = 0.0;
    for lab in state.labs() {
        match leader {
            Some(l) if lab.capability_score > l.capability_score => {
                runner_up = l.capability_score;
                leader = Some(lab);
            }
            Some(_) if lab.capability_score > runner_up => {
                runner_up = lab.capability_score;
            }
            None => leader = Some(lab),
            _ => {}
        }
    }
    let leader = leader?;
    if leader.capability_score >= VICTORY.dominance_capability
        && leader.capability_score >= runner_up + VICTORY.dominance_margin
    {
        Some(leader.id.clone())
    } else {
        None
    }
}

fn public_trust_winner(state: &GameState) -> Option<FactionId> {
    state
        .labs()
        .find(|l| l.resources.trust >= VICTORY.trust_win)
        .map(|l| l.id.clone())
}

/// A bloc whose active members jointly clear the alliance influence
/// bar wins through its most influential member. Blocs are scanned in
/// first-appearance order for determinism.
fn alliance_winner(state: &GameState) -> Option<FactionId> {
    let mut blocs_seen: Vec<&str> = Vec::new();
    for faction in state.factions.iter().filter(|f| f.active()) {
        let bloc = faction.id.bloc();
        if blocs_seen.contains(&bloc) {
            continue;
        }
        blocs_seen.push(bloc);

        let members: Vec<&FactionState> = state
            .factions
            .iter()
            .filter(|f| f.active() && f.id.bloc() == bloc)
            .collect();
        if members.len() < 2 {
            continue;
        }
        let combined: f64 = members.iter().map(|m| m.resources.influence).sum();
        if combined >= VICTORY.alliance_influence {
            let mut best: Option<&FactionState> = None;
            for member in members {
                if best.map_or(true, |b| member.resources.influence > b.resources.influence) {
                    best = Some(member);
                }
            }
            return best.map(|m| m.id.clone());
        }
    }
    None
}

fn control_winner(state: &GameState) -> Option<FactionId> {
    state
        .factions
        .iter()
        .filter(|f| f.active())
        .find(|f| f.resources.influence >= VICTORY.control_influence)
        .map(|f| f.id.clone())
}

/// Mark factions that fell out of the race: trust collapse, a
/// government coup, or a lab left hopelessly behind the capability
/// leader after the grace period.
fn eliminate_failed_factions(state: &mut GameState) {
    let leader_capability = state
        .labs()
        .map(|l| l.capability_score)
        .fold(0.0_f64, f64::max);
    let turn = state.turn;

    let mut eliminated: Vec<(FactionId, String, &'static str)> = Vec::new();
    for faction in state.factions.iter().filter(|f| f.active()) {
        let reason = if faction.resources.trust <= VICTORY.collapse_trust {
            Some("collapses under total public distrust")
        } else if faction.kind == FactionKind::Government
            && faction.resources.trust < VICTORY.coup_trust
            && faction.resources.influence < VICTORY.coup_influence
        {
            Some("is overthrown in a coup")
        } else if faction.kind == FactionKind::Lab
            && turn > VICTORY.obsolescence_grace_turns
            && leader_capability > 0.0
            && faction.capability_score < VICTORY.obsolescence_fraction * leader_capability
        {
            Some("fades into obsolescence")
        } else {
            None
        };
        if let Some(reason) = reason {
            eliminated.push((faction.id.clone(), faction.name.clone(), reason));
        }
    }

    for (id, name, reason) in eliminated {
        if let Some(faction) = state.faction_mut(&id) {
            faction.eliminated = true;
        }
        state.push_log(format!("{name} {reason}."));
    }
}
