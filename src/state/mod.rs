//! Game state - the root aggregate mutated only by the turn engine

pub mod mutators;
pub mod scenario;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::calendar::Calendar;
use crate::core::types::{Branch, FactionId, FactionKind, TechId};

/// A faction's six resource pools.
///
/// Values are clamped to [0,100] at construction. During play they are
/// floored at 0; only `trust` stays hard-capped at 100 because every
/// trust-keyed rule reads it as a [0,100] quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub compute: f64,
    pub talent: f64,
    pub capital: f64,
    pub data: f64,
    pub influence: f64,
    pub trust: f64,
}

impl Resources {
    /// Clamp every pool into [0,100]. Applied once at faction creation.
    pub fn clamped(self) -> Self {
        let c = |v: f64| v.clamp(0.0, 100.0);
        Self {
            compute: c(self.compute),
            talent: c(self.talent),
            capital: c(self.capital),
            data: c(self.data),
            influence: c(self.influence),
            trust: c(self.trust),
        }
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            compute: 20.0,
            talent: 20.0,
            capital: 20.0,
            data: 20.0,
            influence: 20.0,
            trust: 50.0,
        }
    }
}

/// Per-branch accumulated research points.
///
/// Totals never decrease: espionage copies research into the thief's
/// ledger and leaves the victim's untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub capabilities: f64,
    pub safety: f64,
    pub ops: f64,
    pub policy: f64,
}

impl Research {
    pub fn get(&self, branch: Branch) -> f64 {
        match branch {
            Branch::Capabilities => self.capabilities,
            Branch::Safety => self.safety,
            Branch::Ops => self.ops,
            Branch::Policy => self.policy,
        }
    }

    pub fn get_mut(&mut self, branch: Branch) -> &mut f64 {
        match branch {
            Branch::Capabilities => &mut self.capabilities,
            Branch::Safety => &mut self.safety,
            Branch::Ops => &mut self.ops,
            Branch::Policy => &mut self.policy,
        }
    }
}

/// One competing faction (AI lab or government).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionState {
    pub id: FactionId,
    pub name: String,
    pub kind: FactionKind,

    pub resources: Resources,
    pub safety_culture: f64,
    pub opsec: f64,

    pub capability_score: f64,
    pub safety_score: f64,

    pub research: Research,
    pub unlocked_techs: HashSet<TechId>,

    /// Accumulated risk from secret actions; reset to 0 when detected.
    pub exposure: f64,

    /// Latched by an `UnlockAgi` tech effect. Never reset.
    pub can_deploy_agi: bool,

    /// Set by loss endings (obsolescence, collapse, coup). Eliminated
    /// factions stop earning income and acting, and are ignored by
    /// victory checks.
    #[serde(default)]
    pub eliminated: bool,
}

impl FactionState {
    pub fn new(
        id: FactionId,
        name: impl Into<String>,
        kind: FactionKind,
        resources: Resources,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            resources: resources.clamped(),
            safety_culture: 50.0,
            opsec: 50.0,
            capability_score: 0.0,
            safety_score: 0.0,
            research: Research::default(),
            unlocked_techs: HashSet::new(),
            exposure: 0.0,
            can_deploy_agi: false,
            eliminated: false,
        }
    }

    pub fn is_lab(&self) -> bool {
        self.kind == FactionKind::Lab
    }

    pub fn is_government(&self) -> bool {
        self.kind == FactionKind::Government
    }

    /// Alive and still in the race.
    pub fn active(&self) -> bool {
        !self.eliminated
    }
}

/// Terminal classification of a finished game. At most one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    SafeAgi,
    Catastrophe,
    Dominance,
    PublicTrust,
    Alliance,
    Control,
    Regulatory,
    Collapse,
    Stalemate,
}

/// Root aggregate. Exclusively owned by the caller between turns and
/// mutated only by `engine::resolve_turn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub turn: u32,
    pub calendar: Calendar,

    /// World-level safety metric, clamped [0,100]. Recomputed every
    /// turn from faction safety scores; actions touch it only through
    /// explicit global-safety effects.
    pub global_safety: f64,

    pub game_over: bool,
    /// Set only for victories; stays `None` for catastrophe, collapse
    /// and stalemate.
    pub winner: Option<FactionId>,
    #[serde(default)]
    pub ending: Option<Ending>,

    /// Iteration order over factions is insertion order and is part of
    /// the determinism contract.
    pub factions: Vec<FactionState>,

    pub log: Vec<String>,
}

impl GameState {
    /// Build an initial state from faction definitions. Resources are
    /// clamped into [0,100] by `FactionState::new`; global safety
    /// starts at the midpoint.
    pub fn new(factions: Vec<FactionState>) -> Self {
        Self {
            turn: 0,
            calendar: Calendar::default(),
            global_safety: 50.0,
            game_over: false,
            winner: None,
            ending: None,
            factions,
            log: Vec::new(),
        }
    }

    pub fn faction(&self, id: &FactionId) -> Option<&FactionState> {
        self.factions.iter().find(|f| &f.id == id)
    }

    pub fn faction_mut(&mut self, id: &FactionId) -> Option<&mut FactionState> {
        self.factions.iter_mut().find(|f| &f.id == id)
    }

    /// Faction ids in deterministic iteration order.
    pub fn faction_ids(&self) -> Vec<FactionId> {
        self.factions.iter().map(|f| f.id.clone()).collect()
    }

    pub fn labs(&self) -> impl Iterator<Item = &FactionState> {
        self.factions.iter().filter(|f| f.is_lab() && f.active())
    }

    pub fn governments(&self) -> impl Iterator<Item = &FactionState> {
        self.factions
            .iter()
            .filter(|f| f.is_government() && f.active())
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab(id: &str) -> FactionState {
        FactionState::new(
            FactionId::new(id),
            id.to_uppercase(),
            FactionKind::Lab,
            Resources::default(),
        )
    }

    #[test]
    fn test_resources_clamped_at_creation() {
        let f = FactionState::new(
            FactionId::new("us_x"),
            "X",
            FactionKind::Lab,
            Resources {
                compute: 250.0,
                talent: -5.0,
                capital: 30.0,
                data: 101.0,
                influence: 0.0,
                trust: 120.0,
            },
        );
        assert_eq!(f.resources.compute, 100.0);
        assert_eq!(f.resources.talent, 0.0);
        assert_eq!(f.resources.capital, 30.0);
        assert_eq!(f.resources.data, 100.0);
        assert_eq!(f.resources.trust, 100.0);
    }

    #[test]
    fn test_faction_lookup_preserves_order() {
        let state = GameState::new(vec![lab("us_a"), lab("us_b"), lab("cn_c")]);
        let ids = state.faction_ids();
        assert_eq!(ids[0], FactionId::new("us_a"));
        assert_eq!(ids[2], FactionId::new("cn_c"));
        assert!(state.faction(&FactionId::new("us_b")).is_some());
        assert!(state.faction(&FactionId::new("missing")).is_none());
    }

    #[test]
    fn test_research_accessors() {
        let mut r = Research::default();
        *r.get_mut(Branch::Ops) += 7.5;
        assert_eq!(r.get(Branch::Ops), 7.5);
        assert_eq!(r.get(Branch::Safety), 0.0);
    }
}
