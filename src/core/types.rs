//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for factions.
///
/// Ids carry a geopolitical bloc prefix before the first underscore
/// (e.g. `us_nimbus`, `cn_gov`) which targeting heuristics use to tell
/// allies from rivals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionId(pub String);

impl FactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bloc prefix of this id (`us` for `us_nimbus`).
    ///
    /// Ids without an underscore are their own bloc.
    pub fn bloc(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    /// Whether two factions belong to the same geopolitical bloc.
    pub fn same_bloc(&self, other: &FactionId) -> bool {
        self.bloc() == other.bloc()
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for technology nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechId(pub String);

impl TechId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TechId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Faction archetype, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactionKind {
    Lab,
    Government,
}

/// Research category with an independently accumulated point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Capabilities,
    Safety,
    Ops,
    Policy,
}

impl Branch {
    pub const ALL: [Branch; 4] = [
        Branch::Capabilities,
        Branch::Safety,
        Branch::Ops,
        Branch::Policy,
    ];
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Branch::Capabilities => "capabilities",
            Branch::Safety => "safety",
            Branch::Ops => "ops",
            Branch::Policy => "policy",
        };
        f.write_str(name)
    }
}

/// Whether an action is declared publicly or concealed.
///
/// Openness trades research efficiency and trust against exposure risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Openness {
    Open,
    Secret,
}

/// The six faction resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Compute,
    Talent,
    Capital,
    Data,
    Influence,
    Trust,
}

/// Unbounded progress scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Capability,
    Safety,
}

/// Bounded [0,100] organizational stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    SafetyCulture,
    Opsec,
}
