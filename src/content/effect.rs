//! Tagged effect union and the validation boundary for untyped input

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_EXTERNAL_EFFECT_MAGNITUDE;
use crate::core::error::{RaceError, Result};
use crate::core::types::{Branch, ResourceKind, ScoreKind, StatKind};

/// One discrete change to faction state (or the world safety metric).
///
/// Tech nodes, event choices and gamemaster directives all speak this
/// union; every consumption site matches exhaustively so that adding a
/// kind is a compile-time-checked change everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    Resource { resource: ResourceKind, amount: f64 },
    Score { score: ScoreKind, amount: f64 },
    Stat { stat: StatKind, amount: f64 },
    Research { branch: Branch, amount: f64 },
    GlobalSafety { amount: f64 },
    Exposure { amount: f64 },
    /// Permanently flags the faction as able to deploy AGI.
    UnlockAgi,
}

impl Effect {
    fn amount(&self) -> Option<f64> {
        match self {
            Effect::Resource { amount, .. }
            | Effect::Score { amount, .. }
            | Effect::Stat { amount, .. }
            | Effect::Research { amount, .. }
            | Effect::GlobalSafety { amount }
            | Effect::Exposure { amount } => Some(*amount),
            Effect::UnlockAgi => None,
        }
    }
}

/// Decode an untyped JSON value into an [`Effect`] or reject it.
///
/// This is the boundary for effects produced outside the engine (the
/// gamemaster narrator, event tables loaded at runtime). Unknown kinds,
/// unknown fields, non-finite or oversized magnitudes never make it
/// past this function.
pub fn effect_from_json(value: &serde_json::Value) -> Result<Effect> {
    let effect: Effect = serde_json::from_value(value.clone())
        .map_err(|e| RaceError::InvalidEffect(e.to_string()))?;

    // Serde's internal tagging tolerates extra fields; reject them here
    // so a typoed field name fails loudly instead of being dropped.
    let allowed: &[&str] = match effect {
        Effect::Resource { .. } => &["kind", "resource", "amount"],
        Effect::Score { .. } => &["kind", "score", "amount"],
        Effect::Stat { .. } => &["kind", "stat", "amount"],
        Effect::Research { .. } => &["kind", "branch", "amount"],
        Effect::GlobalSafety { .. } | Effect::Exposure { .. } => &["kind", "amount"],
        Effect::UnlockAgi => &["kind"],
    };
    if let Some(object) = value.as_object() {
        for field in object.keys() {
            if !allowed.contains(&field.as_str()) {
                return Err(RaceError::InvalidEffect(format!(
                    "unknown field `{field}` in {} effect",
                    value["kind"].as_str().unwrap_or("?")
                )));
            }
        }
    }

    if let Some(amount) = effect.amount() {
        if !amount.is_finite() {
            return Err(RaceError::InvalidEffect(format!(
                "non-finite amount in {effect:?}"
            )));
        }
        if amount.abs() > MAX_EXTERNAL_EFFECT_MAGNITUDE {
            return Err(RaceError::InvalidEffect(format!(
                "amount {amount} exceeds the external limit of {MAX_EXTERNAL_EFFECT_MAGNITUDE}"
            )));
        }
    }

    Ok(effect)
}
