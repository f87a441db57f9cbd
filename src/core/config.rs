//! Engine tunables with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other. These values have been tuned to
//! produce a race that stays competitive for most of a full game.

/// Action choices honored per faction per turn. Excess choices are
/// silently truncated.
pub const ACTION_POINTS_PER_TURN: usize = 2;

/// Turn at which the game ends in stalemate (or regulatory victory)
/// if no other terminal condition fired. 40 quarters = 10 years.
pub const MAX_TURN: u32 = 40;

/// Calendar start: turn 0 is Q1 of this year.
pub const START_YEAR: u32 = 2026;

/// Research points a research action contributes to its branch before
/// openness modifiers.
pub const BASE_RESEARCH_GAIN: f64 = 12.0;

/// Newest log entries kept when serializing a game state.
pub const LOG_RETENTION: usize = 50;

/// Exposure accrued by each secret action.
pub const EXPOSURE_PER_SECRET_ACTION: f64 = 6.0;

/// Largest per-effect magnitude accepted from external (gamemaster or
/// event) directives at the validation boundary.
pub const MAX_EXTERNAL_EFFECT_MAGNITUDE: f64 = 50.0;

/// Passive income parameters.
///
/// Lab income scales with public standing:
/// `lab_base * (1 + (trust + influence) / standing_scale)`.
/// At trust=100, influence=100 a lab earns 6.0 capital per quarter;
/// a distrusted, uninfluential lab earns the 2.0 floor. Income is
/// never negative.
#[derive(Debug, Clone, Copy)]
pub struct IncomeParams {
    pub lab_base: f64,
    pub standing_scale: f64,
    pub government_base: f64,
}

pub const INCOME: IncomeParams = IncomeParams {
    lab_base: 2.0,
    standing_scale: 100.0,
    government_base: 1.5,
};

/// Side effects applied by an action's openness declaration.
#[derive(Debug, Clone, Copy)]
pub struct OpennessModifiers {
    /// Multiplier on branch research gain.
    pub research_multiplier: f64,
    pub trust_delta: f64,
    pub global_safety_delta: f64,
    pub safety_delta: f64,
    pub capability_delta: f64,
}

/// Open conduct: slower research, better standing.
pub const OPEN_MODIFIERS: OpennessModifiers = OpennessModifiers {
    research_multiplier: 0.9,
    trust_delta: 2.0,
    global_safety_delta: 1.0,
    safety_delta: 1.0,
    capability_delta: 0.0,
};

/// Secret conduct: faster research, eroding standing, rising exposure.
pub const SECRET_MODIFIERS: OpennessModifiers = OpennessModifiers {
    research_multiplier: 1.1,
    trust_delta: -3.0,
    global_safety_delta: -1.0,
    safety_delta: -2.0,
    capability_delta: 1.0,
};

/// Detection probability model.
///
/// `chance = min(max_chance, base_chance + exposure * per_exposure
///               - opsec * opsec_factor)`, one draw per exposed faction
/// per turn.
#[derive(Debug, Clone, Copy)]
pub struct DetectionParams {
    pub base_chance: f64,
    pub per_exposure: f64,
    pub opsec_factor: f64,
    pub max_chance: f64,
    /// Trust lost when covert activity is exposed.
    pub trust_penalty: f64,
}

pub const DETECTION: DetectionParams = DetectionParams {
    base_chance: 0.05,
    per_exposure: 0.02,
    opsec_factor: 0.002,
    max_chance: 0.9,
    trust_penalty: 8.0,
};

/// Espionage probability model.
///
/// `success = clamp(base_success + attacker.opsec * opsec_attack_factor
///                  - target.opsec * opsec_defense_factor,
///                  min_success, max_success)`.
#[derive(Debug, Clone, Copy)]
pub struct EspionageParams {
    pub base_success: f64,
    pub opsec_attack_factor: f64,
    pub opsec_defense_factor: f64,
    pub min_success: f64,
    pub max_success: f64,
    /// Fraction of the target's capabilities research copied on success.
    /// The target keeps its own total; espionage models copying, not
    /// destruction.
    pub steal_fraction: f64,
    /// Exposure added to the attacker on a failed attempt.
    pub failure_exposure: f64,
}

pub const ESPIONAGE: EspionageParams = EspionageParams {
    base_success: 0.4,
    opsec_attack_factor: 0.003,
    opsec_defense_factor: 0.004,
    min_success: 0.05,
    max_success: 0.95,
    steal_fraction: 0.25,
    failure_exposure: 8.0,
};

/// Safety gates for AGI deployment and regulatory victory.
#[derive(Debug, Clone, Copy)]
pub struct SafetyThresholds {
    /// Minimum deploying-faction safety score.
    pub faction: f64,
    /// Minimum world-level global safety.
    pub global: f64,
}

pub const SAFETY_THRESHOLDS: SafetyThresholds = SafetyThresholds {
    faction: 50.0,
    global: 50.0,
};

/// Government subsidy transfer.
#[derive(Debug, Clone, Copy)]
pub struct SubsidyParams {
    /// Capital transferred to the supported lab.
    pub amount: f64,
    /// Minimum government capital required; below this the government
    /// substitutes a policy action instead.
    pub min_capital: f64,
}

pub const SUBSIDY: SubsidyParams = SubsidyParams {
    amount: 15.0,
    min_capital: 15.0,
};

/// Capability score stripped from the regulated lab.
pub const REGULATE_CAPABILITY_PENALTY: f64 = 10.0;

/// Global safety recompute blend.
///
/// Each turn the world metric is reconciled against faction safety
/// scores: `gs = carry_weight * gs + score_weight * mean(min(score, 100))`,
/// clamped [0,100]. The carry term preserves explicit global-safety
/// effects applied during the turn.
#[derive(Debug, Clone, Copy)]
pub struct GlobalSafetyBlend {
    pub carry_weight: f64,
    pub score_weight: f64,
}

pub const GLOBAL_SAFETY_BLEND: GlobalSafetyBlend = GlobalSafetyBlend {
    carry_weight: 0.7,
    score_weight: 0.3,
};

/// Thresholds for non-AGI terminal classifications, checked in the
/// fixed priority order documented in `engine::victory`.
#[derive(Debug, Clone, Copy)]
pub struct VictoryParams {
    /// Absolute capability score required for a dominance victory.
    pub dominance_capability: f64,
    /// Lead over the runner-up required for a dominance victory.
    pub dominance_margin: f64,
    /// Trust at which a lab wins outright on public trust.
    pub trust_win: f64,
    /// Influence at which a single faction wins by control.
    pub control_influence: f64,
    /// Combined bloc influence for an alliance victory.
    pub alliance_influence: f64,
    /// A lab below this fraction of the capability leader is obsolete.
    pub obsolescence_fraction: f64,
    /// Turns before obsolescence is evaluated at all.
    pub obsolescence_grace_turns: u32,
    /// Trust at or below which a faction collapses.
    pub collapse_trust: f64,
    /// A government below both coup thresholds is overthrown.
    pub coup_trust: f64,
    pub coup_influence: f64,
}

pub const VICTORY: VictoryParams = VictoryParams {
    dominance_capability: 150.0,
    dominance_margin: 50.0,
    trust_win: 95.0,
    control_influence: 90.0,
    alliance_influence: 150.0,
    obsolescence_fraction: 0.15,
    obsolescence_grace_turns: 8,
    collapse_trust: 2.0,
    coup_trust: 10.0,
    coup_influence: 20.0,
};
