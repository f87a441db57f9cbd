//! Built-in starting scenario

use crate::core::types::{FactionId, FactionKind};
use crate::state::{FactionState, GameState, Resources};

/// The default five-faction game: three frontier labs and two
/// governments split across the `us` and `cn` blocs.
pub fn standard_game() -> GameState {
    let factions = vec![
        FactionState::new(
            FactionId::new("us_nimbus"),
            "Nimbus AI",
            FactionKind::Lab,
            Resources {
                compute: 35.0,
                talent: 40.0,
                capital: 30.0,
                data: 30.0,
                influence: 25.0,
                trust: 55.0,
            },
        ),
        FactionState::new(
            FactionId::new("us_helios"),
            "Helios Labs",
            FactionKind::Lab,
            Resources {
                compute: 30.0,
                talent: 35.0,
                capital: 25.0,
                data: 40.0,
                influence: 20.0,
                trust: 60.0,
            },
        ),
        FactionState::new(
            FactionId::new("cn_tianshu"),
            "Tianshu Institute",
            FactionKind::Lab,
            Resources {
                compute: 40.0,
                talent: 30.0,
                capital: 35.0,
                data: 35.0,
                influence: 20.0,
                trust: 45.0,
            },
        ),
        FactionState::new(
            FactionId::new("us_gov"),
            "United States",
            FactionKind::Government,
            Resources {
                compute: 10.0,
                talent: 15.0,
                capital: 50.0,
                data: 15.0,
                influence: 60.0,
                trust: 50.0,
            },
        ),
        FactionState::new(
            FactionId::new("cn_gov"),
            "China",
            FactionKind::Government,
            Resources {
                compute: 15.0,
                talent: 15.0,
                capital: 55.0,
                data: 20.0,
                influence: 55.0,
                trust: 45.0,
            },
        ),
    ];

    GameState::new(factions)
}
