//! External content tables and the effect union they speak
//!
//! Content (tech trees, event effects, gamemaster directives) is
//! supplied from outside the engine and consumed read-only.

pub mod effect;
pub mod loader;
pub mod tech;

pub use effect::{effect_from_json, Effect};
pub use loader::{load_tech_tree, parse_tech_tree};
pub use tech::{standard_tech_tree, TechNode, TechTree};
