//! Frontier Race - Turn-Based AGI Race Simulation

pub mod actions;
pub mod content;
pub mod core;
pub mod engine;
pub mod persist;
pub mod state;
pub mod strategy;
