pub mod catalog;

pub use catalog::{ActionChoice, ActionId};
