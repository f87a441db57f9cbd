//! Calendar system for quarter/year tracking
//!
//! One resolved turn is one quarter. Quarters wrap 1→2→3→4→1 with the
//! year incrementing on wrap.

use serde::{Deserialize, Serialize};

use crate::core::config::START_YEAR;

/// Calendar tracks game time with quarter granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub year: u32,
    /// Quarter in 1..=4.
    pub quarter: u8,
}

impl Calendar {
    pub fn new(year: u32, quarter: u8) -> Self {
        debug_assert!((1..=4).contains(&quarter));
        Self { year, quarter }
    }

    /// Advance one quarter, rolling the year on Q4 → Q1.
    pub fn advance(&mut self) {
        if self.quarter >= 4 {
            self.quarter = 1;
            self.year += 1;
        } else {
            self.quarter += 1;
        }
    }

    /// Short display form used in log lines, e.g. `Q3 2027`.
    pub fn label(&self) -> String {
        format!("Q{} {}", self.quarter, self.year)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(START_YEAR, 1)
    }
}
