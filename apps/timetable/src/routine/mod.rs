// Routine Composer.
// Pure, synchronous mapping from skin type + concerns to a structured Routine.
// No I/O and no logging here; the HTTP handlers own both.

pub mod composer;
pub mod handlers;
pub mod instructions;
pub mod schedule;
pub mod tips;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{ConcernSet, ProductEntry, SkinType};

pub use composer::{compose_routine, compose_routine_from_raw};
pub use instructions::Instructions;
pub use schedule::{DayPlan, WeeklySchedule, Weekday};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutineError {
    #[error("Invalid skin type: '{0}'")]
    InvalidSkinType(String),
}

/// Display strings for the two daily routine slots. Not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTimes {
    pub morning: String,
    pub evening: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedProducts {
    pub cleanser: ProductEntry,
    pub toner: ProductEntry,
    pub moisturizer: ProductEntry,
    pub sunscreen: ProductEntry,
    /// One entry per concern with a catalog serum, in concern order.
    pub serums: Vec<ProductEntry>,
}

/// Fully composed recommendation for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub skin_type: SkinType,
    pub concerns: ConcernSet,
    pub schedule: RoutineTimes,
    pub products: SelectedProducts,
    pub weekly_schedule: WeeklySchedule,
    pub instructions: Instructions,
    pub personalized_tips: Vec<String>,
}
