use serde::{Deserialize, Serialize};

use crate::catalog::{ConcernSet, SkinType};

/// Identity and preferences for one timetable request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub skin_type: SkinType,
    pub concerns: ConcernSet,
    pub morning_time: String,
    pub evening_time: String,
}
