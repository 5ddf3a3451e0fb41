//! Routine Composer: selects products and derives schedule, instructions and tips.
//!
//! Deterministic: the same catalog and inputs always produce an equal `Routine`.

use crate::catalog::{ConcernSet, ProductCatalog, SkinType};
use crate::routine::instructions::build_instructions;
use crate::routine::schedule::weekly_schedule;
use crate::routine::tips::personalized_tips;
use crate::routine::{Routine, RoutineError, RoutineTimes, SelectedProducts};

/// Composes a routine for a validated skin type.
///
/// Steps:
/// 1. Base lineup by skin type
/// 2. One serum per concern with a catalog entry, in concern order
/// 3. Weekly schedule: base template + ordered override rules
/// 4. Instructions with serum lines spliced in
/// 5. Skin-type tips, then concern tips
pub fn compose_routine(
    catalog: &ProductCatalog,
    skin_type: SkinType,
    concerns: &ConcernSet,
    morning_time: &str,
    evening_time: &str,
) -> Routine {
    let lineup = catalog.lineup(skin_type);

    let serums = concerns
        .iter()
        .filter_map(|c| catalog.serum(c).cloned())
        .collect();

    let products = SelectedProducts {
        cleanser: lineup.cleanser.clone(),
        toner: lineup.toner.clone(),
        moisturizer: lineup.moisturizer.clone(),
        sunscreen: lineup.sunscreen.clone(),
        serums,
    };

    let instructions = build_instructions(&products);

    Routine {
        skin_type,
        concerns: concerns.clone(),
        schedule: RoutineTimes {
            morning: morning_time.to_string(),
            evening: evening_time.to_string(),
        },
        products,
        weekly_schedule: weekly_schedule(skin_type, concerns),
        instructions,
        personalized_tips: personalized_tips(skin_type, concerns),
    }
}

/// Composes from caller-supplied strings.
///
/// The skin type is validated before any catalog lookup; unknown concerns are dropped.
pub fn compose_routine_from_raw<S: AsRef<str>>(
    catalog: &ProductCatalog,
    skin_type: &str,
    concerns: &[S],
    morning_time: &str,
    evening_time: &str,
) -> Result<Routine, RoutineError> {
    let skin_type: SkinType = skin_type.parse()?;
    let concerns = ConcernSet::from_raw(concerns);
    Ok(compose_routine(
        catalog,
        skin_type,
        &concerns,
        morning_time,
        evening_time,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
