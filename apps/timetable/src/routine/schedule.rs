//! Seven-day treatment schedule.
//!
//! The base template is fixed. Personalization is an ordered rule table applied top to
//! bottom; a later rule touching the same day and field overwrites an earlier one.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Concern, ConcernSet, SkinType};

/// Calendar day. `Ord` follows Monday→Sunday, so a `BTreeMap` keyed by it iterates in
/// calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the schedule. An empty `am` or `pm` means the slot is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default)]
    pub am: String,
    #[serde(default)]
    pub pm: String,
    #[serde(default)]
    pub focus: String,
}

pub type WeeklySchedule = BTreeMap<Weekday, DayPlan>;

// ────────────────────────────────────────────────────────────────────────────
// Base template
// ────────────────────────────────────────────────────────────────────────────

const WEEKDAY_AM: &str = "Cleanser, Toner, Serum, Moisturizer, SPF 50";

/// (day, am, pm, focus)
const BASE_TEMPLATE: [(Weekday, &str, &str, &str); 7] = [
    (
        Weekday::Monday,
        WEEKDAY_AM,
        "Double Cleanse, Treatment Serum, Moisturizer",
        "Active Treatment Day",
    ),
    (
        Weekday::Tuesday,
        WEEKDAY_AM,
        "Double Cleanse, Hydrating Serum, Moisturizer",
        "Hydration Boost",
    ),
    (
        Weekday::Wednesday,
        WEEKDAY_AM,
        "Double Cleanse, Exfoliation Treatment, Recovery Serum",
        "Exfoliation & Renewal",
    ),
    (
        Weekday::Thursday,
        WEEKDAY_AM,
        "Double Cleanse, Treatment Serum, Moisturizer",
        "Targeted Treatment",
    ),
    (
        Weekday::Friday,
        WEEKDAY_AM,
        "Double Cleanse, Recovery Serum, Overnight Mask",
        "Weekend Prep & Recovery",
    ),
    (
        Weekday::Saturday,
        "Cleanser, Toner, Soothing Serum, Moisturizer, SPF 30",
        "Double Cleanse, Purifying Mask, Facial Oil",
        "Deep Treatment & Self-Care",
    ),
    (
        Weekday::Sunday,
        "Cleanser, Toner, Hydrating Serum, Moisturizer, SPF 30",
        "Double Cleanse, Hydrating Mask, Barrier Repair",
        "Restoration & Hydration",
    ),
];

pub fn base_schedule() -> WeeklySchedule {
    BASE_TEMPLATE
        .iter()
        .map(|(day, am, pm, focus)| {
            (
                *day,
                DayPlan {
                    am: am.to_string(),
                    pm: pm.to_string(),
                    focus: focus.to_string(),
                },
            )
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Override rules
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayField {
    Am,
    Pm,
    Focus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTrigger {
    SkinType(SkinType),
    Concern(Concern),
}

impl RuleTrigger {
    fn matches(&self, skin_type: SkinType, concerns: &ConcernSet) -> bool {
        match self {
            RuleTrigger::SkinType(t) => *t == skin_type,
            RuleTrigger::Concern(c) => concerns.contains(*c),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleRule {
    pub trigger: RuleTrigger,
    pub day: Weekday,
    pub field: DayField,
    pub text: &'static str,
}

const fn rule(trigger: RuleTrigger, day: Weekday, field: DayField, text: &'static str) -> ScheduleRule {
    ScheduleRule {
        trigger,
        day,
        field,
        text,
    }
}

pub const SENSITIVE_WEDNESDAY_PM: &str = "Double Cleanse, Soothing Serum, Barrier Cream";
pub const SENSITIVE_WEDNESDAY_FOCUS: &str = "Gentle Care Day";
pub const SENSITIVE_SATURDAY_PM: &str = "Double Cleanse, Calming Mask, Recovery Balm";
pub const ACNE_WEDNESDAY_PM: &str = "Double Cleanse, BHA Treatment, Oil-Free Moisturizer";
pub const ACNE_WEDNESDAY_FOCUS: &str = "Clarifying Treatment Day";
pub const ACNE_SATURDAY_PM: &str = "Double Cleanse, Purifying Mask, Spot Treatment";
pub const AGING_MONDAY_PM: &str = "Double Cleanse, Retinol Serum, Repair Cream";
pub const AGING_WEDNESDAY_PM: &str = "Double Cleanse, AHA Treatment, Peptide Serum";

/// Applied in order. Sensitive first, then acne, then aging: later rows win.
#[rustfmt::skip]
pub const OVERRIDE_RULES: [ScheduleRule; 8] = [
    rule(RuleTrigger::SkinType(SkinType::Sensitive), Weekday::Wednesday, DayField::Pm, SENSITIVE_WEDNESDAY_PM),
    rule(RuleTrigger::SkinType(SkinType::Sensitive), Weekday::Wednesday, DayField::Focus, SENSITIVE_WEDNESDAY_FOCUS),
    rule(RuleTrigger::SkinType(SkinType::Sensitive), Weekday::Saturday, DayField::Pm, SENSITIVE_SATURDAY_PM),
    rule(RuleTrigger::Concern(Concern::Acne), Weekday::Wednesday, DayField::Pm, ACNE_WEDNESDAY_PM),
    rule(RuleTrigger::Concern(Concern::Acne), Weekday::Wednesday, DayField::Focus, ACNE_WEDNESDAY_FOCUS),
    rule(RuleTrigger::Concern(Concern::Acne), Weekday::Saturday, DayField::Pm, ACNE_SATURDAY_PM),
    rule(RuleTrigger::Concern(Concern::Aging), Weekday::Monday, DayField::Pm, AGING_MONDAY_PM),
    rule(RuleTrigger::Concern(Concern::Aging), Weekday::Wednesday, DayField::Pm, AGING_WEDNESDAY_PM),
];

/// Applies `rules` in sequence to `schedule`. Later matching rules overwrite earlier ones.
pub fn apply_rules(
    schedule: &mut WeeklySchedule,
    rules: &[ScheduleRule],
    skin_type: SkinType,
    concerns: &ConcernSet,
) {
    for r in rules.iter().filter(|r| r.trigger.matches(skin_type, concerns)) {
        let plan = schedule.entry(r.day).or_default();
        let slot = match r.field {
            DayField::Am => &mut plan.am,
            DayField::Pm => &mut plan.pm,
            DayField::Focus => &mut plan.focus,
        };
        *slot = r.text.to_string();
    }
}

/// Base template personalized with `OVERRIDE_RULES`.
pub fn weekly_schedule(skin_type: SkinType, concerns: &ConcernSet) -> WeeklySchedule {
    let mut schedule = base_schedule();
    apply_rules(&mut schedule, &OVERRIDE_RULES, skin_type, concerns);
    schedule
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn concerns(raw: &[&str]) -> ConcernSet {
        ConcernSet::from_raw(raw.iter().copied())
    }

    #[test]
    fn test_base_schedule_iterates_monday_to_sunday() {
        let days: Vec<Weekday> = base_schedule().keys().copied().collect();
        assert_eq!(days, Weekday::ALL.to_vec());
    }

    #[test]
    fn test_no_rule_matches_for_plain_normal_skin() {
        assert_eq!(weekly_schedule(SkinType::Normal, &ConcernSet::new()), base_schedule());
    }

    #[test]
    fn test_sensitive_overrides_wednesday_and_saturday() {
        let s = weekly_schedule(SkinType::Sensitive, &ConcernSet::new());
        assert_eq!(s[&Weekday::Wednesday].pm, SENSITIVE_WEDNESDAY_PM);
        assert_eq!(s[&Weekday::Wednesday].focus, SENSITIVE_WEDNESDAY_FOCUS);
        assert_eq!(s[&Weekday::Saturday].pm, SENSITIVE_SATURDAY_PM);
        // am untouched
        assert_eq!(s[&Weekday::Wednesday].am, WEEKDAY_AM);
    }

    #[test]
    fn test_acne_overwrites_sensitive() {
        let s = weekly_schedule(SkinType::Sensitive, &concerns(&["acne"]));
        assert_eq!(s[&Weekday::Wednesday].pm, ACNE_WEDNESDAY_PM);
        assert_eq!(s[&Weekday::Wednesday].focus, ACNE_WEDNESDAY_FOCUS);
        assert_eq!(s[&Weekday::Saturday].pm, ACNE_SATURDAY_PM);
    }

    #[test]
    fn test_aging_overwrites_acne_on_wednesday_only() {
        let s = weekly_schedule(SkinType::Oily, &concerns(&["acne", "aging"]));
        assert_eq!(s[&Weekday::Monday].pm, AGING_MONDAY_PM);
        assert_eq!(s[&Weekday::Wednesday].pm, AGING_WEDNESDAY_PM);
        // aging has no focus or Saturday rule, acne's survive
        assert_eq!(s[&Weekday::Wednesday].focus, ACNE_WEDNESDAY_FOCUS);
        assert_eq!(s[&Weekday::Saturday].pm, ACNE_SATURDAY_PM);
    }

    #[test]
    fn test_rule_order_not_concern_order_decides() {
        // table order governs, not the order concerns were supplied in
        let s = weekly_schedule(SkinType::Dry, &concerns(&["aging", "acne"]));
        assert_eq!(s[&Weekday::Wednesday].pm, AGING_WEDNESDAY_PM);
    }

    #[test]
    fn test_apply_rules_with_custom_table() {
        let rules = [
            rule(RuleTrigger::SkinType(SkinType::Dry), Weekday::Sunday, DayField::Pm, "first"),
            rule(RuleTrigger::SkinType(SkinType::Dry), Weekday::Sunday, DayField::Pm, "second"),
            rule(RuleTrigger::SkinType(SkinType::Oily), Weekday::Sunday, DayField::Am, "never"),
        ];
        let mut s = base_schedule();
        apply_rules(&mut s, &rules, SkinType::Dry, &ConcernSet::new());
        assert_eq!(s[&Weekday::Sunday].pm, "second");
        assert_ne!(s[&Weekday::Sunday].am, "never");
    }

    #[test]
    fn test_weekly_schedule_serializes_lowercase_days() {
        let json = serde_json::to_value(base_schedule()).unwrap();
        assert!(json.get("monday").is_some());
        assert_eq!(json["sunday"]["focus"], "Restoration & Hydration");
    }
}
