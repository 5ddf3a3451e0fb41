//! Page composers turn a profile and routine into a `ReportLayout`.
//!
//! Page sequence: Profile → Products → Weekly Schedule → Instructions, each section
//! starting on a fresh page. Footer on the final page only.

use chrono::NaiveDate;

use crate::catalog::ProductEntry;
use crate::models::profile::UserProfile;
use crate::render::font_metrics::{get_metrics, line_height, Face};
use crate::render::layout::{
    capitalize, DrawOp, LayoutBuilder, ReportLayout, Section, CONTENT_BOTTOM, CONTENT_WIDTH,
    MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::render::palette;
use crate::routine::Routine;

pub const TITLE: &str = "Your Personalized Skincare Timetable";
pub const PRODUCTS_HEADING: &str = "Recommended Products";
pub const SERUMS_HEADING: &str = "Targeted Serums";
pub const SCHEDULE_HEADING: &str = "7-Day Skincare Schedule";
pub const INSTRUCTIONS_HEADING: &str = "Application Instructions";
pub const TIPS_HEADING: &str = "Personalized Tips";
pub const FOOTER: &str =
    "Generated by Dubois Beauty | Consult a dermatologist for serious skin concerns";

const BANNER_HEIGHT: f32 = 120.0;
const HEADING_RULE_OFFSET: f32 = 30.0;
/// First content line under a page heading.
const BODY_TOP: f32 = 100.0;

const CARD_MIN_HEIGHT: f32 = 45.0;
const CARD_GAP: f32 = 15.0;
/// Space between a card edge and the first or last line inside it.
const CARD_PAD: f32 = 5.0;
/// x of product name and description inside a base product card.
const CARD_DETAIL_X: f32 = 150.0;

const DAY_ROW_HEIGHT: f32 = 70.0;
const DAY_ROW_STEP: f32 = 85.0;
const DAY_VALUE_X: f32 = 120.0;

const BULLET_GAP: f32 = 8.0;
const TEXT_INSET: f32 = 10.0;

/// Lays out the full report. `generated_on` is printed in the cover subtitle.
pub fn layout_report(profile: &UserProfile, routine: &Routine, generated_on: NaiveDate) -> ReportLayout {
    let mut b = LayoutBuilder::new();
    profile_page(&mut b, profile, routine, generated_on);
    products_page(&mut b, routine);
    schedule_page(&mut b, profile, routine);
    instructions_page(&mut b, routine);
    footer(&mut b);
    b.finish()
}

/// A card whose height is known only once its contents are drawn. The card op is
/// inserted beneath those contents when it is closed.
struct OpenCard {
    mark: usize,
    top: f32,
    fill: palette::Rgb,
    empty: bool,
}

impl OpenCard {
    fn open(b: &LayoutBuilder, top: f32, fill: palette::Rgb) -> Self {
        Self {
            mark: b.mark(),
            top,
            fill,
            empty: true,
        }
    }

    /// Draws the card from its top down to `bottom`. A card with no content is dropped.
    fn close(self, b: &mut LayoutBuilder, bottom: f32) {
        if self.empty {
            return;
        }
        b.insert(
            self.mark,
            DrawOp::Card {
                x: MARGIN,
                y: self.top,
                width: CONTENT_WIDTH,
                height: bottom - self.top,
                fill: self.fill,
                border: palette::BORDER,
            },
        );
    }
}

fn section_heading(b: &mut LayoutBuilder, title: &str) {
    b.text(MARGIN, MARGIN, 18.0, Face::Bold, palette::DARK, title);
    b.rule(MARGIN + HEADING_RULE_OFFSET, 2.0, palette::SECONDARY);
    b.y = BODY_TOP;
}

// ────────────────────────────────────────────────────────────────────────────
// Page 1: profile
// ────────────────────────────────────────────────────────────────────────────

fn profile_page(b: &mut LayoutBuilder, profile: &UserProfile, routine: &Routine, generated_on: NaiveDate) {
    b.start_page(Section::Profile, None);

    b.push(DrawOp::FillRect {
        x: 0.0,
        y: 0.0,
        width: PAGE_WIDTH,
        height: BANNER_HEIGHT,
        fill: palette::BACKGROUND,
    });
    b.centered_text(50.0, 24.0, Face::Bold, palette::PRIMARY, TITLE);
    let subtitle = format!(
        "Created for {} | {}",
        profile.name,
        generated_on.format("%-m/%-d/%Y")
    );
    let subtitle = get_metrics(&Face::Regular).fit_to_width(&subtitle, CONTENT_WIDTH, 12.0);
    b.centered_text(85.0, 12.0, Face::Regular, palette::MEDIUM, &subtitle);

    b.text(MARGIN, 150.0, 16.0, Face::Bold, palette::DARK, "Skin Profile");
    b.rule(175.0, 2.0, palette::SECONDARY);

    let concerns = if profile.concerns.is_empty() {
        "None".to_string()
    } else {
        profile
            .concerns
            .iter()
            .map(|c| capitalize(c.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let rows = [
        ("Skin Type:", capitalize(profile.skin_type.as_str())),
        ("Primary Concerns:", concerns),
        ("Morning Routine:", profile.morning_time.clone()),
        ("Evening Routine:", profile.evening_time.clone()),
    ];

    let label_width = rows
        .iter()
        .map(|(label, _)| get_metrics(&Face::Bold).width_pt(label, 12.0))
        .fold(0.0_f32, f32::max);
    let value_x = MARGIN + label_width + TEXT_INSET;
    let value_width = MARGIN + CONTENT_WIDTH - value_x;

    let mut y = 195.0;
    for (label, value) in &rows {
        b.text(MARGIN, y, 12.0, Face::Bold, palette::DARK, *label);
        let lines = get_metrics(&Face::Regular).wrap_lines(value, value_width, 12.0);
        let used = b.lines(value_x, y, 12.0, Face::Regular, palette::MEDIUM, &lines);
        y += used.max(line_height(12.0)) + 6.0;
    }

    if routine.personalized_tips.is_empty() {
        return;
    }
    y += 25.0;
    b.text(MARGIN, y, 16.0, Face::Bold, palette::DARK, TIPS_HEADING);
    b.rule(y + 25.0, 2.0, palette::SECONDARY);
    b.y = y + 45.0;
    bullet_list(b, &routine.personalized_tips, None);
}

// ────────────────────────────────────────────────────────────────────────────
// Page 2: products
// ────────────────────────────────────────────────────────────────────────────

fn products_page(b: &mut LayoutBuilder, routine: &Routine) {
    b.start_page(Section::Products, Some(palette::BACKGROUND));
    section_heading(b, PRODUCTS_HEADING);

    let products = &routine.products;
    let base = [
        ("cleanser", &products.cleanser),
        ("toner", &products.toner),
        ("moisturizer", &products.moisturizer),
        ("sunscreen", &products.sunscreen),
    ];
    for (category, product) in base {
        let label = format!("{}:", capitalize(category));
        product_card(b, Some(&label), product);
    }

    if products.serums.is_empty() {
        return;
    }

    b.y += 10.0;
    b.ensure_space(25.0 + CARD_MIN_HEIGHT);
    b.text(MARGIN, b.y, 14.0, Face::Bold, palette::DARK, SERUMS_HEADING);
    b.y += 25.0;
    for serum in &products.serums {
        product_card(b, None, serum);
    }
}

/// One product card. Base products carry a category label in the left column;
/// serums use the full card width. A description too long for the page continues in a
/// second card on the next page.
fn product_card(b: &mut LayoutBuilder, label: Option<&str>, product: &ProductEntry) {
    let detail_x = if label.is_some() {
        CARD_DETAIL_X
    } else {
        MARGIN + TEXT_INSET
    };
    let detail_width = MARGIN + CONTENT_WIDTH - TEXT_INSET - detail_x;
    let step = line_height(9.0);
    let description = get_metrics(&Face::Regular).wrap_lines(&product.description, detail_width, 9.0);
    let height = (20.0 + step * description.len() as f32 + 10.0).max(CARD_MIN_HEIGHT);

    // Keep the card whole when it fits on one page.
    if height + CARD_GAP <= CONTENT_BOTTOM - MARGIN {
        b.ensure_space(height + CARD_GAP);
    } else {
        b.ensure_space(CARD_MIN_HEIGHT + CARD_GAP);
    }

    let y = b.y;
    let mut card = OpenCard::open(b, y - CARD_PAD, palette::WHITE);
    card.empty = false;
    if let Some(label) = label {
        b.text(MARGIN + TEXT_INSET, y + 5.0, 12.0, Face::Bold, palette::PRIMARY, label);
    }
    let name = get_metrics(&Face::Bold).fit_to_width(&product.product_name, detail_width, 11.0);
    b.text(detail_x, y + 5.0, 11.0, Face::Bold, palette::DARK, name);

    let mut line_y = y + 20.0;
    let mut content_end = y - CARD_PAD + CARD_MIN_HEIGHT - CARD_PAD;
    for line in description {
        if line_y + step + CARD_PAD > CONTENT_BOTTOM {
            card.close(b, content_end + CARD_PAD);
            b.break_page();
            card = OpenCard::open(b, b.y, palette::WHITE);
            line_y = b.y + CARD_PAD;
            content_end = line_y;
        }
        b.text(detail_x, line_y, 9.0, Face::Regular, palette::MEDIUM, line);
        card.empty = false;
        line_y += step;
        content_end = content_end.max(line_y);
    }
    card.close(b, content_end + CARD_PAD);
    b.y = content_end + CARD_PAD + CARD_PAD + CARD_GAP;
}

// ────────────────────────────────────────────────────────────────────────────
// Page 3: weekly schedule
// ────────────────────────────────────────────────────────────────────────────

fn schedule_page(b: &mut LayoutBuilder, profile: &UserProfile, routine: &Routine) {
    b.start_page(Section::Schedule, Some(palette::BACKGROUND));
    section_heading(b, SCHEDULE_HEADING);

    let value_width = MARGIN + CONTENT_WIDTH - TEXT_INSET - DAY_VALUE_X;
    let regular = get_metrics(&Face::Regular);

    // BTreeMap keyed by Weekday: Monday→Sunday.
    for (index, (day, plan)) in routine.weekly_schedule.iter().enumerate() {
        b.ensure_space(DAY_ROW_HEIGHT);
        let y = b.y;
        let fill = if index % 2 == 0 {
            palette::WHITE
        } else {
            palette::BACKGROUND
        };
        b.card(y, DAY_ROW_HEIGHT, fill, palette::BORDER);
        b.text(MARGIN + TEXT_INSET, y + 15.0, 13.0, Face::Bold, palette::PRIMARY, capitalize(day.as_str()));

        if !plan.focus.is_empty() {
            let width = get_metrics(&Face::Oblique).width_pt(&plan.focus, 10.0);
            let x = MARGIN + CONTENT_WIDTH - TEXT_INSET - width;
            b.text(x, y + 17.0, 10.0, Face::Oblique, palette::ACCENT, plan.focus.clone());
        }

        if !plan.am.is_empty() {
            b.text(MARGIN + TEXT_INSET, y + 35.0, 10.0, Face::Bold, palette::DARK, "Morning:");
            let value = format!("{}: {}", profile.morning_time, plan.am);
            let value = regular.fit_to_width(&value, value_width, 10.0);
            b.text(DAY_VALUE_X, y + 35.0, 10.0, Face::Regular, palette::MEDIUM, value);
        }

        if !plan.pm.is_empty() {
            b.text(MARGIN + TEXT_INSET, y + 50.0, 10.0, Face::Bold, palette::DARK, "Evening:");
            let value = format!("{}: {}", profile.evening_time, plan.pm);
            let value = regular.fit_to_width(&value, value_width, 10.0);
            b.text(DAY_VALUE_X, y + 50.0, 10.0, Face::Regular, palette::MEDIUM, value);
        }

        b.y = y + DAY_ROW_STEP;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page 4: instructions
// ────────────────────────────────────────────────────────────────────────────

fn instructions_page(b: &mut LayoutBuilder, routine: &Routine) {
    b.start_page(Section::Instructions, Some(palette::BACKGROUND));
    section_heading(b, INSTRUCTIONS_HEADING);

    for (category, list) in routine.instructions.categories() {
        if list.is_empty() {
            continue;
        }
        // Heading stays with at least the first item.
        b.ensure_space(20.0 + bullet_list_height(&list[..1]) + 10.0);
        b.text(MARGIN, b.y, 13.0, Face::Bold, palette::PRIMARY, capitalize(category));
        b.y += 20.0;
        bullet_list(b, list, Some(palette::WHITE));
        b.y += 20.0;
    }
}

fn wrap_bullet(item: &str) -> Vec<String> {
    let width = CONTENT_WIDTH - 3.0 * TEXT_INSET;
    get_metrics(&Face::Regular).wrap_lines(&format!("• {item}"), width, 10.0)
}

fn bullet_list_height(items: &[String]) -> f32 {
    items
        .iter()
        .map(|item| line_height(10.0) * wrap_bullet(item).len() as f32 + BULLET_GAP)
        .sum()
}

/// Bulleted, word-wrapped list at the cursor. With `boxed`, the list sits in a card whose
/// height follows the wrapped line count. Lines that would cross the bottom margin move to
/// a continuation page, where a boxed list opens a fresh card.
fn bullet_list(b: &mut LayoutBuilder, items: &[String], boxed: Option<palette::Rgb>) {
    let step = line_height(10.0);
    let pad = if boxed.is_some() { CARD_PAD } else { 0.0 };
    let mut card = boxed.map(|fill| OpenCard::open(b, b.y - CARD_PAD, fill));
    let mut content_end = b.y;

    for item in items {
        for line in wrap_bullet(item) {
            if b.y + step + pad > CONTENT_BOTTOM {
                if let Some(open) = card.take() {
                    open.close(b, content_end + CARD_PAD);
                }
                b.break_page();
                if let Some(fill) = boxed {
                    card = Some(OpenCard::open(b, b.y, fill));
                    b.y += CARD_PAD;
                }
            }
            b.text(MARGIN + TEXT_INSET, b.y, 10.0, Face::Regular, palette::MEDIUM, line);
            if let Some(open) = card.as_mut() {
                open.empty = false;
            }
            b.y += step;
            content_end = b.y;
        }
        b.y += BULLET_GAP;
    }

    if let Some(open) = card {
        open.close(b, content_end + CARD_PAD);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Footer
// ────────────────────────────────────────────────────────────────────────────

fn footer(b: &mut LayoutBuilder) {
    let y = PAGE_HEIGHT - MARGIN;
    if b.y > y - 10.0 {
        b.ensure_space(PAGE_HEIGHT);
    }
    b.centered_text(y, 9.0, Face::Oblique, palette::LIGHT, FOOTER);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{products, ConcernSet, ProductCatalog, SkinType};
    use crate::routine::{compose_routine, Weekday};

    fn profile(skin_type: SkinType, concerns: &[&str]) -> UserProfile {
        UserProfile {
            name: "Amara Okafor".to_string(),
            email: "amara@example.com".to_string(),
            skin_type,
            concerns: ConcernSet::from_raw(concerns.iter().copied()),
            morning_time: "6:00 AM".to_string(),
            evening_time: "10:00 PM".to_string(),
        }
    }

    fn routine_for(p: &UserProfile) -> Routine {
        compose_routine(
            &ProductCatalog::standard().unwrap(),
            p.skin_type,
            &p.concerns,
            &p.morning_time,
            &p.evening_time,
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn layout(skin_type: SkinType, concerns: &[&str]) -> ReportLayout {
        let p = profile(skin_type, concerns);
        layout_report(&p, &routine_for(&p), date())
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let l = layout(SkinType::Dry, &["acne"]);
        let mut sections: Vec<Section> = l.pages.iter().filter(|p| !p.continuation).map(|p| p.section).collect();
        sections.dedup();
        assert_eq!(
            sections,
            vec![Section::Profile, Section::Products, Section::Schedule, Section::Instructions]
        );
    }

    #[test]
    fn test_cover_subtitle_has_name_and_date() {
        let l = layout(SkinType::Dry, &[]);
        assert!(l.pages[0].has_text(TITLE));
        assert!(l.pages[0].has_text("Created for Amara Okafor | 3/9/2026"));
    }

    #[test]
    fn test_profile_block_capitalizes_values() {
        let l = layout(SkinType::Combination, &["darkSpots", "acne"]);
        let page = &l.pages[0];
        assert!(page.has_text("Combination"));
        assert!(page.has_text("DarkSpots, Acne"));
        assert!(page.has_text("6:00 AM"));
        assert!(page.has_text("10:00 PM"));
    }

    #[test]
    fn test_base_cards_in_fixed_order() {
        let l = layout(SkinType::Oily, &[]);
        let products: Vec<&str> = l
            .section_pages(Section::Products)
            .flat_map(|p| p.texts())
            .filter(|t| t.ends_with(':'))
            .collect();
        assert_eq!(products, vec!["Cleanser:", "Toner:", "Moisturizer:", "Sunscreen:"]);
    }

    #[test]
    fn test_serum_section_omitted_without_serums() {
        let l = layout(SkinType::Normal, &[]);
        assert!(!l.has_text(SERUMS_HEADING));
    }

    #[test]
    fn test_serum_section_lists_each_serum() {
        let l = layout(SkinType::Normal, &["aging", "redness"]);
        assert!(l.has_text(SERUMS_HEADING));
        assert!(l.has_text("Dubois Age-Reverse Complex"));
        assert!(l.has_text("Dubois Sensitive Relief Serum"));
    }

    #[test]
    fn test_all_six_serums_stay_within_margins() {
        let l = layout(
            SkinType::Sensitive,
            &["acne", "aging", "darkSpots", "redness", "dryness", "oiliness"],
        );
        for page in &l.pages {
            for op in &page.ops {
                if let DrawOp::Card { y, height, .. } = op {
                    assert!(y + height <= PAGE_HEIGHT - MARGIN + 1e-3, "card overflows page");
                }
            }
        }
    }

    #[test]
    fn test_schedule_rows_monday_to_sunday() {
        let l = layout(SkinType::Dry, &[]);
        let days: Vec<&str> = l
            .section_pages(Section::Schedule)
            .flat_map(|p| p.texts())
            .filter(|t| Weekday::ALL.iter().any(|d| capitalize(d.as_str()) == *t))
            .collect();
        assert_eq!(
            days,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn test_schedule_rows_alternate_background() {
        let l = layout(SkinType::Dry, &[]);
        let fills: Vec<palette::Rgb> = l
            .section_pages(Section::Schedule)
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Card { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 7);
        assert_eq!(fills[0], palette::WHITE);
        assert_eq!(fills[1], palette::BACKGROUND);
        assert_eq!(fills[6], palette::WHITE);
    }

    #[test]
    fn test_missing_pm_omits_evening_line() {
        let p = profile(SkinType::Normal, &[]);
        let mut routine = routine_for(&p);
        routine
            .weekly_schedule
            .get_mut(&Weekday::Sunday)
            .unwrap()
            .pm
            .clear();
        let l = layout_report(&p, &routine, date());
        let evenings = l.texts().filter(|t| *t == "Evening:").count();
        let mornings = l.texts().filter(|t| *t == "Morning:").count();
        assert_eq!(evenings, 6);
        assert_eq!(mornings, 7);
    }

    #[test]
    fn test_schedule_line_prefixes_routine_time() {
        let l = layout(SkinType::Normal, &[]);
        assert!(l
            .texts()
            .any(|t| t.starts_with("10:00 PM: Double Cleanse, Hydrating Mask")));
    }

    #[test]
    fn test_empty_instruction_category_skipped() {
        let p = profile(SkinType::Dry, &[]);
        let mut routine = routine_for(&p);
        routine.instructions.weekly.clear();
        let l = layout_report(&p, &routine, date());
        let labels: Vec<&str> = l
            .section_pages(Section::Instructions)
            .flat_map(|page| page.texts())
            .filter(|t| ["General", "Morning", "Evening", "Weekly"].contains(t))
            .collect();
        assert_eq!(labels, vec!["General", "Morning", "Evening"]);
    }

    #[test]
    fn test_instruction_box_grows_with_wrapped_lines() {
        let short = vec!["Rinse".to_string()];
        let long = vec!["Rinse ".repeat(60)];
        assert!(bullet_list_height(&long) > bullet_list_height(&short));
        assert!(wrap_bullet(&long[0]).len() > 1);
        assert!(wrap_bullet(&short[0])[0].starts_with("• "));
    }

    #[test]
    fn test_footer_only_on_last_page() {
        let l = layout(SkinType::Oily, &["acne", "oiliness"]);
        let last = l.pages.len() - 1;
        for (i, page) in l.pages.iter().enumerate() {
            assert_eq!(page.has_text(FOOTER), i == last, "footer placement on page {i}");
        }
    }

    #[test]
    fn test_tips_listed_on_profile_page() {
        let l = layout(SkinType::Dry, &["aging"]);
        assert!(l.pages[0].has_text(TIPS_HEADING));
        assert!(l
            .section_pages(Section::Profile)
            .flat_map(|p| p.texts())
            .any(|t| t.contains("Sleep on your back")));
    }

    fn assert_within_bottom_margin(l: &ReportLayout) {
        for (i, page) in l.pages.iter().enumerate() {
            for op in &page.ops {
                let bottom = match op {
                    DrawOp::Text { y, size, text, .. } if text != FOOTER => y + line_height(*size),
                    DrawOp::Card { y, height, .. } => y + height,
                    _ => continue,
                };
                assert!(
                    bottom <= PAGE_HEIGHT - MARGIN + 1e-3,
                    "page {i}: op ends at {bottom}"
                );
            }
        }
    }

    #[test]
    fn test_long_instruction_list_continues_on_new_pages() {
        let p = profile(SkinType::Normal, &[]);
        let mut routine = routine_for(&p);
        routine.instructions.general = (0..45).map(|i| format!("Step {i}: rinse")).collect();
        let l = layout_report(&p, &routine, date());

        assert_within_bottom_margin(&l);
        let steps = l.texts().filter(|t| t.starts_with("• Step ")).count();
        assert_eq!(steps, 45, "every item is drawn");

        let pages: Vec<_> = l.section_pages(Section::Instructions).collect();
        assert!(pages.len() >= 2);
        assert!(pages[1..].iter().all(|page| page.continuation));
        for page in &pages {
            let has_card = page.ops.iter().any(|op| matches!(op, DrawOp::Card { .. }));
            assert!(has_card, "each instructions page boxes its part of the list");
        }
    }

    #[test]
    fn test_long_product_description_splits_card() {
        let mut lineups = products::standard_lineups();
        lineups.get_mut(&SkinType::Dry).unwrap().cleanser.description =
            "Gentle foaming formula with ceramides. ".repeat(300);
        let catalog = ProductCatalog::new(lineups, products::standard_serums()).unwrap();
        let p = profile(SkinType::Dry, &["acne"]);
        let routine = compose_routine(&catalog, p.skin_type, &p.concerns, "6:00 AM", "10:00 PM");
        let l = layout_report(&p, &routine, date());

        assert_within_bottom_margin(&l);

        // base product descriptions are the 9pt lines in the detail column
        let detail_width = MARGIN + CONTENT_WIDTH - TEXT_INSET - CARD_DETAIL_X;
        let products = &routine.products;
        let expected: usize = [&products.cleanser, &products.toner, &products.moisturizer, &products.sunscreen]
            .iter()
            .map(|prod| {
                get_metrics(&Face::Regular)
                    .wrap_lines(&prod.description, detail_width, 9.0)
                    .len()
            })
            .sum();
        let drawn = l
            .section_pages(Section::Products)
            .flat_map(|page| page.ops.iter())
            .filter(|op| {
                matches!(op, DrawOp::Text { x, size, .. } if *x == CARD_DETAIL_X && *size == 9.0)
            })
            .count();
        assert!(expected > 60);
        assert_eq!(drawn, expected, "every description line is drawn");
        assert!(l.section_pages(Section::Products).count() >= 2);
        assert!(l.has_text(SERUMS_HEADING));
    }

    #[test]
    fn test_long_name_subtitle_fits_content_width() {
        let mut p = profile(SkinType::Oily, &[]);
        p.name = "Maximiliana Wolfeschlegelsteinhausen ".repeat(8);
        let l = layout_report(&p, &routine_for(&p), date());
        let (x, text) = l.pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { x, text, .. } if text.starts_with("Created for") => Some((*x, text.clone())),
                _ => None,
            })
            .unwrap();
        assert!(text.ends_with("..."));
        let width = get_metrics(&Face::Regular).width_pt(&text, 12.0);
        assert!(width <= CONTENT_WIDTH + 1e-3);
        assert!(x >= MARGIN - 1e-3);
    }
}
