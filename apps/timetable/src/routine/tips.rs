use crate::catalog::{Concern, ConcernSet, SkinType};

fn skin_type_tips(skin_type: SkinType) -> &'static [&'static str] {
    match skin_type {
        SkinType::Dry => &[
            "Apply moisturizer to damp skin to lock in hydration",
            "Use a humidifier in your bedroom overnight",
            "Avoid very hot water when cleansing",
        ],
        SkinType::Oily => &[
            "Don't skip moisturizer - dehydration can increase oil production",
            "Use blotting papers instead of powder throughout the day",
            "Clean your phone screen regularly to prevent bacterial transfer",
        ],
        SkinType::Combination => &[
            "Apply different products to different zones as needed",
            "Use lighter textures on T-zone, richer formulas on cheeks",
            "Pay attention to seasonal changes in your skin's needs",
        ],
        SkinType::Normal => &[
            "Focus on prevention and maintaining your skin's balance",
            "Don't over-complicate your routine - simplicity works best",
            "Regular professional facials can maintain optimal skin health",
        ],
        SkinType::Sensitive => &[
            "Always patch test new products for 24-48 hours",
            "Keep a product diary to track reactions",
            "Avoid fragrance and essential oils in your products",
        ],
    }
}

/// Only acne, aging and dark spots carry extra tips.
fn concern_tips(concern: Concern) -> &'static [&'static str] {
    match concern {
        Concern::Acne => &[
            "Change pillowcases every 3-4 days",
            "Avoid touching your face throughout the day",
        ],
        Concern::Aging => &[
            "Always wear sunscreen, even on cloudy days",
            "Sleep on your back to prevent sleep lines",
        ],
        Concern::DarkSpots => &[
            "Be consistent with treatment - results take 8-12 weeks",
            "Never pick at dark spots or scabs",
        ],
        Concern::Redness | Concern::Dryness | Concern::Oiliness => &[],
    }
}

/// Skin-type tips first, then concern tips in concern order.
pub fn personalized_tips(skin_type: SkinType, concerns: &ConcernSet) -> Vec<String> {
    skin_type_tips(skin_type)
        .iter()
        .chain(concerns.iter().flat_map(concern_tips))
        .map(|t| t.to_string())
        .collect()
}
