//! Step-by-step application instructions.

use serde::{Deserialize, Serialize};

use crate::routine::SelectedProducts;

const GENERAL: [&str; 4] = [
    "Always perform a patch test 24 hours before using new products",
    "Introduce one new product at a time, waiting 1-2 weeks between additions",
    "Consistency is key - follow your routine daily for optimal results",
    "Maintain a healthy lifestyle with balanced diet and adequate hydration",
];

const WEEKLY: [&str; 4] = [
    "Wednesday: Gentle exfoliation to remove dead skin cells",
    "Friday: Intensive overnight treatment for weekend recovery",
    "Saturday: Mask treatment for deep cleansing or hydration",
    "Sunday: Focus on barrier repair and skin restoration",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructions {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub morning: Vec<String>,
    #[serde(default)]
    pub evening: Vec<String>,
    #[serde(default)]
    pub weekly: Vec<String>,
}

impl Instructions {
    /// Categories in display order, labelled.
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("general", self.general.as_slice()),
            ("morning", self.morning.as_slice()),
            ("evening", self.evening.as_slice()),
            ("weekly", self.weekly.as_slice()),
        ]
    }
}

pub fn build_instructions(products: &SelectedProducts) -> Instructions {
    let mut morning = vec![
        "Start with a clean face using your Dubois cleanser".to_string(),
        products.cleanser.usage_instructions.clone(),
        "Follow with toner to balance and prepare skin".to_string(),
        products.toner.usage_instructions.clone(),
    ];
    morning.extend(
        products
            .serums
            .iter()
            .map(|s| format!("Apply {}: {}", s.product_name, s.usage_instructions)),
    );
    morning.extend([
        "Lock in hydration with moisturizer".to_string(),
        products.moisturizer.usage_instructions.clone(),
        "Finish with sunscreen for complete protection".to_string(),
        products.sunscreen.usage_instructions.clone(),
    ]);

    let mut evening = vec![
        "First cleanse: Use oil-based cleanser to remove sunscreen and makeup".to_string(),
        format!("Second cleanse: {}", products.cleanser.usage_instructions),
        "Tone to remove any residue and rebalance".to_string(),
        products.toner.usage_instructions.clone(),
    ];
    evening.extend(
        products
            .serums
            .iter()
            .map(|s| format!("Evening application: {}", s.usage_instructions)),
    );
    evening.push(format!(
        "Nighttime moisturizer application: {}",
        products.moisturizer.usage_instructions
    ));

    Instructions {
        general: GENERAL.iter().map(|s| s.to_string()).collect(),
        morning,
        evening,
        weekly: WEEKLY.iter().map(|s| s.to_string()).collect(),
    }
}
