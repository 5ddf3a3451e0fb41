//! Built-in storefront product data.

use std::collections::HashMap;

use super::{BaseLineup, Concern, ProductEntry, SkinType};

pub fn standard_lineups() -> HashMap<SkinType, BaseLineup> {
    HashMap::from([
        (
            SkinType::Dry,
            BaseLineup {
                cleanser: ProductEntry::new(
                    "Dubois Hydrating Ceramide Cleanser",
                    "Luxurious gentle formula that maintains skin's natural moisture barrier without stripping",
                    "Apply to damp skin using upward circular motions for 60 seconds, rinse with lukewarm water",
                    &["Deep hydration", "Barrier protection", "Non-stripping"],
                ),
                toner: ProductEntry::new(
                    "Dubois Hydra-Revival Toner",
                    "Alcohol-free hydrating toner with hyaluronic acid and ceramides",
                    "Press into skin with palms or apply with cotton pad, no need to wipe off",
                    &["Intense hydration", "Plumping effect", "Prepares for serums"],
                ),
                moisturizer: ProductEntry::new(
                    "Dubois Intensive Renewal Cream",
                    "Rich ceramide-infused cream for overnight repair and hydration",
                    "Apply generous amount in evening, massage upward until fully absorbed",
                    &["Overnight repair", "Intense moisture", "Barrier restoration"],
                ),
                sunscreen: ProductEntry::new(
                    "Dubois Hydrating Sun Shield SPF 50",
                    "Moisturizing sunscreen with hyaluronic acid and antioxidant protection",
                    "Apply as final morning step, reapply every 2 hours when outdoors",
                    &["Hydration + protection", "Anti-pollution", "Comfort wear"],
                ),
            },
        ),
        (
            SkinType::Oily,
            BaseLineup {
                cleanser: ProductEntry::new(
                    "Dubois Purifying Salicylic Acid Cleanser",
                    "Advanced oil-control formula that deeply cleanses pores and regulates sebum production",
                    "Massage onto damp skin focusing on T-zone, rinse thoroughly with warm water",
                    &["Pore refinement", "Oil control", "Blemish prevention"],
                ),
                toner: ProductEntry::new(
                    "Dubois Pore-Perfect Toner",
                    "Mattifying toner with niacinamide and zinc for refined pores",
                    "Swipe across face with cotton pad, focus on T-zone areas",
                    &["Pore minimization", "Oil control", "Smoothing"],
                ),
                moisturizer: ProductEntry::new(
                    "Dubois Oil-Free Hydration Gel",
                    "Lightweight water-based gel that hydrates without heaviness",
                    "Small pea-sized amount morning and evening, avoid over-application",
                    &["Weightless hydration", "Non-comedogenic", "Matte finish"],
                ),
                sunscreen: ProductEntry::new(
                    "Dubois Matte Perfect SPF 50",
                    "Oil-control sunscreen with invisible matte finish",
                    "Use after moisturizer, perfect base under makeup",
                    &["Shine control", "Non-greasy", "Pore-blurring"],
                ),
            },
        ),
        (
            SkinType::Combination,
            BaseLineup {
                cleanser: ProductEntry::new(
                    "Dubois Balancing Gel-to-Foam Cleanser",
                    "Smart formula that adapts to different skin zones for perfect balance",
                    "Apply to dry hands, emulsify with water, massage face in circular motions",
                    &["Zone-specific care", "pH balancing", "Gentle cleansing"],
                ),
                toner: ProductEntry::new(
                    "Dubois Balance Harmony Toner",
                    "Dual-phase toner that hydrates dry areas while controlling oil",
                    "Shake well, apply evenly across face with focusing hydration on cheeks",
                    &["Multi-zone care", "Balance restoration", "Texture refinement"],
                ),
                moisturizer: ProductEntry::new(
                    "Dubois Smart Balance Cream",
                    "Intelligent formula that adapts to different facial zones",
                    "Apply more generously to dry areas, lighter on oily zones",
                    &["Zone-specific care", "Balance maintenance", "Comfort all day"],
                ),
                sunscreen: ProductEntry::new(
                    "Dubois Universal Defense SPF 50",
                    "Lightweight universal protection suitable for all skin zones",
                    "Even application, don't forget neck and ears",
                    &["Broad spectrum", "Lightweight", "All-zone suitable"],
                ),
            },
        ),
        (
            SkinType::Normal,
            BaseLineup {
                cleanser: ProductEntry::new(
                    "Dubois Nourishing Cream Cleanser",
                    "All-in-one luxurious cleanser that maintains skin's perfect equilibrium",
                    "Use morning and evening with gentle circular motions, pat dry with soft towel",
                    &["Maintains balance", "Softens skin", "Prepares for treatment"],
                ),
                toner: ProductEntry::new(
                    "Dubois Rose Quartz Elixir",
                    "Luxurious rose water mist with quartz-infused hydration",
                    "Spray onto face after cleansing, allow to absorb naturally",
                    &["Radiance boost", "Light hydration", "Aromatherapy benefits"],
                ),
                moisturizer: ProductEntry::new(
                    "Dubois Daily Nourishment Cream",
                    "All-purpose luxurious cream with multi-vitamin complex",
                    "Apply twice daily using upward sweeping motions",
                    &["Complete nourishment", "Radiance boost", "Protection"],
                ),
                sunscreen: ProductEntry::new(
                    "Dubois Daily Guard SPF 50",
                    "Comprehensive UVA/UVB protection with environmental defense",
                    "Apply generously 15 minutes before sun exposure",
                    &["Complete protection", "Anti-aging", "Environmental shield"],
                ),
            },
        ),
        (
            SkinType::Sensitive,
            BaseLineup {
                cleanser: ProductEntry::new(
                    "Dubois Soothing Oat Milk Cleanser",
                    "Ultra-gentle, fragrance-free formula for delicate and reactive skin types",
                    "Apply with fingertips using light pressure, rinse with cool water",
                    &["Calms irritation", "Strengthens barrier", "Hypoallergenic"],
                ),
                toner: ProductEntry::new(
                    "Dubois Calm Relief Toner",
                    "Soothing toner with centella asiatica and chamomile extracts",
                    "Pat gently onto skin, avoid rubbing sensitive areas",
                    &["Redness reduction", "Barrier support", "Instant calming"],
                ),
                moisturizer: ProductEntry::new(
                    "Dubois Barrier Repair Cream",
                    "Hypoallergenic formula that strengthens and protects sensitive skin",
                    "Gentle application, avoid rubbing on irritated areas",
                    &["Barrier strengthening", "Sensitivity reduction", "Comfort"],
                ),
                sunscreen: ProductEntry::new(
                    "Dubois Mineral Comfort SPF 50",
                    "Physical sunscreen with zinc oxide for reactive skin",
                    "Gentle application, suitable for even the most sensitive skin",
                    &["Physical protection", "Gentle formula", "Immediate efficacy"],
                ),
            },
        ),
    ])
}

pub fn standard_serums() -> HashMap<Concern, ProductEntry> {
    HashMap::from([
        (
            Concern::Acne,
            ProductEntry::new(
                "Dubois Blemish Control Elixir",
                "Powerful 2% salicylic acid serum with tea tree and zinc",
                "Apply to cleansed skin, focus on affected areas, let absorb completely",
                &["Targeted treatment", "Inflammation reduction", "Pore purification"],
            ),
        ),
        (
            Concern::Aging,
            ProductEntry::new(
                "Dubois Age-Reverse Complex",
                "Advanced retinol and peptide serum for wrinkle reduction",
                "Use in evening routine 2-3 times weekly, build up gradually",
                &["Collagen boost", "Line reduction", "Firmness improvement"],
            ),
        ),
        (
            Concern::DarkSpots,
            ProductEntry::new(
                "Dubois Radiance Renewal Serum",
                "Brightening serum with vitamin C and tranexamic acid",
                "Apply in morning before moisturizer, always follow with SPF",
                &["Hyperpigmentation fading", "Even tone", "Radiance enhancement"],
            ),
        ),
        (
            Concern::Redness,
            ProductEntry::new(
                "Dubois Sensitive Relief Serum",
                "Calming serum with centella and azelaic acid complex",
                "Apply morning and evening with gentle patting motion",
                &["Redness calming", "Barrier repair", "Comfort restoration"],
            ),
        ),
        (
            Concern::Dryness,
            ProductEntry::new(
                "Dubois Intensive Hydration Booster",
                "Multi-molecular hyaluronic acid with ceramide complex",
                "Apply to damp skin, layer under moisturizer for enhanced effect",
                &["Deep hydration", "Moisture lock", "Plumping effect"],
            ),
        ),
        (
            Concern::Oiliness,
            ProductEntry::new(
                "Dubois Oil-Control Solution",
                "Niacinamide and zinc serum for sebum regulation",
                "Apply to entire face, extra attention to oily zones",
                &["Sebum regulation", "Pore refinement", "Matte finish"],
            ),
        ),
    ])
}
