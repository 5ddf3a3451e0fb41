// Product knowledge base.
// Built once at start-up and shared read-only (Arc<ProductCatalog>) across requests.

pub mod products;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routine::RoutineError;

// ────────────────────────────────────────────────────────────────────────────
// Keys
// ────────────────────────────────────────────────────────────────────────────

/// Primary key for base product selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Normal,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Normal,
        SkinType::Sensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Normal => "normal",
            SkinType::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = RoutineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RoutineError::InvalidSkinType(s.to_string()))
    }
}

/// Secondary key for serum selection and tip personalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Concern {
    Acne,
    Aging,
    DarkSpots,
    Redness,
    Dryness,
    Oiliness,
}

impl Concern {
    pub const ALL: [Concern; 6] = [
        Concern::Acne,
        Concern::Aging,
        Concern::DarkSpots,
        Concern::Redness,
        Concern::Dryness,
        Concern::Oiliness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::Acne => "acne",
            Concern::Aging => "aging",
            Concern::DarkSpots => "darkSpots",
            Concern::Redness => "redness",
            Concern::Dryness => "dryness",
            Concern::Oiliness => "oiliness",
        }
    }

    /// Returns `None` for strings outside the enumeration.
    pub fn parse(s: &str) -> Option<Concern> {
        Concern::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free set of concerns.
///
/// Iteration order is the order in which each concern was first supplied by the caller.
/// Deserializes from a list of strings through `from_raw`, so unknown and repeated values
/// are dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ConcernSet(Vec<Concern>);

impl ConcernSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from caller-supplied strings. Unrecognized values are dropped silently.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|s| Concern::parse(s.as_ref().trim()))
            .collect()
    }

    pub fn insert(&mut self, concern: Concern) -> bool {
        if self.0.contains(&concern) {
            return false;
        }
        self.0.push(concern);
        true
    }

    pub fn contains(&self, concern: Concern) -> bool {
        self.0.contains(&concern)
    }

    pub fn iter(&self) -> impl Iterator<Item = Concern> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ConcernSet {
    fn from(raw: Vec<String>) -> Self {
        ConcernSet::from_raw(raw)
    }
}

impl FromIterator<Concern> for ConcernSet {
    fn from_iter<T: IntoIterator<Item = Concern>>(iter: T) -> Self {
        let mut set = ConcernSet::new();
        for concern in iter {
            set.insert(concern);
        }
        set
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub product_name: String,
    pub description: String,
    pub usage_instructions: String,
    pub benefits: Vec<String>,
}

impl ProductEntry {
    pub fn new(name: &str, description: &str, usage: &str, benefits: &[&str]) -> Self {
        Self {
            product_name: name.to_string(),
            description: description.to_string(),
            usage_instructions: usage.to_string(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// The four base products recommended for one skin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseLineup {
    pub cleanser: ProductEntry,
    pub toner: ProductEntry,
    pub moisturizer: ProductEntry,
    pub sunscreen: ProductEntry,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no base lineup for skin type '{0}'")]
    MissingLineup(SkinType),
}

/// Read-only product knowledge base.
///
/// A lineup exists for every `SkinType` (checked in `new`). The serum map may be partial;
/// concerns without a serum are skipped during composition.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    lineups: HashMap<SkinType, BaseLineup>,
    serums: HashMap<Concern, ProductEntry>,
}

impl ProductCatalog {
    pub fn new(
        lineups: HashMap<SkinType, BaseLineup>,
        serums: HashMap<Concern, ProductEntry>,
    ) -> Result<Self, CatalogError> {
        if let Some(missing) = SkinType::ALL.into_iter().find(|t| !lineups.contains_key(t)) {
            return Err(CatalogError::MissingLineup(missing));
        }
        Ok(Self { lineups, serums })
    }

    /// The built-in storefront catalog, validated like any substitute.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(products::standard_lineups(), products::standard_serums())
    }

    pub fn lineup(&self, skin_type: SkinType) -> &BaseLineup {
        // Every SkinType is present: `new` rejects partial maps.
        &self.lineups[&skin_type]
    }

    pub fn serum(&self, concern: Concern) -> Option<&ProductEntry> {
        self.serums.get(&concern)
    }

    pub fn serum_count(&self) -> usize {
        self.serums.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_type_parses_all_five() {
        for t in SkinType::ALL {
            assert_eq!(t.as_str().parse::<SkinType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_skin_type_is_rejected() {
        let err = "leathery".parse::<SkinType>().unwrap_err();
        assert_eq!(err, RoutineError::InvalidSkinType("leathery".to_string()));
    }

    #[test]
    fn test_skin_type_parse_is_case_sensitive() {
        assert!("Dry".parse::<SkinType>().is_err());
    }

    #[test]
    fn test_concern_set_drops_unknown_and_duplicates() {
        let set = ConcernSet::from_raw(["aging", "wrinkles", "acne", "aging", "darkSpots"]);
        let collected: Vec<Concern> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Concern::Aging, Concern::Acne, Concern::DarkSpots],
            "unknown dropped, first occurrence order kept"
        );
    }

    #[test]
    fn test_concern_serializes_camel_case() {
        let json = serde_json::to_string(&ConcernSet::from_raw(["darkSpots", "acne"])).unwrap();
        assert_eq!(json, r#"["darkSpots","acne"]"#);
    }

    #[test]
    fn test_concern_set_deserializes_through_from_raw() {
        let set: ConcernSet =
            serde_json::from_str(r#"["acne", "freckles", "acne", " aging "]"#).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Concern::Acne, Concern::Aging]);
    }

    #[test]
    fn test_standard_catalog_covers_every_key() {
        let catalog = ProductCatalog::standard().unwrap();
        for t in SkinType::ALL {
            let lineup = catalog.lineup(t);
            assert!(!lineup.cleanser.product_name.is_empty());
            assert!(!lineup.sunscreen.usage_instructions.is_empty());
        }
        for c in Concern::ALL {
            assert!(catalog.serum(c).is_some(), "missing serum for {c}");
        }
        assert_eq!(catalog.serum_count(), 6);
    }

    #[test]
    fn test_new_rejects_missing_lineup() {
        let mut lineups = products::standard_lineups();
        lineups.remove(&SkinType::Combination);
        let err = ProductCatalog::new(lineups, HashMap::new()).unwrap_err();
        assert_eq!(err, CatalogError::MissingLineup(SkinType::Combination));
    }

    #[test]
    fn test_new_accepts_partial_serum_map() {
        let mut serums = products::standard_serums();
        serums.remove(&Concern::Redness);
        let catalog = ProductCatalog::new(products::standard_lineups(), serums).unwrap();
        assert!(catalog.serum(Concern::Redness).is_none());
        assert!(catalog.serum(Concern::Acne).is_some());
    }
}
