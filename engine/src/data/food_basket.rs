// Minimum monthly cost of the standard food basket (cesta básica) per region.
// The built-in table is built once per process and never changes afterwards;
// custom tables can be loaded from JSON for other reference months.
use chrono::NaiveDate;
use serde::Deserialize;
use shared::Region;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::EngineError;

const STANDARD_REFERENCE_MONTH: (i32, u32, u32) = (2024, 6, 1);

const STANDARD_COSTS: [(Region, f64); 27] = [
    (Region::Acre, 712.35),
    (Region::Alagoas, 598.40),
    (Region::Amapa, 701.62),
    (Region::Amazonas, 689.17),
    (Region::Bahia, 611.02),
    (Region::Ceara, 659.44),
    (Region::DistritoFederal, 773.81),
    (Region::EspiritoSanto, 751.63),
    (Region::Goias, 727.90),
    (Region::Maranhao, 632.15),
    (Region::MatoGrosso, 744.28),
    (Region::MatoGrossoDoSul, 739.56),
    (Region::MinasGerais, 718.04),
    (Region::Para, 664.87),
    (Region::Paraiba, 602.33),
    (Region::Parana, 758.11),
    (Region::Pernambuco, 619.76),
    (Region::Piaui, 608.92),
    (Region::RioDeJaneiro, 811.27),
    (Region::RioGrandeDoNorte, 615.48),
    (Region::RioGrandeDoSul, 792.06),
    (Region::Rondonia, 698.73),
    (Region::Roraima, 705.19),
    (Region::SantaCatarina, 803.45),
    (Region::SaoPaulo, 847.14),
    (Region::Sergipe, 579.66),
    (Region::Tocantins, 684.30),
];

static STANDARD_TABLE: OnceLock<FoodBasketTable> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct FoodBasketTable {
    reference_month: Option<NaiveDate>,
    costs: HashMap<Region, f64>,
}

// On-disk / embedded JSON shape:
// { "reference_month": "2024-06-01", "costs": { "SP": 847.14, ... } }
#[derive(Debug, Deserialize)]
struct FoodBasketFile {
    #[serde(default)]
    reference_month: Option<NaiveDate>,
    costs: HashMap<Region, f64>,
}

impl FoodBasketTable {
    /// The built-in table, initialised on first use.
    pub fn standard() -> &'static FoodBasketTable {
        STANDARD_TABLE.get_or_init(|| {
            let (y, m, d) = STANDARD_REFERENCE_MONTH;
            FoodBasketTable {
                reference_month: NaiveDate::from_ymd_opt(y, m, d),
                costs: STANDARD_COSTS.iter().copied().collect(),
            }
        })
    }

    /// Loads a custom table. Regions may be omitted (the food-basket rule
    /// is then skipped for them) but every listed cost must be a positive number.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let file: FoodBasketFile = serde_json::from_str(json)?;
        for (region, cost) in &file.costs {
            if !cost.is_finite() || *cost <= 0.0 {
                return Err(EngineError::ReferenceTableError(format!(
                    "basket cost for {} must be positive, got {}",
                    region, cost
                )));
            }
        }
        if file.costs.is_empty() {
            tracing::warn!("Loaded a food-basket table with no regions");
        }
        Ok(Self {
            reference_month: file.reference_month,
            costs: file.costs,
        })
    }

    pub fn cost_for(&self, region: Region) -> Option<f64> {
        self.costs.get(&region).copied()
    }

    pub fn reference_month(&self) -> Option<NaiveDate> {
        self.reference_month
    }

    /// "MM/YYYY" of the reference month, for display next to a cost.
    pub fn reference_label(&self) -> Option<String> {
        self.reference_month().map(|month| month.format("%m/%Y").to_string())
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_region() {
        let table = FoodBasketTable::standard();
        assert_eq!(table.len(), 27);
        for region in Region::ALL {
            assert!(table.cost_for(region).is_some(), "missing {}", region);
        }
        assert_eq!(table.cost_for(Region::SaoPaulo), Some(847.14));
    }

    #[test]
    fn test_standard_table_is_initialised_once() {
        let a = FoodBasketTable::standard() as *const FoodBasketTable;
        let b = FoodBasketTable::standard() as *const FoodBasketTable;
        assert_eq!(a, b);
        assert_eq!(
            FoodBasketTable::standard().reference_month(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_from_json_partial_table() {
        let table = FoodBasketTable::from_json(
            r#"{ "reference_month": "2025-01-01", "costs": { "SP": 900.0, "RJ": 850.5 } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cost_for(Region::RioDeJaneiro), Some(850.5));
        assert_eq!(table.cost_for(Region::Bahia), None);
        assert_eq!(table.reference_month(), NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn test_reference_label() {
        assert_eq!(FoodBasketTable::standard().reference_label().as_deref(), Some("06/2024"));
        let undated = FoodBasketTable::from_json(r#"{ "costs": { "SP": 900.0 } }"#).unwrap();
        assert_eq!(undated.reference_label(), None);
    }

    #[test]
    fn test_from_json_rejects_non_positive_cost() {
        let result = FoodBasketTable::from_json(r#"{ "costs": { "SP": 0 } }"#);
        assert!(matches!(result, Err(EngineError::ReferenceTableError(_))));
    }

    #[test]
    fn test_from_json_rejects_unknown_region() {
        let result = FoodBasketTable::from_json(r#"{ "costs": { "XX": 10 } }"#);
        assert!(matches!(result, Err(EngineError::JsonError { .. })));
    }
}
