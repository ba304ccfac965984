//! Benchmark input data.
//!
//! The built-in sample is a small real-estate matching problem: one buyer
//! profile and a handful of condo listings. It mixes nested objects,
//! primitive arrays and a uniform object array, which is the shape where
//! the two encodings differ most. Any JSON document can be supplied instead
//! with [`load_json`].

use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{BenchError, Result};

/// Buyer requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    /// Lower bound of the budget (USD)
    pub budget_min: u32,
    /// Upper bound of the budget (USD)
    pub budget_max: u32,
    /// Neighborhoods the buyer is interested in
    pub target_areas: Vec<String>,
    /// Non-negotiable requirements
    pub must_haves: Vec<String>,
}

/// A single condo listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// MLS identifier
    pub mls_id: String,
    /// Asking price (USD)
    pub price: u32,
    /// Bedrooms
    pub beds: u8,
    /// Bathrooms; half baths are fractional
    #[serde(serialize_with = "whole_as_integer")]
    pub baths: f64,
    /// Interior square footage
    pub sqft: u32,
    /// Neighborhood name
    pub neighborhood: String,
    /// Monthly HOA fee (USD)
    pub hoa_monthly: u32,
    /// Walk score (0-100)
    pub walk_score: u8,
    /// Safety score (0-10)
    pub safety_score: f64,
}

/// Complete benchmark payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Who is buying
    pub buyer_profile: BuyerProfile,
    /// What is for sale
    pub listings: Vec<Listing>,
}

impl Dataset {
    /// The built-in sample: one buyer, four listings.
    pub fn sample() -> Self {
        Self {
            buyer_profile: BuyerProfile {
                budget_min: 600_000,
                budget_max: 900_000,
                target_areas: strings(&["Coral Gables", "Coconut Grove"]),
                must_haves: strings(&["2+ bedrooms", "walkable", "low hoa", "safe neighborhood"]),
            },
            listings: vec![
                listing("A11861233", 439_900, 2, 2.0, 1180, "Aventura", 780, 82, 7.8),
                listing("A11543210", 795_000, 3, 3.0, 1650, "Coral Gables", 350, 89, 9.1),
                listing("A11498765", 720_000, 2, 2.0, 1420, "Coconut Grove", 420, 92, 8.7),
                listing("A11800001", 910_000, 3, 2.5, 1750, "Coral Gables", 510, 86, 9.3),
            ],
        }
    }

    /// Convert to a JSON value, keeping field declaration order.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sample()
    }
}

/// Load an arbitrary JSON document to benchmark instead of the sample.
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        BenchError::Config(format!("Failed to read data file {}: {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    mls_id: &str,
    price: u32,
    beds: u8,
    baths: f64,
    sqft: u32,
    neighborhood: &str,
    hoa_monthly: u32,
    walk_score: u8,
    safety_score: f64,
) -> Listing {
    Listing {
        mls_id: mls_id.to_string(),
        price,
        beds,
        baths,
        sqft,
        neighborhood: neighborhood.to_string(),
        hoa_monthly,
        walk_score,
        safety_score,
    }
}

/// Serialize whole floats as integers so `2.0` renders as `2`.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_shape() {
        let data = Dataset::sample();
        assert_eq!(data.buyer_profile.budget_min, 600_000);
        assert_eq!(data.buyer_profile.target_areas.len(), 2);
        assert_eq!(data.buyer_profile.must_haves.len(), 4);
        assert_eq!(data.listings.len(), 4);
        assert_eq!(data.listings[3].mls_id, "A11800001");
    }

    #[test]
    fn test_value_keeps_field_order() {
        let value = Dataset::sample().to_value().unwrap();
        let keys: Vec<&str> = value["listings"][0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "mls_id",
                "price",
                "beds",
                "baths",
                "sqft",
                "neighborhood",
                "hoa_monthly",
                "walk_score",
                "safety_score"
            ]
        );
    }

    #[test]
    fn test_whole_baths_serialize_as_integers() {
        let value = Dataset::sample().to_value().unwrap();
        assert_eq!(value["listings"][0]["baths"].to_string(), "2");
        assert_eq!(value["listings"][3]["baths"].to_string(), "2.5");
        assert_eq!(value["listings"][0]["safety_score"].to_string(), "7.8");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"items":[1,2,3]}}"#).unwrap();

        let value = load_json(file.path()).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_load_json_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(load_json(file.path()), Err(BenchError::Json(_))));
    }
}
