use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatingLevel {
    Lots,
    Moderate,
    Limited,
}

impl SeatingLevel {
    pub const ALL: [SeatingLevel; 3] = [
        SeatingLevel::Lots,
        SeatingLevel::Moderate,
        SeatingLevel::Limited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatingLevel::Lots => "lots",
            SeatingLevel::Moderate => "moderate",
            SeatingLevel::Limited => "limited",
        }
    }
}

impl FromStr for SeatingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for SeatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roast strength of a tasted coffee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Light,
    Medium,
    Dark,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 3] = [
        StrengthLevel::Light,
        StrengthLevel::Medium,
        StrengthLevel::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Light => "light",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Dark => "dark",
        }
    }
}

impl FromStr for StrengthLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shaped shop, ready to insert.
///
/// Blank `address` and `photo_url` are kept as explicit nulls and `vibe` is
/// always present, so every key appears in the insert payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShop {
    pub name: String,
    pub address: Option<String>,
    pub seating_level: Option<SeatingLevel>,
    pub vibe: Vec<String>,
    pub good_for_work: bool,
    pub photo_url: Option<String>,
}

/// A shaped order, ready to insert.
///
/// Optional fields that were blank are left out of the payload entirely so
/// the store's column defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub shop_id: String,
    pub coffee_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_level: Option<StrengthLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasting_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_tried: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub seating_level: Option<SeatingLevel>,
    #[serde(default)]
    pub vibe: Vec<String>,
    #[serde(default)]
    pub good_for_work: bool,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Shop {
    pub fn from_new(new: &NewShop, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name.clone(),
            address: new.address.clone(),
            seating_level: new.seating_level,
            vibe: new.vibe.clone(),
            good_for_work: new.good_for_work,
            photo_url: new.photo_url.clone(),
            created_at,
        }
    }
}

/// A stored tasting entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub coffee_name: String,
    pub strength_level: Option<StrengthLevel>,
    pub price: Option<Decimal>,
    pub rating: Option<u8>,
    pub tasting_notes: Option<String>,
    pub photo_url: Option<String>,
    pub date_tried: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds the stored row once the store has resolved `shop_id`.
    pub fn from_new(new: &NewOrder, id: Uuid, shop_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            shop_id,
            coffee_name: new.coffee_name.clone(),
            strength_level: new.strength_level,
            price: new.price,
            rating: new.rating,
            tasting_notes: new.tasting_notes.clone(),
            photo_url: new.photo_url.clone(),
            date_tried: new.date_tried,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_values_parse_exactly() {
        assert_eq!("lots".parse(), Ok(SeatingLevel::Lots));
        assert_eq!("limited".parse(), Ok(SeatingLevel::Limited));
        assert!("Lots".parse::<SeatingLevel>().is_err());
        assert_eq!("dark".parse(), Ok(StrengthLevel::Dark));
        assert!("espresso".parse::<StrengthLevel>().is_err());
    }

    #[test]
    fn new_shop_serializes_nulls() {
        let shop = NewShop {
            name: "Brew".into(),
            address: None,
            seating_level: None,
            vibe: vec![],
            good_for_work: false,
            photo_url: None,
        };
        let json = serde_json::to_value(&shop).unwrap();
        assert!(json["address"].is_null());
        assert!(json["photo_url"].is_null());
        assert_eq!(json["vibe"], serde_json::json!([]));
    }
}
