//! Raw form input.
//!
//! Forms hand over whatever the user typed: numbers may arrive as text, optional
//! fields may be empty strings, null, or missing. These types accept all of that
//! and leave every judgement to the shaping layer.

use serde::{Deserialize, Serialize};

/// A scalar field of unknown type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl LooseValue {
    /// True for text that is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        matches!(self, LooseValue::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

impl From<String> for LooseValue {
    fn from(value: String) -> Self {
        LooseValue::Text(value)
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        LooseValue::Number(value)
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        LooseValue::Number(value as f64)
    }
}

/// Vibe tags as typed into a single text box or already split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VibeInput {
    Text(String),
    Tags(Vec<String>),
}

impl From<&str> for VibeInput {
    fn from(value: &str) -> Self {
        VibeInput::Text(value.to_string())
    }
}

impl From<Vec<String>> for VibeInput {
    fn from(value: Vec<String>) -> Self {
        VibeInput::Tags(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub seating_level: Option<String>,
    pub vibe: Option<VibeInput>,
    pub good_for_work: Option<LooseValue>,
    pub photo_url: Option<String>,
}

impl ShopInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    pub shop_id: Option<String>,
    pub coffee_name: Option<String>,
    pub strength_level: Option<String>,
    pub price: Option<LooseValue>,
    pub rating: Option<LooseValue>,
    pub tasting_notes: Option<String>,
    pub photo_url: Option<String>,
    pub date_tried: Option<String>,
}

impl OrderInput {
    pub fn new(shop_id: impl Into<String>, coffee_name: impl Into<String>) -> Self {
        Self {
            shop_id: Some(shop_id.into()),
            coffee_name: Some(coffee_name.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_loose_json() {
        let input: OrderInput = serde_json::from_str(
            r#"{"shop_id":"s1","coffee_name":"Latte","rating":"4","price":5.5,"photo_url":null}"#,
        )
        .unwrap();
        assert_eq!(input.rating, Some(LooseValue::Text("4".into())));
        assert_eq!(input.price, Some(LooseValue::Number(5.5)));
        assert_eq!(input.photo_url, None);
        assert_eq!(input.date_tried, None);
    }

    #[test]
    fn flag_accepts_form_text() {
        let input: ShopInput =
            serde_json::from_str(r#"{"name":"A","good_for_work":"on"}"#).unwrap();
        assert_eq!(input.good_for_work, Some(LooseValue::Text("on".into())));

        let input: ShopInput =
            serde_json::from_str(r#"{"name":"A","good_for_work":true}"#).unwrap();
        assert_eq!(input.good_for_work, Some(LooseValue::Bool(true)));
    }

    #[test]
    fn vibe_accepts_text_or_list() {
        let text: ShopInput = serde_json::from_str(r#"{"name":"A","vibe":"cozy, quiet"}"#).unwrap();
        assert_eq!(text.vibe, Some(VibeInput::Text("cozy, quiet".into())));

        let list: ShopInput = serde_json::from_str(r#"{"name":"A","vibe":["cozy"]}"#).unwrap();
        assert_eq!(list.vibe, Some(VibeInput::Tags(vec!["cozy".into()])));
    }

    #[test]
    fn blank_only_applies_to_text() {
        assert!(LooseValue::from("  ").is_blank());
        assert!(!LooseValue::from("0").is_blank());
        assert!(!LooseValue::Number(0.0).is_blank());
    }
}
