use super::coerce::{non_blank, present, to_decimal, to_integer};
use crate::error::ValidationError;
use crate::input::OrderInput;
use crate::model::{NewOrder, StrengthLevel};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const SHOP_REQUIRED: ValidationError =
    ValidationError::new("shop_id", "shop reference required");
pub const COFFEE_REQUIRED: ValidationError =
    ValidationError::new("coffee_name", "coffee name required");
pub const INVALID_STRENGTH: ValidationError =
    ValidationError::new("strength_level", "invalid strength level");
pub const INVALID_RATING: ValidationError = ValidationError::new("rating", "invalid rating");
pub const INVALID_PRICE: ValidationError = ValidationError::new("price", "invalid price");
pub const INVALID_DATE: ValidationError = ValidationError::new("date_tried", "invalid date tried");

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Validates raw order input and builds the insert record.
///
/// Checks run in a fixed order and the first failure is returned. Optional
/// fields that are blank or missing stay `None` and are omitted when the
/// record is serialized.
pub fn shape_order(input: &OrderInput) -> Result<NewOrder, ValidationError> {
    let shop_id = non_blank(input.shop_id.as_deref()).ok_or(SHOP_REQUIRED)?;
    let coffee_name = non_blank(input.coffee_name.as_deref()).ok_or(COFFEE_REQUIRED)?;

    let strength_level = non_blank(input.strength_level.as_deref())
        .map(|raw| raw.parse::<StrengthLevel>().map_err(|_| INVALID_STRENGTH))
        .transpose()?;

    let rating = present(input.rating.as_ref())
        .map(|raw| {
            to_integer(raw)
                .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
                .map(|r| r as u8)
                .ok_or(INVALID_RATING)
        })
        .transpose()?;

    let price = present(input.price.as_ref())
        .map(|raw| {
            to_decimal(raw)
                .filter(|p| *p >= Decimal::ZERO)
                .ok_or(INVALID_PRICE)
        })
        .transpose()?;

    let date_tried = non_blank(input.date_tried.as_deref())
        .map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| INVALID_DATE))
        .transpose()?;

    Ok(NewOrder {
        shop_id: shop_id.to_string(),
        coffee_name: coffee_name.to_string(),
        strength_level,
        price,
        rating,
        tasting_notes: non_blank(input.tasting_notes.as_deref()).map(str::to_string),
        photo_url: non_blank(input.photo_url.as_deref()).map(str::to_string),
        date_tried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LooseValue;

    fn with_rating(raw: impl Into<LooseValue>) -> OrderInput {
        OrderInput {
            rating: Some(raw.into()),
            ..OrderInput::new("s1", "Latte")
        }
    }

    fn with_price(raw: impl Into<LooseValue>) -> OrderInput {
        OrderInput {
            price: Some(raw.into()),
            ..OrderInput::new("s1", "Latte")
        }
    }

    #[test]
    fn required_fields_only_produce_two_keys() {
        let order = shape_order(&OrderInput::new(" s1 ", " Latte ")).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["coffee_name", "shop_id"]);
        assert_eq!(json["shop_id"], "s1");
        assert_eq!(json["coffee_name"], "Latte");
    }

    #[test]
    fn blank_shop_reference_is_rejected() {
        for shop in ["", "   "] {
            assert_eq!(
                shape_order(&OrderInput::new(shop, "Latte")),
                Err(SHOP_REQUIRED)
            );
        }
        let missing = OrderInput {
            coffee_name: Some("Latte".into()),
            ..OrderInput::default()
        };
        assert_eq!(shape_order(&missing), Err(SHOP_REQUIRED));
    }

    #[test]
    fn blank_coffee_name_is_rejected() {
        assert_eq!(
            shape_order(&OrderInput::new("s1", " \t")),
            Err(COFFEE_REQUIRED)
        );
    }

    #[test]
    fn strength_levels() {
        for raw in ["light", "medium", "dark"] {
            let input = OrderInput {
                strength_level: Some(raw.into()),
                ..OrderInput::new("s1", "Latte")
            };
            let shaped = shape_order(&input).unwrap();
            assert_eq!(shaped.strength_level.map(|s| s.as_str()), Some(raw));
        }
        for raw in ["Dark", "extra", "burnt"] {
            let input = OrderInput {
                strength_level: Some(raw.into()),
                ..OrderInput::new("s1", "Latte")
            };
            assert_eq!(shape_order(&input), Err(INVALID_STRENGTH), "{raw}");
        }
    }

    #[test]
    fn ratings_one_to_five_pass() {
        for r in 1..=5i64 {
            assert_eq!(shape_order(&with_rating(r)).unwrap().rating, Some(r as u8));
            assert_eq!(
                shape_order(&with_rating(r.to_string())).unwrap().rating,
                Some(r as u8)
            );
        }
    }

    #[test]
    fn fractional_ratings_truncate() {
        assert_eq!(shape_order(&with_rating("4.7")).unwrap().rating, Some(4));
        assert_eq!(shape_order(&with_rating(5.9)).unwrap().rating, Some(5));
        assert_eq!(shape_order(&with_rating("1.0")).unwrap().rating, Some(1));
    }

    #[test]
    fn ratings_outside_range_fail() {
        for raw in ["0", "6", "7", "-1", "0.5", "abc", "five", "NaN"] {
            assert_eq!(
                shape_order(&with_rating(raw)),
                Err(INVALID_RATING),
                "{raw}"
            );
        }
        assert_eq!(shape_order(&with_rating(6.2)), Err(INVALID_RATING));
        assert_eq!(
            shape_order(&with_rating(LooseValue::Bool(true))),
            Err(INVALID_RATING)
        );
    }

    #[test]
    fn rating_text_must_be_a_whole_number() {
        // Trailing junk is not ignored, and exponents are read in full.
        assert_eq!(shape_order(&with_rating("4abc")), Err(INVALID_RATING));
        assert_eq!(shape_order(&with_rating("1e1")), Err(INVALID_RATING));
        assert_eq!(shape_order(&with_rating("4e0")).unwrap().rating, Some(4));
    }

    #[test]
    fn blank_rating_is_omitted() {
        assert_eq!(shape_order(&with_rating("  ")).unwrap().rating, None);
    }

    #[test]
    fn non_negative_prices_pass() {
        assert_eq!(
            shape_order(&with_price("0")).unwrap().price,
            Some(Decimal::ZERO)
        );
        assert_eq!(
            shape_order(&with_price("5.50")).unwrap().price,
            Some(Decimal::new(550, 2))
        );
        assert_eq!(
            shape_order(&with_price(3.25)).unwrap().price,
            Some(Decimal::new(325, 2))
        );
    }

    #[test]
    fn negative_or_non_numeric_prices_fail() {
        for raw in ["-0.01", "-5", "cheap", "$4"] {
            assert_eq!(shape_order(&with_price(raw)), Err(INVALID_PRICE), "{raw}");
        }
        assert_eq!(shape_order(&with_price(-2.0)), Err(INVALID_PRICE));
    }

    #[test]
    fn rating_is_checked_before_price() {
        let input = OrderInput {
            rating: Some("9".into()),
            price: Some("-1".into()),
            ..OrderInput::new("s1", "Latte")
        };
        assert_eq!(shape_order(&input), Err(INVALID_RATING));
    }

    #[test]
    fn optional_text_is_trimmed_and_kept() {
        let input = OrderInput {
            tasting_notes: Some("  Smooth and creamy ".into()),
            photo_url: Some(" ".into()),
            date_tried: Some("2024-03-09".into()),
            ..OrderInput::new("s1", "Latte")
        };
        let order = shape_order(&input).unwrap();
        assert_eq!(order.tasting_notes.as_deref(), Some("Smooth and creamy"));
        assert_eq!(order.photo_url, None);
        assert_eq!(order.date_tried, NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn malformed_date_fails() {
        let input = OrderInput {
            date_tried: Some("March 9".into()),
            ..OrderInput::new("s1", "Latte")
        };
        assert_eq!(shape_order(&input), Err(INVALID_DATE));
    }
}
