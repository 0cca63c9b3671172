use super::coerce::{flag, non_blank, vibe_tags};
use crate::error::ValidationError;
use crate::input::ShopInput;
use crate::model::{NewShop, SeatingLevel};

pub const NAME_REQUIRED: ValidationError = ValidationError::new("name", "shop name required");
pub const INVALID_SEATING: ValidationError =
    ValidationError::new("seating_level", "invalid seating level");

/// Validates raw shop input and builds the insert record.
///
/// Blank `address`/`photo_url` become `None` (stored as null) rather than
/// being dropped, `vibe` is always a list and `good_for_work` defaults to false.
pub fn shape_shop(input: &ShopInput) -> Result<NewShop, ValidationError> {
    let name = non_blank(input.name.as_deref()).ok_or(NAME_REQUIRED)?;

    let seating_level = non_blank(input.seating_level.as_deref())
        .map(|raw| raw.parse::<SeatingLevel>().map_err(|_| INVALID_SEATING))
        .transpose()?;

    Ok(NewShop {
        name: name.to_string(),
        address: non_blank(input.address.as_deref()).map(str::to_string),
        seating_level,
        vibe: vibe_tags(input.vibe.as_ref()),
        good_for_work: flag(input.good_for_work.as_ref()),
        photo_url: non_blank(input.photo_url.as_deref()).map(str::to_string),
    })
}
