use std::borrow::Cow;

use validator::{Validate, ValidationError};

use super::{FieldViolation, ValidateDto};

pub const MIN_PRICE: f64 = 0.0;
pub const MAX_PRICE: f64 = 10_000_000.0;

/// Text fields of the product creation form. File parts are bound separately.
#[derive(Clone, Debug, Default, Validate)]
pub struct ProductDto {
    #[validate(
        custom(function = "not_blank"),
        length(min = 3, max = 200, message = "Title must be between 3 and 200 characters")
    )]
    pub name: String,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("Title is required"));
        return Err(error);
    }
    Ok(())
}

impl ProductDto {
    fn price_violation(&self) -> Option<FieldViolation> {
        let price = self.price?;
        if price < MIN_PRICE {
            Some(FieldViolation::new(
                "price",
                "Price must be greater than or equal to 0",
            ))
        } else if price > MAX_PRICE {
            Some(FieldViolation::new(
                "price",
                "Price must be less than or equal to 10,000,000",
            ))
        } else {
            None
        }
    }
}

impl ValidateDto for ProductDto {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = match self.validate() {
            Ok(_) => Vec::new(),
            Err(e) => FieldViolation::from_errors(&e),
        };
        violations.extend(self.price_violation());
        violations
    }
}
