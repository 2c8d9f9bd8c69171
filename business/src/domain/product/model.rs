use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ProductError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
pub const MAX_IMAGE_URL_LENGTH: usize = 255;
/// Prices are stored as `NUMERIC(12, 2)`: at most two decimals and ten
/// integer digits.
pub const PRICE_SCALE: i64 = 2;
pub const PRICE_INTEGER_DIGITS: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub quantity: i32,
    pub image_url: String,
}

/// The five caller-supplied fields of a product. Used both for creation and
/// for the full replace performed by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductProps {
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub quantity: i32,
    pub image_url: String,
}

impl NewProductProps {
    pub fn validate(&self) -> Result<(), ProductError> {
        check_text(
            &self.name,
            MAX_NAME_LENGTH,
            ProductError::NameEmpty,
            ProductError::NameTooLong,
        )?;
        check_text(
            &self.description,
            MAX_DESCRIPTION_LENGTH,
            ProductError::DescriptionEmpty,
            ProductError::DescriptionTooLong,
        )?;
        check_text(
            &self.image_url,
            MAX_IMAGE_URL_LENGTH,
            ProductError::ImageUrlEmpty,
            ProductError::ImageUrlTooLong,
        )?;

        if self.price < BigDecimal::zero() {
            return Err(ProductError::NegativePrice);
        }
        if !fits_price_column(&self.price) {
            return Err(ProductError::InvalidPrice);
        }
        if self.quantity < 0 {
            return Err(ProductError::NegativeQuantity);
        }

        Ok(())
    }
}

fn check_text(
    value: &str,
    max: usize,
    empty: ProductError,
    too_long: ProductError,
) -> Result<(), ProductError> {
    if value.trim().is_empty() {
        return Err(empty);
    }
    if value.chars().count() > max {
        return Err(too_long);
    }
    Ok(())
}

fn fits_price_column(price: &BigDecimal) -> bool {
    let (_, scale) = price.normalized().as_bigint_and_exponent();
    scale <= PRICE_SCALE && *price < BigDecimal::from(10_i64.pow(PRICE_INTEGER_DIGITS))
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, props: NewProductProps) -> Self {
        Self {
            id,
            name: props.name,
            price: props.price,
            description: props.description,
            quantity: props.quantity,
            image_url: props.image_url,
        }
    }

    /// Replaces every field except the id. Nothing changes when validation fails.
    pub fn replace_details(&mut self, props: NewProductProps) -> Result<(), ProductError> {
        props.validate()?;

        self.name = props.name;
        self.price = props.price;
        self.description = props.description;
        self.quantity = props.quantity;
        self.image_url = props.image_url;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn valid_props() -> NewProductProps {
        NewProductProps {
            name: "Espresso Machine".to_string(),
            price: BigDecimal::from(500),
            description: "Dual boiler, 2L tank".to_string(),
            quantity: 100,
            image_url: "https://cdn.example.com/espresso.png".to_string(),
        }
    }

    #[test]
    fn should_accept_valid_props() {
        assert!(valid_props().validate().is_ok());
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let props = NewProductProps {
            name: "   ".to_string(),
            ..valid_props()
        };

        assert!(matches!(props.validate(), Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_accept_name_at_max_length() {
        let props = NewProductProps {
            name: "a".repeat(MAX_NAME_LENGTH),
            ..valid_props()
        };

        assert!(props.validate().is_ok());
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let props = NewProductProps {
            name: "é".repeat(MAX_NAME_LENGTH),
            ..valid_props()
        };

        assert!(props.validate().is_ok());
    }

    #[test]
    fn should_reject_when_description_empty() {
        let props = NewProductProps {
            description: String::new(),
            ..valid_props()
        };

        assert!(matches!(
            props.validate(),
            Err(ProductError::DescriptionEmpty)
        ));
    }

    #[test]
    fn should_reject_when_image_url_too_long() {
        let props = NewProductProps {
            image_url: "x".repeat(MAX_IMAGE_URL_LENGTH + 1),
            ..valid_props()
        };

        assert!(matches!(
            props.validate(),
            Err(ProductError::ImageUrlTooLong)
        ));
    }

    #[test]
    fn should_reject_when_price_negative() {
        let props = NewProductProps {
            price: BigDecimal::from(-1),
            ..valid_props()
        };

        assert!(matches!(props.validate(), Err(ProductError::NegativePrice)));
    }

    #[test]
    fn should_reject_price_with_more_than_two_decimals() {
        let props = NewProductProps {
            price: BigDecimal::from_str("19.999").unwrap(),
            ..valid_props()
        };

        assert!(matches!(props.validate(), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_accept_trailing_zero_decimals() {
        let props = NewProductProps {
            price: BigDecimal::from_str("19.9900").unwrap(),
            ..valid_props()
        };

        assert!(props.validate().is_ok());
    }

    #[test]
    fn should_accept_largest_storable_price() {
        let props = NewProductProps {
            price: BigDecimal::from_str("9999999999.99").unwrap(),
            ..valid_props()
        };

        assert!(props.validate().is_ok());
    }

    #[test]
    fn should_reject_price_beyond_storable_range() {
        let props = NewProductProps {
            price: BigDecimal::from(100_000_000_000_i64),
            ..valid_props()
        };

        assert!(matches!(props.validate(), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_accept_zero_price_and_quantity() {
        let props = NewProductProps {
            price: BigDecimal::from(0),
            quantity: 0,
            ..valid_props()
        };

        assert!(props.validate().is_ok());
    }

    #[test]
    fn should_reject_when_quantity_negative() {
        let props = NewProductProps {
            quantity: -3,
            ..valid_props()
        };

        assert!(matches!(
            props.validate(),
            Err(ProductError::NegativeQuantity)
        ));
    }

    #[test]
    fn should_replace_all_fields_but_keep_id() {
        let mut product = Product::from_repository(1, valid_props());

        product
            .replace_details(NewProductProps {
                name: "pro updated".to_string(),
                price: BigDecimal::from(650),
                description: "pro".to_string(),
                quantity: 7,
                image_url: "Test".to_string(),
            })
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "pro updated");
        assert_eq!(product.price, BigDecimal::from(650));
        assert_eq!(product.quantity, 7);
        assert_eq!(product.image_url, "Test");
    }

    #[test]
    fn should_leave_product_untouched_when_replacement_invalid() {
        let mut product = Product::from_repository(1, valid_props());
        let before = product.clone();

        let result = product.replace_details(NewProductProps {
            name: String::new(),
            ..valid_props()
        });

        assert!(result.is_err());
        assert_eq!(product, before);
    }

    proptest! {
        #[test]
        fn should_reject_any_name_over_max_length(name in "[a-zA-Z0-9]{101,180}") {
            let props = NewProductProps { name, ..valid_props() };
            prop_assert!(matches!(props.validate(), Err(ProductError::NameTooLong)));
        }

        #[test]
        fn should_accept_any_price_in_cents_within_range(cents in 0_i64..1_000_000_000_000) {
            let price = BigDecimal::from_str(&format!("{}.{:02}", cents / 100, cents % 100)).unwrap();
            let props = NewProductProps { price, ..valid_props() };
            prop_assert!(props.validate().is_ok());
        }

        #[test]
        fn should_accept_any_description_within_bounds(description in "[a-z]{1,255}") {
            let props = NewProductProps { description, ..valid_props() };
            prop_assert!(props.validate().is_ok());
        }
    }
}
