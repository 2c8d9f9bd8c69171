use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;

/// Request body for adding a product.
#[derive(Debug, Clone, Object)]
pub struct AddProductDto {
    /// Product name
    #[oai(validator(min_length = 1, max_length = 100, pattern = r"\S"))]
    pub name: String,
    /// Unit price
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
    /// Product description
    #[oai(validator(min_length = 1, max_length = 255, pattern = r"\S"))]
    pub description: String,
    /// Units in stock
    #[oai(validator(minimum(value = "0")))]
    pub quantity: i32,
    /// Product image location
    #[oai(validator(min_length = 1, max_length = 255, pattern = r"\S"))]
    pub image_url: String,
}

/// Request body for replacing every field of an existing product.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductDto {
    /// Identifier of the product to update
    pub id: i32,
    /// Product name
    #[oai(validator(min_length = 1, max_length = 100, pattern = r"\S"))]
    pub name: String,
    /// Unit price
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
    /// Product description
    #[oai(validator(min_length = 1, max_length = 255, pattern = r"\S"))]
    pub description: String,
    /// Units in stock
    #[oai(validator(minimum(value = "0")))]
    pub quantity: i32,
    /// Product image location
    #[oai(validator(min_length = 1, max_length = 255, pattern = r"\S"))]
    pub image_url: String,
}

/// Summary view used in product lists.
#[derive(Debug, Clone, Object)]
pub struct MiniProductDto {
    pub name: String,
    pub image_url: String,
    pub price: f64,
}

/// Full view of a single product.
#[derive(Debug, Clone, Object)]
pub struct DetailedProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub quantity: i32,
    pub image_url: String,
}

impl From<Product> for MiniProductDto {
    fn from(product: Product) -> Self {
        Self {
            price: price_to_f64(&product.price),
            name: product.name,
            image_url: product.image_url,
        }
    }
}

impl From<Product> for DetailedProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            price: price_to_f64(&product.price),
            name: product.name,
            description: product.description,
            quantity: product.quantity,
            image_url: product.image_url,
        }
    }
}

impl TryFrom<AddProductDto> for CreateProductParams {
    type Error = ProductError;

    fn try_from(dto: AddProductDto) -> Result<Self, Self::Error> {
        Ok(Self {
            price: price_from_f64(dto.price)?,
            name: dto.name,
            description: dto.description,
            quantity: dto.quantity,
            image_url: dto.image_url,
        })
    }
}

impl TryFrom<UpdateProductDto> for UpdateProductParams {
    type Error = ProductError;

    fn try_from(dto: UpdateProductDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            price: price_from_f64(dto.price)?,
            name: dto.name,
            description: dto.description,
            quantity: dto.quantity,
            image_url: dto.image_url,
        })
    }
}

/// Goes through the shortest decimal rendering of the float so that `19.99`
/// becomes exactly `19.99` rather than its binary expansion.
pub fn price_from_f64(value: f64) -> Result<BigDecimal, ProductError> {
    if !value.is_finite() {
        return Err(ProductError::InvalidPrice);
    }
    BigDecimal::from_str(&value.to_string()).map_err(|_| ProductError::InvalidPrice)
}

pub fn price_to_f64(price: &BigDecimal) -> f64 {
    price.to_f64().unwrap_or_default()
}
