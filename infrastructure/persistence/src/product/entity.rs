use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::{NewProductProps, Product};

pub const PRODUCT_COLUMNS: &str = "id, name, price, description, quantity, image_url";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub quantity: i32,
    pub image_url: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            NewProductProps {
                name: self.name,
                price: self.price,
                description: self.description,
                quantity: self.quantity,
                image_url: self.image_url,
            },
        )
    }
}

/// Builds an `ILIKE` pattern matching `term` anywhere, with LIKE wildcards
/// in the term taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
