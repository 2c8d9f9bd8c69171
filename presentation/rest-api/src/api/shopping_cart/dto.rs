use poem_openapi::Object;

use business::domain::shopping_cart::model::ShoppingCart;

use crate::api::product::dto::{DetailedProductDto, price_to_f64};

/// A shopping cart with the products it holds and their summed price.
#[derive(Debug, Clone, Object)]
pub struct ShoppingCartDto {
    pub id: i32,
    pub total_cost: f64,
    pub products: Vec<DetailedProductDto>,
}

impl From<ShoppingCart> for ShoppingCartDto {
    fn from(cart: ShoppingCart) -> Self {
        Self {
            id: cart.id(),
            total_cost: price_to_f64(cart.total_cost()),
            products: cart
                .products()
                .iter()
                .cloned()
                .map(DetailedProductDto::from)
                .collect(),
        }
    }
}
