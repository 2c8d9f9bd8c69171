use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ShoppingCartError;
use crate::domain::product::model::Product;

/// A cart references products it does not own. `total_cost` is kept equal to
/// the sum of the product prices, so the fields stay private.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    id: i32,
    products: Vec<Product>,
    total_cost: BigDecimal,
}

impl ShoppingCart {
    /// Constructor for data already persisted in the repository.
    pub fn from_repository(id: i32, products: Vec<Product>) -> Self {
        let total_cost = sum_prices(&products);
        Self {
            id,
            products,
            total_cost,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total_cost(&self) -> &BigDecimal {
        &self.total_cost
    }

    pub fn contains(&self, product_id: i32) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), ShoppingCartError> {
        if self.contains(product.id) {
            return Err(ShoppingCartError::ProductAlreadyInCart);
        }
        self.products.push(product);
        self.recalculate_total();
        Ok(())
    }

    pub fn remove_product(&mut self, product_id: i32) -> Result<Product, ShoppingCartError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(ShoppingCartError::ProductNotInCart)?;
        let removed = self.products.remove(index);
        self.recalculate_total();
        Ok(removed)
    }

    fn recalculate_total(&mut self) {
        self.total_cost = sum_prices(&self.products);
    }
}

fn sum_prices(products: &[Product]) -> BigDecimal {
    products
        .iter()
        .fold(BigDecimal::zero(), |acc, p| acc + &p.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn product(id: i32, price: &str) -> Product {
        Product::from_repository(
            id,
            NewProductProps {
                name: format!("Product {}", id),
                price: BigDecimal::from_str(price).unwrap(),
                description: "A product".to_string(),
                quantity: 10,
                image_url: "Test".to_string(),
            },
        )
    }

    #[test]
    fn should_start_with_zero_total_when_empty() {
        let cart = ShoppingCart::from_repository(1, vec![]);

        assert!(cart.products().is_empty());
        assert_eq!(*cart.total_cost(), BigDecimal::zero());
    }

    #[test]
    fn should_compute_total_from_loaded_products() {
        let cart = ShoppingCart::from_repository(1, vec![product(1, "12.50"), product(2, "7.25")]);

        assert_eq!(*cart.total_cost(), BigDecimal::from_str("19.75").unwrap());
    }

    #[test]
    fn should_add_product_and_update_total() {
        let mut cart = ShoppingCart::from_repository(1, vec![product(1, "500")]);

        cart.add_product(product(2, "250")).unwrap();

        assert_eq!(cart.products().len(), 2);
        assert!(cart.contains(2));
        assert_eq!(*cart.total_cost(), BigDecimal::from(750));
    }

    #[test]
    fn should_reject_duplicate_product() {
        let mut cart = ShoppingCart::from_repository(1, vec![product(1, "500")]);

        let result = cart.add_product(product(1, "500"));

        assert!(matches!(
            result,
            Err(ShoppingCartError::ProductAlreadyInCart)
        ));
        assert_eq!(*cart.total_cost(), BigDecimal::from(500));
    }

    #[test]
    fn should_remove_product_and_update_total() {
        let mut cart = ShoppingCart::from_repository(1, vec![product(1, "500"), product(2, "250")]);

        let removed = cart.remove_product(1).unwrap();

        assert_eq!(removed.id, 1);
        assert!(!cart.contains(1));
        assert_eq!(*cart.total_cost(), BigDecimal::from(250));
    }

    #[test]
    fn should_reject_removing_product_not_in_cart() {
        let mut cart = ShoppingCart::from_repository(1, vec![product(1, "500")]);

        let result = cart.remove_product(9);

        assert!(matches!(result, Err(ShoppingCartError::ProductNotInCart)));
        assert_eq!(cart.products().len(), 1);
    }

    proptest! {
        #[test]
        fn should_keep_total_equal_to_sum_of_prices(
            prices in prop::collection::vec(0i64..1_000_000, 0..20),
            removals in prop::collection::vec(0usize..20, 0..10),
        ) {
            let mut cart = ShoppingCart::from_repository(7, vec![]);
            for (index, cents) in prices.iter().enumerate() {
                let price = BigDecimal::from(*cents) / BigDecimal::from(100);
                cart.add_product(product(index as i32, &price.to_string())).unwrap();
            }
            for index in removals {
                let _ = cart.remove_product(index as i32);
            }

            let expected = cart
                .products()
                .iter()
                .fold(BigDecimal::zero(), |acc, p| acc + &p.price);
            prop_assert_eq!(cart.total_cost().clone(), expected);
        }
    }
}
