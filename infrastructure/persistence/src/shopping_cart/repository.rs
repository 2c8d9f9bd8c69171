use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction, postgres::PgExecutor};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shopping_cart::errors::ShoppingCartError;
use business::domain::shopping_cart::model::ShoppingCart;
use business::domain::shopping_cart::repository::ShoppingCartRepository;

use crate::product::entity::{PRODUCT_COLUMNS, ProductEntity};

pub struct ShoppingCartRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingCartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a transaction holding the cart row `FOR UPDATE` and loads the
    /// cart inside it. Writers to one cart queue on that row lock, so each
    /// of them sees the membership the previous one committed.
    async fn lock_cart(
        &self,
        cart_id: i32,
    ) -> Result<(Transaction<'static, Postgres>, ShoppingCart), ShoppingCartError> {
        let mut tx = self.pool.begin().await.map_err(persistence_error)?;

        let locked: Option<i32> =
            sqlx::query_scalar("SELECT id FROM shopping_carts WHERE id = $1 FOR UPDATE")
                .bind(cart_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(database_error)?;
        if locked.is_none() {
            return Err(ShoppingCartError::NotFound);
        }

        let products = fetch_cart_products(&mut *tx, cart_id)
            .await
            .map_err(database_error)?;

        Ok((tx, ShoppingCart::from_repository(cart_id, products)))
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "shopping cart query failed");
    RepositoryError::DatabaseError
}

fn persistence_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "shopping cart transaction failed");
    RepositoryError::Persistence
}

async fn fetch_cart_products<'e, E>(executor: E, cart_id: i32) -> Result<Vec<Product>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let entities = sqlx::query_as::<_, ProductEntity>(
        r#"SELECT p.id, p.name, p.price, p.description, p.quantity, p.image_url
        FROM cart_products cp
        JOIN products p ON p.id = cp.product_id
        WHERE cp.cart_id = $1
        ORDER BY cp.position"#,
    )
    .bind(cart_id)
    .fetch_all(executor)
    .await?;

    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}

#[async_trait]
impl ShoppingCartRepository for ShoppingCartRepositoryPostgres {
    async fn create(&self) -> Result<ShoppingCart, RepositoryError> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO shopping_carts DEFAULT VALUES RETURNING id")
                .fetch_one(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(ShoppingCart::from_repository(id, Vec::new()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<ShoppingCart>, RepositoryError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM shopping_carts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        if exists.is_none() {
            return Ok(None);
        }

        let products = fetch_cart_products(&self.pool, id)
            .await
            .map_err(database_error)?;

        Ok(Some(ShoppingCart::from_repository(id, products)))
    }

    async fn add_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<ShoppingCart, ShoppingCartError> {
        let (mut tx, mut cart) = self.lock_cart(cart_id).await?;

        // FOR SHARE keeps the product from being deleted before commit.
        let product = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR SHARE"
        ))
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?
        .ok_or(ShoppingCartError::ProductNotFound)?;

        cart.add_product(product.into_domain())?;

        sqlx::query(
            r#"INSERT INTO cart_products (cart_id, product_id, position)
            SELECT $1, $2, COALESCE(MAX(position) + 1, 0) FROM cart_products WHERE cart_id = $1"#,
        )
        .bind(cart_id)
        .bind(product_id)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(persistence_error)?;
        Ok(cart)
    }

    async fn remove_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<ShoppingCart, ShoppingCartError> {
        let (mut tx, mut cart) = self.lock_cart(cart_id).await?;

        cart.remove_product(product_id)?;

        sqlx::query("DELETE FROM cart_products WHERE cart_id = $1 AND product_id = $2")
            .bind(cart_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(persistence_error)?;
        Ok(cart)
    }
}
