use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shopping_cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::shopping_cart::use_cases::create::CreateShoppingCartUseCase;
use business::domain::shopping_cart::use_cases::get_by_id::{
    GetShoppingCartParams, GetShoppingCartUseCase,
};
use business::domain::shopping_cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_cart::dto::ShoppingCartDto;
use crate::api::tags::ApiTags;

pub struct ShoppingCartApi {
    create_use_case: Arc<dyn CreateShoppingCartUseCase>,
    get_by_id_use_case: Arc<dyn GetShoppingCartUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
}

impl ShoppingCartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShoppingCartUseCase>,
        get_by_id_use_case: Arc<dyn GetShoppingCartUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            add_product_use_case,
            remove_product_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for creating carts and moving products in and out of them.
#[OpenApi]
impl ShoppingCartApi {
    /// Create an empty shopping cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::ShoppingCarts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CreateCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CreateCartResponse::BadRequest(json)
            }
        }
    }

    /// Get a shopping cart by ID
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::ShoppingCarts")]
    async fn cart_by_id(&self, id: Path<i32>) -> CartResponse {
        match self
            .get_by_id_use_case
            .execute(GetShoppingCartParams { id: id.0 })
            .await
        {
            Ok(Some(cart)) => CartResponse::Ok(Json(cart.into())),
            Ok(None) => CartResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "shopping_cart.not_found",
            ))),
            Err(err) => CartResponse::from_error(err.into_error_response()),
        }
    }

    /// Add a product to a shopping cart
    ///
    /// A product can be held at most once per cart; adding it again is a conflict.
    #[oai(
        path = "/carts/:id/products/:product_id",
        method = "post",
        tag = "ApiTags::ShoppingCarts"
    )]
    async fn add_product(&self, id: Path<i32>, product_id: Path<i32>) -> CartResponse {
        match self
            .add_product_use_case
            .execute(AddProductToCartParams {
                cart_id: id.0,
                product_id: product_id.0,
            })
            .await
        {
            Ok(cart) => CartResponse::Ok(Json(cart.into())),
            Err(err) => CartResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove a product from a shopping cart
    #[oai(
        path = "/carts/:id/products/:product_id",
        method = "delete",
        tag = "ApiTags::ShoppingCarts"
    )]
    async fn remove_product(&self, id: Path<i32>, product_id: Path<i32>) -> CartResponse {
        match self
            .remove_product_use_case
            .execute(RemoveProductFromCartParams {
                cart_id: id.0,
                product_id: product_id.0,
            })
            .await
        {
            Ok(cart) => CartResponse::Ok(Json(cart.into())),
            Err(err) => CartResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingCartDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingCartDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
}

impl CartResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            _ => Self::BadRequest(json),
        }
    }
}
