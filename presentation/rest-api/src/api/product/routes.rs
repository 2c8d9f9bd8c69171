use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::filter::{FilterProductsParams, FilterProductsUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    AddProductDto, DetailedProductDto, MiniProductDto, UpdateProductDto,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    filter_use_case: Arc<dyn FilterProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        filter_use_case: Arc<dyn FilterProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
            create_use_case,
            update_use_case,
            filter_use_case,
        }
    }
}

fn product_not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("NotFound", "product.not_found"))
}

/// Product catalogue API
///
/// Endpoints for listing, searching, creating, updating, and deleting products.
/// A miss is reported as 404; any failure of the service layer as 400.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns the summary view of every product. An empty catalogue is still 200.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn mini_details_products(&self) -> MiniDetailsProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => MiniDetailsProductsResponse::Ok(Json(
                products.into_iter().map(MiniProductDto::from).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                MiniDetailsProductsResponse::BadRequest(json)
            }
        }
    }

    /// Filter products by name
    ///
    /// Case-insensitive substring match on the product name.
    #[oai(path = "/products/filter", method = "get", tag = "ApiTags::Products")]
    async fn filtering_data(&self, name: Query<String>) -> FilteringDataResponse {
        match self
            .filter_use_case
            .execute(FilterProductsParams { name: name.0 })
            .await
        {
            Ok(products) if products.is_empty() => {
                FilteringDataResponse::NotFound(product_not_found())
            }
            Ok(products) => FilteringDataResponse::Ok(Json(
                products.into_iter().map(MiniProductDto::from).collect(),
            )),
            Err(err) => {
                let (_, json) = err.into_error_response();
                FilteringDataResponse::BadRequest(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn product_by_id(&self, id: Path<i32>) -> ProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(Some(product)) => ProductByIdResponse::Ok(Json(product.into())),
            Ok(None) => ProductByIdResponse::NotFound(product_not_found()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ProductByIdResponse::NotFound(json),
                    _ => ProductByIdResponse::BadRequest(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Also removes the product from every shopping cart holding it.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i32>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(true) => DeleteProductResponse::Ok,
            Ok(false) => DeleteProductResponse::NotFound(product_not_found()),
            Err(err) => {
                let (_, json) = err.into_error_response();
                DeleteProductResponse::BadRequest(json)
            }
        }
    }

    /// Add a product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn add_product(&self, body: Json<AddProductDto>) -> AddProductResponse {
        let params = match CreateProductParams::try_from(body.0) {
            Ok(params) => params,
            Err(err) => return AddProductResponse::BadRequest(err.into_error_response().1),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => AddProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                AddProductResponse::BadRequest(json)
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of the product identified by the body's `id`.
    #[oai(path = "/products", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, body: Json<UpdateProductDto>) -> UpdateProductResponse {
        let params = match UpdateProductParams::try_from(body.0) {
            Ok(params) => params,
            Err(err) => return UpdateProductResponse::BadRequest(err.into_error_response().1),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                UpdateProductResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum MiniDetailsProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MiniProductDto>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FilteringDataResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MiniProductDto>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<DetailedProductDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<DetailedProductDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<DetailedProductDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
