use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::shopping_cart::repository::ShoppingCartRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::filter::FilterProductsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::shopping_cart::add_product::AddProductToCartUseCaseImpl;
use business::application::shopping_cart::create::CreateShoppingCartUseCaseImpl;
use business::application::shopping_cart::get_by_id::GetShoppingCartUseCaseImpl;
use business::application::shopping_cart::remove_product::RemoveProductFromCartUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::shopping_cart::routes::ShoppingCartApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub shopping_cart_api: ShoppingCartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let product_logger = Arc::new(TracingLogger::new("product"));
        let cart_logger = Arc::new(TracingLogger::new("shopping_cart"));
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let shopping_cart_repository = Arc::new(ShoppingCartRepositoryPostgres::new(pool));

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let filter_use_case = Arc::new(FilterProductsUseCaseImpl {
            repository: product_repository,
            logger: product_logger,
        });

        // Shopping cart use cases
        let create_cart_use_case = Arc::new(CreateShoppingCartUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetShoppingCartUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            logger: cart_logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductFromCartUseCaseImpl {
            repository: shopping_cart_repository,
            logger: cart_logger,
        });

        let product_api = ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
            create_use_case,
            update_use_case,
            filter_use_case,
        );

        let shopping_cart_api = ShoppingCartApi::new(
            create_cart_use_case,
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
        );

        Self {
            health_api,
            product_api,
            shopping_cart_api,
        }
    }
}
