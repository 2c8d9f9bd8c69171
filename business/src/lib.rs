pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod filter;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod shopping_cart {
        pub mod add_product;
        pub mod create;
        pub mod get_by_id;
        pub mod remove_product;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod filter;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shopping_cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod create;
            pub mod get_by_id;
            pub mod remove_product;
        }
    }
}
