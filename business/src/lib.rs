pub mod application {
    pub mod category {
        pub mod get_detail;
        pub mod get_tree;
    }
    pub mod product {
        pub mod browse;
        pub mod get_by_category;
        pub mod get_by_sku;
    }
    pub mod storefront {
        pub mod product_listing;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_detail;
            pub mod get_tree;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod browse;
            pub mod get_by_category;
            pub mod get_by_sku;
        }
    }
    pub mod shared {
        pub mod pagination;
        pub mod view_state;
    }
}
