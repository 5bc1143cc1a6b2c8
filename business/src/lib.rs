pub mod application {
    pub mod cart {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
    }
    pub mod cart_product {
        pub mod add_product;
        pub mod delete_product;
        pub mod get_carts_containing_product;
        pub mod get_most_sold;
        pub mod get_most_sold_by_category;
        pub mod get_products_in_cart;
        pub mod get_revenue_per_product;
        pub mod get_total_items;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
        }
    }
    pub mod cart_product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod delete_product;
            pub mod get_carts_containing_product;
            pub mod get_most_sold;
            pub mod get_most_sold_by_category;
            pub mod get_products_in_cart;
            pub mod get_revenue_per_product;
            pub mod get_total_items;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}

#[cfg(test)]
mod test_support;
