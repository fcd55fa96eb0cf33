pub mod category_gateway;
pub mod client;
pub mod dto;
pub mod mapper;
pub mod product_gateway;
