pub mod http;
pub mod views;
