pub mod browser;
pub mod http;
pub mod services;
