pub mod api_response;
pub mod config;
pub mod data;
pub mod format;
