pub mod order_line;
pub mod repository;
pub mod rules;
pub mod service;
