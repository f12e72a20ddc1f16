pub mod repository;
pub mod reservation_line;
pub mod rules;
pub mod service;
