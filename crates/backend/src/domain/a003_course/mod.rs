pub mod course_book;
pub mod repository;
pub mod service;
