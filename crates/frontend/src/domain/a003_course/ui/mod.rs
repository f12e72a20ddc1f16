pub mod assign_books;
pub mod details;
pub mod list;
