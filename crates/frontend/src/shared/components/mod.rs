pub mod active_badge;
pub mod page_header;
pub mod table_checkbox;
