pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod file_utils;
pub mod icons;
pub mod list_utils;
pub mod toast;
