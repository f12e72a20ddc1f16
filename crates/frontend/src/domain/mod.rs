pub mod a001_publisher;
pub mod a002_book;
pub mod a003_course;
pub mod a005_reservation;
pub mod a006_reservation_period;
