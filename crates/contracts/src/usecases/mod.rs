pub mod common;
pub mod u401_pending_order;
pub mod u402_placed_orders;
pub mod u403_order_receipt;
