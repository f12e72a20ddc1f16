pub mod browser;

pub use browser::{status_badge, BadgeTone, OrderBrowser, StatusBadge};

use crate::usecases::common::UseCaseMetadata;

pub struct PlacedOrders;

impl UseCaseMetadata for PlacedOrders {
    fn usecase_index() -> &'static str {
        "u402"
    }

    fn usecase_name() -> &'static str {
        "placed_orders"
    }

    fn display_name() -> &'static str {
        "Pedidos realizados"
    }
}
