pub mod selection;

pub use selection::{clamp_quantity, PendingOrderSelection};

use crate::usecases::common::UseCaseMetadata;

pub struct PendingOrder;

impl UseCaseMetadata for PendingOrder {
    fn usecase_index() -> &'static str {
        "u401"
    }

    fn usecase_name() -> &'static str {
        "pending_order"
    }

    fn display_name() -> &'static str {
        "Pedidos pendientes"
    }

    fn description() -> &'static str {
        "Agrupa las unidades pendientes de una editorial en un pedido"
    }
}
