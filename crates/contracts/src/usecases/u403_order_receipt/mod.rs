pub mod draft;

pub use draft::{clamp_received, ReceiptDraft};

use crate::usecases::common::UseCaseMetadata;

pub struct OrderReceipt;

impl UseCaseMetadata for OrderReceipt {
    fn usecase_index() -> &'static str {
        "u403"
    }

    fn usecase_name() -> &'static str {
        "order_receipt"
    }

    fn display_name() -> &'static str {
        "Recepción de pedido"
    }

    fn description() -> &'static str {
        "Registra las unidades recibidas de cada libro de un pedido"
    }
}
