use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Console pages, addressed in the URL as `?page=<key>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Publishers,
    Books,
    Courses,
    Reservations,
    ReservationPeriod,
    PendingOrders,
    PlacedOrders,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Publishers,
        Page::Books,
        Page::Courses,
        Page::Reservations,
        Page::ReservationPeriod,
        Page::PendingOrders,
        Page::PlacedOrders,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Publishers => "a001_publisher",
            Page::Books => "a002_book",
            Page::Courses => "a003_course",
            Page::Reservations => "a005_reservation",
            Page::ReservationPeriod => "a006_reservation_period",
            Page::PendingOrders => "u401_pending_order",
            Page::PlacedOrders => "u402_placed_orders",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Publishers => "Editoriales",
            Page::Books => "Libros",
            Page::Courses => "Cursos",
            Page::Reservations => "Reservas",
            Page::ReservationPeriod => "Periodo de reservas",
            Page::PendingOrders => "Pedidos pendientes",
            Page::PlacedOrders => "Pedidos realizados",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Publishers => "building",
            Page::Books => "book",
            Page::Courses => "users",
            Page::Reservations => "clipboard",
            Page::ReservationPeriod => "calendar",
            Page::PendingOrders => "cart",
            Page::PlacedOrders => "truck",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Page named by a query string such as `?page=a002_book`
    pub fn from_query(search: &str) -> Option<Page> {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params.get("page").and_then(|k| Page::from_key(k))
    }

    pub fn to_query(&self) -> String {
        let query = serde_qs::to_string(&HashMap::from([("page", self.key())])).unwrap_or_default();
        format!("?{}", query)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Reservations),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the page from the URL and mirror later changes back into it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = Page::from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.active.get().to_query();
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_are_unique() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("a024_bi_indicator"), None);
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(Page::from_query("?page=a002_book"), Some(Page::Books));
        assert_eq!(Page::from_query("page=u402_placed_orders"), Some(Page::PlacedOrders));
        assert_eq!(Page::from_query("?other=1"), None);
        assert_eq!(Page::from_query(""), None);
        assert_eq!(
            Page::from_query(&Page::PendingOrders.to_query()),
            Some(Page::PendingOrders)
        );
    }
}
