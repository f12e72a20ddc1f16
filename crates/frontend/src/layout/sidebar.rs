use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    pages: &'static [Page],
}

const MENU: [MenuGroup; 3] = [
    MenuGroup {
        label: "Catálogo",
        pages: &[Page::Publishers, Page::Books, Page::Courses],
    },
    MenuGroup {
        label: "Reservas",
        pages: &[Page::Reservations, Page::ReservationPeriod],
    },
    MenuGroup {
        label: "Pedidos",
        pages: &[Page::PendingOrders, Page::PlacedOrders],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {MENU.iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.pages.iter().copied().map(|page| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.active.get() == page
                                    on:click=move |_| ctx.open(page)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(page.icon())}
                                        <span>{page.title()}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
