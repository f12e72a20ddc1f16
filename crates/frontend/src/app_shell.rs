//! Application shell
//!
//! - `AppShell`: auth gate (LoginPage or MainLayout)
//! - `MainLayout`: sidebar plus the active page

use crate::domain::a001_publisher::ui::list::PublisherList;
use crate::domain::a002_book::ui::list::BookList;
use crate::domain::a003_course::ui::list::CourseList;
use crate::domain::a005_reservation::ui::list::ReservationList;
use crate::domain::a006_reservation_period::ui::page::ReservationPeriodPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::usecases::u401_pending_order::view::PendingOrderPage;
use crate::usecases::u402_placed_orders::view::PlacedOrdersPage;
use leptos::prelude::*;

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Publishers => view! { <PublisherList /> }.into_any(),
        Page::Books => view! { <BookList /> }.into_any(),
        Page::Courses => view! { <CourseList /> }.into_any(),
        Page::Reservations => view! { <ReservationList /> }.into_any(),
        Page::ReservationPeriod => view! { <ReservationPeriodPage /> }.into_any(),
        Page::PendingOrders => view! { <PendingOrderPage /> }.into_any(),
        Page::PlacedOrders => view! { <PlacedOrdersPage /> }.into_any(),
    }
}

/// Sidebar and active page; keeps the page in sync with `?page=`
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    // Each page reloads its data when it is shown
                    {move || render_page(ctx.active.get())}
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
