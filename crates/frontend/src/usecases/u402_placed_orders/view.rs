use contracts::domain::a001_publisher::aggregate::PublisherWithOrders;
use contracts::domain::common::AggregateId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u402_placed_orders::{status_badge, BadgeTone, OrderBrowser, PlacedOrders};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::usecases::u403_order_receipt::view::ReceiptPanel;

pub fn badge_color(tone: BadgeTone) -> BadgeColor {
    match tone {
        BadgeTone::Warning => BadgeColor::Warning,
        BadgeTone::Informative => BadgeColor::Informative,
        BadgeTone::Success => BadgeColor::Success,
    }
}

#[component]
pub fn PlacedOrdersPage() -> impl IntoView {
    let toasts = use_toasts();
    let publishers = RwSignal::new(Vec::<PublisherWithOrders>::new());
    let browser = RwSignal::new(OrderBrowser::new());
    let filter = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let fetch_publishers = move || {
        spawn_local(async move {
            match api::fetch_publishers_with_orders().await {
                Ok(v) => publishers.set(v),
                Err(e) => toasts.error(&e),
            }
        });
    };

    let fetch_orders = move |publisher_id: i64| {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_orders(publisher_id).await {
                Ok(orders) => browser.update(|b| b.load_orders(orders)),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let choose_publisher = move |raw: String| {
        let Ok(id) = raw.parse::<i64>() else {
            let f = filter.get_untracked();
            browser.update(|b| {
                *b = OrderBrowser::new();
                b.set_filter(f);
            });
            return;
        };
        let Some(publisher) = publishers.with(|list| list.iter().find(|p| p.id.value() == id).cloned())
        else {
            return;
        };
        loading.set(true);
        spawn_local(async move {
            // The publisher switches only with its orders in hand
            match api::fetch_orders(id).await {
                Ok(orders) => browser.update(|b| b.select_publisher(publisher, orders)),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let current_publisher_id =
        move || browser.with(|b| b.publisher().map(|p| p.id.value()));

    Effect::new(move |_| {
        let f = filter.get();
        browser.update(|b| b.set_filter(f));
    });

    let visible = Memo::new(move |_| {
        browser.with(|b| b.visible().into_iter().cloned().collect::<Vec<_>>())
    });

    let selected_order = Memo::new(move |_| browser.with(|b| b.selected_order()));

    fetch_publishers();

    view! {
        <div class="page">
            <PageHeader title=PlacedOrders::display_name()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| {
                        fetch_publishers();
                        if let Some(id) = current_publisher_id() {
                            fetch_orders(id);
                        }
                    }
                >
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <select on:change=move |ev| choose_publisher(event_target_value(&ev))>
                    <option value="" selected=move || current_publisher_id().is_none()>
                        "Seleccione una editorial"
                    </option>
                    {move || publishers.get().into_iter().map(|p| {
                        let id = p.id.value();
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || current_publisher_id() == Some(id)
                            >
                                {format!("{} ({} pedidos)", p.name, p.order_count)}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <Input value=filter placeholder="Filtrar por número o fecha..." />
                <span class="text-muted">
                    {move || {
                        let shown = visible.get().len();
                        format!("{} de {} pedidos", shown, browser.with(|b| b.total()))
                    }}
                </span>
            </div>

            <div class="page__split">
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Pedido"</th>
                                <th class="table__header-cell">"Fecha"</th>
                                <th class="table__header-cell table__header-cell--right">"Libros"</th>
                                <th class="table__header-cell">"Estado"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible.get().into_iter().map(|o| {
                                let id = o.id;
                                let badge = status_badge(o.status);
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || browser.with(|b| b.selected_order() == Some(id))
                                        on:click=move |_| browser.update(|b| b.select_order(id))
                                    >
                                        <td class="table__cell">{format!("#{}", id.value())}</td>
                                        <td class="table__cell">{format_date(&o.date)}</td>
                                        <td class="table__cell table__cell--right">{o.line_count}</td>
                                        <td class="table__cell">
                                            <Badge appearance=BadgeAppearance::Tint color=badge_color(badge.tone)>
                                                {badge.label}
                                            </Badge>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || !loading.get() && current_publisher_id().is_some() && visible.get().is_empty()>
                        <div class="table__empty">"No hay pedidos"</div>
                    </Show>
                </div>

                <div class="page__side-panel">
                    {move || selected_order.get().map(|order_id| view! {
                        <ReceiptPanel
                            order_id=order_id.value()
                            on_saved=Callback::new(move |_| {
                                browser.update(|b| b.receipt_saved());
                                if let Some(id) = current_publisher_id() {
                                    fetch_orders(id);
                                }
                            })
                            on_close=Callback::new(move |_| browser.update(|b| b.clear_selection()))
                        />
                    })}
                </div>
            </div>
        </div>
    }
}
