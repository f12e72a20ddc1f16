use contracts::domain::a001_publisher::aggregate::PublisherWithPending;
use contracts::domain::a002_book::aggregate::BookId;
use contracts::domain::common::AggregateId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u401_pending_order::{PendingOrder, PendingOrderSelection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::format_price;
use crate::shared::toast::use_toasts;

/// Turn the pending units of one publisher into an order
#[component]
pub fn PendingOrderPage() -> impl IntoView {
    let toasts = use_toasts();
    let publishers = RwSignal::new(Vec::<PublisherWithPending>::new());
    let selection = RwSignal::new(PendingOrderSelection::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let fetch_publishers = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_publishers_with_pending().await {
                Ok(v) => publishers.set(v),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let choose_publisher = move |raw: String| {
        search.set(String::new());
        let Ok(id) = raw.parse::<i64>() else {
            selection.update(|s| s.clear());
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match api::fetch_publisher_pending(id).await {
                Ok((publisher, books)) => selection.update(|s| s.select_publisher(publisher, books)),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let submit = move || {
        let request = match selection.with(|s| s.build_request()) {
            Ok(r) => r,
            Err(e) => {
                toasts.error(&e);
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match api::place_order(&request).await {
                Ok(created) => {
                    toasts.success(format!(
                        "Pedido {} realizado ({} unidades)",
                        created.id,
                        request.total_units()
                    ));
                    selection.update(|s| s.clear());
                    fetch_publishers();
                }
                Err(e) => toasts.error(&e),
            }
            submitting.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        let q = search.get();
        selection.with(|s| s.visible_books(&q).into_iter().cloned().collect::<Vec<_>>())
    });

    fetch_publishers();

    view! {
        <div class="page">
            <PageHeader title=PendingOrder::display_name() subtitle=PendingOrder::description()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| fetch_publishers()
                >
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <select on:change=move |ev| choose_publisher(event_target_value(&ev))>
                    <option value="" selected=move || selection.with(|s| s.publisher().is_none())>
                        "Seleccione una editorial"
                    </option>
                    {move || publishers.get().into_iter().map(|p| {
                        let id = p.id.value();
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || selection.with(|s| s.publisher().map(|p| p.id.value()) == Some(id))
                            >
                                {format!("{} ({} libros)", p.name, p.pending_books)}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <Input value=search placeholder="Buscar por título o ISBN..." />
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        let q = search.get_untracked();
                        selection.update(|s| s.select_all(&q));
                    }
                >
                    "Seleccionar todos"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| selection.update(|s| s.deselect_all())
                >
                    "Quitar selección"
                </Button>
            </div>

            <Show
                when=move || selection.with(|s| s.publisher().is_some())
                fallback=|| view! { <div class="table__empty">"Seleccione una editorial con libros pendientes"</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox"></th>
                                <th class="table__header-cell">"Título"</th>
                                <th class="table__header-cell">"ISBN"</th>
                                <th class="table__header-cell table__header-cell--right">"Precio"</th>
                                <th class="table__header-cell table__header-cell--right">"Pendientes"</th>
                                <th class="table__header-cell">"Cantidad"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible.get().into_iter().map(|b| {
                                let id: BookId = b.id;
                                let is_selected = Signal::derive(move || selection.with(|s| s.is_selected(id)));
                                view! {
                                    <tr class="table__row" class:table__row--selected=move || is_selected.get()>
                                        <TableCheckbox
                                            checked=is_selected
                                            on_change=Callback::new(move |_| selection.update(|s| s.toggle_book(id)))
                                        />
                                        <td class="table__cell">{b.name}</td>
                                        <td class="table__cell">{b.isbn}</td>
                                        <td class="table__cell table__cell--right">{format_price(b.price)}</td>
                                        <td class="table__cell table__cell--right">{b.pending_units}</td>
                                        <td class="table__cell table__cell--quantity">
                                            <button
                                                class="quantity__button"
                                                disabled=move || !is_selected.get()
                                                on:click=move |_| selection.update(|s| s.decrement(id))
                                            >
                                                "-"
                                            </button>
                                            <input
                                                type="number"
                                                min="1"
                                                max=b.pending_units.to_string()
                                                class="quantity__input"
                                                disabled=move || !is_selected.get()
                                                prop:value=move || selection.with(|s| s.quantity(id)).to_string()
                                                on:change=move |ev| {
                                                    let raw = event_target_value(&ev);
                                                    selection.update(|s| {
                                                        s.set_quantity(id, &raw);
                                                    });
                                                }
                                            />
                                            <button
                                                class="quantity__button"
                                                disabled=move || !is_selected.get()
                                                on:click=move |_| selection.update(|s| s.increment(id))
                                            >
                                                "+"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="page__footer">
                    <span>
                        {move || selection.with(|s| format!(
                            "{} libros seleccionados, {} unidades",
                            s.selected_count(),
                            s.total_units()
                        ))}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            submitting.get() || selection.with(|s| s.selected_count() == 0)
                        })
                        on_click=move |_| submit()
                    >
                        {icon("cart")}
                        "Realizar pedido"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
