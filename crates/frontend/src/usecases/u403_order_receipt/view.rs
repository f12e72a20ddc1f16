use contracts::domain::common::AggregateId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u402_placed_orders::status_badge;
use contracts::usecases::u403_order_receipt::{OrderReceipt, ReceiptDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::usecases::u402_placed_orders::view::badge_color;

/// Receipt of one order: ordered vs received units and the units arriving now
#[component]
pub fn ReceiptPanel(order_id: i64, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let draft = RwSignal::new(ReceiptDraft::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_detail(order_id).await {
                Ok(detail) => draft.update(|d| d.load_detail(detail)),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let save = move || {
        let request = match draft.with(|d| d.build_request()) {
            Ok(r) => r,
            Err(e) => {
                toasts.error(&e);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::register_receipt(&request).await {
                Ok(status) => {
                    toasts.success(format!("Pedido {}", status.label().to_lowercase()));
                    on_saved.run(());
                }
                Err(e) => toasts.error(&e),
            }
            saving.set(false);
        });
    };

    load();

    view! {
        <div class="panel receipt-panel">
            <div class="panel__header">
                <h3>{format!("{} #{}", OrderReceipt::display_name(), order_id)}</h3>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Cerrar"
                </Button>
            </div>

            {move || draft.with(|d| d.detail().map(|detail| {
                let badge = status_badge(detail.status);
                view! {
                    <div class="panel__meta">
                        <span>{format_date(&detail.date)}</span>
                        <Badge appearance=BadgeAppearance::Tint color=badge_color(badge.tone)>
                            {badge.label}
                        </Badge>
                    </div>
                }
            }))}

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Libro"</th>
                        <th class="table__header-cell table__header-cell--right">"Pedidas"</th>
                        <th class="table__header-cell table__header-cell--right">"Recibidas"</th>
                        <th class="table__header-cell">"Llegan ahora"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || draft.with(|d| d.lines().to_vec()).into_iter().map(|line| {
                        let book_id = line.book_id;
                        let outstanding = line.outstanding();
                        view! {
                            <tr class="table__row" class:table__row--done={outstanding == 0}>
                                <td class="table__cell">
                                    {line.name}
                                    <div class="text-muted">{line.isbn}</div>
                                </td>
                                <td class="table__cell table__cell--right">{line.ordered}</td>
                                <td class="table__cell table__cell--right">{line.received}</td>
                                <td class="table__cell">
                                    <input
                                        type="number"
                                        min="0"
                                        max=outstanding.to_string()
                                        class="quantity__input"
                                        disabled={outstanding == 0}
                                        prop:value=move || draft.with(|d| d.increment(book_id)).to_string()
                                        on:change=move |ev| {
                                            let raw = event_target_value(&ev);
                                            draft.update(|d| {
                                                d.set_received_increment(book_id, &raw);
                                            });
                                        }
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <div class="panel__footer">
                <span class="text-muted">
                    {move || draft.with(|d| format!(
                        "{} de {} unidades pendientes; estado resultante: {}",
                        d.increment_total(),
                        d.outstanding_total(),
                        d.projected_status().label()
                    ))}
                </span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || draft.with(|d| d.is_fully_received()))
                    on_click=move |_| draft.update(|d| d.receive_all())
                >
                    "Recibir todo"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || {
                        saving.get() || loading.get() || draft.with(|d| d.is_fully_received())
                    })
                    on_click=move |_| save()
                >
                    {icon("truck")}
                    "Registrar recepción"
                </Button>
            </div>
        </div>
    }
}
