use contracts::domain::a006_reservation_period::aggregate::{PeriodPhase, ReservationPeriod};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_reservation_period::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{format_date, parse_input_date, to_input_date, today};
use crate::shared::toast::use_toasts;

fn phase_color(phase: PeriodPhase) -> BadgeColor {
    match phase {
        PeriodPhase::Upcoming => BadgeColor::Warning,
        PeriodPhase::Open => BadgeColor::Success,
        PeriodPhase::Closed => BadgeColor::Danger,
    }
}

#[component]
pub fn ReservationPeriodPage() -> impl IntoView {
    let toasts = use_toasts();
    let current = RwSignal::new(Option::<ReservationPeriod>::None);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let apply = move |period: Option<ReservationPeriod>| {
        if let Some(p) = period {
            start.set(to_input_date(p.start));
            end.set(to_input_date(p.end));
        }
        current.set(period);
    };

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch().await {
                Ok(period) => apply(period),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let save = move || {
        let (Some(s), Some(e)) = (parse_input_date(&start.get()), parse_input_date(&end.get())) else {
            error.set(Some("Indique las fechas de inicio y fin".into()));
            return;
        };
        let period = ReservationPeriod::new(s, e);
        if let Err(msg) = period.validate() {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::save(&period).await {
                Ok(saved) => {
                    apply(Some(saved));
                    toasts.success("Periodo de reservas actualizado");
                }
                Err(e) => toasts.error(&e),
            }
            saving.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Periodo de reservas" subtitle="Fechas en las que los alumnos pueden reservar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| fetch()
                >
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="panel">
                {move || match current.get() {
                    Some(p) => {
                        let phase = p.phase_on(today());
                        view! {
                            <div class="panel__header">
                                <span>{format!("Del {} al {}", format_date(&p.start.to_string()), format_date(&p.end.to_string()))}</span>
                                <Badge appearance=BadgeAppearance::Tint color=phase_color(phase)>
                                    {phase.label()}
                                </Badge>
                            </div>
                        }.into_any()
                    }
                    None => view! {
                        <div class="panel__header">
                            <span class="text-muted">"No hay periodo de reservas definido"</span>
                        </div>
                    }.into_any(),
                }}

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form details-form--inline">
                    <div class="form-group">
                        <label for="period_start">"Inicio"</label>
                        <input
                            type="date"
                            id="period_start"
                            prop:value=move || start.get()
                            on:input=move |ev| start.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="period_end">"Fin"</label>
                        <input
                            type="date"
                            id="period_end"
                            prop:value=move || end.get()
                            on:input=move |ev| end.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=move |_| save()
                    >
                        "Guardar"
                    </Button>
                </div>
            </div>
        </div>
    }
}

