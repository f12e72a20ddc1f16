use crate::domain::a003_course::api as course_api;
use crate::domain::a005_reservation::api;
use crate::domain::a005_reservation::ui::details::ReservationDetails;
use crate::shared::components::active_badge::ActiveToggle;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, replace_by, Searchable};
use crate::shared::toast::use_toasts;
use contracts::domain::a003_course::aggregate::Course;
use contracts::domain::a005_reservation::aggregate::Reservation;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use thaw::*;

impl Searchable for Reservation {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.student_name, &self.student_email]
    }
}

#[component]
pub fn ReservationList() -> impl IntoView {
    let toasts = use_toasts();
    let items = RwSignal::new(Vec::<Reservation>::new());
    let courses = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let toggling = RwSignal::new(HashSet::<i64>::new());
    let delivering = RwSignal::new(HashSet::<(i64, i64)>::new());
    let expanded = RwSignal::new(Option::<i64>::None);
    let show_details = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(&e),
            }
            match course_api::fetch_all().await {
                Ok(v) => courses.set(v),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let course_names = Memo::new(move |_| {
        courses.with(|list| {
            list.iter()
                .map(|c| (c.id.value(), c.name.clone()))
                .collect::<HashMap<_, _>>()
        })
    });

    // Activation changes pending units server-side, so the list is reloaded
    let toggle_active = move |id: i64| {
        toggling.update(|s| {
            s.insert(id);
        });
        spawn_local(async move {
            match api::toggle_active(id).await {
                Ok(updated) => {
                    toasts.success(if updated.active {
                        "Reserva activada"
                    } else {
                        "Reserva desactivada"
                    });
                    fetch();
                }
                Err(e) => toasts.error(&e),
            }
            toggling.update(|s| {
                s.remove(&id);
            });
        });
    };

    let deliver = move |id: i64, book_id: i64| {
        delivering.update(|s| {
            s.insert((id, book_id));
        });
        spawn_local(async move {
            match api::deliver(id, book_id).await {
                Ok(updated) => items.update(|v| {
                    replace_by(v, updated, |r| r.id);
                }),
                Err(e) => toasts.error(&e),
            }
            delivering.update(|s| {
                s.remove(&(id, book_id));
            });
        });
    };

    let visible = Memo::new(move |_| filter_list(&items.get(), &search.get()));

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Reservas" subtitle="Libros reservados por los alumnos">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_details.set(true)>
                    {icon("plus")}
                    "Nueva reserva"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| fetch()
                >
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <Input value=search placeholder="Buscar por alumno o email..." />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Alumno"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Curso"</th>
                            <th class="table__header-cell">"Fecha"</th>
                            <th class="table__header-cell table__header-cell--right">"Entregados"</th>
                            <th class="table__header-cell">"Justificante"</th>
                            <th class="table__header-cell">"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|r| {
                            let id = r.id.value();
                            let course = course_names
                                .with(|names| names.get(&r.course_id.value()).cloned())
                                .unwrap_or_else(|| "-".to_string());
                            let progress = format!("{}/{}", r.delivered_count(), r.lines.len());
                            let lines = r.lines.clone();
                            let done = r.is_fully_delivered();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--done={done}
                                    on:click=move |_| expanded.update(|e| {
                                        *e = if *e == Some(id) { None } else { Some(id) };
                                    })
                                >
                                    <td class="table__cell">{r.student_name}</td>
                                    <td class="table__cell">{r.student_email}</td>
                                    <td class="table__cell">{course}</td>
                                    <td class="table__cell">{format_date(&r.date)}</td>
                                    <td class="table__cell table__cell--right">{progress}</td>
                                    <td class="table__cell">{if r.has_proof { "Sí" } else { "No" }}</td>
                                    <ActiveToggle
                                        active=r.active
                                        busy=Signal::derive(move || toggling.get().contains(&id))
                                        on_toggle=Callback::new(move |_| toggle_active(id))
                                    />
                                </tr>
                                <Show when=move || expanded.get() == Some(id)>
                                    <tr class="table__row table__row--nested">
                                        <td class="table__cell" colspan="7">
                                            <ul class="panel__list">
                                                {lines.clone().into_iter().map(|line| {
                                                    let book_id = line.book_id.value();
                                                    view! {
                                                        <li class="panel__list-item">
                                                            <span>{line.name}</span>
                                                            {if line.delivered {
                                                                view! {
                                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                                        "Entregado"
                                                                    </Badge>
                                                                }.into_any()
                                                            } else {
                                                                view! {
                                                                    <Button
                                                                        size=ButtonSize::Small
                                                                        appearance=ButtonAppearance::Primary
                                                                        disabled=Signal::derive(move || delivering.get().contains(&(id, book_id)))
                                                                        on_click=move |_| deliver(id, book_id)
                                                                    >
                                                                        {icon("truck")}
                                                                        "Entregar"
                                                                    </Button>
                                                                }.into_any()
                                                            }}
                                                        </li>
                                                    }
                                                }).collect_view()}
                                            </ul>
                                        </td>
                                    </tr>
                                </Show>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && visible.get().is_empty()>
                    <div class="table__empty">"No hay reservas"</div>
                </Show>
            </div>

            <Dialog open=show_details>
                <DialogSurface>
                    <DialogBody>
                        <DialogContent>
                            {move || show_details.get().then(|| view! {
                                <ReservationDetails
                                    courses=courses.get_untracked()
                                    on_saved=Callback::new(move |_| {
                                        show_details.set(false);
                                        fetch();
                                    })
                                    on_cancel=Callback::new(move |_| show_details.set(false))
                                />
                            })}
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
