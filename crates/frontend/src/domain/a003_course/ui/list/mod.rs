use crate::domain::a002_book::api as book_api;
use crate::domain::a003_course::api;
use crate::domain::a003_course::ui::assign_books::AssignBooks;
use crate::domain::a003_course::ui::details::CourseDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::a003_course::aggregate::{Course, CourseDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn CourseList() -> impl IntoView {
    let toasts = use_toasts();
    let items = RwSignal::new(Vec::<Course>::new());
    let loading = RwSignal::new(false);

    let selected = RwSignal::new(Option::<Course>::None);
    let course_books = RwSignal::new(Vec::<Book>::new());
    let all_books = RwSignal::new(Vec::<Book>::new());
    let removing = RwSignal::new(HashSet::<i64>::new());

    let show_details = RwSignal::new(false);
    let editing = RwSignal::new(Option::<CourseDto>::None);
    let show_assign = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let fetch_course_books = move |course_id: i64| {
        spawn_local(async move {
            match api::fetch_books(course_id).await {
                Ok(v) => course_books.set(v),
                Err(e) => toasts.error(&e),
            }
        });
    };

    let select_course = move |course: Course| {
        let id = course.id.value();
        selected.set(Some(course));
        course_books.set(Vec::new());
        fetch_course_books(id);
    };

    let open_assign = move || {
        spawn_local(async move {
            match book_api::fetch_all().await {
                Ok(v) => {
                    all_books.set(v);
                    show_assign.set(true);
                }
                Err(e) => toasts.error(&e),
            }
        });
    };

    let candidates = move || {
        let assigned: HashSet<i64> = course_books.with(|b| b.iter().map(|b| b.id.value()).collect());
        all_books.with(|all| {
            all.iter()
                .filter(|b| b.active && !assigned.contains(&b.id.value()))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let unassign = move |course_id: i64, book_id: i64| {
        removing.update(|s| {
            s.insert(book_id);
        });
        spawn_local(async move {
            match api::unassign(course_id, book_id).await {
                Ok(()) => {
                    toasts.success("Libro retirado del curso");
                    fetch_course_books(course_id);
                }
                Err(e) => toasts.error(&e),
            }
            removing.update(|s| {
                s.remove(&book_id);
            });
        });
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Cursos">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        editing.set(None);
                        show_details.set(true);
                    }
                >
                    {icon("plus")}
                    "Nuevo curso"
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

            <div class="page__split">
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Curso"</th>
                                <th class="table__header-cell">"Nivel"</th>
                                <th class="table__header-cell">"Estado"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || items.get().into_iter().map(|c| {
                                let id = c.id.value();
                                let dto = c.to_dto();
                                let course = c.clone();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selected.with(|s| s.as_ref().map(|s| s.id.value()) == Some(id))
                                        on:click=move |_| select_course(course.clone())
                                    >
                                        <td class="table__cell">{c.name}</td>
                                        <td class="table__cell">{c.level}</td>
                                        <td class="table__cell">{if c.active { "Activo" } else { "Inactivo" }}</td>
                                        <td class="table__cell" on:click=|e| e.stop_propagation()>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| {
                                                    editing.set(Some(dto.clone()));
                                                    show_details.set(true);
                                                }
                                            >
                                                "Editar"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="page__side-panel">
                    {move || match selected.get() {
                        None => view! {
                            <div class="table__empty">"Seleccione un curso para ver sus libros"</div>
                        }.into_any(),
                        Some(course) => {
                            let course_id = course.id.value();
                            view! {
                                <div class="panel">
                                    <div class="panel__header">
                                        <h3>{format!("Libros de {}", course.name)}</h3>
                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Primary on_click=move |_| open_assign()>
                                            {icon("plus")}
                                            "Asignar libros"
                                        </Button>
                                    </div>
                                    <ul class="panel__list">
                                        {move || course_books.get().into_iter().map(|b| {
                                            let book_id = b.id.value();
                                            view! {
                                                <li class="panel__list-item">
                                                    <span>{b.name}</span>
                                                    <span class="text-muted">{b.isbn}</span>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || removing.get().contains(&book_id))
                                                        on_click=move |_| unassign(course_id, book_id)
                                                    >
                                                        "Quitar"
                                                    </Button>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </div>

            <Dialog open=show_details>
                <DialogSurface>
                    <DialogBody>
                        <DialogContent>
                            {move || show_details.get().then(|| view! {
                                <CourseDetails
                                    initial=editing.get_untracked()
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

            <Dialog open=show_assign>
                <DialogSurface>
                    <DialogBody>
                        <DialogContent>
                            {move || {
                                let course_id = selected.with_untracked(|s| s.as_ref().map(|c| c.id.value()))?;
                                show_assign.get().then(|| view! {
                                    <AssignBooks
                                        course_id=course_id
                                        candidates=candidates()
                                        on_done=Callback::new(move |_| {
                                            show_assign.set(false);
                                            fetch_course_books(course_id);
                                        })
                                        on_cancel=Callback::new(move |_| show_assign.set(false))
                                    />
                                })
                            }}
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
