use contracts::domain::a002_book::aggregate::{Book, BookId};
use contracts::domain::a003_course::aggregate::Course;
use contracts::domain::a005_reservation::aggregate::CreateReservationDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_course::api as course_api;
use crate::domain::a005_reservation::api;
use crate::shared::file_utils::{read_as_data_url, selected_file, MAX_PROOF_BYTES};
use crate::shared::toast::use_toasts;

/// Form for registering a reservation on behalf of a student
#[component]
pub fn ReservationDetails(
    courses: Vec<Course>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(CreateReservationDto::default());
    let course_books = RwSignal::new(Vec::<Book>::new());
    let proof_name = RwSignal::new(Option::<String>::None);
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);
    let reading = RwSignal::new(false);

    let active_courses: Vec<Course> = courses.into_iter().filter(|c| c.active).collect();

    let on_course_change = move |raw: String| {
        let course_id = raw.parse::<i64>().ok();
        form.update(|f| {
            f.course_id = course_id;
            f.book_ids.clear();
        });
        course_books.set(Vec::new());
        if let Some(id) = course_id {
            spawn_local(async move {
                match course_api::fetch_books(id).await {
                    Ok(books) => {
                        let books: Vec<Book> = books.into_iter().filter(|b| b.active).collect();
                        // Every book of the course is reserved unless unticked
                        form.update(|f| f.book_ids = books.iter().map(|b| b.id).collect());
                        course_books.set(books);
                    }
                    Err(e) => toasts.error(&e),
                }
            });
        }
    };

    let toggle_book = move |id: BookId, checked: bool| {
        form.update(|f| {
            f.book_ids.retain(|b| *b != id);
            if checked {
                f.book_ids.push(id);
            }
        });
    };

    let on_proof_change = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            form.update(|f| f.proof = None);
            proof_name.set(None);
            return;
        };
        if file.size() > MAX_PROOF_BYTES {
            toasts.warning("El justificante supera los 2 MB");
            return;
        }
        let name = file.name();
        reading.set(true);
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => {
                    form.update(|f| f.proof = Some(data_url));
                    proof_name.set(Some(name));
                }
                Err(msg) => error.set(Some(msg)),
            }
            reading.set(false);
        });
    };

    let save = move || {
        let dto = form.get();
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(_) => {
                    toasts.success("Reserva registrada");
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    toasts.error(&e);
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container reservation-details">
            <div class="details-header">
                <h3>"Nueva reserva"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="student_name">"Alumno"</label>
                    <input
                        type="text"
                        id="student_name"
                        prop:value=move || form.get().student_name
                        on:input=move |ev| form.update(|f| f.student_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="student_email">"Email"</label>
                    <input
                        type="email"
                        id="student_email"
                        prop:value=move || form.get().student_email
                        on:input=move |ev| form.update(|f| f.student_email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="course">"Curso"</label>
                    <select id="course" on:change=move |ev| on_course_change(event_target_value(&ev))>
                        <option value="">"Seleccione un curso"</option>
                        {active_courses.into_iter().map(|c| view! {
                            <option value=c.id.value().to_string()>{c.name}</option>
                        }).collect_view()}
                    </select>
                </div>

                <Show when=move || !course_books.with(|b| b.is_empty())>
                    <div class="form-group">
                        <label>"Libros"</label>
                        <ul class="checkbox-list">
                            {move || course_books.get().into_iter().map(|b| {
                                let id = b.id;
                                view! {
                                    <li>
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || form.with(|f| f.book_ids.contains(&id))
                                                on:change=move |ev| toggle_book(id, event_target_checked(&ev))
                                            />
                                            {b.name}
                                        </label>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </div>
                </Show>

                <div class="form-group">
                    <label for="proof">"Justificante de pago (imagen o PDF, máx. 2 MB)"</label>
                    <input type="file" id="proof" accept="image/*,application/pdf" on:change=on_proof_change />
                    {move || proof_name.get().map(|n| view! { <span class="text-muted">{n}</span> })}
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get() || reading.get())
                    on_click=move |_| save()
                >
                    "Registrar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
