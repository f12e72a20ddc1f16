use contracts::domain::a001_publisher::aggregate::Publisher;
use contracts::domain::a002_book::aggregate::BookDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_book::api;
use crate::shared::toast::use_toasts;

/// Create/edit form of a book. `initial` is the row being edited, if any.
#[component]
pub fn BookDetails(
    initial: Option<BookDto>,
    /// Publishers offered in the selector
    publishers: Vec<Publisher>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let is_edit = initial.is_some();
    let form = RwSignal::new(initial.unwrap_or_default());
    let price_text = RwSignal::new(form.with_untracked(|f| format!("{:.2}", f.price)));
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let save = move || {
        let mut dto = form.get();
        match price_text.get().trim().replace(',', ".").parse::<f64>() {
            Ok(price) => dto.price = price,
            Err(_) => {
                error.set(Some("Precio no válido".into()));
                return;
            }
        }
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    toasts.success(if is_edit { "Libro actualizado" } else { "Libro creado" });
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
        <div class="details-container book-details">
            <div class="details-header">
                <h3>{if is_edit { "Editar libro" } else { "Nuevo libro" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="book_name">"Título"</label>
                    <input
                        type="text"
                        id="book_name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="book_isbn">"ISBN"</label>
                    <input
                        type="text"
                        id="book_isbn"
                        prop:value=move || form.get().isbn
                        on:input=move |ev| form.update(|f| f.isbn = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="book_price">"Precio (€)"</label>
                    <input
                        type="text"
                        id="book_price"
                        inputmode="decimal"
                        prop:value=move || price_text.get()
                        on:input=move |ev| price_text.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="book_publisher">"Editorial"</label>
                    <select
                        id="book_publisher"
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse::<i64>().ok();
                            form.update(|f| f.publisher_id = value);
                        }
                    >
                        <option value="" selected=move || form.get().publisher_id.is_none()>"Seleccione una editorial"</option>
                        {publishers.into_iter().map(|p| {
                            let pid = p.id.value();
                            view! {
                                <option
                                    value=pid.to_string()
                                    selected=move || form.get().publisher_id == Some(pid)
                                >
                                    {p.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| save()
                >
                    {if is_edit { "Guardar" } else { "Crear" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
