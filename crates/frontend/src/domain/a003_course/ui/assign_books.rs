use contracts::domain::a002_book::aggregate::Book;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::domain::a003_course::api;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::list_utils::filter_list;
use crate::shared::toast::use_toasts;

/// Pick several books and assign them to the course in one batch
#[component]
pub fn AssignBooks(
    course_id: i64,
    /// Active books not yet assigned to the course
    candidates: Vec<Book>,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(HashSet::<i64>::new());
    let running = RwSignal::new(false);
    let candidates = StoredValue::new(candidates);

    let visible = Memo::new(move |_| candidates.with_value(|c| filter_list(c, &search.get())));

    let toggle = move |id: i64, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let submit = move || {
        let ids: Vec<i64> = selected.get().into_iter().collect();
        if ids.is_empty() {
            toasts.warning("Seleccione al menos un libro");
            return;
        }
        running.set(true);
        spawn_local(async move {
            let outcome = api::assign_many(course_id, &ids).await;
            if outcome.has_failures() {
                toasts.warning(format!("Asignación: {}", outcome.summary()));
            } else {
                toasts.success(format!("Asignación: {}", outcome.summary()));
            }
            running.set(false);
            // Partial successes are kept, so the caller reloads either way
            on_done.run(());
        });
    };

    view! {
        <div class="details-container assign-books">
            <div class="details-header">
                <h3>"Asignar libros al curso"</h3>
            </div>
            <Input value=search placeholder="Buscar por título o ISBN..." />
            <div class="table table--scroll">
                <table class="table__data">
                    <tbody>
                        {move || visible.get().into_iter().map(|b| {
                            let id = b.id.value();
                            view! {
                                <tr class="table__row">
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id))
                                        on_change=Callback::new(move |checked| toggle(id, checked))
                                    />
                                    <td class="table__cell">{b.name}</td>
                                    <td class="table__cell">{b.isbn}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || visible.get().is_empty()>
                    <div class="table__empty">"No quedan libros por asignar"</div>
                </Show>
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || running.get() || selected.get().is_empty())
                    on_click=move |_| submit()
                >
                    {move || format!("Asignar ({})", selected.get().len())}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
