use crate::domain::a002_book::api;
use crate::domain::a002_book::ui::details::BookDetails;
use crate::domain::a001_publisher::api as publisher_api;
use crate::shared::components::active_badge::ActiveToggle;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, format_price, replace_by, Searchable};
use crate::shared::toast::use_toasts;
use contracts::domain::a001_publisher::aggregate::Publisher;
use contracts::domain::a002_book::aggregate::{Book, BookDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use thaw::*;

impl Searchable for Book {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.isbn]
    }
}

#[component]
pub fn BookList() -> impl IntoView {
    let toasts = use_toasts();
    let items = RwSignal::new(Vec::<Book>::new());
    let publishers = RwSignal::new(Vec::<Publisher>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let toggling = RwSignal::new(HashSet::<i64>::new());

    let show_details = RwSignal::new(false);
    let editing = RwSignal::new(Option::<BookDto>::None);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => items.set(v),
                Err(e) => toasts.error(&e),
            }
            match publisher_api::fetch_all().await {
                Ok(v) => publishers.set(v),
                Err(e) => toasts.error(&e),
            }
            loading.set(false);
        });
    };

    let publisher_names = Memo::new(move |_| {
        publishers.with(|list| {
            list.iter()
                .map(|p| (p.id.value(), p.name.clone()))
                .collect::<HashMap<_, _>>()
        })
    });

    let open_details = move |dto: Option<BookDto>| {
        editing.set(dto);
        show_details.set(true);
    };

    let toggle_active = move |id: i64| {
        toggling.update(|s| {
            s.insert(id);
        });
        spawn_local(async move {
            match api::toggle_active(id).await {
                Ok(updated) => items.update(|v| {
                    replace_by(v, updated, |b| b.id);
                }),
                Err(e) => toasts.error(&e),
            }
            toggling.update(|s| {
                s.remove(&id);
            });
        });
    };

    let visible = Memo::new(move |_| filter_list(&items.get(), &search.get()));

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Libros">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    "Nuevo libro"
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
                <Input value=search placeholder="Buscar por título o ISBN..." />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Título"</th>
                            <th class="table__header-cell">"ISBN"</th>
                            <th class="table__header-cell">"Editorial"</th>
                            <th class="table__header-cell table__header-cell--right">"Precio"</th>
                            <th class="table__header-cell table__header-cell--right">"Pendientes"</th>
                            <th class="table__header-cell">"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|b| {
                            let id = b.id.value();
                            let publisher = publisher_names
                                .with(|names| names.get(&b.publisher_id.value()).cloned())
                                .unwrap_or_else(|| "-".to_string());
                            let dto = b.to_dto();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(Some(dto.clone()))>
                                    <td class="table__cell">{b.name}</td>
                                    <td class="table__cell">{b.isbn}</td>
                                    <td class="table__cell">{publisher}</td>
                                    <td class="table__cell table__cell--right">{format_price(b.price)}</td>
                                    <td class="table__cell table__cell--right">{b.pending_units}</td>
                                    <ActiveToggle
                                        active=b.active
                                        busy=Signal::derive(move || toggling.get().contains(&id))
                                        on_toggle=Callback::new(move |_| toggle_active(id))
                                    />
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && visible.get().is_empty()>
                    <div class="table__empty">"No hay libros"</div>
                </Show>
            </div>

            <Dialog open=show_details>
                <DialogSurface>
                    <DialogBody>
                        <DialogContent>
                            {move || show_details.get().then(|| view! {
                                <BookDetails
                                    initial=editing.get_untracked()
                                    publishers=publishers.get_untracked()
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
