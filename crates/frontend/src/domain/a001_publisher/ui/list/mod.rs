use crate::domain::a001_publisher::api;
use crate::domain::a001_publisher::ui::details::PublisherDetails;
use crate::shared::components::active_badge::ActiveToggle;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, replace_by, Searchable};
use crate::shared::toast::use_toasts;
use contracts::domain::a001_publisher::aggregate::Publisher;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

impl Searchable for Publisher {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.emails.iter().map(String::as_str));
        fields.extend(self.phones.iter().map(String::as_str));
        fields
    }
}

#[component]
pub fn PublisherList() -> impl IntoView {
    let toasts = use_toasts();
    let items = RwSignal::new(Vec::<Publisher>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let toggling = RwSignal::new(HashSet::<i64>::new());

    let show_details = RwSignal::new(false);
    let editing_id = RwSignal::new(Option::<i64>::None);

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

    let open_details = move |id: Option<i64>| {
        editing_id.set(id);
        show_details.set(true);
    };

    // The row is replaced in place with what the backend returns
    let toggle_active = move |id: i64| {
        toggling.update(|s| {
            s.insert(id);
        });
        spawn_local(async move {
            match api::toggle_active(id).await {
                Ok(updated) => items.update(|v| {
                    replace_by(v, updated, |p| p.id);
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
            <PageHeader title="Editoriales">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    "Nueva editorial"
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
                <Input value=search placeholder="Buscar por nombre, email o teléfono..." />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Emails"</th>
                            <th class="table__header-cell">"Teléfonos"</th>
                            <th class="table__header-cell">"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|p| {
                            let id = p.id.value();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                    <td class="table__cell">{p.name}</td>
                                    <td class="table__cell">{p.emails.join(", ")}</td>
                                    <td class="table__cell">{p.phones.join(", ")}</td>
                                    <ActiveToggle
                                        active=p.active
                                        busy=Signal::derive(move || toggling.get().contains(&id))
                                        on_toggle=Callback::new(move |_| toggle_active(id))
                                    />
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && visible.get().is_empty()>
                    <div class="table__empty">"No hay editoriales"</div>
                </Show>
            </div>

            <Dialog open=show_details>
                <DialogSurface>
                    <DialogBody>
                        <DialogContent>
                            {move || show_details.get().then(|| view! {
                                <PublisherDetails
                                    id=editing_id.get_untracked()
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
