mod view_model;

use contracts::domain::a001_publisher::aggregate::MAX_CONTACTS;
use leptos::prelude::*;
use thaw::*;
use view_model::PublisherDetailsViewModel;

/// Which contact list a row of inputs edits
#[derive(Clone, Copy, PartialEq)]
enum ContactKind {
    Email,
    Phone,
}

#[component]
fn ContactInputs(vm: PublisherDetailsViewModel, kind: ContactKind) -> impl IntoView {
    let values = move || {
        vm.form.with(|f| match kind {
            ContactKind::Email => f.emails.clone(),
            ContactKind::Phone => f.phones.clone(),
        })
    };
    let (label, input_type, add_label) = match kind {
        ContactKind::Email => ("Emails", "email", "Añadir email"),
        ContactKind::Phone => ("Teléfonos", "tel", "Añadir teléfono"),
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            {move || values().into_iter().enumerate().map(|(i, value)| {
                view! {
                    <input
                        type=input_type
                        class="form-group__contact"
                        prop:value=value
                        on:input=move |ev| vm.set_contact(kind == ContactKind::Email, i, event_target_value(&ev))
                    />
                }
            }).collect_view()}
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || values().len() >= MAX_CONTACTS)
                on_click=move |_| vm.add_slot(kind == ContactKind::Email)
            >
                {add_label}
            </Button>
        </div>
    }
}

/// Create/edit form of a publisher
#[component]
pub fn PublisherDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PublisherDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container publisher-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar editorial" } else { "Nueva editorial" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="publisher_name">"Nombre"</label>
                    <input
                        type="text"
                        id="publisher_name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <ContactInputs vm=vm kind=ContactKind::Email />
                <ContactInputs vm=vm kind=ContactKind::Phone />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.is_edit_mode() { "Guardar" } else { "Crear" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
}
