use leptos::prelude::*;
use thaw::*;

/// "Activo" / "Inactivo" badge that toggles on click
#[component]
pub fn ActiveToggle(
    active: bool,
    /// Disabled while the toggle request is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let (label, color) = if active {
        ("Activo", BadgeColor::Success)
    } else {
        ("Inactivo", BadgeColor::Danger)
    };

    view! {
        <td class="table__cell" on:click=|e| e.stop_propagation()>
            <button
                class="badge-button"
                title="Cambiar estado"
                disabled=move || busy.get()
                on:click=move |_| on_toggle.run(())
            >
                <Badge appearance=BadgeAppearance::Tint color=color>
                    {label}
                </Badge>
            </button>
        </td>
    }
}
