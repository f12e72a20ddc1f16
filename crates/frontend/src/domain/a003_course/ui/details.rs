use contracts::domain::a003_course::aggregate::CourseDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_course::api;
use crate::shared::toast::use_toasts;

#[component]
pub fn CourseDetails(
    initial: Option<CourseDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let is_edit = initial.is_some();
    let form = RwSignal::new(initial.unwrap_or_default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let save = move || {
        let dto = form.get();
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    toasts.success(if is_edit { "Curso actualizado" } else { "Curso creado" });
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
        <div class="details-container course-details">
            <div class="details-header">
                <h3>{if is_edit { "Editar curso" } else { "Nuevo curso" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="course_name">"Nombre"</label>
                    <input
                        type="text"
                        id="course_name"
                        placeholder="1º ESO A"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="course_level">"Nivel"</label>
                    <input
                        type="text"
                        id="course_level"
                        placeholder="ESO"
                        prop:value=move || form.get().level
                        on:input=move |ev| form.update(|f| f.level = event_target_value(&ev))
                    />
                </div>
                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="course_active"
                        prop:checked=move || form.get().active
                        on:change=move |ev| form.update(|f| f.active = event_target_checked(&ev))
                    />
                    <label for="course_active">"Activo"</label>
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
