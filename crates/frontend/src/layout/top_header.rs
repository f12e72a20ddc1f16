use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__left">
                <button class="top-header__icon-btn" title="Menú" on:click=move |_| ctx.toggle_left()>
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Reservas de libros"</span>
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
            </div>
            <div class="top-header__right">
                <span class="top-header__user">{user_name}</span>
                <button class="top-header__icon-btn" title="Cerrar sesión" on:click=on_logout>
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
