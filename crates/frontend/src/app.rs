use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Active page and sidebar state for the whole app
    provide_context(AppGlobalContext::new());

    // Notifications raised by any page
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
            <ToastHost />
        </ConfigProvider>
    }
}
