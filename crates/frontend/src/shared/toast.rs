//! Non-blocking notifications
//!
//! Pages push messages through `ToastService` (provided in context);
//! `ToastHost` renders them in a corner and drops each one after a few seconds.

use contracts::shared::envelope::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 4_000;
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Visible messages, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Add a message, dropping the oldest beyond the visible cap; returns its id
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let mut id = 0;
        let text = text.into();
        self.queue.update(|q| id = q.push(kind, text));

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(ToastKind::Warning, text);
    }

    pub fn error(&self, err: &ApiError) {
        log::warn!("{:?}", err);
        self.show(ToastKind::Error, err.to_string());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.get().items().to_vec()
                key=|t| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() on:click=move |_| toasts.dismiss(id)>
                            {t.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_latest() {
        let mut q = ToastQueue::default();
        for i in 0..7 {
            q.push(ToastKind::Success, format!("mensaje {}", i));
        }
        assert_eq!(q.items().len(), MAX_VISIBLE);
        assert_eq!(q.items()[0].text, "mensaje 2");
        assert_eq!(q.items()[MAX_VISIBLE - 1].text, "mensaje 6");
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Error, "a");
        let b = q.push(ToastKind::Warning, "b");
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
    }
}
