use contracts::domain::a001_publisher::aggregate::PublisherDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_publisher::api;
use crate::shared::toast::{use_toasts, ToastService};

#[derive(Clone, Copy)]
pub struct PublisherDetailsViewModel {
    pub form: RwSignal<PublisherDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl PublisherDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PublisherDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts: use_toasts(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(publisher) => {
                    let mut dto = publisher.to_dto();
                    // Always leave one input to type into
                    if dto.emails.is_empty() {
                        dto.add_email_slot();
                    }
                    if dto.phones.is_empty() {
                        dto.add_phone_slot();
                    }
                    form.set(dto);
                }
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    pub fn set_contact(&self, email: bool, index: usize, value: String) {
        self.form.update(|f| {
            let list = if email { &mut f.emails } else { &mut f.phones };
            if let Some(slot) = list.get_mut(index) {
                *slot = value;
            }
        });
    }

    pub fn add_slot(&self, email: bool) {
        self.form.update(|f| {
            if email {
                f.add_email_slot();
            } else {
                f.add_phone_slot();
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let toasts = self.toasts;
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(_) => {
                    toasts.success(if current.id.is_some() {
                        "Editorial actualizada"
                    } else {
                        "Editorial creada"
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    toasts.error(&e);
                }
            }
            saving.set(false);
        });
    }
}
