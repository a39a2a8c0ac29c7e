use crate::utils::timer::run_after;
use leptos::*;
use uuid::Uuid;

pub const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Stack of transient notifications shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Error, message.into())
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Info, message.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Toast { id, level, message }));
        let toasts = *self;
        run_after(TOAST_DISMISS_MS, move || toasts.dismiss(id));
        id
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(provide_toasts)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed top-4 right-4 z-[80] space-y-2">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
                        ToastLevel::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
                        ToastLevel::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("border px-4 py-3 rounded shadow flex items-start gap-3 {class}") role="status">
                            <span class="text-sm">{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Schließen"
                                class="text-xs opacity-75"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
