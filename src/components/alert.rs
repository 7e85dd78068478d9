//! Inline status messages.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert--error",
            AlertKind::Success => "alert alert--success",
            AlertKind::Info => "alert alert--info",
        }
    }
}

/// Renders `message` when it is set; nothing otherwise.
#[component]
pub fn Alert(#[prop(into)] message: Signal<Option<String>>, #[prop(default = AlertKind::Error)] kind: AlertKind) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class=kind.class() role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Message under a form field, read from a field-error map signal.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Reactive view of one entry in a field-error map.
pub fn field_message(errors: RwSignal<crate::forms::FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).cloned()))
}
