//! Reusable form field components

use dioxus::prelude::*;

/// Shared styling for text inputs, textareas and selects.
pub(crate) const FIELD_CLASS: &str = "block w-full rounded-xl border border-slate-200 bg-white px-4 py-3 text-slate-900 shadow-sm placeholder:text-slate-400 focus:border-sky-500 focus:outline-none focus:ring-2 focus:ring-sky-100";

/// Labeled field wrapper with the inline error slot under the control.
#[component]
pub fn FormField(
    label: &'static str,
    #[props(default)] error: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        div {
            label { class: "mb-1 block text-sm font-medium text-slate-700", "{label}" }
            {children}
            if let Some(error) = error {
                p { class: "mt-1 text-sm text-rose-600", "{error}" }
            }
        }
    }
}

/// Single-line text input with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] name: Option<&'static str>,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            name,
            class: FIELD_CLASS,
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Multi-line text input with consistent styling
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] name: Option<&'static str>,
    #[props(default = 4)] rows: u32,
) -> Element {
    rsx! {
        textarea {
            name,
            class: FIELD_CLASS,
            rows: "{rows}",
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
