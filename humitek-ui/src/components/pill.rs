//! Rounded badge component

use dioxus::prelude::*;

/// Rounded badge with an optional leading icon
#[component]
pub fn Pill(
    #[props(default)] icon: Option<Element>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center gap-2 rounded-full border border-slate-200 bg-white px-3 py-1 text-sm text-slate-700 shadow-sm";
    let computed_class = match &class {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    };
    rsx! {
        div { class: "{computed_class}",
            {icon}
            span { {children} }
        }
    }
}
