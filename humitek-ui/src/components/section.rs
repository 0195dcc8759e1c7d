//! Page-width container and section heading scaffolding

use dioxus::prelude::*;

const CONTAINER: &str = "mx-auto w-full max-w-7xl px-4 sm:px-6 lg:px-8";

/// Page-width container with the site's horizontal padding
#[component]
pub fn Container(#[props(default)] class: Option<String>, children: Element) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{CONTAINER} {extra}"),
        None => CONTAINER.to_string(),
    };
    rsx! {
        div { class: "{computed_class}", {children} }
    }
}

/// Centered section heading with optional kicker and lede
#[component]
pub fn SectionTitle(
    #[props(default)] kicker: Option<&'static str>,
    title: &'static str,
    #[props(default)] lede: Option<&'static str>,
) -> Element {
    rsx! {
        div { class: "mb-8 text-center",
            if let Some(kicker) = kicker {
                div { class: "mb-2 text-xs font-semibold uppercase tracking-wider text-sky-600",
                    "{kicker}"
                }
            }
            h2 { class: "text-2xl font-bold tracking-tight text-slate-900 sm:text-3xl", "{title}" }
            if let Some(lede) = lede {
                p { class: "mx-auto mt-3 max-w-2xl text-slate-600", "{lede}" }
            }
        }
    }
}
