//! Reusable button and CTA link components

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Sky background - for the main call to action
    Primary,
    /// White background with border - for secondary actions
    Outline,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Compact header actions
    Small,
    /// Standard form actions
    Medium,
    /// Hero calls to action
    Large,
}

const BASE: &str = "inline-flex items-center justify-center gap-2 rounded-2xl font-semibold shadow-sm transition";

fn padding(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Small => "px-3 py-2 text-sm",
        ButtonSize::Medium => "px-4 py-3",
        ButtonSize::Large => "px-5 py-3",
    }
}

fn variant_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => {
            "bg-sky-600 text-white hover:bg-sky-700 disabled:cursor-not-allowed disabled:opacity-70"
        }
        ButtonVariant::Outline => "border border-slate-200 bg-white text-slate-700 hover:bg-slate-100",
    }
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{BASE} {} {} {extra}", padding(size), variant_class(variant)),
        None => format!("{BASE} {} {}", padding(size), variant_class(variant)),
    };

    rsx! {
        button {
            r#type,
            class: "{computed_class}",
            disabled,
            onclick: move |e| {
                if !disabled {
                    if let Some(ref handler) = onclick {
                        handler.call(e);
                    }
                }
            },
            {children}
        }
    }
}

/// Anchor styled like a button, for in-page and `tel:` calls to action
#[component]
pub fn CtaLink(
    href: String,
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{BASE} {} {} {extra}", padding(size), variant_class(variant)),
        None => format!("{BASE} {} {}", padding(size), variant_class(variant)),
    };

    rsx! {
        a { href: "{href}", class: "{computed_class}", {children} }
    }
}
