//! Sticky site header with anchor navigation

use dioxus::prelude::*;
use humitek_common::SiteInfo;

use crate::components::icons::{ArrowRightIcon, DropletsIcon, PhoneIcon};
use crate::components::Container;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#realisations", "Réalisations"),
    ("#avis", "Avis"),
    ("#contact", "Contact"),
];

/// Sticky header: logo block, same-page anchor nav, call and quote actions.
#[component]
pub fn SiteHeader(site: SiteInfo) -> Element {
    rsx! {
        header { class: "sticky top-0 z-40 border-b border-slate-200 bg-white/80 backdrop-blur",
            Container { class: Some("flex h-16 items-center justify-between".to_string()),
                div { class: "flex items-center gap-3",
                    div { class: "flex h-10 w-10 items-center justify-center rounded-xl bg-sky-600 text-white",
                        DropletsIcon { class: "w-6 h-6" }
                    }
                    div { class: "leading-tight",
                        div { class: "font-bold", "{site.company_name}" }
                        div { class: "text-xs text-slate-500", "{site.tagline}" }
                    }
                }
                nav { class: "hidden items-center gap-6 text-sm font-medium text-slate-700 md:flex",
                    for (href , label) in NAV_LINKS {
                        a { href, class: "hover:text-sky-700", "{label}" }
                    }
                }
                div { class: "flex items-center gap-2",
                    a {
                        href: "{site.phone_href}",
                        class: "hidden items-center gap-2 rounded-2xl border border-slate-200 px-3 py-2 text-sm font-semibold text-slate-700 shadow-sm hover:bg-slate-100 sm:inline-flex",
                        PhoneIcon {}
                        "Appeler"
                    }
                    a {
                        href: "#contact",
                        class: "inline-flex items-center gap-2 rounded-2xl bg-sky-600 px-3 py-2 text-sm font-semibold text-white shadow-sm hover:bg-sky-700",
                        "Devis"
                        ArrowRightIcon {}
                    }
                }
            }
        }
    }
}
