//! Services section

use dioxus::prelude::*;

use crate::components::icons::{ArrowRightIcon, CalendarDaysIcon, RulerIcon, WrenchIcon};
use crate::components::{Container, SectionTitle};

/// One service card with icon, title and short description.
#[component]
fn ServiceCard(icon: Element, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
            div { class: "flex items-center gap-3",
                div { class: "flex h-11 w-11 items-center justify-center rounded-xl bg-sky-50 text-sky-700",
                    {icon}
                }
                h3 { class: "text-lg font-semibold", "{title}" }
            }
            p { class: "mt-3 text-sm text-slate-600", "{description}" }
            a {
                href: "#contact",
                class: "mt-4 inline-flex items-center gap-2 text-sm font-semibold text-sky-700 hover:underline",
                "En savoir plus"
                ArrowRightIcon {}
            }
        }
    }
}

/// Services overview with the three intervention types.
#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { id: "services", class: "border-b border-slate-200 bg-white py-12",
            Container {
                SectionTitle {
                    kicker: Some("Services"),
                    title: "Solutions contre l'humidité, de A à Z",
                    lede: Some("Du diagnostic par caméra thermique à l'assèchement, nous traitons durablement la cause."),
                }
                div { class: "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    ServiceCard {
                        icon: rsx! {
                            RulerIcon { class: "w-6 h-6" }
                        },
                        title: "Remontées capillaires",
                        description: "Diagnostic hygrométrique, traitement ciblé, suivi des taux d'humidité jusqu'au retour à l'équilibre.",
                    }
                    ServiceCard {
                        icon: rsx! {
                            WrenchIcon { class: "w-6 h-6" }
                        },
                        title: "Recherche de fuites",
                        description: "Inspection thermographique, hygrométrie, inspection par caméra, traceurs, etc.",
                    }
                    ServiceCard {
                        icon: rsx! {
                            CalendarDaysIcon { class: "w-6 h-6" }
                        },
                        title: "Expertise Conseil Avant Vente",
                        description: "Diagnostic complet avant vente, pathologies du bâtiment.",
                    }
                }
            }
        }
    }
}
