//! FAQ accordion

use dioxus::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::components::{Container, SectionTitle};

const FAQ_ITEMS: [(&str, &str); 4] = [
    (
        "Combien de temps pour assécher un mur ?",
        "Selon le support et les taux initiaux, comptez de 2 à 12 semaines. Un suivi d'humidité est réalisé jusqu'à stabilisation.",
    ),
    (
        "Proposez-vous des garanties ?",
        "Oui, des garanties d'efficacité selon prestation, avec assurance pro. Les détails figurent dans le devis.",
    ),
    (
        "Intervenez-vous en copropriété ?",
        "Oui, nous travaillons avec syndics et architectes, rapport photo et devis détaillé à l'appui.",
    ),
    (
        "Pouvez-vous trouver une fuite sans casser ?",
        "La plupart du temps, oui. Nous utilisons caméra thermique et tests ciblés pour localiser de manière non destructive.",
    ),
];

/// One collapsible question/answer row, open flag local to the widget.
#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> Element {
    let mut open = use_signal(|| false);

    let chevron_class: &'static str = if open() {
        "h-5 w-5 rotate-180 transition-transform"
    } else {
        "h-5 w-5 transition-transform"
    };

    rsx! {
        div { class: "rounded-xl border border-slate-200 bg-white p-4 shadow-sm",
            button {
                class: "flex w-full items-center justify-between gap-4 text-left",
                aria_expanded: "{open()}",
                onclick: move |_| open.toggle(),
                span { class: "text-base font-semibold text-slate-900", "{question}" }
                ChevronDownIcon { class: chevron_class }
            }
            if open() {
                p { class: "mt-3 text-slate-600", "{answer}" }
            }
        }
    }
}

/// Frequently asked questions section
#[component]
pub fn FaqSection() -> Element {
    rsx! {
        section { class: "border-t border-slate-200 bg-slate-50 py-12",
            Container {
                SectionTitle { kicker: Some("FAQ"), title: "Questions fréquentes" }
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                    for (question , answer) in FAQ_ITEMS {
                        FaqItem { question, answer }
                    }
                }
            }
        }
    }
}
