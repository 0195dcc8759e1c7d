//! Hero section with trust badges and the before/after teaser

use dioxus::prelude::*;

use crate::components::icons::{ArrowRightIcon, CircleCheckIcon, ShieldCheckIcon, StarIcon};
use crate::components::{BeforeAfter, ButtonSize, ButtonVariant, Container, CtaLink, Pill};

/// Opening section: headline, calls to action, trust badges, comparator.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "border-b border-slate-200 bg-gradient-to-b from-white to-slate-50",
            Container { class: Some("grid grid-cols-1 items-center gap-10 py-12 lg:grid-cols-2".to_string()),
                div {
                    Pill { icon: Some(rsx! {
                        ShieldCheckIcon {}
                    }),
                        "Diagnostics précis, solutions durables"
                    }
                    h1 { class: "mt-4 text-3xl font-extrabold tracking-tight sm:text-5xl",
                        "Humitek – Traitement de l'humidité & recherche de fuites"
                    }
                    p { class: "mt-4 max-w-xl text-lg text-slate-600",
                        "Interventions soignées, devis transparents, garanties claires. Protection du chantier et traçabilité photo systématiques."
                    }
                    div { class: "mt-6 flex flex-wrap items-center gap-3",
                        CtaLink {
                            href: "#contact".to_string(),
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            "Demander un devis"
                            ArrowRightIcon { class: "w-5 h-5" }
                        }
                        CtaLink {
                            href: "#process".to_string(),
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Large,
                            "Notre méthode"
                        }
                    }
                    div { class: "mt-6 flex flex-wrap items-center gap-2",
                        Pill { icon: Some(rsx! {
                            ShieldCheckIcon {}
                        }),
                            "Partenaire Murprotec – procédés éprouvés"
                        }
                        Pill { icon: Some(rsx! {
                            StarIcon {}
                        }),
                            "Avis clients ★★★★★"
                        }
                        Pill { icon: Some(rsx! {
                            CircleCheckIcon {}
                        }),
                            "Suivi & contrôle d'humidité post-chantier"
                        }
                    }
                }
                div {
                    BeforeAfter {}
                    div { class: "mt-3 text-center text-sm text-slate-500",
                        "Exemple d'amélioration après traitement"
                    }
                }
            }
        }
    }
}
