//! Intervention process section

use dioxus::prelude::*;

use crate::components::{Container, SectionTitle};

const STEPS: [(&str, &str); 4] = [
    ("Diagnostic", "Inspection, mesures hygrométriques, caméra thermique."),
    ("Solution", "Devis clair, planning d'intervention adapté."),
    ("Intervention", "Protection du chantier, réalisation soignée."),
    ("Contrôle", "Vérifs finales et suivi d'humidité."),
];

/// Four-step journey from first contact to final control.
#[component]
pub fn ProcessSection() -> Element {
    rsx! {
        section { id: "process", class: "border-b border-slate-200 bg-slate-50 py-12",
            Container {
                SectionTitle {
                    kicker: Some("Process"),
                    title: "Un parcours simple, de la prise de contact au contrôle",
                    lede: Some("Transparence, protection du chantier et traçabilité photo avant / après."),
                }
                ol { class: "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4",
                    for (i , (title , desc)) in STEPS.iter().enumerate() {
                        li { class: "relative rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
                            div { class: "absolute -top-3 left-6 inline-flex h-7 w-7 items-center justify-center rounded-full bg-sky-600 text-sm font-bold text-white shadow-sm",
                                "{i + 1}"
                            }
                            h3 { class: "mt-2 text-lg font-semibold", "{title}" }
                            p { class: "mt-2 text-sm text-slate-600", "{desc}" }
                        }
                    }
                }
            }
        }
    }
}
