//! Reviews and guarantees section

use dioxus::prelude::*;
use humitek_common::SiteInfo;

use crate::components::icons::{MapPinIcon, ShieldCheckIcon, StarIcon};
use crate::components::{Container, SectionTitle};

/// Social proof: customer rating, insurance/guarantees, service area.
#[component]
pub fn TestimonialsSection(site: SiteInfo) -> Element {
    rsx! {
        section { id: "avis", class: "border-b border-slate-200 bg-slate-50 py-12",
            Container {
                SectionTitle {
                    kicker: Some("Confiance"),
                    title: "Avis & Garanties",
                    lede: Some("Preuves sociales, partenariats et assurances pour vous rassurer."),
                }
                div { class: "grid grid-cols-1 gap-6 md:grid-cols-3",
                    div { class: "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
                        div { class: "flex items-center gap-2 text-amber-500", aria_label: "Note 5/5",
                            for _ in 0..5 {
                                StarIcon { class: "h-5 w-5 fill-current" }
                            }
                        }
                        p { class: "mt-3 text-sm text-slate-700",
                            "“Intervention rapide et propre, plus aucune trace d'humidité. Je recommande !”"
                        }
                        div { class: "mt-3 text-sm font-semibold text-slate-900", "— M. Laurent, Bordeaux" }
                    }
                    div { class: "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
                        div { class: "flex items-center gap-2 text-sky-700",
                            ShieldCheckIcon { class: "h-5 w-5" }
                            span { class: "font-semibold", "Assurance & garanties" }
                        }
                        p { class: "mt-3 text-sm text-slate-700",
                            "Couvertures professionnelles, garanties d'efficacité selon prestation, documents fournis au devis."
                        }
                    }
                    div { class: "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
                        div { class: "flex items-center gap-2 text-sky-700",
                            MapPinIcon { class: "h-5 w-5" }
                            span { class: "font-semibold", "Zone d'intervention" }
                        }
                        p { class: "mt-3 text-sm text-slate-700",
                            "{site.service_area} (déplacements possibles sur demande)."
                        }
                    }
                }
            }
        }
    }
}
