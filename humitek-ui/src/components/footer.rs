//! Site footer

use dioxus::prelude::*;
use humitek_common::SiteInfo;

use crate::components::Container;

/// Footer with company blurb, anchor links and legal placeholders.
#[component]
pub fn SiteFooter(site: SiteInfo) -> Element {
    rsx! {
        footer { class: "border-t border-slate-200 bg-white py-10 text-sm",
            Container { class: Some("grid grid-cols-1 gap-8 md:grid-cols-3".to_string()),
                div {
                    div { class: "text-lg font-bold", "{site.company_name}" }
                    p { class: "mt-2 text-slate-600",
                        "Traitement de l'humidité & recherche de fuites – {site.service_area}."
                    }
                }
                div {
                    div { class: "font-semibold", "Liens" }
                    ul { class: "mt-2 space-y-1",
                        li {
                            a { href: "#services", class: "hover:underline", "Services" }
                        }
                        li {
                            a { href: "#realisations", class: "hover:underline", "Réalisations" }
                        }
                        li {
                            a { href: "#contact", class: "hover:underline", "Contact" }
                        }
                    }
                }
                div {
                    div { class: "font-semibold", "Légal" }
                    ul { class: "mt-2 space-y-1",
                        li {
                            a { href: "#", class: "hover:underline", "Mentions légales" }
                        }
                        li {
                            a { href: "#", class: "hover:underline", "Politique de confidentialité" }
                        }
                        li {
                            a { href: "#", class: "hover:underline", "Cookies" }
                        }
                    }
                }
            }
            Container { class: Some("mt-8 border-t border-slate-200 pt-6 text-slate-500".to_string()),
                "© {site.company_name} – Tous droits réservés."
            }
        }
    }
}
