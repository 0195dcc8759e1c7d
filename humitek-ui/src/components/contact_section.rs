//! Contact section scaffolding

use dioxus::prelude::*;
use humitek_common::SiteInfo;

use crate::components::icons::{BadgeCheckIcon, CameraIcon, PhoneIcon, ShieldCheckIcon};
use crate::components::{Container, Pill};

/// Contact block: reachability card on the left, the form (passed as
/// children so the controller stays in the app crate) on the right.
#[component]
pub fn ContactSection(site: SiteInfo, children: Element) -> Element {
    rsx! {
        section { id: "contact", class: "bg-white py-12",
            Container {
                div { class: "mb-8 text-center",
                    h2 { class: "text-2xl font-bold tracking-tight text-slate-900 sm:text-3xl",
                        "Contact & Devis"
                    }
                    p { class: "mx-auto mt-3 max-w-2xl text-slate-600",
                        "Expliquez-nous votre situation, nous revenons vers vous rapidement."
                    }
                }
                div { class: "grid grid-cols-1 gap-8 md:grid-cols-2",
                    div { class: "rounded-2xl border border-slate-200 bg-slate-50 p-6 shadow-sm",
                        div { class: "flex items-center gap-3",
                            div { class: "flex h-11 w-11 items-center justify-center rounded-xl bg-sky-600 text-white",
                                PhoneIcon { class: "w-6 h-6" }
                            }
                            div {
                                div { class: "font-semibold", "Besoin d'un diagnostic ?" }
                                div { class: "text-sm text-slate-600",
                                    "Appelez-nous ou laissez vos coordonnées."
                                }
                            }
                        }
                        ul { class: "mt-4 space-y-2 text-sm text-slate-700",
                            li {
                                strong { "Tél." }
                                " : "
                                a { class: "text-sky-700 hover:underline", href: "{site.phone_href}",
                                    "{site.phone_display}"
                                }
                            }
                            li {
                                strong { "Email" }
                                " : "
                                a {
                                    class: "text-sky-700 hover:underline",
                                    href: "mailto:{site.email}",
                                    "{site.email}"
                                }
                            }
                            li {
                                strong { "Horaires" }
                                " : {site.hours}"
                            }
                        }
                        div { class: "mt-6 space-y-2",
                            Pill { icon: Some(rsx! {
                                ShieldCheckIcon {}
                            }),
                                "Partenaire Murprotec"
                            }
                            Pill { icon: Some(rsx! {
                                BadgeCheckIcon {}
                            }),
                                "Devis transparent"
                            }
                            Pill { icon: Some(rsx! {
                                CameraIcon {}
                            }),
                                "Traçabilité photo"
                            }
                        }
                    }
                    div { class: "rounded-2xl border border-slate-200 bg-white p-6 shadow-sm",
                        {children}
                    }
                }
            }
        }
    }
}
