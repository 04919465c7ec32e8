use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::contact::{CONTACT_EMAIL, CONTACT_PHONE, HEADQUARTERS};

use crate::Route;
use crate::common::assets;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        img { src: assets::NAV_LOGO, alt: catalog::VENDOR }
                        p {
                            "Robotic platforms for underwater, surface water, land, and air. {catalog::TAGLINE}."
                        }
                    }
                    div {
                        h4 { class: "footer-heading", "Quick Links" }
                        ul { class: "footer-links",
                            li {
                                a { href: "/#products", "Products" }
                            }
                            li {
                                a { href: "/#about", "About" }
                            }
                            li {
                                Link { to: Route::Contact {}, "Contact" }
                            }
                        }
                    }
                    div { class: "footer-contact",
                        h4 { class: "footer-heading", "Contact" }
                        p { "{HEADQUARTERS}" }
                        p { "{CONTACT_PHONE}" }
                        p { "{CONTACT_EMAIL}" }
                    }
                }
                div { class: "footer-bottom",
                    p { "© {year} {catalog::VENDOR}. All rights reserved." }
                    // policy pages do not exist yet, the anchors hold their place
                    div { class: "footer-policy",
                        a { href: "#", "Privacy Policy" }
                        a { href: "#", "Terms of Service" }
                    }
                }
            }
        }
    }
}
