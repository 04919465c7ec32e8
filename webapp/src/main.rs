#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod category;
use category::{CategoryDetail, PageNotFound};

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// category pages hang directly off the root as /{category_id}, matching the
// route strings in the catalog data, and anything deeper falls through to
// the not-found page
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/contact")]
        Contact {},
        #[route("/:category_id")]
        CategoryDetail { category_id: String },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        style { "{common::style::CATALOG_STYLES}" }
        style { "{common::style::CONTACT_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
