#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use api::{
    catalog::HttpCatalog,
    config::{CatalogConfig, load_config},
};

mod common;

mod components;
use components::navigation::NavBar;

mod album;
use album::{AlbumDetail, AlbumSearch};

mod not_found;
use not_found::PageNotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the album id stays a String here since that's what the router hands us; AlbumDetail
// decides what to do with ids that don't parse
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        AlbumSearch {},
        #[route("/album/:album_id")]
        AlbumDetail { album_id: String },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

// nothing below the router renders until the config has settled, so every view can
// assume the catalog client is in the context
#[component]
pub fn App() -> Element {
    let config_future = use_resource(load_config);

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        match &*config_future.read() {
            Some(config) => rsx! {
                CatalogRoot { config: config.clone() }
            },
            None => rsx! {
                div { class: "loading-state", "Loading..." }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CatalogRootProps {
    config: CatalogConfig,
}

#[component]
fn CatalogRoot(props: CatalogRootProps) -> Element {
    use_context_provider(|| HttpCatalog::new(&props.config.api_url));

    rsx! {
        Router::<Route> {}
    }
}
