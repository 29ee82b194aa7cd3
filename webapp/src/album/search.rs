use dioxus::prelude::*;
use tracing::debug;

use crate::{album::grid::AlbumGrid, components::search_bar::SearchBar};
use api::{
    album::AlbumSummary,
    catalog::HttpCatalog,
    generation::RequestGeneration,
    search::{SearchQuery, apply_outcome, run_search},
};

// the results are only ever replaced by a successful response, so a failed search
// leaves whatever was on screen before
#[component]
pub fn AlbumSearch() -> Element {
    let catalog = use_context::<HttpCatalog>();

    let query_signal = use_signal(String::new);
    let mut albums_signal = use_signal(Vec::<AlbumSummary>::new);
    let mut busy_signal = use_signal(|| false);

    // shared between submissions so that only the newest response lands
    let generation = use_hook(RequestGeneration::default);

    let onsearch = move |raw: String| {
        let Some(query) = SearchQuery::parse(&raw) else {
            debug!("ignoring blank search");
            return;
        };

        let catalog = catalog.clone();
        let generation = generation.clone();

        busy_signal.set(true);

        // the task belongs to this component and is dropped with it
        spawn(async move {
            let outcome = run_search(&catalog, &generation, query).await;

            // a stale response leaves both signals untouched, and the newer search owns busy
            if outcome.is_none() {
                return;
            }

            if albums_signal.with_mut(|albums| apply_outcome(outcome, albums)) {
                busy_signal.set(false);
            }
        });
    };

    rsx! {
        div { class: "container",
            div { class: "page-header",
                h1 { class: "section-title", "Search Albums" }
            }

            SearchBar {
                query_signal,
                placeholder: "Search for albums...",
                busy: busy_signal(),
                onsearch,
            }

            AlbumGrid { albums: albums_signal() }
        }
    }
}
