use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct PageNotFoundProps {
    segments: Vec<String>,
}

#[component]
pub fn PageNotFound(props: PageNotFoundProps) -> Element {
    let path = props.segments.join("/");

    rsx! {
        div { class: "container",
            div { class: "empty-state",
                h1 { class: "section-title", "Page not found" }
                p { "Nothing lives at /{path}" }
                Link { to: Route::AlbumSearch {}, class: "btn btn-primary", "Back to search" }
            }
        }
    }
}
