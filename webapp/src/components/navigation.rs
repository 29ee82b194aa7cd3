use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::AlbumSearch {}, class: "brand", "Album Categorizer" }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "page-content",
            Outlet::<Route> {}
        }
    }
}
