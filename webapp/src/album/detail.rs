use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{Route, album::AlbumArt};
use api::{
    album::AlbumId,
    catalog::{HttpCatalog, lookup_album},
};

#[derive(Clone, PartialEq, Props)]
struct LabelGroupProps {
    heading: &'static str,
    labels: Vec<String>,
    variant: &'static str,
}

#[component]
fn LabelGroup(props: LabelGroupProps) -> Element {
    let variant = props.variant;

    rsx! {
        div { class: "label-group",
            h5 { "{props.heading}:" }
            for (index, label) in props.labels.iter().enumerate() {
                span { key: "{index}", class: "badge {variant}", "{label}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AlbumDetailCardProps {
    album: api::album::AlbumDetail,
}

#[component]
fn AlbumDetailCard(props: AlbumDetailCardProps) -> Element {
    let album = props.album;
    let byline = album.byline();

    rsx! {
        div { class: "card album-detail",
            div { class: "card-header",
                h2 { "{album.title}" }
                h4 { "{byline}" }
            }

            div { class: "card-body",
                AlbumArt {
                    thumb: album.thumb.clone(),
                    title: album.title.clone(),
                    class: "album-art-large",
                }

                LabelGroup {
                    heading: "Genres",
                    labels: album.genres.clone(),
                    variant: "badge-primary",
                }

                LabelGroup {
                    heading: "Styles",
                    labels: album.styles.clone(),
                    variant: "badge-secondary",
                }

                h5 { "Tracklist:" }
                ul { class: "list-group",
                    for (index, track) in album.tracklist.iter().enumerate() {
                        li { key: "{index}", class: "list-group-item", "{track}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AlbumNotFound() -> Element {
    rsx! {
        div { class: "empty-state",
            p { "Album not found" }
            Link { to: Route::AlbumSearch {}, class: "btn btn-secondary", "Back to search" }
        }
    }
}

#[component]
fn AlbumDetailSkeleton() -> Element {
    rsx! {
        div { class: "card album-detail loading",
            div { class: "card-header",
                div { class: "skeleton", style: "width: 60%; height: 32px;" }
                div { class: "skeleton", style: "width: 40%; height: 20px; margin-top: var(--space-2);" }
            }
            div { class: "card-body",
                div { class: "skeleton", style: "width: 300px; height: 300px;" }
                p { class: "loading-state", "Loading..." }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AlbumDetailProps {
    // this is a String because we get it from the Router
    album_id: String,
}

#[component]
pub fn AlbumDetail(props: AlbumDetailProps) -> Element {
    let catalog = use_context::<HttpCatalog>();

    // the router keeps this component mounted when only the id changes, so the id needs to be
    // reactive for the resource below to restart.  restarting drops the in-flight future, which
    // is what keeps a slow response for the old id from landing on the new one.
    let album_id = use_memo(use_reactive(&props.album_id, |album_id| album_id));

    let album_future = use_resource(move || {
        let catalog = catalog.clone();

        async move {
            let album_id = album_id();

            match album_id.parse::<AlbumId>() {
                Ok(album_id) => lookup_album(&catalog, album_id).await,
                Err(_) => {
                    warn!(%album_id, "album id is not a catalog id");
                    None
                }
            }
        }
    });

    rsx! {
        div { class: "container",
            match &*album_future.read() {
                Some(Some(album)) => rsx! {
                    AlbumDetailCard { album: album.clone() }
                },
                Some(None) => rsx! {
                    AlbumNotFound {}
                },
                None => rsx! {
                    AlbumDetailSkeleton {}
                },
            }
        }
    }
}
