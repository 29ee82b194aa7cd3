use dioxus::prelude::*;

use crate::album::card::AlbumCard;
use api::album::AlbumSummary;

#[derive(Clone, PartialEq, Props)]
pub struct AlbumGridProps {
    albums: Vec<AlbumSummary>,
}

#[component]
pub fn AlbumGrid(props: AlbumGridProps) -> Element {
    rsx! {
        div { class: "album-grid",
            for album in props.albums.iter() {
                AlbumCard { key: "{album.id}", album: album.clone() }
            }
        }
    }
}
