use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, album::AlbumArt};
use api::album::AlbumSummary;

#[derive(Clone, PartialEq, Props)]
pub struct AlbumCardProps {
    album: AlbumSummary,
}

pub(crate) fn detail_route(album: &AlbumSummary) -> Route {
    Route::AlbumDetail {
        album_id: album.id.to_string(),
    }
}

#[component]
pub fn AlbumCard(props: AlbumCardProps) -> Element {
    let album = props.album;
    let byline = album.byline();

    rsx! {
        div { class: "album-card",
            AlbumArt { thumb: album.thumb.clone(), title: album.title.clone() }

            div { class: "album-info",
                h3 { class: "album-title", "{album.title}" }
                p { class: "album-byline", "{byline}" }

                Link {
                    class: "btn btn-primary",
                    to: detail_route(&album),
                    "View Details"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_card_links_to_its_album() {
        let albums: Vec<AlbumSummary> = serde_json::from_value(json!([
            {"id": 1, "title": "Kind of Blue", "artist": "Miles Davis", "year": 1959},
            {"id": 249504, "title": "Bitches Brew", "artist": "Miles Davis", "year": "1970"},
            {"id": 3, "title": "In a Silent Way", "artist": "Miles Davis", "thumb": ""}
        ]))
        .unwrap();

        let links: Vec<String> = albums.iter().map(|a| detail_route(a).to_string()).collect();
        assert_eq!(links, vec!["/album/1", "/album/249504", "/album/3"]);

        for album in &albums {
            let path = format!("/album/{}", album.id);
            assert_eq!(path.parse::<Route>().ok(), Some(detail_route(album)));
        }
    }
}
