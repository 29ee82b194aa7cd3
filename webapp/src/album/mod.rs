use dioxus::prelude::*;

mod card;
mod grid;

mod detail;
pub use detail::AlbumDetail;

mod search;
pub use search::AlbumSearch;

#[derive(Clone, PartialEq, Props)]
struct AlbumArtProps {
    thumb: Option<String>,
    title: String,
    #[props(default = "album-art")]
    class: &'static str,
}

// cover thumbnail, or a placeholder tile when the catalog has none
#[component]
fn AlbumArt(props: AlbumArtProps) -> Element {
    let class = props.class;

    match props.thumb {
        Some(thumb) => rsx! {
            img { class: "{class}", src: "{thumb}", alt: "{props.title}" }
        },
        None => rsx! {
            div { class: "{class} placeholder",
                div { class: "placeholder-icon", "💿" }
            }
        },
    }
}
