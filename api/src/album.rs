use std::fmt;

use serde::Deserialize;

use crate::{deserialize_non_empty, deserialize_null_default, deserialize_year};

// structs and types

pub type AlbumId = u64;

// a single search hit
//
// these are replaced wholesale on every search, so there is no update type
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub thumb: Option<String>,
}

impl AlbumSummary {
    pub fn byline(&self) -> String {
        byline(&self.artist, self.year)
    }
}

// the full record behind the detail view
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlbumDetail {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub thumb: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub styles: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tracklist: Vec<Track>,
}

impl AlbumDetail {
    pub fn byline(&self) -> String {
        byline(&self.artist, self.year)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Track {
    pub position: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub duration: Option<String>,
}

// "A1. So What (9:22)", or "A1. So What" when the catalog has no duration
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position, self.title)?;

        if let Some(duration) = &self.duration {
            write!(f, " ({duration})")?;
        }

        Ok(())
    }
}

fn byline(artist: &str, year: Option<i32>) -> String {
    match year {
        Some(year) if year > 0 => format!("{artist} - {year}"),
        _ => artist.to_owned(),
    }
}
