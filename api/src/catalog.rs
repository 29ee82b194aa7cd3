use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::{debug, error, instrument, warn};

use crate::{
    album::{AlbumDetail, AlbumId, AlbumSummary},
    search::SearchQuery,
};

// the read-only catalog service
//
// the views only ever talk to the catalog through this trait.  ?Send because every
// implementation ends up on the browser's single thread.
#[async_trait(?Send)]
pub trait Catalog {
    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Vec<AlbumSummary>>;

    // Ok(None) is the catalog saying "no such album", as opposed to failing to answer
    async fn album(&self, album_id: AlbumId) -> anyhow::Result<Option<AlbumDetail>>;
}

// the catalog over http
//
// GET {base}/api/search?q=...  -> [AlbumSummary]
// GET {base}/api/album/{id}    -> AlbumDetail | null
#[derive(Clone, Debug, PartialEq)]
pub struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        HttpCatalog {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!("{}/api/search?q={}", self.base_url, query.escaped())
    }

    pub fn album_url(&self, album_id: AlbumId) -> String {
        format!("{}/api/album/{album_id}", self.base_url)
    }
}

#[async_trait(?Send)]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Vec<AlbumSummary>> {
        let url = self.search_url(query);
        debug!(%url, "searching catalog");

        let resp = Request::get(&url).send().await?;

        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(anyhow::Error::msg(resp.text().await?))
        }
    }

    #[instrument(skip(self))]
    async fn album(&self, album_id: AlbumId) -> anyhow::Result<Option<AlbumDetail>> {
        let url = self.album_url(album_id);
        debug!(%url, "fetching album");

        let resp = Request::get(&url).send().await?;

        if resp.status() == 404 {
            return Ok(None);
        }

        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(anyhow::Error::msg(resp.text().await?))
        }
    }
}

// fetch one album for display
//
// the detail view draws a failed fetch and a missing album the same way, so the error is
// logged here and folded into None
pub async fn lookup_album<C>(catalog: &C, album_id: AlbumId) -> Option<AlbumDetail>
where
    C: Catalog + ?Sized,
{
    match catalog.album(album_id).await {
        Ok(Some(album)) => Some(album),
        Ok(None) => {
            warn!(album_id, "album not found in catalog");
            None
        }
        Err(err) => {
            error!(album_id, "failed to fetch album: {err}");
            None
        }
    }
}
