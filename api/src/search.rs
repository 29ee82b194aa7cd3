use std::{borrow::Cow, fmt};

use tracing::{debug, error, instrument};

use crate::{
    album::AlbumSummary,
    catalog::Catalog,
    generation::RequestGeneration,
};

// a query that is worth sending
//
// the only way to build one is parse(), so holding a SearchQuery means the text is
// trimmed and non-empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            None
        } else {
            Some(SearchQuery(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // percent-encode everything outside the unreserved set, so a space is %20 and not +
    pub fn escaped(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// issue one search and report back only if nothing newer was issued in the meantime
//
// the ticket is taken before the request goes out, so a later submission always invalidates
// this one regardless of which response lands first.  None means the response was stale and
// must not touch the view.
#[instrument(skip(catalog, generation))]
pub async fn run_search<C>(
    catalog: &C,
    generation: &RequestGeneration,
    query: SearchQuery,
) -> Option<anyhow::Result<Vec<AlbumSummary>>>
where
    C: Catalog + ?Sized,
{
    let ticket = generation.issue();

    let result = catalog.search(&query).await;

    if generation.is_current(ticket) {
        Some(result)
    } else {
        debug!(?ticket, "discarding stale search response");
        None
    }
}

// fold a finished search into the results on screen, returning whether the search is done
//
// only a successful response replaces the results.  a failure is logged and leaves the
// previous results alone, and a stale response changes nothing (a newer search is still
// running, so the view stays busy)
pub fn apply_outcome(
    outcome: Option<anyhow::Result<Vec<AlbumSummary>>>,
    results: &mut Vec<AlbumSummary>,
) -> bool {
    match outcome {
        Some(Ok(albums)) => {
            *results = albums;
            true
        }
        Some(Err(err)) => {
            error!("error searching albums: {err}");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::MockCatalog;

    use futures::executor::block_on;

    fn album(id: u64, title: &str) -> AlbumSummary {
        AlbumSummary {
            id,
            title: title.to_owned(),
            artist: "Miles Davis".to_owned(),
            year: None,
            thumb: None,
        }
    }

    #[test]
    fn test_parse_trims() {
        let query = SearchQuery::parse("  miles davis \n").unwrap();
        assert_eq!(query.as_str(), "miles davis");
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse("   "), None);
        assert_eq!(SearchQuery::parse("\t\n"), None);
    }

    #[test]
    fn test_escaped() {
        let query = SearchQuery::parse("miles davis").unwrap();
        assert_eq!(query.escaped(), "miles%20davis");

        let query = SearchQuery::parse("AC/DC & friends?").unwrap();
        assert_eq!(query.escaped(), "AC%2FDC%20%26%20friends%3F");

        let query = SearchQuery::parse("Sigur Rós").unwrap();
        assert_eq!(query.escaped(), "Sigur%20R%C3%B3s");
    }

    #[test]
    fn test_run_search_issues_one_request() {
        let catalog = MockCatalog::with_search(vec![AlbumSummary {
            id: 1,
            title: "Kind of Blue".to_owned(),
            artist: "Miles Davis".to_owned(),
            year: Some(1959),
            thumb: None,
        }]);
        let generation = RequestGeneration::default();

        let query = SearchQuery::parse(" miles davis ").unwrap();
        let albums = block_on(run_search(&catalog, &generation, query))
            .unwrap()
            .unwrap();

        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].title, "Kind of Blue");
        assert_eq!(catalog.searches(), vec!["miles davis"]);
        assert!(catalog.lookups().is_empty());
    }

    #[test]
    fn test_run_search_passes_errors_through() {
        let catalog = MockCatalog::failing();
        let generation = RequestGeneration::default();

        let query = SearchQuery::parse("anything").unwrap();
        let result = block_on(run_search(&catalog, &generation, query)).unwrap();

        assert!(result.is_err());
        assert_eq!(catalog.searches().len(), 1);
    }

    #[test]
    fn test_run_search_drops_superseded_response() {
        let generation = RequestGeneration::default();

        // a newer submission goes out while the first request is still in flight
        let newer = generation.clone();
        let catalog = MockCatalog::with_search(Vec::new()).on_search(move || {
            newer.issue();
        });

        let query = SearchQuery::parse("first").unwrap();
        let stale = block_on(run_search(&catalog, &generation, query));

        assert!(stale.is_none());
        assert_eq!(catalog.searches(), vec!["first"]);
    }

    #[test]
    fn test_run_search_latest_wins() {
        let catalog = MockCatalog::with_search(Vec::new());
        let generation = RequestGeneration::default();

        let first = block_on(run_search(&catalog, &generation, SearchQuery::parse("a").unwrap()));
        let second = block_on(run_search(&catalog, &generation, SearchQuery::parse("b").unwrap()));

        assert!(first.is_some());
        assert!(second.is_some());
        assert_eq!(catalog.searches(), vec!["a", "b"]);
    }

    #[test]
    fn test_apply_success_replaces_results() {
        let mut results = vec![album(1, "Kind of Blue")];

        let done = apply_outcome(
            Some(Ok(vec![album(2, "Bitches Brew"), album(3, "In a Silent Way")])),
            &mut results,
        );

        assert!(done);
        assert_eq!(results, vec![album(2, "Bitches Brew"), album(3, "In a Silent Way")]);
    }

    #[test]
    fn test_apply_empty_success_clears_results() {
        let mut results = vec![album(1, "Kind of Blue")];

        assert!(apply_outcome(Some(Ok(Vec::new())), &mut results));
        assert!(results.is_empty());
    }

    #[test]
    fn test_apply_error_keeps_results() {
        let mut results = vec![album(1, "Kind of Blue")];

        let done = apply_outcome(Some(Err(anyhow::Error::msg("boom"))), &mut results);

        assert!(done);
        assert_eq!(results, vec![album(1, "Kind of Blue")]);
    }

    #[test]
    fn test_apply_stale_changes_nothing() {
        let mut results = vec![album(1, "Kind of Blue")];

        let done = apply_outcome(None, &mut results);

        assert!(!done);
        assert_eq!(results, vec![album(1, "Kind of Blue")]);
    }

    #[test]
    fn test_blank_submission_sends_nothing() {
        let catalog = MockCatalog::with_search(vec![album(2, "Bitches Brew")]);
        let generation = RequestGeneration::default();
        let mut results = vec![album(1, "Kind of Blue")];

        for raw in ["", "   ", "\t\n"] {
            if let Some(query) = SearchQuery::parse(raw) {
                let outcome = block_on(run_search(&catalog, &generation, query));
                apply_outcome(outcome, &mut results);
            }
        }

        assert!(catalog.searches().is_empty());
        assert_eq!(results, vec![album(1, "Kind of Blue")]);
    }

    #[test]
    fn test_failed_search_after_success_keeps_results() {
        let generation = RequestGeneration::default();
        let mut results = Vec::new();

        let catalog = MockCatalog::with_search(vec![album(1, "Kind of Blue")]);
        let outcome = block_on(run_search(&catalog, &generation, SearchQuery::parse("blue").unwrap()));
        assert!(apply_outcome(outcome, &mut results));

        let catalog = MockCatalog::failing();
        let outcome = block_on(run_search(&catalog, &generation, SearchQuery::parse("brew").unwrap()));
        assert!(apply_outcome(outcome, &mut results));

        assert_eq!(results, vec![album(1, "Kind of Blue")]);
    }
}
