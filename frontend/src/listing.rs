use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::http::Transport;
use crate::models::Place;

/// State of a page that fetches its data on mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// The same state with the payload dropped.
    pub fn status(&self) -> LoadState<()> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(_) => LoadState::Ready(()),
            LoadState::Failed(msg) => LoadState::Failed(msg.clone()),
        }
    }
}

/// Places whose title or description contains `query`, ignoring case.
/// An empty query keeps everything.
pub fn filter_places(places: &[Place], query: &str) -> Vec<Place> {
    let needle = query.to_lowercase();
    places
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub async fn load_places<T: Transport>(api: &ApiClient<T>) -> LoadState<Vec<Place>> {
    match api.list_places().await {
        Ok(places) => LoadState::Ready(places),
        Err(e) => {
            log::error!("Failed to fetch places: {e}");
            LoadState::Failed("Error fetching places data".to_string())
        }
    }
}

pub async fn load_place<T: Transport>(api: &ApiClient<T>, id: &str) -> LoadState<Place> {
    match api.get_place(id).await {
        Ok(place) => LoadState::Ready(place),
        Err(e) => {
            log::error!("Failed to fetch place {id}: {e}");
            let message = match e {
                ApiError::Status { status: 404, .. } => "This place does not exist.",
                _ => "Could not load this place.",
            };
            LoadState::Failed(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;

    fn place(id: &str, title: &str, description: &str) -> Place {
        serde_json::from_value(serde_json::json!({
            "id": id, "title": title, "description": description
        }))
        .unwrap()
    }

    fn sample() -> Vec<Place> {
        vec![
            place("1", "Seaside Loft", "Ocean view, two beds"),
            place("2", "Mountain Cabin", "Cosy wooden cabin near the SEA of trees"),
            place("3", "City Studio", "Downtown, close to metro"),
        ]
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_query_keeps_everything() {
        assert_eq!(filter_places(&sample(), ""), sample());
    }

    #[test]
    fn matches_title_or_description_case_insensitively() {
        assert_eq!(ids(&filter_places(&sample(), "sea")), vec!["1", "2"]);
        assert_eq!(ids(&filter_places(&sample(), "METRO")), vec!["3"]);
        assert_eq!(ids(&filter_places(&sample(), "cabin")), vec!["2"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_places(&sample(), "castle").is_empty());
    }

    #[test]
    fn filter_is_a_subset_preserving_order() {
        let all = sample();
        for query in ["", "o", "loft", "xyz", " "] {
            let filtered = filter_places(&all, query);
            let q = query.to_lowercase();
            let expected: Vec<_> = all
                .iter()
                .filter(|p| {
                    p.title.to_lowercase().contains(&q) || p.description.to_lowercase().contains(&q)
                })
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "query {query:?}");
        }
    }

    #[tokio::test]
    async fn collection_failure_is_terminal() {
        let stub = StubTransport::new().fail("Network error: refused");
        let api = ApiClient::new("http://api", stub.clone());

        let state = load_places(&api).await;

        assert_eq!(state, LoadState::Failed("Error fetching places data".into()));
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn detail_failure_is_an_error_not_loading() {
        let stub = StubTransport::new()
            .reply(500, "")
            .reply(200, r#"{"id":"p1","title":"Loft"}"#);
        let api = ApiClient::new("http://api", stub.clone());

        let first = load_place(&api, "p1").await;
        assert_eq!(first, LoadState::Failed("Could not load this place.".into()));

        // retry
        let second = load_place(&api, "p1").await;
        assert!(matches!(second, LoadState::Ready(ref p) if p.title == "Loft"));
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn detail_not_found_has_its_own_message() {
        let stub = StubTransport::new().reply(404, r#"{"error":"Place not found"}"#);
        let api = ApiClient::new("http://api", stub);
        assert_eq!(
            load_place(&api, "gone").await,
            LoadState::Failed("This place does not exist.".into())
        );
    }
}
