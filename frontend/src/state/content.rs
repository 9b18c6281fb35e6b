use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

pub const FEATURES_PATH: &str = "/features";
pub const SPECS_PATH: &str = "/specs";

/// Reads JSON documents from the API.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, FetchError>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<Vec<T>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SpecCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// A feature as the showcase renders it, with the locally kept detail bullets.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
}

// Listed in catalogue order.
const FEATURE_DETAILS: &[(&str, &[&str])] = &[
    ("Hi-Res Audio", &[
        "24-bit / 96kHz playback",
        "Custom 40mm dynamic drivers",
        "LDAC and aptX HD support",
    ]),
    ("Active Noise Cancellation", &[
        "Hybrid feed-forward and feedback mics",
        "Adaptive mode follows your surroundings",
        "Transparency mode at a tap",
    ]),
    ("40H Battery Life", &[
        "30 hours with ANC on",
        "10 minutes of charge for 5 hours of play",
        "USB-C fast charging",
    ]),
    ("Crystal Clear Calls", &[
        "Six beamforming microphones",
        "Wind noise suppression",
        "Sidetone so you hear your own voice",
    ]),
    ("Cloud Comfort", &[
        "Memory foam ear cushions",
        "250g featherweight frame",
        "Pressure-relieving headband",
    ]),
    ("Spatial Audio", &[
        "Dynamic head tracking",
        "Personalised sound profile",
        "Works with Dolby Atmos content",
    ]),
];

/// Detail bullets for a feature, looked up by title. Unknown titles get none.
pub fn details_for(title: &str) -> Vec<String> {
    FEATURE_DETAILS
        .iter()
        .find(|(known, _)| *known == title)
        .map(|(_, details)| details.iter().map(|d| d.to_string()).collect())
        .unwrap_or_default()
}

pub fn attach_details(features: Vec<Feature>) -> Vec<FeatureItem> {
    features
        .into_iter()
        .map(|feature| FeatureItem {
            details: details_for(&feature.title),
            icon: feature.icon,
            title: feature.title,
            description: feature.description,
        })
        .collect()
}

/// Loading flag plus whatever the one-shot fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub loading: bool,
    pub items: Vec<T>,
}

impl<T> LoadState<T> {
    pub fn pending() -> Self {
        Self {
            loading: true,
            items: Vec::new(),
        }
    }

    pub fn settled(items: Vec<T>) -> Self {
        Self {
            loading: false,
            items,
        }
    }
}

fn decode_list<T: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<T>, FetchError> {
    let envelope: Envelope<T> =
        serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(envelope.data.unwrap_or_default())
}

/// Fetches the `data` list behind `path`. Any failure is logged and yields an
/// empty list; the page just shows nothing for that section.
pub async fn load_list<T, S>(source: &S, path: &str) -> LoadState<T>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
{
    let result = match source.fetch_json(path).await {
        Ok(value) => decode_list::<T>(value),
        Err(e) => Err(e),
    };
    match result {
        Ok(items) => LoadState::settled(items),
        Err(e) => {
            log::warn!("Error fetching {}: {}", path, e);
            LoadState::settled(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct StubSource {
        reply: Result<serde_json::Value, FetchError>,
        calls: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn new(reply: Result<serde_json::Value, FetchError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContentSource for StubSource {
        async fn fetch_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
            self.calls.borrow_mut().push(path.to_string());
            self.reply.clone()
        }
    }

    fn feature(title: &str) -> Feature {
        Feature {
            icon: "🎵".to_string(),
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn pending_state_is_loading_and_empty() {
        let state = LoadState::<Feature>::pending();
        assert!(state.loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn loads_features_from_data_field() {
        let source = StubSource::new(Ok(json!({
            "success": true,
            "data": [{"icon": "⚡", "title": "40H Battery Life", "description": "All day"}]
        })));
        let state: LoadState<Feature> = block_on(load_list(&source, FEATURES_PATH));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].title, "40H Battery Life");
        assert_eq!(*source.calls.borrow(), vec!["/features".to_string()]);
    }

    #[test]
    fn missing_data_field_means_empty_list() {
        let source = StubSource::new(Ok(json!({"success": true})));
        let state: LoadState<SpecCategory> = block_on(load_list(&source, SPECS_PATH));
        assert!(!state.loading);
        assert!(state.items.is_empty());

        let source = StubSource::new(Ok(json!({"data": null})));
        let state: LoadState<SpecCategory> = block_on(load_list(&source, SPECS_PATH));
        assert!(state.items.is_empty());
    }

    #[test]
    fn partial_items_degrade_to_defaults() {
        let source = StubSource::new(Ok(json!({"data": [{"category": "Audio"}]})));
        let state: LoadState<SpecCategory> = block_on(load_list(&source, SPECS_PATH));
        assert_eq!(state.items, vec![SpecCategory {
            category: "Audio".to_string(),
            items: Vec::new(),
        }]);
    }

    #[test]
    fn failures_settle_silently_with_nothing() {
        for failure in [
            Err(FetchError::Network("connection refused".to_string())),
            Err(FetchError::Status(500)),
            Err(FetchError::Timeout(10_000)),
            Ok(json!("<html>not json</html>")),
            Ok(json!({"data": "not a list"})),
        ] {
            let source = StubSource::new(failure);
            let state: LoadState<Feature> = block_on(load_list(&source, FEATURES_PATH));
            assert!(!state.loading);
            assert!(state.items.is_empty());
        }
    }

    #[test]
    fn details_follow_catalogue_order_and_run_out() {
        let mut features: Vec<Feature> = FEATURE_DETAILS
            .iter()
            .map(|(title, _)| feature(title))
            .collect();
        features.push(feature("Wireless Charging"));

        let items = attach_details(features);
        assert_eq!(items.len(), FEATURE_DETAILS.len() + 1);
        for (index, (_, expected)) in FEATURE_DETAILS.iter().enumerate() {
            let expected: Vec<String> = expected.iter().map(|d| d.to_string()).collect();
            assert_eq!(items[index].details, expected);
        }
        assert!(items[FEATURE_DETAILS.len()].details.is_empty());
    }

    #[test]
    fn details_survive_reordering() {
        let items = attach_details(vec![feature("Spatial Audio"), feature("Hi-Res Audio")]);
        assert_eq!(items[0].details, details_for("Spatial Audio"));
        assert_eq!(items[1].details[0], "24-bit / 96kHz playback");
    }
}
