use serde::{Deserialize, Serialize};

/// Standard envelope wrapped around every JSON response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn message_with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpecCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthInfo {
    pub version: String,
    pub status: String,
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn spec(category: &str, items: &[&str]) -> SpecCategory {
    SpecCategory {
        category: category.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

// Order matters: the frontend detail table lists features in this order.
pub fn product_features() -> Vec<Feature> {
    vec![
        feature("🎵", "Hi-Res Audio", "Experience studio-quality sound with high-resolution audio support"),
        feature("🔇", "Active Noise Cancellation", "Block out the world with advanced ANC technology"),
        feature("⚡", "40H Battery Life", "All-day listening with up to 40 hours of playtime"),
        feature("🎤", "Crystal Clear Calls", "AI-powered noise reduction for perfect call quality"),
        feature("☁️", "Cloud Comfort", "Premium memory foam cushions for all-day comfort"),
        feature("🌈", "Spatial Audio", "Immersive 3D audio with head tracking technology"),
    ]
}

pub fn product_specs() -> Vec<SpecCategory> {
    vec![
        spec("Audio", &[
            "Frequency Response: 20Hz - 20kHz",
            "Impedance: 32 Ohm",
            "Driver Size: 40mm",
            "THD: <0.1%",
        ]),
        spec("Battery", &[
            "Playtime: 40 hours (ANC off)",
            "Playtime: 30 hours (ANC on)",
            "Charging: USB-C Fast Charge",
            "Charge Time: 2 hours (full)",
            "Quick Charge: 10 min = 5 hours",
        ]),
        spec("Connectivity", &[
            "Bluetooth 5.3",
            "Range: 10 meters",
            "Multipoint Connection",
            "Codecs: AAC, SBC, aptX HD",
        ]),
        spec("Physical", &[
            "Weight: 250g",
            "Foldable Design",
            "Colors: Black, Silver, Rose Gold",
            "Materials: Aluminum, Leather",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::<()>::failure("nope")).unwrap();
        assert_eq!(body, serde_json::json!({"success": false, "message": "nope"}));
    }

    #[test]
    fn data_envelope_omits_message() {
        let body = serde_json::to_value(ApiResponse::data(vec![1, 2])).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn catalogue_has_every_spec_category() {
        let categories: Vec<String> = product_specs().into_iter().map(|s| s.category).collect();
        assert_eq!(categories, vec!["Audio", "Battery", "Connectivity", "Physical"]);
        assert_eq!(product_features().len(), 6);
    }
}
