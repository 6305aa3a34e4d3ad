use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationRequest {
    pub season: String,
    pub health_condition: String,
    pub budget: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItineraryRequest {
    pub destination: String,
    pub duration: String,
    #[serde(default)]
    pub mobility: String,
    #[serde(default)]
    pub health_focus: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChecklistRequest {
    pub destination: String,
    pub duration: String,
    #[serde(default)]
    pub special_needs: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub health_focus: Vec<String>,
}

impl ChecklistRequest {
    /// Folds the departure city and any health-focus selections into one
    /// free-text clause for the prompt. This backs the "continue to checklist"
    /// flow, where the itinerary form hands its inputs straight to the
    /// checklist generator.
    pub fn special_needs_clause(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.origin.trim().is_empty() {
            parts.push(format!("Departure city: {}.", self.origin.trim()));
        }
        if !self.special_needs.trim().is_empty() {
            parts.push(self.special_needs.trim().to_string());
        }
        if !self.health_focus.is_empty() {
            parts.push(self.health_focus.join(", "));
        }
        if parts.is_empty() {
            "In good health, a routine trip.".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoryRequest {
    pub custom_input: String,
    #[serde(default)]
    pub photo_names: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VideoRequest {
    pub image_paths: Vec<String>,
    #[serde(default)]
    pub audio_path: Option<String>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub duration_per_image: Option<f32>,
    #[serde(default)]
    pub transition_duration: Option<f32>,
    #[serde(default)]
    pub animation: Option<String>,
}
