//! OpenWeatherMap API response models

use serde::Deserialize;

/// The parts of the current-weather payload this system consumes
///
/// The real payload carries many more fields; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Resolved place name
    pub name: String,
    /// Main readings block
    pub main: MainReadings,
    /// Condition list; the first entry's description is used
    pub weather: Vec<ConditionEntry>,
}

/// The `main` block of the response
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Current temperature in the requested units (metric here)
    pub temp: f64,
}

/// One entry of the `weather` condition list
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    /// Short textual description, e.g. "scattered clouds"
    pub description: String,
}

/// A mapped observation ready for the application layer
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Place name from the provider
    pub location: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// First condition description
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_payload() {
        let json = r#"{
            "name": "Berlin",
            "main": {"temp": 21.4, "humidity": 60},
            "weather": [{"id": 802, "description": "scattered clouds", "icon": "03d"}]
        }"#;
        let response: CurrentWeatherResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.name, "Berlin");
        assert!((response.main.temp - 21.4).abs() < f64::EPSILON);
        assert_eq!(response.weather[0].description, "scattered clouds");
    }

    #[test]
    fn rejects_payload_without_main_block() {
        let json = r#"{"name": "Berlin", "weather": []}"#;
        let result = serde_json::from_str::<CurrentWeatherResponse>(json);
        assert!(result.is_err());
    }
}
