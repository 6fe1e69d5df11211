//! Projection settings.

use serde::{Deserialize, Serialize};

use crate::gantt::DurationUnit;

/// Settings for one projection run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Unit every `duration` in the document is expressed in.
    pub duration_unit: DurationUnit,
    /// Indent the serialized JSON.
    pub pretty: bool,
}

impl ProjectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duration unit.
    pub fn with_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Enables or disables indented output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ProjectionConfig::new();
        assert_eq!(config.duration_unit, DurationUnit::CalendarDay);
        assert!(!config.pretty);
    }

    #[test]
    fn test_config_builder() {
        let config = ProjectionConfig::new()
            .with_duration_unit(DurationUnit::WorkingHour)
            .with_pretty(true);
        assert_eq!(config.duration_unit, DurationUnit::WorkingHour);
        assert!(config.pretty);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: ProjectionConfig =
            serde_json::from_str(r#"{"duration_unit":"working-hour"}"#).unwrap();
        assert_eq!(config.duration_unit, DurationUnit::WorkingHour);
        assert!(!config.pretty);
    }
}
