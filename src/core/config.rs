//! Configuration of the zoom toggle
//!
//! Every field has a default matching the markup the component was written
//! for, so hosts usually only override the magnification or the selectors.

use crate::core::constants::{
    DEFAULT_CONTAINER_SELECTOR, DEFAULT_IMAGE_SELECTOR, DEFAULT_MAGNIFICATION,
};
use crate::{Result, ZoomError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Scale factor of the magnified state
    pub magnification: f64,
    /// Selector of the element listening for presses
    pub container_selector: String,
    /// Selector of the image, resolved inside the container
    pub image_selector: String,
    /// Ignore presses from buttons other than the primary one
    pub primary_button_only: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            magnification: DEFAULT_MAGNIFICATION,
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            image_selector: DEFAULT_IMAGE_SELECTOR.to_string(),
            primary_button_only: true,
        }
    }
}

impl ZoomConfig {
    /// Parses and validates a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_magnification(mut self, magnification: f64) -> Self {
        self.magnification = magnification;
        self
    }

    pub fn with_selectors(
        mut self,
        container_selector: impl Into<String>,
        image_selector: impl Into<String>,
    ) -> Self {
        self.container_selector = container_selector.into();
        self.image_selector = image_selector.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.magnification.is_finite() || self.magnification <= 1.0 {
            return Err(ZoomError::InvalidConfig(format!(
                "magnification must be a finite factor above 1, got {}",
                self.magnification
            )));
        }
        if self.container_selector.trim().is_empty() {
            return Err(ZoomError::InvalidConfig(
                "container selector is empty".to_string(),
            ));
        }
        if self.image_selector.trim().is_empty() {
            return Err(ZoomError::InvalidConfig("image selector is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ZoomConfig::default();
        assert_eq!(config.magnification, 3.0);
        assert_eq!(config.container_selector, ".zoom-container");
        assert_eq!(config.image_selector, "img");
        assert!(config.primary_button_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ZoomConfig::from_json(r#"{ "magnification": 2.0 }"#).unwrap();
        assert_eq!(config.magnification, 2.0);
        assert_eq!(config.container_selector, ".zoom-container");

        let config = ZoomConfig::from_json("{}").unwrap();
        assert_eq!(config, ZoomConfig::default());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            ZoomConfig::from_json("{ magnification: }"),
            Err(ZoomError::Serialization(_))
        ));
        assert!(matches!(
            ZoomConfig::from_json(r#"{ "magnification": 1.0 }"#),
            Err(ZoomError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validation() {
        for magnification in [1.0, 0.5, -3.0, f64::NAN, f64::INFINITY] {
            let config = ZoomConfig::default().with_magnification(magnification);
            assert!(config.validate().is_err(), "{magnification} accepted");
        }

        let config = ZoomConfig::default().with_selectors("  ", "img");
        assert!(config.validate().is_err());
        let config = ZoomConfig::default().with_selectors(".gallery", "");
        assert!(config.validate().is_err());
        let config = ZoomConfig::default().with_selectors(".gallery", "img.hero");
        assert!(config.validate().is_ok());
    }
}
