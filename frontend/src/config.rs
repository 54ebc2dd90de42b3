use crate::error::Result;
use serde::Deserialize;
use std::str::FromStr;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "campusiq-config";

/// Page tunables. Every field has a default so a partial JSON block is enough.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub product_name: String,
    pub log_level: String,
    pub navbar_scroll_threshold: f64,
    pub anchor_offset: f64,
    pub init_delay_ms: u32,
    pub counter_tick_ms: u32,
    pub counter_steps: u32,
    pub map_reveal_base_ms: u32,
    pub map_reveal_step_ms: u32,
    pub alert_fade_ms: u32,
    pub clock_interval_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            product_name: "CampusIQ".to_string(),
            log_level: "info".to_string(),
            navbar_scroll_threshold: 100.0,
            anchor_offset: 80.0,
            init_delay_ms: 100,
            counter_tick_ms: 30,
            counter_steps: 50,
            map_reveal_base_ms: 300,
            map_reveal_step_ms: 200,
            alert_fade_ms: 300,
            clock_interval_ms: 1000,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Unknown level names fall back to info.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }

    pub fn with_product(&self, prefix: &str) -> String {
        format!("{} {}", prefix, self.product_name)
    }
}

/// Reads the embedded config block. A page without one gets the defaults.
pub fn load() -> Result<PageConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw),
        _ => Ok(PageConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{"product_name": "GridIQ", "anchor_offset": 64}"#).unwrap();
        assert_eq!(config.product_name, "GridIQ");
        assert_eq!(config.anchor_offset, 64.0);
        assert_eq!(config.navbar_scroll_threshold, 100.0);
        assert_eq!(config.counter_steps, 50);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = PageConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::PageError::Json(_)));
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut config = PageConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn product_labels() {
        let config = PageConfig::default();
        assert_eq!(config.with_product("With"), "With CampusIQ");
    }
}
