use crate::speed::{LabelKey, SpeedLevel};
use std::collections::HashMap;

pub trait LabelResolver {
    /// Display text for `key`. Borrowed so that drawing never allocates.
    fn resolve(&self, key: LabelKey) -> &str;

    fn label_for(&self, level: SpeedLevel) -> &str {
        self.resolve(level.label_key())
    }
}

/// Label table keyed by [`LabelKey`] text, seeded with English defaults.
#[derive(Debug, Clone)]
pub struct Labels {
    table: HashMap<String, String>,
}

impl Default for Labels {
    fn default() -> Self {
        let table = SpeedLevel::ALL
            .iter()
            .map(|level| (level.label_key().to_string(), level.to_string()))
            .collect();
        Self { table }
    }
}

impl Labels {
    /// Defaults overlaid with `overrides`; keys that match no level are ignored.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut labels = Self::default();
        for (key, text) in overrides {
            match labels.table.get_mut(key) {
                Some(slot) => *slot = text.clone(),
                None => log::warn!("Ignoring unknown label key '{}'", key),
            }
        }
        labels
    }
}

impl LabelResolver for Labels {
    fn resolve(&self, key: LabelKey) -> &str {
        self.table
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or(key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = Labels::default();
        assert_eq!(labels.label_for(SpeedLevel::Off), "off");
        assert_eq!(labels.label_for(SpeedLevel::Low), "low");
        assert_eq!(labels.label_for(SpeedLevel::Medium), "medium");
        assert_eq!(labels.label_for(SpeedLevel::High), "high");
    }

    #[test]
    fn test_overrides_replace_known_keys_only() {
        let overrides = HashMap::from([
            ("fan_high".to_string(), "MAX".to_string()),
            ("fan_turbo".to_string(), "turbo".to_string()),
        ]);
        let labels = Labels::with_overrides(&overrides);
        assert_eq!(labels.label_for(SpeedLevel::High), "MAX");
        assert_eq!(labels.label_for(SpeedLevel::Low), "low");
        assert_eq!(labels.resolve(LabelKey::new("fan_turbo")), "fan_turbo");
    }

    #[test]
    fn test_missing_key_resolves_to_itself() {
        let labels = Labels::default();
        assert_eq!(labels.resolve(LabelKey::new("fan_reverse")), "fan_reverse");
    }
}
