//! Statistics source abstraction
//!
//! The dashboard does not compute analytics. Everything the statistics views
//! show (other than a link's own click counter) comes through this trait, so a
//! real analytics backend can be plugged in without touching the views.

use std::sync::Arc;

/// A labelled value shown on a stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Trait for providing statistics to the views.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait StatsSource: Send + Sync {
    /// Aggregate metrics for the global statistics view
    fn overview(&self) -> Vec<Metric>;

    /// Windowed click metrics for a single short key
    fn key_windows(&self, key: &str) -> Vec<Metric>;
}

/// Fixed placeholder values.
///
/// None of these numbers are derived from the link collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderStats;

impl PlaceholderStats {
    pub fn arc() -> Arc<dyn StatsSource> {
        Arc::new(Self)
    }
}

impl StatsSource for PlaceholderStats {
    fn overview(&self) -> Vec<Metric> {
        vec![
            Metric::new("Total clicks", "1.2M"),
            Metric::new("Total links", "150"),
            Metric::new("Active links", "125"),
            Metric::new("Campaigns", "12"),
        ]
    }

    fn key_windows(&self, _key: &str) -> Vec<Metric> {
        vec![
            Metric::new("Clicks (24h)", "150"),
            Metric::new("Clicks (7 days)", "820"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_overview_is_fixed() {
        let stats = PlaceholderStats;
        let overview = stats.overview();
        assert_eq!(overview.len(), 4);
        assert_eq!(overview[0], Metric::new("Total clicks", "1.2M"));
        assert_eq!(stats.overview(), overview);
    }

    #[test]
    fn test_key_windows_ignore_key() {
        let stats = PlaceholderStats::arc();
        assert_eq!(stats.key_windows("/fb"), stats.key_windows("/tt"));
        assert_eq!(stats.key_windows("/fb")[1].value, "820");
    }
}
