use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{color::Rgb, grid::Grid};

/// One published capture: the downsampled grid and the statistics the
/// pipeline computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyData {
    /// Capture time, `YYYY-MM-DD_HH-MM-SS` in Berlin local time.
    pub timestamp: String,
    #[serde(default)]
    pub grid: Grid,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub average_rgb: Rgb,
    pub hex_color: String,
    pub dominant_color: String,
    pub brightness_percent: f64,
    #[serde(default)]
    pub color_variety: f64,
    /// Hue in degrees, saturation and value in percent.
    pub hsv: [f64; 3],
    pub mood: String,
    pub greyness: Greyness,
    #[serde(default)]
    pub color_distribution: BTreeMap<String, f64>,
    pub temperature_feel: String,
    pub time_of_day_feel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorfulness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chroma: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greyness {
    pub avg_greyness_level: f64,
    pub grey_percentage: f64,
    /// Berlin Grey Index, 0 (very colorful) to 100 (classic Berlin grey).
    pub berlin_grey_index: f64,
    pub description: String,
}

impl Stats {
    pub fn hue(&self) -> f64 {
        self.hsv[0]
    }

    pub fn saturation(&self) -> f64 {
        self.hsv[1]
    }

    pub fn value(&self) -> f64 {
        self.hsv[2]
    }

    /// Published colorfulness, or the value derived from the average color.
    /// A published zero counts as missing, like older snapshots that never
    /// carried the field.
    pub fn colorfulness(&self) -> f64 {
        self.colorfulness
            .filter(|v| *v != 0.0)
            .unwrap_or_else(|| self.average_rgb.colorfulness())
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
            .filter(|v| *v != 0.0)
            .unwrap_or_else(|| self.average_rgb.chroma())
    }

    /// Distribution buckets, largest share first. Ties keep name order.
    pub fn sorted_distribution(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = self
            .color_distribution
            .iter()
            .map(|(name, share)| (name.clone(), *share))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_JSON: &str = r##"{
    "timestamp": "2025-03-16_16-21-35",
    "grid": [[[120, 125, 130], [118, 121, 129]], [[90, 95, 101], [88, 90, 99]]],
    "stats": {
        "average_rgb": [104, 107, 114],
        "hex_color": "#686b72",
        "dominant_color": "gray",
        "brightness_percent": 42.1,
        "color_variety": 14.2,
        "hsv": [222, 9, 45],
        "mood": "neutral",
        "greyness": {
            "avg_greyness_level": 98.7,
            "grey_percentage": 100.0,
            "berlin_grey_index": 99.4,
            "description": "classic Berlin grey"
        },
        "color_distribution": {"gray": 87.5, "black": 12.5},
        "temperature_feel": "cool",
        "time_of_day_feel": "evening/dawn",
        "camera_id": "ignored"
    }
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_published_snapshot() {
        let data: SkyData = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(data.timestamp, "2025-03-16_16-21-35");
        assert_eq!((data.grid.columns(), data.grid.rows()), (2, 2));
        assert_eq!(data.stats.average_rgb, Rgb(104, 107, 114));
        assert_eq!(data.stats.saturation(), 9.0);
        assert_eq!(data.stats.greyness.berlin_grey_index, 99.4);
        assert_eq!(data.stats.colorfulness, None);
    }

    #[test]
    fn derived_metrics_fall_back_to_average_color() {
        let mut data: SkyData = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(data.stats.chroma(), 10.0);
        assert!((data.stats.colorfulness() - Rgb(104, 107, 114).colorfulness()).abs() < 1e-9);

        data.stats.chroma = Some(33.0);
        data.stats.colorfulness = Some(0.0);
        assert_eq!(data.stats.chroma(), 33.0);
        assert!(data.stats.colorfulness() > 0.0);
    }

    #[test]
    fn distribution_sorts_descending() {
        let mut data: SkyData = serde_json::from_str(SAMPLE_JSON).unwrap();
        data.stats.color_distribution.insert("blue".into(), 40.0);
        let names: Vec<_> = data
            .stats
            .sorted_distribution()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["gray", "blue", "black"]);
    }

    #[test]
    fn history_is_a_plain_array() {
        let history: Vec<SkyData> =
            serde_json::from_str(&format!("[{SAMPLE_JSON}, {SAMPLE_JSON}]")).unwrap();
        assert_eq!(history.len(), 2);
    }
}
