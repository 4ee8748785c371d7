use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub series: SeriesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherConfig {
    /// Similarity cutoff for attaching subtitles/dubs to a video.
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Maximum number of undoable batches kept; the oldest entry is evicted
    /// silently on overflow.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,

    /// Location of the persisted undo history (supports `~`).
    #[serde(default = "default_history_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeriesConfig {
    /// Default naming template for series mode.
    #[serde(default = "default_series_template")]
    pub template: String,
}

fn default_min_similarity() -> f64 {
    renomiq_series::DEFAULT_MIN_SIMILARITY
}

fn default_history_capacity() -> usize {
    10
}

fn default_history_path() -> String {
    "~/.local/share/renomiq/history.json".to_string()
}

fn default_series_template() -> String {
    renomiq_series::pattern::DEFAULT_TEMPLATE.to_string()
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_similarity: default_min_similarity(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
            path: default_history_path(),
        }
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            template: default_series_template(),
        }
    }
}
