//! The closed set of rename rules and their assembly from caller options.

use serde::{Deserialize, Serialize};

/// Spelling style for the season/episode part of a series rule:
/// `S01`/`E05` (short) or `Season 1`/`Episode 5` (full words).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStyle {
    #[default]
    Short,
    Full,
}

/// One rename rule.
///
/// The rule set is closed and its evaluation order is fixed (rename, then
/// search-replace, prefix, suffix, numbering, series) regardless of the
/// order rules arrive in. Dispatch is a static `match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RenameRule {
    /// Replace the base name entirely. With `keep_extension: false` the
    /// original extension is dropped from the reassembled name.
    Rename {
        new_name: String,
        keep_extension: bool,
    },
    /// Literal (non-regex) substring replace-all; a no-op when `search` is
    /// empty.
    SearchReplace { search: String, replace: String },
    /// Prepend a fixed string.
    Prefix { value: String },
    /// Append a fixed string.
    Suffix { value: String },
    /// Append `_<index>` with the 1-based batch index, zero-padded to
    /// `width` (width ≤ 1 means no padding).
    Numbering { width: usize },
    /// Rebuild the name as `"<series> <SeasonPart> <EpisodePart>"`.
    Series {
        series_name: String,
        include_season: bool,
        /// Re-extract the episode number from the original filename instead
        /// of numbering sequentially.
        use_existing_episode_numbers: bool,
        season_number: u32,
        start_episode: u32,
        season_prefix: WordStyle,
        episode_prefix: WordStyle,
        season_number_width: usize,
        episode_number_width: usize,
    },
}

impl RenameRule {
    /// Position of this rule kind in the fixed application order.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            RenameRule::Rename { .. } => 0,
            RenameRule::SearchReplace { .. } => 1,
            RenameRule::Prefix { .. } => 2,
            RenameRule::Suffix { .. } => 3,
            RenameRule::Numbering { .. } => 4,
            RenameRule::Series { .. } => 5,
        }
    }
}

/// Series-mode options for [`RenameOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOptions {
    pub series_name: String,
    pub include_season: bool,
    pub use_existing_episode_numbers: bool,
    pub season_number: u32,
    pub start_episode: u32,
    pub season_prefix: WordStyle,
    pub episode_prefix: WordStyle,
    pub season_number_width: usize,
    pub episode_number_width: usize,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            series_name: String::new(),
            include_season: true,
            use_existing_episode_numbers: false,
            season_number: 1,
            start_episode: 1,
            season_prefix: WordStyle::Short,
            episode_prefix: WordStyle::Short,
            season_number_width: 2,
            episode_number_width: 2,
        }
    }
}

/// The flat set of options a caller (UI or CLI) exposes; assembled into the
/// rule list with [`RenameOptions::to_rules`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameOptions {
    pub new_name: Option<String>,
    pub keep_extension: Option<bool>,
    pub search: Option<String>,
    pub replace: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub numbering: bool,
    pub number_width: usize,
    pub series: Option<SeriesOptions>,
}

impl RenameOptions {
    /// Assemble the rule list in the fixed declared order. Empty or missing
    /// options contribute no rule.
    pub fn to_rules(&self) -> Vec<RenameRule> {
        let mut rules = Vec::new();

        if let Some(new_name) = self.new_name.as_deref() {
            let trimmed = new_name.trim();
            if !trimmed.is_empty() {
                rules.push(RenameRule::Rename {
                    new_name: trimmed.to_string(),
                    keep_extension: self.keep_extension.unwrap_or(true),
                });
            }
        }

        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                rules.push(RenameRule::SearchReplace {
                    search: search.to_string(),
                    replace: self.replace.clone().unwrap_or_default(),
                });
            }
        }

        if let Some(prefix) = self.prefix.as_deref() {
            if !prefix.is_empty() {
                rules.push(RenameRule::Prefix {
                    value: prefix.to_string(),
                });
            }
        }

        if let Some(suffix) = self.suffix.as_deref() {
            if !suffix.is_empty() {
                rules.push(RenameRule::Suffix {
                    value: suffix.to_string(),
                });
            }
        }

        if self.numbering {
            rules.push(RenameRule::Numbering {
                width: self.number_width,
            });
        }

        if let Some(series) = &self.series {
            rules.push(RenameRule::Series {
                series_name: series.series_name.clone(),
                include_season: series.include_season,
                use_existing_episode_numbers: series.use_existing_episode_numbers,
                season_number: series.season_number,
                start_episode: series.start_episode,
                season_prefix: series.season_prefix,
                episode_prefix: series.episode_prefix,
                season_number_width: series.season_number_width,
                episode_number_width: series.episode_number_width,
            });
        }

        rules
    }
}
