//! Naming-pattern templates for series mode.
//!
//! A template is a plain string with placeholders from the fixed set
//! `{series}`, `{season}`, `{episode}`, `{sxe}`, `{xsep}`. Substitution is
//! textual and order-independent; the original extension (and, for
//! subtitles, the detected language segment) is re-appended afterwards so it
//! survives the rename.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use renomiq_parser::episode::{format_sxe, format_xsep, pad_episode};
use renomiq_parser::{ClassifiedFile, EpisodeInfo, MediaType};
use serde::{Deserialize, Serialize};

use crate::group::FileGroup;

/// Default template used when the caller provides none.
pub const DEFAULT_TEMPLATE: &str = "{series} - S{season}E{episode}";

/// Series metadata a template is expanded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub name: String,
    pub season: u32,
    pub start_episode: u32,
    pub template: String,
}

impl Default for SeriesMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            season: 1,
            start_episode: 1,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// A selectable naming pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPattern {
    pub id: String,
    pub label: String,
    pub template: String,
    pub is_custom: bool,
}

impl NamingPattern {
    fn builtin(id: &str, label: &str, template: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            template: template.to_string(),
            is_custom: false,
        }
    }

    /// Create a custom pattern with a deterministic id derived from the
    /// label.
    pub fn custom(label: &str, template: &str) -> Self {
        let slug: String = label
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        Self {
            id: format!("custom-{slug}"),
            label: label.to_string(),
            template: template.to_string(),
            is_custom: true,
        }
    }
}

/// The built-in pattern table.
pub fn predefined_patterns() -> Vec<NamingPattern> {
    vec![
        NamingPattern::builtin("sxe-dash", "Series - S01E05", "{series} - S{season}E{episode}"),
        NamingPattern::builtin("sxe-dot", "Series.S01E05", "{series}.S{season}E{episode}"),
        NamingPattern::builtin("sxe-space", "Series S01E05", "{series} S{season}E{episode}"),
        NamingPattern::builtin("xsep", "Series - 1x05", "{series} - {season}x{episode}"),
        NamingPattern::builtin("episode-only", "Series - E05", "{series} - E{episode}"),
        NamingPattern::builtin("simple", "Series 05", "{series} {episode}"),
    ]
}

/// Look up a built-in pattern by id.
pub fn pattern_by_id(id: &str) -> Option<NamingPattern> {
    predefined_patterns().into_iter().find(|p| p.id == id)
}

static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^}]+)\}").expect("Failed to create placeholder pattern")
});

/// Expand a template for one file.
pub fn expand(
    template: &str,
    metadata: &SeriesMetadata,
    episode: &EpisodeInfo,
    file: &ClassifiedFile,
) -> String {
    let season = format!("{:02}", metadata.season);
    let episode_str = pad_episode(episode.episode, 2);
    let sxe = format_sxe(Some(metadata.season), episode.episode);
    let xsep = format_xsep(Some(metadata.season), episode.episode);

    let mut result = template
        .replace("{series}", &metadata.name)
        .replace("{season}", &season)
        .replace("{episode}", &episode_str)
        .replace("{sxe}", &sxe)
        .replace("{xsep}", &xsep);

    let ext = &file.entry.extension;
    if !ext.is_empty() {
        // Keep the language segment of subtitles next to the extension.
        if file.media_type == MediaType::Subtitle {
            if let Some(language) = &file.language {
                result = format!("{result}.{language}.{ext}");
                return result;
            }
        }
        result = format!("{result}.{ext}");
    }

    result
}

/// Validate a custom template.
///
/// Returns a human-readable message for empty templates, templates with
/// characters that cannot appear in file names, and templates without a
/// single placeholder. Never panics.
pub fn validate_template(template: &str) -> Result<(), String> {
    if template.trim().is_empty() {
        return Err("template must not be empty".to_string());
    }

    if template
        .chars()
        .any(|c| matches!(c, '<' | '>' | ':' | '"' | '\\' | '|' | '?' | '*'))
    {
        return Err("template contains characters not allowed in file names".to_string());
    }

    if !RE_PLACEHOLDER.is_match(template) {
        return Err("template needs at least one placeholder, e.g. {series}".to_string());
    }

    Ok(())
}

/// List the placeholders used by a template.
pub fn placeholders_in(template: &str) -> Vec<String> {
    RE_PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Per-file preview inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePreview {
    pub original: String,
    pub new_name: String,
}

/// Pattern preview for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPreview {
    pub group_id: String,
    pub original_video_name: String,
    pub new_video_name: String,
    pub subtitle_previews: Vec<FilePreview>,
    pub dub_previews: Vec<FilePreview>,
    pub has_conflict: bool,
}

/// Expand the metadata's template over every group.
///
/// A group conflicts when its planned video name (case-insensitive) was
/// already produced by an earlier group.
pub fn preview_groups(groups: &[FileGroup], metadata: &SeriesMetadata) -> Vec<GroupPreview> {
    let mut used_names: HashSet<String> = HashSet::new();
    let mut results = Vec::with_capacity(groups.len());

    for group in groups {
        let video_name = expand(&metadata.template, metadata, &group.episode, &group.video);

        let subtitle_previews = group
            .subtitles
            .iter()
            .map(|sub| FilePreview {
                original: sub.name().to_string(),
                new_name: expand(&metadata.template, metadata, &group.episode, sub),
            })
            .collect();

        let dub_previews = group
            .dubs
            .iter()
            .map(|dub| FilePreview {
                original: dub.name().to_string(),
                new_name: expand(&metadata.template, metadata, &group.episode, dub),
            })
            .collect();

        let has_conflict = !used_names.insert(video_name.to_lowercase());

        results.push(GroupPreview {
            group_id: group.id.clone(),
            original_video_name: group.video.name().to_string(),
            new_video_name: video_name,
            subtitle_previews,
            dub_previews,
            has_conflict,
        });
    }

    results
}

/// Guess series metadata from built groups: name from the first video,
/// season and start episode from the minima across groups.
pub fn detect_metadata(groups: &[FileGroup]) -> SeriesMetadata {
    let mut metadata = SeriesMetadata::default();

    let Some(first) = groups.first() else {
        return metadata;
    };

    if let Some(name) =
        renomiq_parser::episode::detect_series_name(&[first.video.name()])
    {
        metadata.name = name;
    }

    metadata.season = groups
        .iter()
        .filter_map(|g| g.episode.season)
        .min()
        .unwrap_or(1);
    metadata.start_episode = groups
        .iter()
        .map(|g| g.episode.episode)
        .min()
        .unwrap_or(1);

    metadata
}

/// Renumber groups sequentially from `start_episode`, ordered by their
/// current episode number.
pub fn renumber_groups(groups: &[FileGroup], start_episode: u32) -> Vec<FileGroup> {
    let mut sorted: Vec<FileGroup> = groups.to_vec();
    sorted.sort_by(|a, b| a.cmp_by_episode(b));

    for (index, group) in sorted.iter_mut().enumerate() {
        group.episode.episode = start_episode + index as u32;
    }

    sorted
}
