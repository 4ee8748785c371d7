//! Preview construction: run the rule pipeline over a batch and flag
//! colliding targets.

use std::collections::HashMap;

use renomiq_common::{FileEntry, RenamePair};
use renomiq_parser::episode;
use serde::{Deserialize, Serialize};

use crate::rule::{RenameRule, WordStyle};

/// One preview row per input file, order preserving.
///
/// `new_name`/`new_path` are `None` when the pipeline produced no change.
/// Conflicted rows stay visible; callers must exclude them before applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub path: String,
    pub old_name: String,
    pub new_name: Option<String>,
    pub new_path: Option<String>,
    pub changed: bool,
    pub conflict: bool,
}

fn pad_number(value: usize, width: usize) -> String {
    if width <= 1 {
        value.to_string()
    } else {
        format!("{value:0width$}")
    }
}

/// Split a name into base and extension at the last dot. A dot at index 0
/// (dotfile) does not count as an extension separator.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Swap the last segment of `path` for `new_name`.
fn replace_last_segment(path: &str, new_name: &str) -> String {
    match path.rfind('/') {
        Some(idx) => format!("{}{}", &path[..=idx], new_name),
        None => new_name.to_string(),
    }
}

fn apply_rule(
    base: &mut String,
    ext: &mut String,
    rule: &RenameRule,
    index: usize,
    original_name: &str,
) {
    match rule {
        RenameRule::Rename {
            new_name,
            keep_extension,
        } => {
            *base = new_name.clone();
            if !keep_extension {
                ext.clear();
            }
        }
        RenameRule::SearchReplace { search, replace } => {
            if !search.is_empty() {
                *base = base.replace(search.as_str(), replace);
            }
        }
        RenameRule::Prefix { value } => {
            base.insert_str(0, value);
        }
        RenameRule::Suffix { value } => {
            base.push_str(value);
        }
        RenameRule::Numbering { width } => {
            base.push('_');
            base.push_str(&pad_number(index + 1, *width));
        }
        RenameRule::Series {
            series_name,
            include_season,
            use_existing_episode_numbers,
            season_number,
            start_episode,
            season_prefix,
            episode_prefix,
            season_number_width,
            episode_number_width,
        } => {
            let episode_number = if *use_existing_episode_numbers {
                episode::extract(original_name)
                    .map(|info| info.episode)
                    .unwrap_or(*start_episode)
            } else {
                start_episode + index as u32
            };

            let season_part = if *include_season {
                match season_prefix {
                    WordStyle::Full => format!("Season {season_number}"),
                    WordStyle::Short => format!(
                        "S{}",
                        pad_number(*season_number as usize, *season_number_width)
                    ),
                }
            } else {
                String::new()
            };

            let episode_part = match episode_prefix {
                WordStyle::Full => format!("Episode {episode_number}"),
                WordStyle::Short => format!(
                    "E{}",
                    pad_number(episode_number as usize, *episode_number_width)
                ),
            };

            let parts: Vec<&str> = [series_name.trim(), season_part.as_str(), episode_part.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect();
            *base = parts.join(" ");
        }
    }
}

/// Build the preview for a batch.
///
/// Rules are applied per file in the fixed declared order (rename, then
/// search-replace, prefix, suffix, numbering, series) regardless of the
/// order of `rules`; same-kind rules keep their relative order. A second
/// pass counts every planned target path and flags every row whose target is
/// claimed more than once, including rows colliding with a file that does
/// not change at all.
pub fn build_preview(files: &[FileEntry], rules: &[RenameRule]) -> Vec<PreviewRow> {
    let mut ordered: Vec<&RenameRule> = rules.iter().collect();
    ordered.sort_by_key(|rule| rule.rank());

    let mut rows = Vec::with_capacity(files.len());
    let mut target_counts: HashMap<String, usize> = HashMap::new();

    for (index, file) in files.iter().enumerate() {
        let (base, ext) = split_name(&file.name);
        let mut base = base.to_string();
        let mut ext = ext.to_string();

        for rule in &ordered {
            apply_rule(&mut base, &mut ext, rule, index, &file.name);
        }

        let new_name = format!("{base}{ext}");
        let changed = new_name != file.name;
        let new_path = if changed {
            replace_last_segment(&file.path, &new_name)
        } else {
            file.path.clone()
        };

        *target_counts.entry(new_path.clone()).or_insert(0) += 1;

        rows.push(PreviewRow {
            path: file.path.clone(),
            old_name: file.name.clone(),
            new_name: changed.then_some(new_name),
            new_path: changed.then_some(new_path),
            changed,
            conflict: false,
        });
    }

    for row in &mut rows {
        if let Some(new_path) = &row.new_path {
            if target_counts.get(new_path).copied().unwrap_or(0) > 1 {
                row.conflict = true;
            }
        }
    }

    rows
}

/// Extract the applicable rename pairs from a preview: changed rows that do
/// not conflict.
pub fn pairs_from_preview(rows: &[PreviewRow]) -> Vec<RenamePair> {
    rows.iter()
        .filter(|row| row.changed && !row.conflict)
        .filter_map(|row| {
            row.new_path
                .as_ref()
                .map(|to| RenamePair::new(row.path.clone(), to.clone()))
        })
        .collect()
}
