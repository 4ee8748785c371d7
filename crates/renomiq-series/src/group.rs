//! Video-centric grouping of a file batch.
//!
//! Every video in the batch produces one group; subtitles and dubs are
//! attached to the first matching group, by shared episode number or by
//! normalized-name similarity. Groups are rebuilt from scratch on every new
//! batch, never mutated incrementally.

use std::cmp::Ordering;
use std::collections::HashSet;

use renomiq_common::FileEntry;
use renomiq_parser::classify::classify_all;
use renomiq_parser::episode::{self, natural_cmp};
use renomiq_parser::similarity::name_similarity;
use renomiq_parser::{ClassifiedFile, EpisodeInfo, MediaType};
use serde::{Deserialize, Serialize};

/// Similarity cutoff below which two names are not considered related.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.6;

/// Base confidence for every group.
pub const CONFIDENCE_BASE: f64 = 0.5;
/// Bonus when an attached subtitle or dub shares the video's episode number.
pub const CONFIDENCE_EPISODE_BONUS: f64 = 0.3;
/// Bonus for having any subtitles attached.
pub const CONFIDENCE_SUBTITLE_BONUS: f64 = 0.1;
/// Bonus for having any dubs attached.
pub const CONFIDENCE_DUBBING_BONUS: f64 = 0.1;

/// A video file with its attached companion files.
///
/// The group exclusively owns its attachment lists for the duration of one
/// planning pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileGroup {
    pub id: String,
    pub episode: EpisodeInfo,
    pub video: ClassifiedFile,
    pub subtitles: Vec<ClassifiedFile>,
    pub dubs: Vec<ClassifiedFile>,
    pub others: Vec<ClassifiedFile>,
    /// Informational match confidence in `[0, 1]`; never used for filtering.
    pub confidence: f64,
    pub has_conflict: bool,
    pub selected: bool,
}

/// Whether a companion file belongs to a video: equal extracted episode
/// numbers always win, otherwise normalized-name similarity must reach
/// `min_similarity`.
pub fn are_related(video: &ClassifiedFile, other: &ClassifiedFile, min_similarity: f64) -> bool {
    let video_episode = episode::extract(video.name());
    let other_episode = episode::extract(other.name());

    if let (Some(v), Some(o)) = (&video_episode, &other_episode) {
        if v.episode == o.episode {
            return true;
        }
    }

    name_similarity(video.name(), other.name()) >= min_similarity
}

fn confidence_for(
    video: &ClassifiedFile,
    subtitles: &[ClassifiedFile],
    dubs: &[ClassifiedFile],
) -> f64 {
    let mut score = CONFIDENCE_BASE;

    if let Some(video_episode) = episode::extract(video.name()) {
        let shares_episode = subtitles
            .iter()
            .chain(dubs.iter())
            .filter_map(|file| episode::extract(file.name()))
            .any(|info| info.episode == video_episode.episode);
        if shares_episode {
            score += CONFIDENCE_EPISODE_BONUS;
        }
    }

    if !subtitles.is_empty() {
        score += CONFIDENCE_SUBTITLE_BONUS;
    }
    if !dubs.is_empty() {
        score += CONFIDENCE_DUBBING_BONUS;
    }

    score.min(1.0)
}

/// Deterministic id for a group: `ep-<n>` when the video carries episode
/// info, otherwise its sanitized file name.
fn group_id(video: &ClassifiedFile) -> String {
    match episode::extract(video.name()) {
        Some(info) => format!("ep-{}", info.episode),
        None => video
            .name()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect(),
    }
}

/// Group a batch of files around its videos.
///
/// Videos are ordered by extracted episode number where both sides have one,
/// falling back to a natural name comparison; that order is the externally
/// observable group order. A global matched set guarantees no subtitle/dub
/// lands in more than one group. Companions left unmatched by the first pass
/// get a second, episode-number-only chance against the built groups.
pub fn group_files(files: &[FileEntry], min_similarity: f64) -> Vec<FileGroup> {
    let classified = classify_all(files);

    let mut videos: Vec<(ClassifiedFile, Option<EpisodeInfo>)> = classified
        .videos
        .iter()
        .map(|video| (video.clone(), episode::extract(video.name())))
        .collect();
    videos.sort_by(|(a, a_info), (b, b_info)| match (a_info, b_info) {
        (Some(a_info), Some(b_info)) => a_info.episode.cmp(&b_info.episode),
        _ => natural_cmp(a.name(), b.name()),
    });

    let candidates: Vec<&ClassifiedFile> = classified
        .subtitles
        .iter()
        .chain(classified.dubs.iter())
        .collect();

    let mut matched: HashSet<String> = HashSet::new();
    let mut groups = Vec::with_capacity(videos.len());

    for (index, (video, _)) in videos.iter().enumerate() {
        let mut subtitles = Vec::new();
        let mut dubs = Vec::new();

        for &candidate in &candidates {
            if candidate.path() == video.path() || matched.contains(candidate.path()) {
                continue;
            }
            if !are_related(video, candidate, min_similarity) {
                continue;
            }

            matched.insert(candidate.path().to_string());
            match candidate.media_type {
                MediaType::Subtitle => subtitles.push(candidate.clone()),
                MediaType::Dubbing => dubs.push(candidate.clone()),
                _ => {}
            }
        }

        let confidence = confidence_for(video, &subtitles, &dubs);

        groups.push(FileGroup {
            id: group_id(video),
            episode: episode::extract_or_position(video.name(), index),
            video: video.clone(),
            subtitles,
            dubs,
            others: Vec::new(),
            confidence,
            has_conflict: false,
            selected: true,
        });
    }

    // Second pass: leftovers may still agree on an episode number even when
    // fuzzy similarity failed. First matching group wins, in group order.
    for candidate in &candidates {
        if matched.contains(candidate.path()) {
            continue;
        }
        let Some(candidate_episode) = episode::extract(candidate.name()) else {
            continue;
        };

        for group in &mut groups {
            let Some(video_episode) = episode::extract(group.video.name()) else {
                continue;
            };
            if video_episode.episode != candidate_episode.episode {
                continue;
            }

            matched.insert(candidate.path().to_string());
            match candidate.media_type {
                MediaType::Subtitle => group.subtitles.push((*candidate).clone()),
                MediaType::Dubbing => group.dubs.push((*candidate).clone()),
                _ => {}
            }
            break;
        }
    }

    groups
}

impl FileGroup {
    /// Total number of files in this group.
    pub fn file_count(&self) -> usize {
        1 + self.subtitles.len() + self.dubs.len() + self.others.len()
    }

    /// Compare groups by their episode number.
    pub fn cmp_by_episode(&self, other: &Self) -> Ordering {
        self.episode.episode.cmp(&other.episode.episode)
    }
}
