//! Grouping and pattern integration tests.
//!
//! Drives the full series-mode flow: classify a batch, group it around its
//! videos, and expand a naming template over the groups.

use renomiq_common::FileEntry;
use renomiq_parser::classify::classify_all;
use renomiq_parser::{episode, MediaType};
use renomiq_series::pattern::{self, SeriesMetadata};
use renomiq_series::{group_files, DEFAULT_MIN_SIMILARITY};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn batch(names: &[&str]) -> Vec<FileEntry> {
    names
        .iter()
        .map(|name| FileEntry::from_path(format!("/media/show/{name}")))
        .collect()
}

/// A realistic season folder: three episodes, Persian subtitles, one dub
/// track, and an unrelated info file.
fn season_folder() -> Vec<FileEntry> {
    batch(&[
        "Breaking.Bad.S01E01.mkv",
        "Breaking.Bad.S01E02.mkv",
        "Breaking.Bad.S01E03.mkv",
        "Breaking.Bad.S01E01.Fa.srt",
        "Breaking.Bad.S01E02.Fa.srt",
        "Breaking.Bad.S01E03.Fa.srt",
        "Breaking.Bad.S01E01.mka",
        "readme.txt",
    ])
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn classification_partitions_the_folder() {
    let classified = classify_all(&season_folder());
    assert_eq!(classified.videos.len(), 3);
    assert_eq!(classified.subtitles.len(), 3);
    assert_eq!(classified.dubs.len(), 1);
    assert_eq!(classified.others.len(), 1);
}

#[test]
fn every_file_lands_in_exactly_one_partition() {
    let files = season_folder();
    let classified = classify_all(&files);
    assert_eq!(classified.len(), files.len());
}

#[test]
fn subtitle_language_is_detected() {
    let classified = classify_all(&season_folder());
    for sub in &classified.subtitles {
        assert_eq!(sub.media_type, MediaType::Subtitle);
        assert_eq!(sub.language.as_deref(), Some("Fa"));
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn one_group_per_video_in_episode_order() {
    let groups = group_files(&season_folder(), DEFAULT_MIN_SIMILARITY);
    assert_eq!(groups.len(), 3);

    let episodes: Vec<u32> = groups.iter().map(|g| g.episode.episode).collect();
    assert_eq!(episodes, vec![1, 2, 3]);
}

#[test]
fn subtitles_attach_to_their_episode_under_a_strict_threshold() {
    // With a cutoff above the score of "same name, different episode digit"
    // the fuzzy path stays quiet and only episode equality attaches.
    let groups = group_files(&season_folder(), 0.95);

    for group in &groups {
        assert_eq!(group.subtitles.len(), 1, "group {}", group.id);
        let sub_episode = episode::extract(group.subtitles[0].name()).unwrap();
        assert_eq!(sub_episode.episode, group.episode.episode);
    }
}

#[test]
fn default_threshold_lets_the_first_group_absorb_similar_names() {
    // Episode siblings normalize to names one edit apart, which clears the
    // default cutoff; the first group in order claims every companion the
    // fuzzy path accepts.
    let groups = group_files(&season_folder(), DEFAULT_MIN_SIMILARITY);
    assert_eq!(groups[0].subtitles.len(), 3);
    assert!(groups[1].subtitles.is_empty());
    assert!(groups[2].subtitles.is_empty());
}

#[test]
fn dub_attaches_to_the_first_episode() {
    let groups = group_files(&season_folder(), 0.95);
    assert_eq!(groups[0].dubs.len(), 1);
    assert!(groups[1].dubs.is_empty());
    assert!(groups[2].dubs.is_empty());
}

#[test]
fn spec_scenario_video_plus_farsi_subtitle() {
    let files = batch(&["Show.S01E05.mkv", "Show.S01E05.Fa.srt"]);
    let groups = group_files(&files, DEFAULT_MIN_SIMILARITY);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].video.name(), "Show.S01E05.mkv");
    assert_eq!(groups[0].subtitles.len(), 1);
    assert_eq!(groups[0].subtitles[0].language.as_deref(), Some("Fa"));
}

#[test]
fn unrelated_other_files_never_join_groups() {
    let groups = group_files(&season_folder(), DEFAULT_MIN_SIMILARITY);
    for group in &groups {
        assert!(group.others.is_empty());
        assert!(group
            .subtitles
            .iter()
            .all(|f| f.media_type == MediaType::Subtitle));
        assert!(group.dubs.iter().all(|f| f.media_type == MediaType::Dubbing));
    }
}

#[test]
fn group_order_is_reproducible() {
    let files = season_folder();
    let a = group_files(&files, DEFAULT_MIN_SIMILARITY);
    let b = group_files(&files, DEFAULT_MIN_SIMILARITY);

    let ids_a: Vec<&str> = a.iter().map(|g| g.id.as_str()).collect();
    let ids_b: Vec<&str> = b.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
}

// ---------------------------------------------------------------------------
// Pattern expansion over groups
// ---------------------------------------------------------------------------

#[test]
fn template_preview_renames_whole_groups() {
    let groups = group_files(&season_folder(), DEFAULT_MIN_SIMILARITY);
    let metadata = SeriesMetadata {
        name: "Breaking Bad".into(),
        season: 1,
        start_episode: 1,
        template: "{series} - {sxe}".into(),
    };

    let previews = pattern::preview_groups(&groups, &metadata);
    assert_eq!(previews.len(), 3);
    assert_eq!(previews[0].new_video_name, "Breaking Bad - S01E01.mkv");
    // The subtitle keeps its language segment through the rename.
    assert_eq!(
        previews[0].subtitle_previews[0].new_name,
        "Breaking Bad - S01E01.Fa.srt"
    );
    assert!(previews.iter().all(|p| !p.has_conflict));
}

#[test]
fn detected_metadata_matches_the_folder() {
    let groups = group_files(&season_folder(), DEFAULT_MIN_SIMILARITY);
    let metadata = pattern::detect_metadata(&groups);

    assert_eq!(metadata.name, "Breaking Bad");
    assert_eq!(metadata.season, 1);
    assert_eq!(metadata.start_episode, 1);
}

#[test]
fn season_consensus_over_the_folder() {
    let files = season_folder();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(episode::detect_season(&names), 1);
}
