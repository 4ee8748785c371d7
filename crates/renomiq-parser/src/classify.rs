//! Media classification from file extensions.
//!
//! Classification is a pure function of the (case-insensitive) extension
//! against three fixed extension sets; anything unmatched is
//! [`MediaType::Other`]. Subtitles additionally get a language tag extracted
//! from the base name.

use std::sync::LazyLock;

use phf::{phf_set, Set};
use regex::Regex;
use renomiq_common::FileEntry;

use crate::model::{Classified, ClassifiedFile, MediaType};

/// Video container extensions.
pub static VIDEO_EXTENSIONS: Set<&'static str> = phf_set! {
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg",
    "m2v", "ts", "mts",
};

/// Subtitle extensions.
pub static SUBTITLE_EXTENSIONS: Set<&'static str> = phf_set! {
    "srt", "ass", "ssa", "vtt", "sub", "idx", "pgs",
};

/// Dubbing / external audio extensions.
pub static DUBBING_EXTENSIONS: Set<&'static str> = phf_set! {
    "mka", "ac3", "dts", "aac", "eac3",
};

/// Short language codes embedded between dots: `.Fa.`, `.En.`, ...
static RE_LANG_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.\s*(fa|en|ar|fr|de|es|it|pt|ru|tr|ja|ko|zh)\s*\.?")
        .expect("Failed to create regex pattern for language codes")
});

/// Full language names embedded between dots: `.Persian.`, `.English.`, ...
static RE_LANG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\.(english|persian|arabic|french|german|spanish|italian|portuguese|russian|turkish|japanese|korean|chinese)\.",
    )
    .expect("Failed to create regex pattern for language names")
});

/// Extension of a filename, lowercased, without the dot.
///
/// A dot at index 0 marks a dotfile, which has no extension.
pub fn extension_of(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename[idx + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Base name without the extension (dotfiles are returned whole).
pub fn base_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => &filename[..idx],
        _ => filename,
    }
}

/// Determine the media type of a filename from its extension.
pub fn media_type(filename: &str) -> MediaType {
    let ext = extension_of(filename);

    if VIDEO_EXTENSIONS.contains(ext.as_str()) {
        MediaType::Video
    } else if SUBTITLE_EXTENSIONS.contains(ext.as_str()) {
        MediaType::Subtitle
    } else if DUBBING_EXTENSIONS.contains(ext.as_str()) {
        MediaType::Dubbing
    } else {
        MediaType::Other
    }
}

/// Extract a language tag from a subtitle filename.
///
/// Two passes over the base name: short codes first (`.Fa.`, `.En.`), full
/// names second (`.Persian.`, `.English.`). First match wins; the captured
/// text is returned as written in the filename.
pub fn language_tag(filename: &str) -> Option<String> {
    let base = base_name(filename);

    if let Some(caps) = RE_LANG_CODE.captures(base) {
        return Some(caps[1].to_string());
    }

    if let Some(caps) = RE_LANG_NAME.captures(base) {
        return Some(caps[1].to_string());
    }

    None
}

/// Classify a single file.
pub fn classify(entry: &FileEntry) -> ClassifiedFile {
    let media_type = media_type(&entry.name);
    let language = if media_type == MediaType::Subtitle {
        language_tag(&entry.name)
    } else {
        None
    };

    ClassifiedFile {
        entry: entry.clone(),
        media_type,
        language,
    }
}

/// Classify a batch and partition it by media type.
pub fn classify_all(entries: &[FileEntry]) -> Classified {
    let mut result = Classified::default();

    for entry in entries {
        let file = classify(entry);
        match file.media_type {
            MediaType::Video => result.videos.push(file),
            MediaType::Subtitle => result.subtitles.push(file),
            MediaType::Dubbing => result.dubs.push(file),
            MediaType::Other => result.others.push(file),
        }
    }

    result
}
