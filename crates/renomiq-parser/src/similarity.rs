//! Normalized filename similarity.
//!
//! Two filenames are compared after stripping the noise that varies between
//! a video and its companion files (release tags, resolution, codec and
//! source tokens, language codes), then scored with a classic edit distance
//! bounded to `[0, 1]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::base_name;

static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[._\-\s]+").expect("Failed to create separator pattern")
});
static RE_BRACKET_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]").expect("Failed to create tag pattern")
});
static RE_PAREN_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)").expect("Failed to create tag pattern")
});
static RE_RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{3,4}p").expect("Failed to create resolution pattern")
});
static RE_DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"x\d{3,4}").expect("Failed to create dimension pattern")
});
static RE_SOURCE_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bluray|web.?dl|hdrip|dvdrip|webrip|hdtv)")
        .expect("Failed to create source-token pattern")
});
static RE_CODEC_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(aac|ac3|dts|x264|x265|hevc|h264|h265)")
        .expect("Failed to create codec-token pattern")
});
static RE_LANG_CODES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(fa|en|ar|fr|de|es|it|pt|ru|tr)\b")
        .expect("Failed to create language-code pattern")
});
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("Failed to create whitespace pattern")
});

/// Normalize a filename for comparison: base name, case-folded, separators
/// collapsed, release/resolution/codec/language noise removed.
pub fn normalize(filename: &str) -> String {
    let lowered = base_name(filename).to_lowercase();
    let s = RE_SEPARATORS.replace_all(&lowered, " ");
    let s = RE_BRACKET_TAGS.replace_all(&s, "");
    let s = RE_PAREN_TAGS.replace_all(&s, "");
    let s = RE_RESOLUTION.replace_all(&s, "");
    let s = RE_DIMENSIONS.replace_all(&s, "");
    let s = RE_SOURCE_TOKENS.replace_all(&s, "");
    let s = RE_CODEC_TOKENS.replace_all(&s, "");
    let s = RE_LANG_CODES.replace_all(&s, "");
    let s = RE_WHITESPACE.replace_all(&s, " ");
    s.trim().to_string()
}

/// Levenshtein distance over characters, single-row DP.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut previous_diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let value = (row[j + 1] + 1)
                .min(row[j] + 1)
                .min(previous_diagonal + cost);
            previous_diagonal = row[j + 1];
            row[j + 1] = value;
        }
    }

    row[b.len()]
}

/// Similarity of two raw strings in `[0, 1]`.
///
/// Inputs are case-folded and separator-collapsed; 1.0 for identical
/// normalized strings, 0.0 when either side is empty. Symmetric and total.
pub fn similarity(a: &str, b: &str) -> f64 {
    let s1: String = {
        let lowered = a.to_lowercase();
        RE_SEPARATORS.replace_all(&lowered, " ").trim().to_string()
    };
    let s2: String = {
        let lowered = b.to_lowercase();
        RE_SEPARATORS.replace_all(&lowered, " ").trim().to_string()
    };

    if s1 == s2 {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let c1: Vec<char> = s1.chars().collect();
    let c2: Vec<char> = s2.chars().collect();
    let distance = edit_distance(&c1, &c2);
    let max_len = c1.len().max(c2.len());

    1.0 - distance as f64 / max_len as f64
}

/// Similarity of two filenames after full [`normalize`] cleanup.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    similarity(&normalize(a), &normalize(b))
}
