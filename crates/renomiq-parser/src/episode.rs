//! Season/episode extraction from filenames.
//!
//! Extraction runs an ordered cascade of patterns over the base name and
//! stops at the first match with a plausible episode number. Each cascade
//! entry pairs a compiled pattern with the [`PatternKind`] it produces, so
//! individual patterns stay testable in isolation and the priority order is
//! visible in one place.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::LazyLock;

use regex::Regex;

use crate::classify::base_name;
use crate::model::{EpisodeInfo, PatternKind};

/// Episode numbers outside `(0, EPISODE_LIMIT)` are rejected and the
/// cascade moves on as if the pattern had not matched.
pub const EPISODE_LIMIT: u32 = 1000;

/// One entry of the extraction cascade.
struct CascadeEntry {
    kind: PatternKind,
    regex: Regex,
    /// Whether group 1 is a season number (episode then sits in group 2).
    has_season: bool,
}

impl CascadeEntry {
    fn new(kind: PatternKind, pattern: &str, has_season: bool) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("Failed to create episode cascade pattern"),
            has_season,
        }
    }
}

/// The cascade, highest priority first.
static EPISODE_CASCADE: LazyLock<Vec<CascadeEntry>> = LazyLock::new(|| {
    vec![
        // S01E05, s1e5
        CascadeEntry::new(PatternKind::Sxe, r"(?i)s(\d{1,2})e(\d{1,3})", true),
        // 1x05, 01x5
        CascadeEntry::new(PatternKind::XSep, r"(\d{1,2})[xX](\d{1,3})", true),
        // Episode 5, Ep 5, Ep.5, E 5
        CascadeEntry::new(PatternKind::Episode, r"(?i)ep?(?:isode)?[\s.]*(\d{1,3})", false),
        // bare E05
        CascadeEntry::new(PatternKind::Episode, r"(?i)\be(\d{1,3})\b", false),
        // Season 1 ... Episode 5
        CascadeEntry::new(
            PatternKind::Sxe,
            r"(?i)season\s*(\d{1,2}).*?ep(?:isode)?\s*(\d{1,3})",
            true,
        ),
        // Part 5, Pt 5
        CascadeEntry::new(PatternKind::Episode, r"(?i)p(?:art|t)[\s.]*(\d{1,3})", false),
        // Chapter 5
        CascadeEntry::new(PatternKind::Episode, r"(?i)chapter[\s.]*(\d{1,3})", false),
    ]
});

/// Extract episode information from a filename.
///
/// Returns `None` when no cascade pattern yields an episode number in
/// `(0, EPISODE_LIMIT)`.
pub fn extract(filename: &str) -> Option<EpisodeInfo> {
    let base = base_name(filename);

    for entry in EPISODE_CASCADE.iter() {
        let Some(caps) = entry.regex.captures(base) else {
            continue;
        };

        let (season, episode) = if entry.has_season {
            (
                caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()),
                caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok()),
            )
        } else {
            (None, caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
        };

        if let Some(episode) = episode {
            if episode > 0 && episode < EPISODE_LIMIT {
                return Some(EpisodeInfo {
                    season,
                    episode,
                    raw_match: caps[0].to_string(),
                    pattern: entry.kind,
                });
            }
        }
    }

    None
}

/// Extract episode information, falling back to the 1-based position in the
/// batch when no pattern matches.
pub fn extract_or_position(filename: &str, position: usize) -> EpisodeInfo {
    extract(filename).unwrap_or_else(|| EpisodeInfo::from_position(position))
}

/// Format season/episode as `S01E05` (or `E05` without a season).
pub fn format_sxe(season: Option<u32>, episode: u32) -> String {
    match season {
        Some(s) => format!("S{s:02}E{episode:02}"),
        None => format!("E{episode:02}"),
    }
}

/// Format season/episode as `1x05` (or bare `05` without a season).
pub fn format_xsep(season: Option<u32>, episode: u32) -> String {
    match season {
        Some(s) => format!("{s}x{episode:02}"),
        None => format!("{episode:02}"),
    }
}

/// Zero-pad an episode number to `width` digits.
pub fn pad_episode(episode: u32, width: usize) -> String {
    format!("{episode:0width$}")
}

static RE_STRIP_SXE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)s\d{1,2}e\d{1,3}").expect("Failed to create series-name strip pattern")
});
static RE_STRIP_XSEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}[xX]\d{1,3}").expect("Failed to create series-name strip pattern")
});
static RE_STRIP_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ep?(?:isode)?[\s.]*\d{1,3}").expect("Failed to create series-name strip pattern")
});
static RE_STRIP_QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}p").expect("Failed to create series-name strip pattern")
});
static RE_STRIP_DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{3,4}x\d{3,4}").expect("Failed to create series-name strip pattern")
});
static RE_STRIP_BRACKETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]+\]").expect("Failed to create series-name strip pattern")
});
static RE_STRIP_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]+\)").expect("Failed to create series-name strip pattern")
});
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[._-]+").expect("Failed to create separator pattern")
});
static RE_TRAILING_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[._-]+$").expect("Failed to create separator pattern")
});

/// Detect a series name shared by a set of filenames.
///
/// A single file has its episode markers, quality tags, and separators
/// stripped; multiple files are reduced to their case-insensitive common
/// prefix.
pub fn detect_series_name(filenames: &[&str]) -> Option<String> {
    match filenames {
        [] => None,
        [single] => {
            let base = base_name(single);
            let cleaned = RE_STRIP_SXE.replace(base, "");
            let cleaned = RE_STRIP_XSEP.replace(&cleaned, "");
            let cleaned = RE_STRIP_EPISODE.replace(&cleaned, "");
            let cleaned = RE_STRIP_QUALITY.replace(&cleaned, "");
            let cleaned = RE_STRIP_DIMENSIONS.replace(&cleaned, "");
            let cleaned = RE_STRIP_BRACKETS.replace_all(&cleaned, "");
            let cleaned = RE_STRIP_PARENS.replace_all(&cleaned, "");
            let cleaned = RE_SEPARATORS.replace_all(&cleaned, " ");
            let cleaned = cleaned.trim();

            (!cleaned.is_empty()).then(|| cleaned.to_string())
        }
        many => {
            let bases: Vec<Vec<char>> = many
                .iter()
                .map(|name| base_name(name).chars().collect())
                .collect();

            let mut prefix_len = bases[0].len();
            for base in &bases[1..] {
                let mut common = 0;
                while common < prefix_len
                    && common < base.len()
                    && base[common].to_lowercase().eq(bases[0][common].to_lowercase())
                {
                    common += 1;
                }
                prefix_len = common;
                if prefix_len == 0 {
                    break;
                }
            }

            let prefix: String = bases[0][..prefix_len].iter().collect();
            let cleaned = RE_TRAILING_SEPARATORS.replace(&prefix, "");
            let cleaned = RE_SEPARATORS.replace_all(&cleaned, " ");
            let cleaned = cleaned.trim();

            (!cleaned.is_empty()).then(|| cleaned.to_string())
        }
    }
}

/// Detect the season for a batch by majority vote over extracted seasons.
///
/// Defaults to 1 when no file carries a season; ties go to the season seen
/// first in the batch.
pub fn detect_season(filenames: &[&str]) -> u32 {
    let seasons: Vec<u32> = filenames
        .iter()
        .filter_map(|name| extract(name).and_then(|info| info.season))
        .collect();

    if seasons.is_empty() {
        return 1;
    }

    let mut best = 1;
    let mut best_count = 0;
    let mut seen = Vec::new();
    for &season in &seasons {
        if seen.contains(&season) {
            continue;
        }
        seen.push(season);
        let count = seasons.iter().filter(|&&s| s == season).count();
        if count > best_count {
            best_count = count;
            best = season;
        }
    }

    best
}

/// Compare two filenames naturally: digit runs compare numerically, other
/// characters case-insensitively.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    fn take_number(chars: &mut Peekable<Chars<'_>>) -> u64 {
        let mut value: u64 = 0;
        while let Some(c) = chars.peek() {
            let Some(digit) = c.to_digit(10) else { break };
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
            chars.next();
        }
        value
    }

    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                match take_number(&mut ca).cmp(&take_number(&mut cb)) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            (Some(x), Some(y)) => {
                let xl = x.to_ascii_lowercase();
                let yl = y.to_ascii_lowercase();
                if xl != yl {
                    return xl.cmp(&yl);
                }
                ca.next();
                cb.next();
            }
        }
    }
}
