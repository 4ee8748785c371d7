use clap::{Args, Parser, Subcommand, ValueEnum};
use renomiq_rules::{RenameOptions, SeriesOptions, WordStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renomiq")]
#[command(author, version, about = "Batch rename planner for media file collections")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and classify a folder, showing detected episode groups
    Scan {
        /// Folder to scan
        #[arg(required = true)]
        folder: PathBuf,

        /// Similarity cutoff for attaching subtitles/dubs (0, 1]
        #[arg(long)]
        min_similarity: Option<f64>,

        /// Preview group names with this naming template
        #[arg(long)]
        template: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rename plan for a folder without executing it
    Preview {
        /// Folder to plan renames for
        #[arg(required = true)]
        folder: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply the rename plan and record it for undo
    Apply {
        /// Folder to rename files in
        #[arg(required = true)]
        folder: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Show what would be done without executing
        #[arg(long)]
        dry_run: bool,
    },

    /// Reverse the most recently applied batch
    Undo,

    /// Show the recorded rename history
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

/// Season/episode spelling for the series rule.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
    /// S01 / E05
    Short,
    /// Season 1 / Episode 5
    Full,
}

impl From<StyleArg> for WordStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Short => WordStyle::Short,
            StyleArg::Full => WordStyle::Full,
        }
    }
}

/// Flags mapping onto the rename rule pipeline.
#[derive(Args)]
pub struct RuleArgs {
    /// Replace the whole base name
    #[arg(long)]
    pub new_name: Option<String>,

    /// With --new-name, drop the original extension too
    #[arg(long)]
    pub drop_extension: bool,

    /// Substring to search for (literal, replaces all occurrences)
    #[arg(long)]
    pub search: Option<String>,

    /// Replacement for --search (empty removes the match)
    #[arg(long)]
    pub replace: Option<String>,

    /// Prepend a fixed string
    #[arg(long)]
    pub prefix: Option<String>,

    /// Append a fixed string to the base name
    #[arg(long)]
    pub suffix: Option<String>,

    /// Append a running number per file
    #[arg(long)]
    pub numbering: bool,

    /// Zero-pad the running number to this width (1 = no padding)
    #[arg(long, default_value_t = 2)]
    pub number_width: usize,

    /// Rebuild names as "<series> <season> <episode>" (enables series mode)
    #[arg(long)]
    pub series_name: Option<String>,

    /// Omit the season part of series names
    #[arg(long)]
    pub no_season: bool,

    /// Re-use episode numbers found in the original names
    #[arg(long)]
    pub use_existing_numbers: bool,

    /// Season number for series names
    #[arg(long, default_value_t = 1)]
    pub season: u32,

    /// First episode number for sequential series numbering
    #[arg(long, default_value_t = 1)]
    pub start_episode: u32,

    /// Season spelling: short (S01) or full (Season 1)
    #[arg(long, value_enum, default_value = "short")]
    pub season_style: StyleArg,

    /// Episode spelling: short (E05) or full (Episode 5)
    #[arg(long, value_enum, default_value = "short")]
    pub episode_style: StyleArg,

    /// Zero-pad season numbers to this width
    #[arg(long, default_value_t = 2)]
    pub season_width: usize,

    /// Zero-pad episode numbers to this width
    #[arg(long, default_value_t = 2)]
    pub episode_width: usize,
}

impl RuleArgs {
    /// Map the flags onto the pipeline's option set.
    pub fn to_options(&self) -> RenameOptions {
        let series = self.series_name.as_ref().map(|name| SeriesOptions {
            series_name: name.clone(),
            include_season: !self.no_season,
            use_existing_episode_numbers: self.use_existing_numbers,
            season_number: self.season,
            start_episode: self.start_episode,
            season_prefix: self.season_style.into(),
            episode_prefix: self.episode_style.into(),
            season_number_width: self.season_width,
            episode_number_width: self.episode_width,
        });

        RenameOptions {
            new_name: self.new_name.clone(),
            keep_extension: Some(!self.drop_extension),
            search: self.search.clone(),
            replace: self.replace.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            numbering: self.numbering,
            number_width: self.number_width,
            series,
        }
    }
}
