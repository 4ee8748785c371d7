mod cli;

use renomiq::{config, fsops, history::UndoLedger};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RuleArgs};
use renomiq_rules::{build_preview, pairs_from_preview};
use renomiq_series::pattern;
use renomiq_series::{group_files, validate_template};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "renomiq=trace,renomiq_parser=debug,renomiq_rules=debug,renomiq_series=debug"
                .to_string()
        } else {
            "renomiq=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Scan {
            folder,
            min_similarity,
            template,
            json,
        } => scan_folder(
            &folder,
            cli.config.as_deref(),
            min_similarity,
            template.as_deref(),
            json,
        ),
        Commands::Preview {
            folder,
            rules,
            json,
        } => preview_folder(&folder, &rules, json),
        Commands::Apply {
            folder,
            rules,
            dry_run,
        } => apply_folder(&folder, cli.config.as_deref(), &rules, dry_run),
        Commands::Undo => undo_last(cli.config.as_deref()),
        Commands::History { json } => show_history(cli.config.as_deref(), json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("renomiq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn open_ledger(config: &config::Config) -> UndoLedger {
    UndoLedger::new(config.history.capacity, Some(config::history_path(config)))
}

fn scan_folder(
    folder: &Path,
    config_path: Option<&Path>,
    min_similarity: Option<f64>,
    template: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let min_similarity = min_similarity.unwrap_or(config.matcher.min_similarity);
    if !(min_similarity > 0.0 && min_similarity <= 1.0) {
        anyhow::bail!("--min-similarity must be in (0, 1], got {min_similarity}");
    }

    let files = fsops::list_files(folder)?;
    tracing::debug!("scanning {} files in {}", files.len(), folder.display());

    let groups = group_files(&files, min_similarity);

    if let Some(template) = template {
        if let Err(msg) = validate_template(template) {
            anyhow::bail!("invalid template: {msg}");
        }

        let mut metadata = pattern::detect_metadata(&groups);
        metadata.template = template.to_string();
        let previews = pattern::preview_groups(&groups, &metadata);

        if json {
            println!("{}", serde_json::to_string_pretty(&previews)?);
            return Ok(());
        }

        for preview in &previews {
            let marker = if preview.has_conflict { " [conflict]" } else { "" };
            println!(
                "{}: {} -> {}{}",
                preview.group_id, preview.original_video_name, preview.new_video_name, marker
            );
            for sub in &preview.subtitle_previews {
                println!("    sub: {} -> {}", sub.original, sub.new_name);
            }
            for dub in &preview.dub_previews {
                println!("    dub: {} -> {}", dub.original, dub.new_name);
            }
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("{} file(s), {} group(s)", files.len(), groups.len());
    for group in &groups {
        println!(
            "{} {} (confidence {:.2})",
            group.id,
            group.video.name(),
            group.confidence
        );
        for sub in &group.subtitles {
            match &sub.language {
                Some(language) => println!("    sub [{}]: {}", language, sub.name()),
                None => println!("    sub: {}", sub.name()),
            }
        }
        for dub in &group.dubs {
            println!("    dub: {}", dub.name());
        }
    }

    Ok(())
}

fn preview_folder(folder: &Path, rules: &RuleArgs, json: bool) -> Result<()> {
    let files = fsops::list_files(folder)?;
    let rules = rules.to_options().to_rules();
    let rows = build_preview(&files, &rules);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        match (&row.new_name, row.conflict) {
            (Some(new_name), true) => println!("{} -> {} [conflict]", row.old_name, new_name),
            (Some(new_name), false) => println!("{} -> {}", row.old_name, new_name),
            (None, _) => println!("{} (unchanged)", row.old_name),
        }
    }

    let conflicts = rows.iter().filter(|row| row.conflict).count();
    if conflicts > 0 {
        println!("{conflicts} conflicting target(s); these rows will not be applied");
    }

    Ok(())
}

fn apply_folder(
    folder: &Path,
    config_path: Option<&Path>,
    rules: &RuleArgs,
    dry_run: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let files = fsops::list_files(folder)?;
    let rules = rules.to_options().to_rules();
    let rows = build_preview(&files, &rules);
    let pairs = pairs_from_preview(&rows);

    let conflicts = rows.iter().filter(|row| row.conflict).count();
    if conflicts > 0 {
        println!("Skipping {conflicts} row(s) with conflicting targets");
    }

    if pairs.is_empty() {
        println!("Nothing to rename");
        return Ok(());
    }

    if dry_run {
        for pair in &pairs {
            println!("{} -> {}", pair.from, pair.to);
        }
        println!("{} rename(s) planned (dry run)", pairs.len());
        return Ok(());
    }

    let result = fsops::apply_renames(&pairs);
    if !result.success {
        anyhow::bail!(
            "apply failed: {}",
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    let ledger = open_ledger(&config);
    let description = format!("Renamed {} file(s)", pairs.len());
    let entry = ledger.record(pairs, fsops::folder_display(folder), description);

    tracing::info!("recorded batch {} for undo", entry.id);
    println!("Renamed {} file(s)", entry.original_pairs.len());

    Ok(())
}

fn undo_last(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let ledger = open_ledger(&config);

    let result = ledger.undo_with(fsops::undo_renames);
    if !result.success {
        anyhow::bail!(
            "undo failed: {}",
            result.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    println!("Restored {} file(s)", result.restored_count);
    Ok(())
}

fn show_history(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let ledger = open_ledger(&config);
    let entries = ledger.entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No recorded renames");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{} {} {} ({} pair(s)) in {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.id,
            entry.description,
            entry.original_pairs.len(),
            entry.folder
        );
    }

    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    config::validate_config(&config)?;
    println!("Configuration is valid");
    Ok(())
}
