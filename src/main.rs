use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use swpack::cli::{self, Cli, Resource};
use swpack::container::reader;
use swpack::cover::Resizer;
use swpack::pack::{self, ExternalIds, SeriesJob, SourceOptions};
use swpack::{import, source};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output =
        cli::output::OutputConfig::from_global(cli.json, cli.verbose, cli.quiet, cli.no_color);
    let resizer = Resizer::new(cli.magick);

    match cli.command {
        Resource::Entry { command } => handle_entry(command, &resizer, &output)?,
        Resource::Series { command } => handle_series(command, &resizer, &output)?,
        Resource::Import { command } => handle_import(command, &resizer, &output)?,
    }

    Ok(())
}

fn handle_entry(
    command: cli::entry::EntryCommand,
    resizer: &Resizer,
    output: &cli::output::OutputConfig,
) -> Result<()> {
    use cli::entry::EntryCommand;

    match command {
        EntryCommand::Pack {
            dir,
            output: out_dir,
            series,
            comic,
            chapter,
        } => {
            let manga = source::read_source(&dir)
                .with_context(|| format!("failed to read source at {}", dir.display()))?;
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));

            let opts = SourceOptions {
                series,
                is_comic: comic,
                chapter,
            };
            let outcomes = pack::pack_source(&manga, &dir, &out_dir, resizer, &opts);

            if let Some(index) = chapter
                && outcomes.is_empty()
            {
                anyhow::bail!("no chapter with index {index} in {}", dir.display());
            }

            let mut failed = 0;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(path) => output.status(&format!(
                        "Packed chapter {} ({}) -> {}",
                        outcome.index,
                        outcome.name,
                        path.display()
                    )),
                    Err(e) => {
                        failed += 1;
                        output.warn(&format!(
                            "chapter {} ({}): {e}",
                            outcome.index, outcome.name
                        ));
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} of {} chapter(s) failed", outcomes.len());
            }
            output.detail(&format!("  {} chapter(s) packed", outcomes.len()));
        }
        EntryCommand::Info { file } => {
            let info = reader::read_entry_info(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            if output.json {
                output.print_json(&info)?;
            } else {
                println!("Name:    {}", info.name);
                println!("Series:  {}", info.series);
                println!("Manga:   {}", if info.is_manga { "yes" } else { "no" });
                println!("Pages:   {}", info.pages.len());
                output.detail(&format!("Cover:   {}", info.cover));
                for page in &info.pages {
                    output.detail(&format!("  {page}"));
                }
            }
        }
        EntryCommand::Validate { file } => {
            let issues = reader::validate_entry(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            if output.json {
                let json = serde_json::json!({
                    "valid": issues.is_empty(),
                    "issues": issues,
                });
                output.print_json(&json)?;
            } else if issues.is_empty() {
                println!("{}: valid", file.display());
            } else {
                println!("{}: {} issue(s)", file.display(), issues.len());
                for issue in &issues {
                    println!("  - {issue}");
                }
            }
            if !issues.is_empty() {
                anyhow::bail!("{} issue(s) found", issues.len());
            }
        }
    }

    Ok(())
}

fn handle_series(
    command: cli::series::SeriesCommand,
    resizer: &Resizer,
    output: &cli::output::OutputConfig,
) -> Result<()> {
    use cli::series::SeriesCommand;

    match command {
        SeriesCommand::Pack {
            dir,
            output: out_dir,
            cover,
            mal_id,
            anilist_id,
        } => {
            let manga = source::read_source(&dir)
                .with_context(|| format!("failed to read source at {}", dir.display()))?;
            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));

            let cover = match cover {
                Some(path) => path,
                None => manga.cover_path(&dir).ok_or_else(|| {
                    anyhow::anyhow!("no cover: manifest names none and there are no pages")
                })?,
            };

            let job = SeriesJob {
                name: manga.title.clone(),
                cover,
                ids: ExternalIds {
                    mal: mal_id.unwrap_or_default(),
                    anilist: anilist_id.unwrap_or_default(),
                },
            };
            let out = pack::pack_series(&job, &out_dir, resizer)
                .with_context(|| format!("packing series {}", manga.title))?;
            output.status(&format!("Packed series -> {}", out.display()));
        }
        SeriesCommand::Info { file } => {
            let info = reader::read_series_info(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            if output.json {
                output.print_json(&info)?;
            } else {
                println!("Name:    {}", info.name);
                println!("Type:    {}", info.kind);
                if !info.mal_id.is_empty() {
                    println!("MAL:     {}", info.mal_id);
                }
                if !info.anilist_id.is_empty() {
                    println!("AniList: {}", info.anilist_id);
                }
                println!("Cover:   {}", info.cover.original);
                output.detail(&format!(
                    "  variants: {}, {}, {}",
                    info.cover.large, info.cover.medium, info.cover.small
                ));
            }
        }
    }

    Ok(())
}

fn handle_import(
    command: cli::import::ImportCommand,
    resizer: &Resizer,
    output: &cli::output::OutputConfig,
) -> Result<()> {
    use cli::import::ImportCommand;

    match command {
        ImportCommand::Cbz {
            file,
            output: out_dir,
            series,
        } => {
            let scan = import::scan_archive(&file)
                .with_context(|| format!("failed to scan {}", file.display()))?;
            for name in &scan.skipped {
                output.warn(&format!("skipping unsupported entry: {name}"));
            }
            output.detail(&format!(
                "  {} page(s), title '{}'",
                scan.pages.len(),
                scan.title
            ));

            let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
            let job = scan.into_job(series);
            let out = pack::pack_entry(&job, &out_dir, resizer)
                .with_context(|| format!("importing {}", file.display()))?;
            output.status(&format!("Imported {} -> {}", file.display(), out.display()));
        }
    }

    Ok(())
}
