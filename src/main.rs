// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use salonta_docs::utils::logging::{format_error, format_success, format_warning};
use salonta_docs::{
    Config, DocumentStore, DocumentsView, FileBadge, GroupingMode, JsonExporter, outline,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "salonta_docs")]
#[command(version)]
#[command(about = "Group, order and preview municipal documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grouped documents as they would be shown on a page
    Group {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Grouping mode, `year_category` or anything else for flat
        #[arg(long)]
        mode: Option<String>,

        /// Toggle a panel after mounting, `2023` or `2023|anexe`
        #[arg(long = "open", value_name = "KEY")]
        toggles: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(short, long)]
        pretty: bool,

        /// Reject the input on the first invalid record
        #[arg(long)]
        strict: bool,
    },

    /// Write the render tree and a manifest as JSON files
    Export {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        mode: Option<String>,

        #[arg(short, long, conflicts_with = "compact")]
        pretty: bool,

        /// Write single-line JSON even when the config asks for pretty output
        #[arg(long)]
        compact: bool,
    },

    /// Show the file-type badge for file names
    Badge {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Validate a document file without rendering it
    Verify {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    salonta_docs::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Group {
            input,
            mode,
            toggles,
            format,
            pretty,
            strict,
        } => {
            cmd_group(
                &config,
                &input,
                mode.as_deref(),
                &toggles,
                format,
                pretty,
                strict,
                cli.color,
            )?;
        }
        Commands::Export {
            input,
            output,
            mode,
            pretty,
            compact,
        } => {
            let pretty = export_pretty(pretty, compact, config.export.pretty);
            cmd_export(&config, &input, output, mode.as_deref(), pretty)?;
        }
        Commands::Badge { names } => {
            cmd_badge(&names);
        }
        Commands::Verify { input } => {
            cmd_verify(&config, &input)?;
        }
    }

    Ok(())
}

fn resolve_mode(config: &Config, mode: Option<&str>) -> GroupingMode {
    mode.map(GroupingMode::from).unwrap_or(config.presenter.grouping_mode)
}

fn mount_view(
    config: &Config,
    input: &Path,
    mode: GroupingMode,
    strict: bool,
) -> Result<DocumentsView> {
    let rules = config.ordering_rules();
    let store = DocumentStore::new(mode, rules.clone()).strict(strict);
    let bucketed = store
        .load(input)
        .with_context(|| format!("Failed to load documents from {}", input.display()))?;

    if bucketed.skipped > 0 {
        warn!("Skipped {} invalid records", bucketed.skipped);
    }

    Ok(DocumentsView::mount(bucketed, mode, config.labels.clone(), rules))
}

#[allow(clippy::too_many_arguments)]
fn cmd_group(
    config: &Config,
    input: &Path,
    mode: Option<&str>,
    toggles: &[String],
    format: OutputFormat,
    pretty: bool,
    strict: bool,
    color: bool,
) -> Result<()> {
    let mode = resolve_mode(config, mode);
    let mut view = mount_view(config, input, mode, strict)?;

    for raw in toggles {
        let key = view.key(raw);
        let open = view.toggle(&key);
        info!("{} is now {}", key, if open { "open" } else { "closed" });
    }

    let rendered = view.render();
    match format {
        OutputFormat::Text => print!("{}", outline(&rendered, color)),
        OutputFormat::Json => println!("{}", JsonExporter::render_json(&rendered, pretty)?),
    }

    Ok(())
}

fn cmd_export(
    config: &Config,
    input: &Path,
    output: Option<PathBuf>,
    mode: Option<&str>,
    pretty: bool,
) -> Result<()> {
    let mode = resolve_mode(config, mode);
    let view = mount_view(config, input, mode, false)?;

    let output = output.unwrap_or_else(|| config.export.output_dir.clone());
    let exporter = JsonExporter::new(output).context("Failed to create export directory")?;
    let manifest = exporter.export(&view.render(), pretty).context("Export failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} documents to {}",
            manifest.total_documents,
            exporter.output_dir().display()
        ))
    );
    Ok(())
}

/// `--compact` wins, `--pretty` forces pretty output, otherwise the config decides.
fn export_pretty(pretty: bool, compact: bool, configured: bool) -> bool {
    !compact && (pretty || configured)
}

fn cmd_badge(names: &[String]) {
    for name in names {
        println!("{}\t{}", FileBadge::infer(name), name);
    }
}

fn cmd_verify(config: &Config, input: &Path) -> Result<()> {
    let mode = config.presenter.grouping_mode;
    let store = DocumentStore::new(mode, config.ordering_rules());

    let bucketed = match store.load(input) {
        Ok(bucketed) => bucketed,
        Err(e) => {
            println!("{}", format_error(&e.to_string()));
            return Err(e).context("Verification failed");
        }
    };

    if bucketed.skipped > 0 {
        println!(
            "{}",
            format_warning(&format!("{} records would be skipped", bucketed.skipped))
        );
    }

    println!(
        "{}",
        format_success(&format!(
            "{} documents in {} groups ({} mode)",
            bucketed.document_count(),
            bucketed.group_count(),
            mode
        ))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_pretty_resolution() {
        assert!(export_pretty(false, false, true));
        assert!(!export_pretty(false, true, true));
        assert!(export_pretty(true, false, false));
        assert!(!export_pretty(false, false, false));
    }

    #[test]
    fn test_compact_conflicts_with_pretty() {
        let parsed = Cli::try_parse_from([
            "salonta_docs",
            "export",
            "--input",
            "docs.json",
            "--pretty",
            "--compact",
        ]);
        assert!(parsed.is_err());
    }
}
