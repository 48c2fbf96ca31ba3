use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use outfitter_cli::output::OutputFormat;
use outfitter_lib::load_catalog;

mod commands;

use commands::build::{handle_edit, handle_show, handle_validate, BuildTarget, Edit};
use commands::catalog::{handle_list_hulls, handle_list_outfits};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ship loadout configurator")]
struct Cli {
    /// Override the catalog file or directory path.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Restrict the catalog to a single release.
    #[arg(long, global = true)]
    release: Option<String>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List hulls in the catalog.
    Hulls,
    /// List outfits in the catalog.
    Outfits,
    /// Show aggregates for a hull's default build or a saved build.
    Show(TargetArgs),
    /// Add units of an outfit to a build.
    Add(EditArgs),
    /// Remove units of an outfit from a build.
    Remove(EditArgs),
    /// Check a build for overdrawn capacities.
    Validate(TargetArgs),
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Hull identity.
    #[arg(long)]
    hull: String,
    /// Saved build file (identity-only JSON template).
    #[arg(long)]
    build: Option<PathBuf>,
}

impl TargetArgs {
    fn target(&self) -> BuildTarget<'_> {
        BuildTarget {
            hull: &self.hull,
            file: self.build.as_deref(),
        }
    }
}

#[derive(Args, Debug)]
struct EditArgs {
    #[command(flatten)]
    target: TargetArgs,
    /// Outfit identity.
    #[arg(long)]
    outfit: String,
    /// Units to add or remove.
    #[arg(long, default_value_t = NonZeroU32::MIN)]
    amount: NonZeroU32,
    /// Write the edited build back to the --build file.
    #[arg(long, requires = "build")]
    save: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref(), cli.release.as_deref())
        .context("failed to load the ship catalog")?;

    match &cli.command {
        Command::Hulls => handle_list_hulls(&catalog, cli.format).map(|_| ExitCode::SUCCESS),
        Command::Outfits => handle_list_outfits(&catalog, cli.format).map(|_| ExitCode::SUCCESS),
        Command::Show(args) => {
            handle_show(&catalog, args.target(), cli.format).map(|_| ExitCode::SUCCESS)
        }
        Command::Add(args) => edit(&catalog, args, Edit::Add, cli.format),
        Command::Remove(args) => edit(&catalog, args, Edit::Remove, cli.format),
        Command::Validate(args) => handle_validate(&catalog, args.target(), cli.format),
    }
}

fn edit(
    catalog: &outfitter_lib::Catalog,
    args: &EditArgs,
    edit: Edit,
    format: OutputFormat,
) -> Result<ExitCode> {
    handle_edit(
        catalog,
        args.target.target(),
        edit,
        &args.outfit,
        args.amount,
        args.save,
        format,
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
