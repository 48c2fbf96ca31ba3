//! Build inspection and editing commands.

use std::num::NonZeroU32;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use outfitter_cli::output::{
    aggregate_report, blocked_message, change_summary, render_json, violation_report,
    OutputFormat,
};
use outfitter_cli::session::{load_build, save_build};
use outfitter_lib::{
    add_outfit, compute_aggregates, remove_outfit, violations, AggregateBundle, AmmoRemoval,
    BuildTemplate, Catalog, LimitingFactor, OutfitId, Violation,
};

/// Exit status for a change the build cannot accommodate or an invalid build.
pub const BLOCKED_EXIT: u8 = 2;

/// Which build a command operates on.
#[derive(Debug, Clone, Copy)]
pub struct BuildTarget<'a> {
    pub hull: &'a str,
    pub file: Option<&'a Path>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Add,
    Remove,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    build: BuildTemplate,
    aggregates: &'a AggregateBundle,
}

#[derive(Serialize)]
struct EditReport<'a> {
    amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    ammo_removed: Option<&'a AmmoRemoval>,
    build: BuildTemplate,
}

#[derive(Serialize)]
struct BlockedReport<'a> {
    blocked: &'a LimitingFactor,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    violations: &'a [Violation],
}

/// Handle the show subcommand.
pub fn handle_show(catalog: &Catalog, target: BuildTarget<'_>, format: OutputFormat) -> Result<()> {
    let build = load_build(catalog, target.hull, target.file, false)?;
    let bundle = compute_aggregates(&build);

    match format {
        OutputFormat::Text => print!("{}", aggregate_report(&build, &bundle)),
        OutputFormat::Json => render_json(&ShowReport {
            build: build.to_template(),
            aggregates: &bundle,
        })
        .context("failed to write aggregates")?,
    }
    Ok(())
}

/// Handle the add and remove subcommands.
///
/// A change that cannot move a single unit prints its limiting factor and
/// exits with [`BLOCKED_EXIT`]; the build file is left untouched.
pub fn handle_edit(
    catalog: &Catalog,
    target: BuildTarget<'_>,
    edit: Edit,
    outfit: &str,
    amount: NonZeroU32,
    save: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut build = load_build(catalog, target.hull, target.file, save)?;
    let outfit = catalog
        .outfit(&OutfitId::new(outfit))
        .with_context(|| format!("cannot {} outfit", edit.verb()))?;

    let result = match edit {
        Edit::Add => add_outfit(&build, outfit, amount),
        Edit::Remove => remove_outfit(&build, outfit, amount),
    };
    let change = match result {
        Ok(change) => change,
        Err(factor) => {
            eprintln!("{}", blocked_message(outfit, &factor));
            if format == OutputFormat::Json {
                render_json(&BlockedReport { blocked: &factor })
                    .context("failed to write limiting factor")?;
            }
            return Ok(ExitCode::from(BLOCKED_EXIT));
        }
    };

    let summary = change_summary(edit.past_tense(), outfit, amount.get(), &change);
    build.set_outfits(change.outfits);

    match format {
        OutputFormat::Text => print!("{summary}"),
        OutputFormat::Json => render_json(&EditReport {
            amount: change.amount,
            ammo_removed: change.ammo_removed.as_ref(),
            build: build.to_template(),
        })
        .context("failed to write change")?,
    }

    if save {
        if let Some(path) = target.file {
            save_build(&build, path)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Handle the validate subcommand.
pub fn handle_validate(
    catalog: &Catalog,
    target: BuildTarget<'_>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let build = load_build(catalog, target.hull, target.file, false)?;
    let found = violations(&build);

    match format {
        OutputFormat::Text => print!("{}", violation_report(&found)),
        OutputFormat::Json => render_json(&ValidationReport {
            valid: found.is_empty(),
            violations: &found,
        })
        .context("failed to write validation report")?,
    }

    Ok(if found.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(BLOCKED_EXIT)
    })
}

impl Edit {
    fn verb(self) -> &'static str {
        match self {
            Edit::Add => "add",
            Edit::Remove => "remove",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Edit::Add => "Added",
            Edit::Remove => "Removed",
        }
    }
}
