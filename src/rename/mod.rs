//! Renamer: replaces vendor-default avatar filenames with codenames.
//!
//! Pipeline:
//! - discover `Default_*` images and order them by normalized key
//! - assign seeded, unique codenames and check for collisions
//! - print a preview
//! - write the CSV/JSON audit maps, then rename in mapping order
//!
//! The audit maps always land on disk before the first rename. A failure
//! partway through the rename pass is not rolled back.

pub mod audit;
pub mod codename;
pub mod discovery;
pub mod plan;

use std::fs;

pub use audit::{write_audit, AuditFiles, CSV_MAP_NAME, JSON_MAP_NAME};
pub use codename::CodenameGenerator;
pub use discovery::{discover_images, ImageFile};
pub use plan::{build_plan, RenameMapping, RenamePlan};

use crate::config::RenameConfig;
use crate::error::Result;
use crate::output::{create_item_bar, print_info, print_preview};

/// What a renamer run did.
#[derive(Debug)]
pub enum RenameOutcome {
    /// No matching files in the directory.
    NothingFound,
    /// Dry run, plan printed only.
    DryRun(RenamePlan),
    /// Audit maps written and every file renamed.
    Renamed { plan: RenamePlan, audit: AuditFiles },
}

/// Run the renamer once over the configured directory.
pub fn run_rename(config: &RenameConfig) -> Result<RenameOutcome> {
    let files = discover_images(config)?;
    if files.is_empty() {
        print_info(&format!(
            "No {}* image files found.",
            config.name_prefix
        ));
        return Ok(RenameOutcome::NothingFound);
    }

    let plan = build_plan(config, &files)?;
    print_preview(&plan, config.preview_limit);

    if config.dry_run {
        return Ok(RenameOutcome::DryRun(plan));
    }

    let audit = write_audit(&plan)?;
    apply_plan(&plan, config.show_progress)?;

    Ok(RenameOutcome::Renamed { plan, audit })
}

/// Rename every file in mapping order, stopping at the first failure.
pub fn apply_plan(plan: &RenamePlan, show_progress: bool) -> Result<()> {
    if plan.is_empty() {
        return Ok(());
    }

    let bar = show_progress.then(|| create_item_bar(plan.len() as u64, "Renaming"));

    for mapping in &plan.mappings {
        let from = plan.directory.join(&mapping.old);
        let to = plan.directory.join(&mapping.new);
        tracing::debug!("Renaming {} -> {}", from.display(), to.display());
        fs::rename(&from, &to)?;

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    Ok(())
}
