//! Run reports for the renamer.

use console::style;

use crate::output::console::print_warning;
use crate::rename::{RenameOutcome, RenamePlan};

/// Header line followed by the first `limit` mappings, plus a
/// `... and N more` line when the plan is longer.
pub fn preview_lines(plan: &RenamePlan, limit: usize) -> Vec<String> {
    let mut lines = vec![format!("Renaming {} avatar files:", plan.len())];

    lines.extend(
        plan.mappings
            .iter()
            .take(limit)
            .map(|m| format!("{} -> {}", m.old, m.new)),
    );
    if plan.len() > limit {
        lines.push(format!("... and {} more", plan.len() - limit));
    }

    lines
}

/// Print the number of planned renames and the first `limit` mappings.
pub fn print_preview(plan: &RenamePlan, limit: usize) {
    let mut lines = preview_lines(plan, limit).into_iter();

    println!();
    if let Some(header) = lines.next() {
        println!("{}", style(header).bold());
    }
    println!();
    for line in lines {
        println!("  {}", line);
    }
}

/// Print the closing lines for a finished run.
pub fn print_rename_summary(outcome: &RenameOutcome) {
    match outcome {
        RenameOutcome::NothingFound => {}
        RenameOutcome::DryRun(_) => {
            println!();
            print_warning("DRY RUN - no files renamed.");
        }
        RenameOutcome::Renamed { audit, .. } => {
            println!();
            println!("{}", style("Done.").green().bold());
            println!("Generated:");
            for path in [&audit.csv, &audit.json] {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                println!(" - {}", name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::RenameMapping;
    use std::path::PathBuf;

    fn plan_of(count: usize) -> RenamePlan {
        RenamePlan {
            directory: PathBuf::from("."),
            mappings: (0..count)
                .map(|i| RenameMapping {
                    old: format!("Default_{}.png", i),
                    new: format!("Name{}.png", i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_preview_empty_plan() {
        assert_eq!(
            preview_lines(&plan_of(0), 20),
            vec!["Renaming 0 avatar files:".to_string()]
        );
    }

    #[test]
    fn test_preview_exactly_at_limit() {
        let lines = preview_lines(&plan_of(20), 20);
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "Renaming 20 avatar files:");
        assert_eq!(lines[20], "Default_19.png -> Name19.png");
        assert!(!lines.iter().any(|l| l.contains("more")));
    }

    #[test]
    fn test_preview_truncates_past_limit() {
        let lines = preview_lines(&plan_of(25), 20);
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[1], "Default_0.png -> Name0.png");
        assert_eq!(lines[20], "Default_19.png -> Name19.png");
        assert_eq!(lines[21], "... and 5 more");
    }
}
