//! Audit trail written before any file is renamed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rename::plan::RenamePlan;

/// CSV audit filename, written inside the scanned directory.
pub const CSV_MAP_NAME: &str = "avatar_rename_map.csv";

/// JSON audit filename, written inside the scanned directory.
pub const JSON_MAP_NAME: &str = "avatar_rename_map.json";

/// Paths of the written audit files.
#[derive(Debug, Clone)]
pub struct AuditFiles {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Write both audit maps into the plan's directory.
pub fn write_audit(plan: &RenamePlan) -> Result<AuditFiles> {
    let csv = plan.directory.join(CSV_MAP_NAME);
    let json = plan.directory.join(JSON_MAP_NAME);

    write_csv(&csv, plan)?;
    write_json(&json, plan)?;

    tracing::info!("Audit maps written to {}", plan.directory.display());
    Ok(AuditFiles { csv, json })
}

/// Two-column CSV with an `old_name,new_name` header and CRLF line endings.
fn write_csv(path: &Path, plan: &RenamePlan) -> Result<()> {
    let mut out = String::from("old_name,new_name\r\n");
    for mapping in &plan.mappings {
        out.push_str(&csv_field(&mapping.old));
        out.push(',');
        out.push_str(&csv_field(&mapping.new));
        out.push_str("\r\n");
    }
    fs::write(path, out)?;
    Ok(())
}

/// Array of `{"old", "new"}` objects.
fn write_json(path: &Path, plan: &RenamePlan) -> Result<()> {
    let content = serde_json::to_string_pretty(&plan.mappings)?;
    fs::write(path, content)?;
    Ok(())
}

/// Quote a field only when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::plan::RenameMapping;

    fn plan_in(dir: &Path) -> RenamePlan {
        RenamePlan {
            directory: dir.to_path_buf(),
            mappings: vec![
                RenameMapping {
                    old: "Default_A.png".to_string(),
                    new: "NovaEchoIX.png".to_string(),
                },
                RenameMapping {
                    old: "Default_B,1.png".to_string(),
                    new: "VegaRookArc.png".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_csv_field() {
        assert_eq!(csv_field("plain.png"), "plain.png");
        assert_eq!(csv_field("a,b.png"), "\"a,b.png\"");
        assert_eq!(csv_field("say \"hi\".png"), "\"say \"\"hi\"\".png\"");
    }

    #[test]
    fn test_write_audit() {
        let dir = tempfile::tempdir().unwrap();
        let plan = plan_in(dir.path());
        let files = write_audit(&plan).unwrap();

        let csv = fs::read_to_string(&files.csv).unwrap();
        assert_eq!(
            csv,
            "old_name,new_name\r\nDefault_A.png,NovaEchoIX.png\r\n\"Default_B,1.png\",VegaRookArc.png\r\n"
        );

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&files.json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"old": "Default_A.png", "new": "NovaEchoIX.png"},
                {"old": "Default_B,1.png", "new": "VegaRookArc.png"}
            ])
        );
    }
}
