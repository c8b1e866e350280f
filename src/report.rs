//! Console output for command results.
//!
//! Text output is meant for humans; `--json` prints one object per line.

use std::path::Path;

use serde::Serialize;
use version_bump_core::Bump;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Serialize)]
struct VersionReport {
    version_code: u64,
}

#[derive(Debug, Serialize)]
struct PreviewReport {
    #[serde(flatten)]
    bump: Bump,
    dry_run: bool,
}

#[derive(Debug, Serialize)]
struct WriteReport<'a> {
    path: &'a Path,
    bytes: usize,
}

pub fn print_bump(bump: &Bump, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            println!("Actual version_code: {}", bump.old);
            println!("New version_code: {}", bump.new);
        }
        Format::Json => println!("{}", serde_json::to_string(bump)?),
    }
    Ok(())
}

pub fn print_preview(bump: &Bump, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            println!("Actual version_code: {}", bump.old);
            println!("Next version_code: {} (dry run, manifest unchanged)", bump.new);
        }
        Format::Json => {
            let report = PreviewReport {
                bump: *bump,
                dry_run: true,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

pub fn print_version(version_code: u64, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => println!("Actual version_code: {version_code}"),
        Format::Json => println!("{}", serde_json::to_string(&VersionReport { version_code })?),
    }
    Ok(())
}

pub fn print_write(path: &Path, bytes: usize, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => println!("Wrote {bytes} bytes to {}", path.display()),
        Format::Json => println!("{}", serde_json::to_string(&WriteReport { path, bytes })?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_selects_format() {
        assert_eq!(Format::from_json_flag(true), Format::Json);
        assert_eq!(Format::from_json_flag(false), Format::Text);
    }

    #[test]
    fn preview_report_flattens_bump() {
        let report = PreviewReport {
            bump: Bump { old: 7, new: 8 },
            dry_run: true,
        };

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "old": 7, "new": 8, "dry_run": true }));
    }

    #[test]
    fn write_report_names_path_and_size() {
        let report = WriteReport {
            path: Path::new("out/testJS.txt"),
            bytes: 13,
        };

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "path": "out/testJS.txt", "bytes": 13 }));
    }
}
