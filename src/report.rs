// src/report.rs

//! Report emission: one line per surviving hotspot, to stdout or a file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::HotspotDetail;

/// Where report lines go.
///
/// The file variant truncates or creates its target once, at construction,
/// and appends one line per emit.
pub enum ReportSink {
    Stdout,
    File(File),
}

impl ReportSink {
    /// Open the sink. `None` means stdout.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::File(File::create(path)?)),
            None => Ok(Self::Stdout),
        }
    }

    /// Emit one report line with a trailing newline.
    pub fn emit(&mut self, line: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                println!("{line}");
                Ok(())
            }
            Self::File(file) => {
                writeln!(file, "{line}")?;
                Ok(())
            }
        }
    }
}

/// Format the report line for one enriched hotspot.
pub fn format_line(detail: &HotspotDetail, base_url: &str) -> String {
    format!(
        "{}: [{}] {}",
        detail.show.project.key,
        detail.show.rule.key,
        web_url(base_url, &detail.show.project.key, &detail.hotspot.key)
    )
}

/// URL of the hotspot in the server's web UI.
fn web_url(base_url: &str, project_key: &str, hotspot_key: &str) -> String {
    format!("{base_url}/security_hotspots?id={project_key}&hotspots={hotspot_key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hotspot, HotspotShow, Rule, ShowProject};

    fn sample_detail() -> HotspotDetail {
        HotspotDetail {
            hotspot: Hotspot {
                key: "AXhotspot1".to_string(),
                component: "proj:src/lib.rs".to_string(),
                project: "proj".to_string(),
                security_category: "others".to_string(),
                vulnerability_probability: "MEDIUM".to_string(),
                status: "TO_REVIEW".to_string(),
                line: Some(10),
                message: "Review this.".to_string(),
                author: "dev@example.com".to_string(),
                creation_date: "2024-01-01T00:00:00+0000".to_string(),
                update_date: "2024-01-01T00:00:00+0000".to_string(),
            },
            show: HotspotShow {
                rule: Rule {
                    key: "java:S2245".to_string(),
                },
                project: ShowProject {
                    key: "proj".to_string(),
                    name: "Proj".to_string(),
                    qualifier: "TRK".to_string(),
                },
            },
        }
    }

    #[test]
    fn line_format_matches_web_ui_link() {
        let line = format_line(&sample_detail(), "https://sonarcloud.io");
        assert_eq!(
            line,
            "proj: [java:S2245] https://sonarcloud.io/security_hotspots?id=proj&hotspots=AXhotspot1"
        );
    }

    #[test]
    fn file_sink_truncates_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content\n").unwrap();

        let mut sink = ReportSink::open(Some(&path)).unwrap();
        sink.emit("first").unwrap();
        sink.emit("second").unwrap();
        drop(sink);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }
}
