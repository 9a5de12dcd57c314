use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::core::runner::RunResult;

pub struct ReportFormatter {
    format: String,
}

impl ReportFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display(&self, result: &RunResult) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write(result, &mut out)?;
        out.flush()?;

        eprintln!(
            "  {} {} scanned, {} modified, {} skipped in {:.1}s",
            "DONE".green(),
            result.files_scanned,
            result.modified.len().to_string().bold(),
            result.files_skipped,
            result.duration.as_secs_f64()
        );
        Ok(())
    }

    pub fn write<W: Write>(&self, result: &RunResult, out: &mut W) -> Result<()> {
        match self.format.as_str() {
            "json" => self.write_json(result, out),
            _ => self.write_table(result, out),
        }
    }

    fn write_json<W: Write>(&self, result: &RunResult, out: &mut W) -> Result<()> {
        let output = serde_json::json!({
            "codemod": result.codemod,
            "root": result.root.to_string_lossy(),
            "modified": result.modified,
            "files_scanned": result.files_scanned,
            "files_skipped": result.files_skipped,
            "duration_ms": result.duration.as_millis() as u64,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        Ok(())
    }

    fn write_table<W: Write>(&self, result: &RunResult, out: &mut W) -> Result<()> {
        if result.modified.is_empty() {
            writeln!(out, "No files modified.")?;
            return Ok(());
        }
        writeln!(out, "Modified files:")?;
        for change in &result.modified {
            writeln!(out, "{}", change.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runner::FileChange;
    use std::path::PathBuf;
    use std::time::Duration;

    fn make_result(modified: Vec<FileChange>) -> RunResult {
        RunResult {
            codemod: "add-row-checks",
            root: PathBuf::from("/project"),
            modified,
            files_scanned: 3,
            files_skipped: 1,
            duration: Duration::from_millis(12),
        }
    }

    fn render(format: &str, result: &RunResult) -> String {
        let mut buf = Vec::new();
        ReportFormatter::new(format).write(result, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_no_changes() {
        assert_eq!(render("table", &make_result(vec![])), "No files modified.\n");
    }

    #[test]
    fn test_table_lists_modified_paths() {
        let result = make_result(vec![
            FileChange {
                path: "routes/users.py".to_string(),
                sites: 2,
            },
            FileChange {
                path: "routes/orders.py".to_string(),
                sites: 1,
            },
        ]);
        assert_eq!(
            render("table", &result),
            "Modified files:\nroutes/users.py\nroutes/orders.py\n"
        );
    }

    #[test]
    fn test_json_report() {
        let result = make_result(vec![FileChange {
            path: "a.py".to_string(),
            sites: 2,
        }]);
        let value: serde_json::Value = serde_json::from_str(&render("json", &result)).unwrap();
        assert_eq!(value["codemod"], "add-row-checks");
        assert_eq!(value["modified"][0]["path"], "a.py");
        assert_eq!(value["modified"][0]["sites"], 2);
        assert_eq!(value["files_scanned"], 3);
        assert_eq!(value["files_skipped"], 1);
        assert_eq!(value["duration_ms"], 12);
    }
}
