use regex::Regex;
use std::sync::LazyLock;

use crate::core::config::Config;
use crate::utils::fs::split_lines;

use super::imports::{has_import, inject_import};
use super::oracle::SkipOracle;
use super::traits::{Codemod, Transform};

pub const HELPER_MODULE: &str = "utils.db_helpers";
pub const HELPER_SYMBOL: &str = "check_row_or_abort";
pub const HELPER_FILE: &str = "utils/db_helpers.py";
pub const IMPORT_LINE: &str = "from utils.db_helpers import check_row_or_abort";

static FETCHONE_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\w+)\s*=\s*result\.fetchone\(\)\s*$").unwrap());

/// Inserts `check_row_or_abort(row, 'Not found', 404)` after every
/// `row = result.fetchone()` that is not already guarded.
pub struct RowCheckCodemod;

impl Codemod for RowCheckCodemod {
    fn name(&self) -> &'static str {
        "add-row-checks"
    }

    fn description(&self) -> &'static str {
        "Add check_row_or_abort after unchecked result.fetchone() assignments"
    }

    fn excludes(&self, relative_path: &str) -> bool {
        relative_path == HELPER_FILE
    }

    fn transform(&self, content: &str, config: &Config) -> Transform {
        let lines = split_lines(content);
        let window = config.lookahead_window();
        let mut out = String::with_capacity(content.len() + 128);
        let mut sites = 0;

        for (i, line) in lines.iter().enumerate() {
            out.push_str(line);

            let Some(caps) = FETCHONE_ASSIGN.captures(line) else {
                continue;
            };
            let indent = &caps[1];
            let ident = &caps[2];
            if SkipOracle::for_identifier(ident).already_checked(&lines, i, window) {
                continue;
            }

            let eol = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
            if !line.ends_with('\n') {
                out.push_str(eol);
            }
            out.push_str(&format!(
                "{indent}{HELPER_SYMBOL}({ident}, 'Not found', 404){eol}"
            ));
            sites += 1;
        }

        if sites == 0 {
            return Transform::unchanged(content);
        }
        if !has_import(&out, HELPER_MODULE, HELPER_SYMBOL) {
            out = inject_import(&out, IMPORT_LINE, config.import_window());
        }
        Transform::new(content, out, sites)
    }
}
