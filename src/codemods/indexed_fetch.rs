use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::core::config::Config;

use super::traits::{Codemod, Transform};

static INDEXED_FETCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)(\w+)[ \t]*=[ \t]*result\.fetchone\(\)\[0\][ \t]*(\r?)$").unwrap()
});

/// Splits `x = result.fetchone()[0]` into a fetch, a None guard that returns
/// a 500, and the index.
pub struct IndexedFetchCodemod;

impl Codemod for IndexedFetchCodemod {
    fn name(&self) -> &'static str {
        "split-indexed-fetch"
    }

    fn description(&self) -> &'static str {
        "Guard result.fetchone()[0] against an empty result"
    }

    fn transform(&self, content: &str, _config: &Config) -> Transform {
        let mut sites = 0;
        let replaced = INDEXED_FETCH.replace_all(content, |caps: &Captures| {
            sites += 1;
            let indent = &caps[1];
            let ident = &caps[2];
            let cr = &caps[3];
            format!(
                "{indent}row = result.fetchone(){cr}\n\
                 {indent}if row is None:{cr}\n\
                 {indent}    return jsonify({{'error': 'Insert failed'}}), 500{cr}\n\
                 {indent}{ident} = row[0]{cr}"
            )
        });

        if sites == 0 {
            return Transform::unchanged(content);
        }
        Transform::new(content, replaced.into_owned(), sites)
    }
}
