//! The two regex transforms applied to a handler's source text.

use std::sync::OnceLock;

use regex::Regex;

use crate::boilerplate::{SETUP_BLOCK, TEARDOWN_BLOCK};

/// Insert [`SETUP_BLOCK`] after every authorization-guard clause.
///
/// The guard is matched whitespace-tolerantly across its line breaks, and
/// both quote styles around `Unauthorized` are accepted. The whitespace that
/// follows the guard's closing brace is consumed by the match, so the
/// statement after the insertion point starts at column 0. Text without a
/// guard comes back unchanged.
pub fn inject_setup(source: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r#"(if \(!auth\) \{\s+return res\.status\(401\)\.json\(\{ error: ['"]Unauthorized['"] \}\);\s+\})\s+"#,
        )
        .unwrap()
    });
    let replacement = format!("${{1}}\n\n{SETUP_BLOCK}");
    re.replace_all(source, replacement.as_str()).into_owned()
}

/// Replace the trailing function closer with [`TEARDOWN_BLOCK`].
///
/// Runs whether or not [`inject_setup`] matched anything; a handler without
/// the guard still gains the `finally` clause. Whitespace after the final
/// brace is dropped. Text that does not end in `\n}` plus optional
/// whitespace comes back unchanged.
pub fn inject_teardown(source: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(\n\})\s*$").unwrap());
    re.replace_all(source, TEARDOWN_BLOCK).into_owned()
}

/// Full splice: setup injection first, then the unconditional teardown.
pub fn patch_source(source: &str) -> String {
    inject_teardown(&inject_setup(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HANDLER: &str = r#"export default async function handler(req, res) {
  const auth = await verify(req);
  if (!auth) {
    return res.status(401).json({ error: 'Unauthorized' });
  }
  const data = await fetchData();
  return res.json(data);
}
"#;

    const PATCHED: &str = r#"export default async function handler(req, res) {
  const auth = await verify(req);
  if (!auth) {
    return res.status(401).json({ error: 'Unauthorized' });
  }

  // Create database connection
  const databaseUrl = process.env.DATABASE_URL;
  if (!databaseUrl) {
    return res.status(500).json({ error: 'Database not configured' });
  }

  const sql = postgres(databaseUrl, { 
    prepare: false,
    max: 1,
  });
  const db = drizzle(sql);

  try {
const data = await fetchData();
  return res.json(data);
  } finally {
    await sql.end();
  }
}"#;

    #[test]
    fn patch_matches_expected_handler_output() {
        assert_eq!(patch_source(HANDLER), PATCHED);
    }

    #[test]
    fn setup_inserted_once_directly_after_guard() {
        let out = inject_setup(HANDLER);
        assert_eq!(out.matches("// Create database connection").count(), 1);
        assert!(out.contains("  }\n\n  // Create database connection"));
        // The statement after the guard survives, minus the indentation eaten
        // by the match.
        assert!(out.contains("const data = await fetchData();"));
    }

    #[test]
    fn setup_skipped_without_guard() {
        let src = "export default function handler(req, res) {\n  return res.json({});\n}\n";
        assert_eq!(inject_setup(src), src);
    }

    #[test]
    fn setup_accepts_double_quoted_unauthorized() {
        let src = "f() {\n  if (!auth) {\n    return res.status(401).json({ error: \"Unauthorized\" });\n  }\n  next();\n}\n";
        let out = inject_setup(src);
        assert_eq!(out.matches("// Create database connection").count(), 1);
    }

    #[test]
    fn setup_tolerates_deeper_indentation() {
        let src = "g() {\n    if (!auth) {\n            return res.status(401).json({ error: 'Unauthorized' });\n        }\n        next();\n}\n";
        let out = inject_setup(src);
        assert_eq!(out.matches("// Create database connection").count(), 1);
    }

    #[test]
    fn teardown_replaces_trailing_closer_and_whitespace() {
        let out = inject_teardown("function f() {\n  body;\n}\n\n");
        assert_eq!(out, "function f() {\n  body;\n  } finally {\n    await sql.end();\n  }\n}");
    }

    #[test]
    fn teardown_applies_without_guard() {
        let src = "export default function handler(req, res) {\n  return res.json({});\n}\n";
        let out = patch_source(src);
        assert!(out.contains("} finally {"));
        assert!(!out.contains("databaseUrl"));
    }

    #[test]
    fn teardown_noop_without_trailing_closer() {
        assert_eq!(inject_teardown("no closer here"), "no closer here");
        assert_eq!(inject_teardown(""), "");
    }

    #[test]
    fn double_patch_duplicates_blocks() {
        let once = patch_source(HANDLER);
        let twice = patch_source(&once);
        assert_eq!(twice.matches("// Create database connection").count(), 2);
        assert_eq!(twice.matches("} finally {").count(), 2);
    }
}
