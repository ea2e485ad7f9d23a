//! Fixed inputs: the target list and the spliced boilerplate.
//!
//! The templates are opaque text and are inserted byte-for-byte, trailing
//! whitespace included. Do not reformat them.

/// Route handlers to patch, in processing order.
pub const TARGET_FILES: [&str; 5] = [
    "api/tenants/index.ts",
    "api/units/index.ts",
    "api/leases/index.ts",
    "api/payments/index.ts",
    "api/dashboard/stats.ts",
];

/// Inserted after the authorization guard. Opens the `try` region that
/// [`TEARDOWN_BLOCK`] closes.
pub const SETUP_BLOCK: &str = r#"  // Create database connection
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
"#;

/// Replaces the trailing function closer: closes the `try` region, releases
/// the connection, and re-closes the function.
pub const TEARDOWN_BLOCK: &str = "\n  } finally {\n    await sql.end();\n  }\n}";
