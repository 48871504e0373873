//! Binary entrypoint: read one AuditInput JSON object from stdin, write the report to stdout.

use seo_engine::{audit, AuditInput};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "seo-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let input: AuditInput = serde_json::from_str(&raw)?;

  let report = audit(&input);
  let json = serde_json::to_vec(&report)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
