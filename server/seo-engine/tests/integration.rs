//! Integration tests for the SEO engine JSON contract.

use seo_engine::{audit, AuditInput, AuditReport};

const FIXTURE: &str = r#"{
    "title": "How to Learn Guitar Fast? 10 Tips (Beginner Guide)",
    "description": "In this guitar lesson you learn the fastest way to practice chords. Like and subscribe for weekly lessons!\n0:00 Intro\n1:30 Chords\n5:45 Practice plan",
    "tags": "guitar, guitar lesson, beginner guitar, chords, practice"
  }"#;

fn fixture_input() -> AuditInput {
  serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn full_report_serializes_with_camel_case_fields() {
  let report = audit(&fixture_input());
  let value = serde_json::to_value(&report).unwrap();

  assert!(value["score"].is_u64());
  let results = value["results"].as_array().unwrap();
  assert_eq!(results.len(), 7);
  for r in results {
    assert!(r["name"].is_string());
    assert!(r["maxScore"].is_u64());
    assert!(r["message"].is_string());
    let status = r["status"].as_str().unwrap();
    assert!(matches!(status, "high" | "med" | "low"));
    assert!(r["score"].as_u64().unwrap() <= r["maxScore"].as_u64().unwrap());
  }
}

#[test]
fn well_optimized_video_scores_high() {
  let report = audit(&fixture_input());
  assert_eq!(report.score_percentage, 100);
}

#[test]
fn missing_fields_default_to_empty() {
  let raw: AuditInput = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
  let report = audit(&raw);
  assert_eq!(report.results[1].message, "Description is recommended");
  assert_eq!(report.results[2].message, "Tags are recommended");
  assert_eq!(report.results[3].message, "Need both title and description");
}

#[test]
fn null_fields_are_treated_as_empty() {
  let raw: AuditInput =
    serde_json::from_str(r#"{"title": null, "description": null, "tags": null}"#).unwrap();
  assert!(raw.title.is_empty());
  assert_eq!(audit(&raw).results[0].message, "Title is required");
}

#[test]
fn empty_object_is_still_a_valid_report() {
  let raw: AuditInput = serde_json::from_str("{}").unwrap();
  let report = audit(&raw);
  assert_eq!(report.results[0].message, "Title is required");
  // CTA 5 + engagement 5.
  assert_eq!(report.score_percentage, 10);
}

#[test]
fn report_round_trips_through_json() {
  let report = audit(&fixture_input());
  let json = serde_json::to_string(&report).unwrap();
  let back: AuditReport = serde_json::from_str(&json).unwrap();
  assert_eq!(report, back);
}

#[test]
fn deterministic_output_across_runs() {
  let a = serde_json::to_string(&audit(&fixture_input())).unwrap();
  let b = serde_json::to_string(&audit(&fixture_input())).unwrap();
  assert_eq!(a, b, "Same inputs must produce identical JSON output");
}

fn run_engine(stdin: &[u8]) -> std::process::Output {
  use std::io::Write;
  use std::process::{Command, Stdio};

  let mut child = Command::new(env!("CARGO_BIN_EXE_seo-engine"))
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();
  child.stdin.take().unwrap().write_all(stdin).unwrap();
  child.wait_with_output().unwrap()
}

#[test]
fn binary_reports_on_stdout() {
  let out = run_engine(FIXTURE.as_bytes());
  assert!(out.status.success());
  assert!(out.stderr.is_empty());

  let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(report["score"], 100);
  assert_eq!(report["results"].as_array().unwrap().len(), 7);
}

#[test]
fn binary_exits_one_on_bad_input() {
  let out = run_engine(b"{not json");
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8(out.stderr).unwrap();
  assert!(stderr.starts_with("seo-engine error:"), "{}", stderr);
}
