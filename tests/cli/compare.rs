use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const JOBS_JSON: &str = r#"{
  "name": "nightly",
  "steps": [
    { "run": "run/Job.KSH", "retries": 2 },
    { "run": "scripts\\build.btq" }
  ]
}"#;

const JOBS_PARAM: &str = "JOB=run/job.ksh\nCLEANUP=cleanup.ksh\n";

#[test]
fn test_compare_default_sources() -> Result<()> {
    let test = CliTest::with_files(&[("input.json", JOBS_JSON), ("input.param", JOBS_PARAM)])?;

    let output = run(&mut test.compare_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\
Files found in input.param:
  cleanup.ksh
  run/job.ksh

== input.json ==
Files found in input.json:
  .ksh:
    run/Job.KSH
  .btq:
    scripts\\build.btq

--- Comparison Result ---

Common dependencies:
  run/Job.KSH | run/job.ksh

Dependencies only in input.json:
  scripts\\build.btq

Dependencies only in input.param:
  cleanup.ksh

\u{2718} Compared 1 structured source against input.param: 2 differences
"
    );
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_compare_no_files_anywhere() -> Result<()> {
    let test = CliTest::with_files(&[
        ("input.json", r#"{ "notes": "see a.txt" }"#),
        ("input.param", "NOTHING=here\n"),
    ])?;

    let output = run(&mut test.compare_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("No .ksh or .btq files present in either input.json or input.param\n")
    );
    assert!(!output.stdout.contains("--- Comparison Result ---"));
    assert!(!output.stdout.contains("No common dependencies found"));

    Ok(())
}

#[test]
fn test_compare_malformed_source_is_isolated() -> Result<()> {
    let test = CliTest::with_files(&[
        ("flows/a.json", r#"["a.ksh"]"#),
        ("flows/b.json", r#"{ "steps": [ "#),
        ("flows/c.json", r#"{ "run": "c.btq" }"#),
        ("input.param", "a.ksh c.btq"),
    ])?;

    let mut command = test.compare_command();
    let output = run(command.args(["--structured", "flows/*.json"]))?;
    let stdout = &output.stdout;

    assert_eq!(output.code, Some(1));
    assert!(stdout.contains(
        "\
== flows/a.json ==
Files found in flows/a.json:
  .ksh:
    a.ksh
  .btq: none

--- Comparison Result ---

Common dependencies:
  a.ksh | a.ksh

Dependencies only in input.param:
  c.btq
"
    ));
    let malformed = "== flows/b.json ==\nerror: malformed input: cannot parse flows/b.json";
    assert!(stdout.contains(malformed));
    assert!(stdout.contains(
        "\
== flows/c.json ==
Files found in flows/c.json:
  .ksh: none
  .btq:
    c.btq

--- Comparison Result ---

Common dependencies:
  c.btq | c.btq

Dependencies only in input.param:
  a.ksh
"
    ));
    assert_snapshot!(
        stdout.lines().last().unwrap_or_default(),
        @"✘ Compared 3 structured sources against input.param: 2 differences, 1 failed"
    );

    Ok(())
}

#[test]
fn test_compare_missing_structured_source() -> Result<()> {
    let test = CliTest::with_files(&[("input.param", "a.ksh")])?;

    let output = run(test.compare_command().args(["--structured", "absent.json"]))?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("== absent.json ==\nerror: missing source: cannot read absent.json")
    );

    Ok(())
}

#[test]
fn test_compare_missing_text_source_is_an_error() -> Result<()> {
    let test = CliTest::with_files(&[("input.json", "[]")])?;

    let output = run(&mut test.compare_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(
        output
            .stderr
            .starts_with("error: Failed to load the text source: cannot read input.param")
    );

    Ok(())
}

#[test]
fn test_compare_fail_on_diff() -> Result<()> {
    let test = CliTest::with_files(&[("input.json", JOBS_JSON), ("input.param", JOBS_PARAM)])?;

    let output = run(test.compare_command().arg("--fail-on-diff"))?;

    assert_eq!(output.code, Some(1));

    Ok(())
}

#[test]
fn test_compare_identical_sources_succeeds() -> Result<()> {
    let test = CliTest::with_files(&[
        ("input.json", r#"["a.ksh", "B.btq"]"#),
        ("input.param", "b.btq\n./a.ksh\n"),
    ])?;

    let output = run(test.compare_command().arg("--fail-on-diff"))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(
        output.stdout.lines().last().unwrap_or_default(),
        @"✓ Compared 1 structured source against input.param: no differences"
    );

    Ok(())
}

#[test]
fn test_compare_case_fold_mode() -> Result<()> {
    let test = CliTest::with_files(&[
        ("input.json", r#"["scripts\\build.btq"]"#),
        ("input.param", "scripts/build.btq"),
    ])?;

    let normalized = run(&mut test.compare_command())?;
    let case_fold = run(test.compare_command().args(["--key-mode", "case-fold"]))?;

    assert!(normalized.stdout.contains("Common dependencies:"));
    assert!(case_fold.stdout.contains("No common dependencies found"));

    Ok(())
}

#[test]
fn test_compare_uses_config_file() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".depdiffrc.json",
            r#"{
         "textSource": "params/jobs.param",
         "structuredSources": ["defs/*.json"],
         "extensions": ["sql"]
     }"#,
        ),
        ("defs/main.json", r#"["load.sql", "ignored.ksh"]"#),
        ("params/jobs.param", "load.sql\n"),
    ])?;

    let output = run(&mut test.compare_command())?;

    let stdout = &output.stdout;

    assert_eq!(output.code, Some(0));
    assert!(stdout.contains("Files found in params/jobs.param:\n  load.sql\n"));
    assert!(stdout.contains("== defs/main.json ==\nFiles found in defs/main.json:\n  .sql:\n"));
    assert!(stdout.contains("  .sql:\n    load.sql\n"));
    assert!(!stdout.contains("ignored.ksh"));

    Ok(())
}

#[test]
fn test_compare_unmatched_glob_warns() -> Result<()> {
    let test = CliTest::with_files(&[("input.param", "a.ksh")])?;

    let mut command = test.compare_command();
    let output = run(command.args(["--structured", "nothing/*.json"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "warning: no file matches 'nothing/*.json'\n");

    Ok(())
}

#[test]
fn test_compare_invalid_extension_is_an_error() -> Result<()> {
    let test = CliTest::with_files(&[("input.json", "[]"), ("input.param", "")])?;

    let output = run(test.compare_command().args(["--extension", ".ksh"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid extension"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("compare"));
    assert!(output.stdout.contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));

    Ok(())
}
