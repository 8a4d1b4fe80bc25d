use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["textSource"], "input.param");
    assert_eq!(
        parsed["structuredSources"],
        serde_json::json!(["input.json"])
    );
    assert_eq!(parsed["extensions"], serde_json::json!(["ksh", "btq"]));
    assert_eq!(parsed["keyMode"], "normalize");
    assert_eq!(parsed["failOnDiff"], false);

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created"));
    assert!(test.root().join(".depdiffrc.json").exists());

    let content = test.read_file(".depdiffrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".depdiffrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stderr, "error: .depdiffrc.json already exists\n");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file("input.json", r#"["a.ksh"]"#)?;
    test.write_file("input.param", "a.ksh\n")?;

    let output = run(&mut test.compare_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Compare should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
