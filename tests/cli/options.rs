use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_lines};

const AMD_LAZY: &str = r#"
define(['./a'], function (a) {
  return function () {
    require(['./lazy'], function () {});
  };
});
"#;

#[test]
fn config_file_passes_detective_options() -> Result<()> {
    let test = CliTest::with_file("main.js", AMD_LAZY)?;
    test.write_file("precinct.json", r#"{ "amd": { "skipLazyLoaded": true } }"#)?;

    let default = test.run(&["main.js"])?;
    assert_eq!(stdout_lines(&default), vec!["./a", "./lazy"]);

    let configured = test.run(&["--config", "precinct.json", "main.js"])?;
    assert!(configured.status.success());
    assert_eq!(stdout_lines(&configured), vec!["./a"]);
    Ok(())
}

#[test]
fn flags_override_the_config_file() -> Result<()> {
    let test = CliTest::with_file("styles.txt", "@import \"_foo\";\n")?;
    test.write_file("precinct.json", r#"{ "type": "coffee" }"#)?;

    let from_config = test.run(&["-c", "precinct.json", "styles.txt"])?;
    assert!(from_config.status.success());
    assert!(from_config.stdout.is_empty());

    let overridden = test.run(&["-c", "precinct.json", "-t", "scss", "styles.txt"])?;
    assert_eq!(stdout_lines(&overridden), vec!["_foo"]);
    Ok(())
}

#[test]
fn config_can_exclude_core_modules() -> Result<()> {
    let test = CliTest::with_file("index.js", "require('path');\nrequire('./local');\n")?;
    test.write_file("precinct.json", r#"{ "includeCore": false }"#)?;

    let output = test.run(&["-c", "precinct.json", "index.js"])?;

    assert_eq!(stdout_lines(&output), vec!["./local"]);
    Ok(())
}

#[test]
fn malformed_config_fails() -> Result<()> {
    let test = CliTest::with_file("index.js", "require('./a');\n")?;
    test.write_file("precinct.json", "{ nope")?;

    let output = test.run(&["-c", "precinct.json", "index.js"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"), "{stderr}");
    Ok(())
}

#[test]
fn missing_config_fails() -> Result<()> {
    let test = CliTest::with_file("index.js", "require('./a');\n")?;

    let output = test.run(&["-c", "absent.json", "index.js"])?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
