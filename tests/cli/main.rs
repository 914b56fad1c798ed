use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod options;

const BIN_NAME: &str = "precinct";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run with `args` and return the output.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command()
            .args(args)
            .output()
            .context("Failed to run precinct")
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_one_dependency_per_line() -> Result<()> {
    let test = CliTest::with_file(
        "index.js",
        "var a = require('./a');\nvar b = require('./b');\n",
    )?;

    let output = test.run(&["index.js"])?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["./a", "./b"]);
    Ok(())
}

#[test]
fn prints_nothing_for_files_without_dependencies() -> Result<()> {
    let test = CliTest::with_file("none.js", "var a = 1;\n")?;

    let output = test.run(&["none.js"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn unparseable_files_print_nothing_and_succeed() -> Result<()> {
    let test = CliTest::with_file("broken.js", "import { from 'lib';\n")?;

    let output = test.run(&["broken.js"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn missing_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["missing.js"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("missing.js"), "{stderr}");
    Ok(())
}

#[test]
fn filename_is_required() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert!(!output.status.success());
    Ok(())
}

#[test]
fn type_flag_overrides_detection() -> Result<()> {
    let test = CliTest::with_file("theme.txt", "@import \"mystyles\"\n@require styles4\n")?;

    let output = test.run(&["--type", "stylus", "theme.txt"])?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["mystyles", "styles4"]);
    assert!(test.root().join("theme.txt").exists());
    Ok(())
}

#[test]
fn mixed_imports_flag() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        "import foo from './foo';\nif (debug) { require('./debug'); }\n",
    )?;

    let single = test.run(&["app.js"])?;
    assert_eq!(stdout_lines(&single), vec!["./foo"]);

    let mixed = test.run(&["--es6-mixed-imports", "app.js"])?;
    assert!(mixed.status.success());
    assert_eq!(stdout_lines(&mixed), vec!["./foo", "./debug"]);
    Ok(())
}

#[test]
fn exclude_core_flag() -> Result<()> {
    let test = CliTest::with_file(
        "server.js",
        "const fs = require('fs');\nconst test = require('test');\nconst app = require('./app');\n",
    )?;

    let output = test.run(&["--exclude-core", "server.js"])?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["test", "./app"]);
    Ok(())
}

#[test]
fn typed_parse_failure_prints_nothing_and_succeeds() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "let x: number = ;\n")?;

    let output = test.run(&["-t", "ts", "broken.ts"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no dependencies extracted"), "{stderr}");
    Ok(())
}

#[test]
fn verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_file("index.js", "require('./a');\n")?;

    let output = test.run(&["--verbose", "index.js"])?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["./a"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolved the module type"), "{stderr}");
    Ok(())
}
