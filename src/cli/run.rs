use std::path::Path;

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::error::Error;
use crate::extract::extract;
use crate::fs::{FileSystem, RealFileSystem};
use crate::options::PaperworkOptions;

/// Read the file named on the command line and extract its dependencies.
///
/// The type comes from `--type` or from the content, never from the file
/// extension. A detective failure is logged and gives an empty list; only an
/// unreadable file or config is an error.
pub fn run(args: &Arguments) -> Result<Vec<String>> {
    let options = options_from(args)?;

    let content = RealFileSystem
        .read_to_string(&args.filename)
        .map_err(|source| Error::Read {
            path: args.filename.clone(),
            source,
        })?;

    let dependencies = match extract(content.as_str(), &options.extract) {
        Ok(dependencies) => dependencies,
        Err(e) => {
            tracing::warn!(file = %args.filename.display(), error = %e, "no dependencies extracted");
            Vec::new()
        }
    };
    if options.include_core {
        return Ok(dependencies);
    }
    Ok(options.core_modules.retain_non_core(dependencies))
}

/// Options from the config file, if any, with flags applied on top.
fn options_from(args: &Arguments) -> Result<PaperworkOptions> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => PaperworkOptions::default(),
    };

    if args.es6_mixed_imports {
        options = options.with_mixed_imports(true);
    }
    if let Some(label) = &args.module_type {
        options = options.with_type(label.clone());
    }
    if args.exclude_core {
        options = options.with_include_core(false);
    }

    Ok(options)
}

fn load_config(path: &Path) -> Result<PaperworkOptions> {
    let content = RealFileSystem
        .read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let options = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(options)
}
