//! Entry points: extract from content, or from a file on disk.

use std::path::Path;

use crate::dispatch::dispatch;
use crate::error::{Error, Result};
use crate::extension;
use crate::fs::{FileSystem, RealFileSystem};
use crate::options::{ExtractOptions, PaperworkOptions};
use crate::parser::ParsedTree;
use crate::registry::ModuleType;
use crate::resolve::{Content, Resolution, resolve};

/// Result of one extraction call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Dependency specifiers in the order the detective reported them.
    pub dependencies: Vec<String>,
    /// Module type the detective was chosen for, if any.
    pub module_type: Option<ModuleType>,
    /// Tree the extraction worked on: the detective's own tree when it built
    /// one, else the program that was parsed or handed in.
    pub ast: Option<ParsedTree>,
}

/// Find the dependencies of `content`.
///
/// Content that fails to parse as JavaScript, content with no module syntax
/// and unknown types all give an empty list. Errors come only from the
/// selected detective.
///
/// ```
/// use precinct::{ExtractOptions, extract};
///
/// let deps = extract("var a = require('./a');\nvar b = require('./b');", &ExtractOptions::default())?;
/// assert_eq!(deps, vec!["./a", "./b"]);
/// # Ok::<(), precinct::Error>(())
/// ```
pub fn extract<'a>(content: impl Into<Content<'a>>, options: &ExtractOptions) -> Result<Vec<String>> {
    extract_with_ast(content, options).map(|extraction| extraction.dependencies)
}

/// Like [`extract`], also returning the module type and the tree.
pub fn extract_with_ast<'a>(
    content: impl Into<Content<'a>>,
    options: &ExtractOptions,
) -> Result<Extraction> {
    tracing::debug!(?options, "options given");

    let (module_type, representation) = match resolve(content.into(), options.module_type.as_deref()) {
        Resolution::Resolved {
            module_type,
            representation,
        } => (module_type, representation),
        Resolution::Unparseable => return Ok(Extraction::default()),
    };

    let detection = dispatch(module_type, representation.input(), options)?;
    let ast = match detection.ast {
        Some(tree) => Some(tree),
        None => representation.into_tree(),
    };

    Ok(Extraction {
        dependencies: detection.dependencies,
        module_type,
        ast,
    })
}

/// Find the dependencies of the file at `path`.
///
/// The type comes from the file extension; `.js` and `.jsx` files are
/// sniffed. An extension-derived type replaces any type in `options`.
pub fn paperwork(path: impl AsRef<Path>, options: &PaperworkOptions) -> Result<Vec<String>> {
    paperwork_with_fs(&RealFileSystem, path, options)
}

/// Like [`paperwork`], reading through `fs`.
pub fn paperwork_with_fs(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    options: &PaperworkOptions,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs.read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut extract_options = options.extract.clone();
    if let Some(label) = extension::classify(path) {
        tracing::debug!(label = %label, "setting the module type from the extension");
        extract_options.module_type = Some(label);
    }

    let dependencies = extract(content.as_str(), &extract_options)?;
    if options.include_core {
        tracing::debug!(?dependencies, "got these results");
        return Ok(dependencies);
    }

    Ok(options.core_modules.retain_non_core(dependencies))
}
