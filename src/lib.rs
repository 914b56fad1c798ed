//! Precinct - find the module dependencies of a single source file
//!
//! Given JavaScript, TypeScript or style-sheet content (or a program that is
//! already parsed), precinct works out which module system the content uses,
//! runs the matching detective and returns the dependency specifiers it
//! references, in source order. Specifiers are not resolved to files.
//!
//! ```
//! use precinct::{ExtractOptions, extract};
//!
//! let deps = extract("import lib from 'lib';", &ExtractOptions::default())?;
//! assert_eq!(deps, vec!["lib"]);
//! # Ok::<(), precinct::Error>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line front end
//! - `detectives`: One dependency detective per module system or dialect
//! - `registry`: Module types and the type-to-detective table
//! - `extension`: File extension to module-type label
//! - `parser`: Shared JavaScript parsing and the last-AST slot
//! - `sniff`: Module-type detection on a parsed program
//! - `stylesheet`: Lexer shared by the style-sheet detectives
//! - `options`: Extraction options
//! - `core_modules`: Built-in module table for core filtering
//! - `fs`: File access for the path-oriented entry point

pub mod cli;
pub mod core_modules;
pub mod detectives;
mod dispatch;
pub mod error;
pub mod extension;
mod extract;
pub mod fs;
pub mod options;
pub mod parser;
pub mod registry;
mod resolve;
pub mod sniff;
pub mod stylesheet;

pub use core_modules::CoreModules;
pub use error::{Error, Result};
pub use extract::{Extraction, extract, extract_with_ast, paperwork, paperwork_with_fs};
pub use fs::{FileSystem, RealFileSystem};
pub use options::{ExtractOptions, PaperworkOptions, StrategyOptions};
pub use parser::{ParsedTree, last_ast};
pub use registry::ModuleType;
pub use resolve::Content;
