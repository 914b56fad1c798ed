//! Dependency detectives, one per module system or style-sheet dialect.
//!
//! A detective takes either a parsed program or raw source text plus its own
//! options object, and returns the dependency specifiers it finds in source
//! order. Detectives that parse text themselves also hand back the tree they
//! built so it can be inspected after the call.
//!
//! ## Detectives
//!
//! - `commonjs`: `require('x')` calls
//! - `es6`: `import`/`export ... from` declarations and dynamic `import()`
//! - `amd`: `define`/`require` dependency arrays and factory requires
//! - `typescript`: ES forms plus `import x = require()` and import types
//! - `stylesheet`: `@import`-style rules of CSS, Sass, SCSS, Less and Stylus
//! - `mixed`: ES module then CommonJS over one shared program

use std::borrow::Cow;

use enum_dispatch::enum_dispatch;
use serde::de::DeserializeOwned;
use serde_json::Value;
use swc_ecma_ast::Program;

use crate::error::{Error, Result};
use crate::parser::{ParseError, ParsedTree};
use crate::registry::ModuleType;

pub mod amd;
pub mod commonjs;
pub mod es6;
pub(crate) mod helpers;
pub mod mixed;
pub mod stylesheet;
pub mod typescript;

pub use amd::{AmdDetective, AmdOptions};
pub use commonjs::CommonJsDetective;
pub use es6::{Es6Detective, Es6Options};
pub use mixed::MixedDetective;
pub use stylesheet::{CssOptions, StylesheetDetective};
pub use typescript::{TypeScriptDetective, TypeScriptOptions};

/// What a detective works on.
#[derive(Debug, Clone, Copy)]
pub enum DetectiveInput<'a> {
    /// A program parsed once and shared by every consumer.
    Program(&'a Program),
    /// Raw source, for style sheets and explicitly typed content.
    Text(&'a str),
}

/// Output of one detective run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detection {
    pub dependencies: Vec<String>,
    /// Tree the detective built from text input, if it built one.
    pub ast: Option<ParsedTree>,
}

/// Trait implemented by every detective.
///
/// `enum_dispatch` generates the implementation on [`Strategy`], so the
/// registry can hand out a closed set of detectives without boxing.
#[enum_dispatch]
pub trait Detective {
    /// Module type whose options this detective reads.
    fn module_type(&self) -> ModuleType;

    /// Extract dependency specifiers, in source order.
    fn detect(&self, input: DetectiveInput<'_>, options: Option<&Value>) -> Result<Detection>;
}

/// A detective selected from the registry.
#[enum_dispatch(Detective)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    CommonJs(CommonJsDetective),
    Es6(Es6Detective),
    Amd(AmdDetective),
    TypeScript(TypeScriptDetective),
    Stylesheet(StylesheetDetective),
    Mixed(MixedDetective),
}

/// Decode a detective's options object.
///
/// Anything other than an object (absent, `null`, `true`, ...) carries no
/// fields and means defaults. A field of the wrong type is an error.
pub(crate) fn decode_options<T>(module_type: ModuleType, options: Option<&Value>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match options {
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
            .map_err(|source| Error::InvalidOptions { module_type, source }),
        Some(other) if !other.is_null() => {
            tracing::debug!(%module_type, options = %other, "options are not an object, using defaults");
            Ok(T::default())
        }
        _ => Ok(T::default()),
    }
}

/// Borrow the shared program, or parse text input with `parse`.
pub(crate) fn program_from<'a>(
    input: DetectiveInput<'a>,
    module_type: ModuleType,
    parse: impl FnOnce(&str) -> std::result::Result<Program, ParseError>,
) -> Result<Cow<'a, Program>> {
    match input {
        DetectiveInput::Program(program) => Ok(Cow::Borrowed(program)),
        DetectiveInput::Text(code) => parse(code)
            .map(Cow::Owned)
            .map_err(|e| Error::Parse {
                module_type,
                message: e.message,
            }),
    }
}

/// Build a detection, exposing the program only if the detective parsed it.
pub(crate) fn detection_from(dependencies: Vec<String>, program: Cow<'_, Program>) -> Detection {
    let ast = match program {
        Cow::Owned(program) => Some(ParsedTree::Script(program)),
        Cow::Borrowed(_) => None,
    };
    Detection { dependencies, ast }
}
