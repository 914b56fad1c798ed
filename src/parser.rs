//! Source parsing shared by every JavaScript-family detective.
//!
//! Content is parsed once per extraction and the resulting program is handed
//! to the sniffer and to the chosen detective by reference. The last tree
//! produced on the current thread is also kept for introspection, see
//! [`last_ast`].

use std::cell::RefCell;

use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::stylesheet::Stylesheet;

/// Syntax error raised while parsing source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

/// A tree produced by one extraction: a script program or a lexed style sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedTree {
    Script(Program),
    Stylesheet(Stylesheet),
}

impl ParsedTree {
    pub fn as_program(&self) -> Option<&Program> {
        match self {
            ParsedTree::Script(program) => Some(program),
            ParsedTree::Stylesheet(_) => None,
        }
    }

    pub fn as_stylesheet(&self) -> Option<&Stylesheet> {
        match self {
            ParsedTree::Stylesheet(sheet) => Some(sheet),
            ParsedTree::Script(_) => None,
        }
    }
}

/// JavaScript syntax used when nothing is known about the content yet.
///
/// JSX and decorators are on so that React components and transpiler-only
/// syntax still parse.
pub fn script_syntax() -> Syntax {
    Syntax::Es(EsSyntax {
        jsx: true,
        decorators: true,
        export_default_from: true,
        ..Default::default()
    })
}

pub fn typescript_syntax(tsx: bool) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx,
        decorators: true,
        ..Default::default()
    })
}

/// Parse JavaScript (with JSX) into a program.
///
/// Source that only fails on type syntax, such as `import type` declarations
/// or annotations, is parsed again with TypeScript syntax. The error of the
/// first attempt is the one reported.
pub fn parse_source(code: &str) -> Result<Program, ParseError> {
    parse_with_syntax(code, script_syntax()).or_else(|error| {
        tracing::debug!(error = %error, "retrying with type syntax");
        parse_with_syntax(code, typescript_syntax(true)).map_err(|_| error)
    })
}

/// Parse source text with an explicit syntax.
///
/// Script or module goal is picked from the content. Errors swc recovers from
/// still count as failures, so a file with any syntax error never yields a
/// partial tree.
pub fn parse_with_syntax(code: &str, syntax: Syntax) -> Result<Program, ParseError> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = SourceMap::default();
        let source_file = source_map.new_source_file(FileName::Anon.into(), code.to_string());

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let program = parser.parse_program().map_err(|e| ParseError {
            message: format!("{:?}", e),
        })?;

        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(ParseError {
                message: format!("{:?}", error),
            });
        }

        Ok(program)
    })
}

thread_local! {
    static LAST_AST: RefCell<Option<ParsedTree>> = const { RefCell::new(None) };
}

/// The tree from the most recent extraction on this thread.
///
/// Every extraction overwrites it, and clears it when parsing failed or no
/// tree was produced. Only meant for debugging; use
/// [`Extraction::ast`](crate::Extraction::ast) to get the tree of a specific
/// call.
pub fn last_ast() -> Option<ParsedTree> {
    LAST_AST.with(|slot| slot.borrow().clone())
}

pub(crate) fn set_last_ast(tree: Option<ParsedTree>) {
    LAST_AST.with(|slot| *slot.borrow_mut() = tree);
}
