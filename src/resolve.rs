//! Type resolution: decide the module type of the content and produce the
//! representation handed to the detective.

use swc_ecma_ast::Program;

use crate::detectives::DetectiveInput;
use crate::parser::{ParsedTree, parse_source, set_last_ast};
use crate::registry::ModuleType;
use crate::sniff;

/// What to extract from: source text or an already parsed program.
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Text(&'a str),
    Program(&'a Program),
}

impl<'a> From<&'a str> for Content<'a> {
    fn from(text: &'a str) -> Self {
        Content::Text(text)
    }
}

impl<'a> From<&'a String> for Content<'a> {
    fn from(text: &'a String) -> Self {
        Content::Text(text)
    }
}

impl<'a> From<&'a Program> for Content<'a> {
    fn from(program: &'a Program) -> Self {
        Content::Program(program)
    }
}

/// Representation a detective works on.
#[derive(Debug)]
pub(crate) enum Representation<'a> {
    /// Text left for the detective to parse, when the type was explicit.
    Text(&'a str),
    /// Program parsed here for sniffing.
    Parsed(Program),
    /// Program the caller handed in.
    Given(&'a Program),
}

impl Representation<'_> {
    pub fn input(&self) -> DetectiveInput<'_> {
        match self {
            Representation::Text(text) => DetectiveInput::Text(text),
            Representation::Parsed(program) => DetectiveInput::Program(program),
            Representation::Given(program) => DetectiveInput::Program(*program),
        }
    }

    pub fn into_tree(self) -> Option<ParsedTree> {
        match self {
            Representation::Text(_) => None,
            Representation::Parsed(program) => Some(ParsedTree::Script(program)),
            Representation::Given(program) => Some(ParsedTree::Script(program.clone())),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Resolution<'a> {
    Resolved {
        /// `None` when the label is unknown or sniffing found nothing.
        module_type: Option<ModuleType>,
        representation: Representation<'a>,
    },
    /// Untyped text that failed to parse. The extraction ends here.
    Unparseable,
}

/// Resolve the effective module type of `content`.
///
/// Also resets the last-AST slot: to the program when one is available, to
/// empty otherwise.
pub(crate) fn resolve<'a>(content: Content<'a>, explicit: Option<&str>) -> Resolution<'a> {
    let representation = match (content, explicit) {
        (Content::Program(program), _) => {
            set_last_ast(Some(ParsedTree::Script(program.clone())));
            Representation::Given(program)
        }
        (Content::Text(text), Some(_)) => {
            set_last_ast(None);
            Representation::Text(text)
        }
        (Content::Text(text), None) => {
            tracing::debug!("no type given, parsing the content as JavaScript");
            match parse_source(text) {
                Ok(program) => {
                    tracing::debug!("parsed the content");
                    set_last_ast(Some(ParsedTree::Script(program.clone())));
                    Representation::Parsed(program)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "could not parse the content");
                    set_last_ast(None);
                    return Resolution::Unparseable;
                }
            }
        }
    };

    let module_type = match explicit {
        Some(label) => {
            let module_type = ModuleType::from_label(label);
            if module_type.is_none() {
                tracing::debug!(label, "no module type for this label");
            }
            module_type
        }
        None => match &representation {
            Representation::Parsed(program) => sniff::module_type(program),
            Representation::Given(program) => sniff::module_type(program),
            Representation::Text(_) => None,
        },
    };
    tracing::debug!(?module_type, "resolved the module type");

    Resolution::Resolved {
        module_type,
        representation,
    }
}
