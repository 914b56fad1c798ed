//! Style-sheet detectives (CSS, Sass, SCSS, Less, Stylus).
//!
//! All five share the lexer in [`crate::stylesheet`]; they differ in which
//! at-rules import other files and whether specifiers may be unquoted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::{Detection, Detective, DetectiveInput, decode_options};
use crate::error::{Error, Result};
use crate::parser::ParsedTree;
use crate::registry::ModuleType;
use crate::stylesheet::{Dialect, Stylesheet, lex, split_top_level};

/// One import specifier, optionally behind a Less `(options)` group.
static SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:\([^)]*\)\s*)?(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?i:url)\(\s*(?:"(?P<udq>[^"]*)"|'(?P<usq>[^']*)'|(?P<ubare>[^)\s]*))\s*\)|(?P<bare>[^\s"'(),;{}]+))"#,
    )
    .expect("specifier pattern is valid")
});

/// Options read from the `css` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CssOptions {
    /// Also report `url(...)` references from declarations, after imports.
    pub url: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylesheetDetective {
    dialect: Dialect,
}

impl StylesheetDetective {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    fn import_rules(&self) -> &'static [&'static str] {
        match self.dialect {
            Dialect::Css | Dialect::Less => &["import"],
            Dialect::Scss | Dialect::Sass => &["import", "use", "forward"],
            Dialect::Stylus => &["import", "require"],
        }
    }

    fn dependencies(&self, sheet: &Stylesheet) -> Vec<String> {
        let allow_bare = self.dialect.allows_bare_specifiers();
        let mut dependencies = Vec::new();

        for rule in sheet.rules_named(self.import_rules()) {
            for item in split_top_level(&rule.prelude, ',') {
                match parse_specifier(item, allow_bare) {
                    Some(specifier) => dependencies.push(specifier),
                    // Anything else (a media query, a `with (...)` clause)
                    // ends the specifier list.
                    None => break,
                }
            }
        }

        dependencies
    }
}

impl Detective for StylesheetDetective {
    fn module_type(&self) -> ModuleType {
        match self.dialect {
            Dialect::Css => ModuleType::Css,
            Dialect::Scss => ModuleType::Scss,
            Dialect::Sass => ModuleType::Sass,
            Dialect::Less => ModuleType::Less,
            Dialect::Stylus => ModuleType::Stylus,
        }
    }

    fn detect(&self, input: DetectiveInput<'_>, options: Option<&Value>) -> Result<Detection> {
        let module_type = self.module_type();
        let DetectiveInput::Text(source) = input else {
            return Err(Error::UnsupportedInput { module_type });
        };

        let sheet = lex(source, self.dialect);
        let mut dependencies = self.dependencies(&sheet);

        if self.dialect == Dialect::Css {
            let options: CssOptions = decode_options(module_type, options)?;
            if options.url {
                dependencies.extend(sheet.urls.iter().cloned());
            }
        }

        Ok(Detection {
            dependencies,
            ast: Some(ParsedTree::Stylesheet(sheet)),
        })
    }
}

fn parse_specifier(item: &str, allow_bare: bool) -> Option<String> {
    let caps = SPECIFIER.captures(item)?;
    let quoted = ["dq", "sq", "udq", "usq", "ubare"]
        .iter()
        .find_map(|name| caps.name(name));

    let specifier = match quoted {
        Some(m) => m.as_str(),
        None if allow_bare => caps.name("bare")?.as_str(),
        None => return None,
    };

    if specifier.is_empty() {
        None
    } else {
        Some(specifier.to_string())
    }
}
