//! Module types and the table that maps each one to its detective.
//!
//! Labels are matched exactly as callers spell them. Several labels are
//! synonyms for one canonical type (`es6`, `esm` and `mjs` all select the ES
//! module detective), so every lookup goes through [`ModuleType::from_label`]
//! first and the rest of the crate only deals with the canonical enum.

use std::{fmt, str::FromStr};

use crate::detectives::{
    AmdDetective, CommonJsDetective, Es6Detective, MixedDetective, Strategy, StylesheetDetective,
    TypeScriptDetective,
};
use crate::stylesheet::Dialect;

/// Canonical module type. One variant per detective slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleType {
    CommonJs,
    Es6,
    Amd,
    TypeScript,
    Tsx,
    Css,
    Sass,
    Scss,
    Less,
    Stylus,
}

impl ModuleType {
    pub const ALL: [ModuleType; 10] = [
        ModuleType::CommonJs,
        ModuleType::Es6,
        ModuleType::Amd,
        ModuleType::TypeScript,
        ModuleType::Tsx,
        ModuleType::Css,
        ModuleType::Sass,
        ModuleType::Scss,
        ModuleType::Less,
        ModuleType::Stylus,
    ];

    /// Resolve a label (including synonyms) to its canonical type.
    ///
    /// Unknown labels return `None`, which downstream means "no detective".
    pub fn from_label(label: &str) -> Option<Self> {
        let module_type = match label {
            "cjs" | "commonjs" => ModuleType::CommonJs,
            "es6" | "esm" | "mjs" => ModuleType::Es6,
            "amd" => ModuleType::Amd,
            "ts" | "typescript" => ModuleType::TypeScript,
            "tsx" => ModuleType::Tsx,
            "css" => ModuleType::Css,
            "sass" => ModuleType::Sass,
            "scss" => ModuleType::Scss,
            "less" => ModuleType::Less,
            "stylus" => ModuleType::Stylus,
            _ => return None,
        };
        Some(module_type)
    }

    /// Canonical label, also the key detective options are stored under.
    pub fn label(self) -> &'static str {
        match self {
            ModuleType::CommonJs => "commonjs",
            ModuleType::Es6 => "es6",
            ModuleType::Amd => "amd",
            ModuleType::TypeScript => "ts",
            ModuleType::Tsx => "tsx",
            ModuleType::Css => "css",
            ModuleType::Sass => "sass",
            ModuleType::Scss => "scss",
            ModuleType::Less => "less",
            ModuleType::Stylus => "stylus",
        }
    }

    /// Whether mixed-import mode applies to this type.
    pub fn is_mixable(self) -> bool {
        matches!(self, ModuleType::CommonJs | ModuleType::Es6)
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module type: {0}")]
pub struct UnknownModuleType(pub String);

impl FromStr for ModuleType {
    type Err = UnknownModuleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleType::from_label(s).ok_or_else(|| UnknownModuleType(s.to_string()))
    }
}

/// The dispatch table.
///
/// With `mixed_imports` set, CommonJS and ES module types both select the
/// composite detective; every other type ignores the flag.
pub fn strategy_for(module_type: ModuleType, mixed_imports: bool) -> Strategy {
    if mixed_imports && module_type.is_mixable() {
        return MixedDetective.into();
    }

    match module_type {
        ModuleType::CommonJs => CommonJsDetective.into(),
        ModuleType::Es6 => Es6Detective.into(),
        ModuleType::Amd => AmdDetective.into(),
        ModuleType::TypeScript => TypeScriptDetective::plain().into(),
        ModuleType::Tsx => TypeScriptDetective::tsx().into(),
        ModuleType::Css => StylesheetDetective::new(Dialect::Css).into(),
        ModuleType::Sass => StylesheetDetective::new(Dialect::Sass).into(),
        ModuleType::Scss => StylesheetDetective::new(Dialect::Scss).into(),
        ModuleType::Less => StylesheetDetective::new(Dialect::Less).into(),
        ModuleType::Stylus => StylesheetDetective::new(Dialect::Stylus).into(),
    }
}
