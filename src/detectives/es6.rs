//! ES module detective.

use serde::Deserialize;
use serde_json::Value;
use swc_ecma_ast::{
    CallExpr, Callee, ExportAll, ImportDecl, NamedExport, Str, TsImportEqualsDecl, TsImportType,
    TsModuleRef,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::helpers::{first_arg_string, is_main_require_call, is_require_call};
use super::{Detection, Detective, DetectiveInput, decode_options, detection_from, program_from};
use crate::error::Result;
use crate::parser::parse_source;
use crate::registry::ModuleType;

/// Options read from the `es6` key.
///
/// `mixedImports` lives under the same key but is read by the dispatcher.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Es6Options {
    /// Skip `import type` / `export type ... from` declarations.
    pub skip_type_imports: bool,
    /// Skip dynamic `import()` calls.
    pub skip_async_imports: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Es6Detective;

impl Detective for Es6Detective {
    fn module_type(&self) -> ModuleType {
        ModuleType::Es6
    }

    fn detect(&self, input: DetectiveInput<'_>, options: Option<&Value>) -> Result<Detection> {
        let options: Es6Options = decode_options(ModuleType::Es6, options)?;
        let program = program_from(input, ModuleType::Es6, parse_source)?;

        let mut collector = ImportCollector::new(ImportRules {
            skip_type_imports: options.skip_type_imports,
            skip_async_imports: options.skip_async_imports,
            ..Default::default()
        });
        (*program).visit_with(&mut collector);

        Ok(detection_from(collector.dependencies, program))
    }
}

/// Which import forms an [`ImportCollector`] records.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ImportRules {
    pub skip_type_imports: bool,
    pub skip_async_imports: bool,
    /// Also record `require('x')` calls.
    pub include_requires: bool,
    /// Record `import x = require('y')` and `import('x')` type queries.
    pub typescript_forms: bool,
}

/// Collects import-like specifiers in source order.
pub(crate) struct ImportCollector {
    rules: ImportRules,
    pub dependencies: Vec<String>,
}

impl ImportCollector {
    pub fn new(rules: ImportRules) -> Self {
        Self {
            rules,
            dependencies: Vec::new(),
        }
    }

    fn push_str(&mut self, src: &Str) {
        if let Some(value) = src.value.as_str() {
            self.dependencies.push(value.to_string());
        }
    }

    fn skips_type_only(&self, type_only: bool) -> bool {
        type_only && self.rules.skip_type_imports
    }
}

impl Visit for ImportCollector {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        if !self.skips_type_only(node.type_only) {
            self.push_str(&node.src);
        }
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        if let Some(src) = &node.src
            && !self.skips_type_only(node.type_only)
        {
            self.push_str(src);
        }
    }

    fn visit_export_all(&mut self, node: &ExportAll) {
        if !self.skips_type_only(node.type_only) {
            self.push_str(&node.src);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        let dependency = match &node.callee {
            Callee::Import(_) if !self.rules.skip_async_imports => first_arg_string(node),
            Callee::Expr(_)
                if self.rules.include_requires
                    && (is_require_call(node) || is_main_require_call(node)) =>
            {
                first_arg_string(node)
            }
            _ => None,
        };
        if let Some(dependency) = dependency {
            self.dependencies.push(dependency);
        }
        node.visit_children_with(self);
    }

    fn visit_ts_import_equals_decl(&mut self, node: &TsImportEqualsDecl) {
        if self.rules.typescript_forms
            && !self.skips_type_only(node.is_type_only)
            && let TsModuleRef::TsExternalModuleRef(module_ref) = &node.module_ref
        {
            self.push_str(&module_ref.expr);
        }
    }

    fn visit_ts_import_type(&mut self, node: &TsImportType) {
        if self.rules.typescript_forms && !self.rules.skip_type_imports {
            self.push_str(&node.arg);
        }
        node.visit_children_with(self);
    }
}
