//! CommonJS detective.

use serde_json::Value;
use swc_ecma_ast::CallExpr;
use swc_ecma_visit::{Visit, VisitWith};

use super::helpers::{first_arg_string, is_main_require_call, is_require_call};
use super::{Detection, Detective, DetectiveInput, detection_from, program_from};
use crate::error::Result;
use crate::parser::parse_source;
use crate::registry::ModuleType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonJsDetective;

impl Detective for CommonJsDetective {
    fn module_type(&self) -> ModuleType {
        ModuleType::CommonJs
    }

    fn detect(&self, input: DetectiveInput<'_>, _options: Option<&Value>) -> Result<Detection> {
        let program = program_from(input, ModuleType::CommonJs, parse_source)?;

        let mut collector = RequireCollector::default();
        (*program).visit_with(&mut collector);

        Ok(detection_from(collector.dependencies, program))
    }
}

/// Collects `require('x')` and `require.main.require('x')` arguments.
#[derive(Debug, Default)]
struct RequireCollector {
    dependencies: Vec<String>,
}

impl Visit for RequireCollector {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if (is_require_call(node) || is_main_require_call(node))
            && let Some(dependency) = first_arg_string(node)
        {
            self.dependencies.push(dependency);
        }
        node.visit_children_with(self);
    }
}
