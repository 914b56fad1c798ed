//! AMD detective.
//!
//! Recognized forms:
//! - `define(['a', 'b'], factory)` and `define('id', ['a'], factory)`
//! - `require(['a'], callback)` / `requirejs(['a'], callback)` driver scripts
//! - `define(function (require) { var a = require('a'); })`, where the
//!   factory's own `require('x')` calls are the dependencies
//!
//! Requires nested inside a factory of the array forms are lazy-loaded
//! dependencies; `skipLazyLoaded` leaves them out.

use serde::Deserialize;
use serde_json::Value;
use swc_ecma_ast::{CallExpr, Expr, ExprOrSpread};
use swc_ecma_visit::{Visit, VisitWith};

use super::helpers::{array_strings, callee_name, first_arg_string, first_array_arg};
use super::{Detection, Detective, DetectiveInput, decode_options, detection_from, program_from};
use crate::error::Result;
use crate::parser::parse_source;
use crate::registry::ModuleType;

/// Module ids every AMD loader provides itself.
const PSEUDO_MODULES: &[&str] = &["require", "exports", "module"];

/// Options read from the `amd` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmdOptions {
    /// Leave out requires nested inside factories of the array forms.
    pub skip_lazy_loaded: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmdDetective;

impl Detective for AmdDetective {
    fn module_type(&self) -> ModuleType {
        ModuleType::Amd
    }

    fn detect(&self, input: DetectiveInput<'_>, options: Option<&Value>) -> Result<Detection> {
        let options: AmdOptions = decode_options(ModuleType::Amd, options)?;
        let program = program_from(input, ModuleType::Amd, parse_source)?;

        let mut collector = AmdCollector {
            skip_lazy_loaded: options.skip_lazy_loaded,
            dependencies: Vec::new(),
        };
        (*program).visit_with(&mut collector);

        Ok(detection_from(collector.finish(), program))
    }
}

struct AmdCollector {
    skip_lazy_loaded: bool,
    dependencies: Vec<String>,
}

impl AmdCollector {
    /// Deduplicate (first occurrence wins) and drop loader pseudo-modules.
    fn finish(self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.dependencies
            .into_iter()
            .filter(|dep| !PSEUDO_MODULES.contains(&dep.as_str()))
            .filter(|dep| seen.insert(dep.clone()))
            .collect()
    }

    fn collect_array_form(&mut self, call: &CallExpr) -> bool {
        let Some(array) = first_array_arg(call) else {
            return false;
        };
        self.dependencies.extend(array_strings(array));
        if !self.skip_lazy_loaded
            && let Some(factory) = factory_of(call)
        {
            self.dependencies.extend(lazy_dependencies(factory));
        }
        true
    }
}

impl Visit for AmdCollector {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        match callee_name(node) {
            Some("define") => {
                if self.collect_array_form(node) {
                    return;
                }
                if let Some(factory) = factory_of(node) {
                    self.dependencies.extend(lazy_dependencies(factory));
                    return;
                }
            }
            Some("require" | "requirejs") => {
                if self.collect_array_form(node) {
                    return;
                }
            }
            _ => {}
        }
        node.visit_children_with(self);
    }
}

/// The factory (last function argument) of a `define`/`require` call.
fn factory_of(call: &CallExpr) -> Option<&ExprOrSpread> {
    call.args
        .last()
        .filter(|arg| matches!(&*arg.expr, Expr::Fn(_) | Expr::Arrow(_)))
}

/// Every `require('x')` / `require(['x'])` inside a factory.
fn lazy_dependencies(factory: &ExprOrSpread) -> Vec<String> {
    let mut collector = InnerRequireCollector::default();
    factory.visit_with(&mut collector);
    collector.dependencies
}

#[derive(Default)]
struct InnerRequireCollector {
    dependencies: Vec<String>,
}

impl Visit for InnerRequireCollector {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if matches!(callee_name(node), Some("require" | "requirejs")) {
            if let Some(array) = first_array_arg(node) {
                self.dependencies.extend(array_strings(array));
            } else if let Some(dependency) = first_arg_string(node) {
                self.dependencies.push(dependency);
            }
        }
        node.visit_children_with(self);
    }
}
