//! Module-type sniffing for parsed JavaScript.
//!
//! Decision order:
//! 1. static `import`/`export` declarations → ES module
//! 2. a `define(...)` call, or an array-form `require([...])` at the top
//!    level → AMD
//! 3. a `require(...)` call, `module.exports` or `exports.x` → CommonJS
//! 4. a dynamic `import(...)` → ES module
//! 5. otherwise unset

use swc_ecma_ast::{ArrowExpr, CallExpr, Callee, Function, MemberExpr, ModuleDecl, Program};
use swc_ecma_visit::{Visit, VisitWith};

use crate::detectives::helpers::{callee_name, first_array_arg, is_exports_member};
use crate::registry::ModuleType;

/// Classify a parsed program. `None` means no module syntax was found.
pub fn module_type(program: &Program) -> Option<ModuleType> {
    let mut signals = Signals::default();
    program.visit_with(&mut signals);

    if signals.es6_declaration {
        Some(ModuleType::Es6)
    } else if signals.define || signals.top_level_driver {
        Some(ModuleType::Amd)
    } else if signals.require || signals.exports {
        Some(ModuleType::CommonJs)
    } else if signals.dynamic_import {
        Some(ModuleType::Es6)
    } else {
        None
    }
}

#[derive(Debug, Default)]
struct Signals {
    es6_declaration: bool,
    define: bool,
    top_level_driver: bool,
    require: bool,
    exports: bool,
    dynamic_import: bool,
    /// Function nesting depth, 0 at the top level.
    depth: usize,
}

impl Visit for Signals {
    fn visit_module_decl(&mut self, node: &ModuleDecl) {
        self.es6_declaration = true;
        node.visit_children_with(self);
    }

    fn visit_function(&mut self, node: &Function) {
        self.depth += 1;
        node.visit_children_with(self);
        self.depth -= 1;
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.depth += 1;
        node.visit_children_with(self);
        self.depth -= 1;
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if matches!(node.callee, Callee::Import(_)) {
            self.dynamic_import = true;
        }
        match callee_name(node) {
            Some("define") if !node.args.is_empty() => self.define = true,
            Some("require" | "requirejs") if first_array_arg(node).is_some() => {
                if self.depth == 0 {
                    self.top_level_driver = true;
                }
            }
            Some("require") => self.require = true,
            _ => {}
        }
        node.visit_children_with(self);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        if is_exports_member(node) {
            self.exports = true;
        }
        node.visit_children_with(self);
    }
}
