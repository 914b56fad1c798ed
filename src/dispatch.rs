//! Select and run the detective for a resolved module type.

use crate::detectives::{Detection, Detective, DetectiveInput};
use crate::error::Result;
use crate::options::ExtractOptions;
use crate::parser::set_last_ast;
use crate::registry::{ModuleType, strategy_for};

/// Run the detective registered for `module_type` over `input`.
///
/// Returns an empty detection when there is no module type. Detective
/// options are looked up under the detective's canonical type, so `es6`
/// options also reach the ES module half of mixed mode. A tree produced by
/// the detective replaces whatever the last-AST slot held.
pub(crate) fn dispatch(
    module_type: Option<ModuleType>,
    input: DetectiveInput<'_>,
    options: &ExtractOptions,
) -> Result<Detection> {
    let Some(module_type) = module_type else {
        tracing::debug!("no detective found, the module type is unset");
        return Ok(Detection::default());
    };

    let mixed = options.mixed_imports();
    let strategy = strategy_for(module_type, mixed);
    tracing::debug!(%module_type, mixed, ?strategy, "dispatching to detective");

    let detection = strategy.detect(input, options.detective_options(strategy.module_type()))?;
    if let Some(tree) = &detection.ast {
        set_last_ast(Some(tree.clone()));
    }

    Ok(detection)
}
