//! ES module + CommonJS composite for files that mix both.

use serde_json::Value;

use super::{
    CommonJsDetective, Detection, Detective, DetectiveInput, Es6Detective, detection_from,
    program_from,
};
use crate::error::Result;
use crate::parser::parse_source;
use crate::registry::ModuleType;

/// Runs the ES module detective, then the CommonJS detective, over one
/// program and concatenates their results in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MixedDetective;

impl Detective for MixedDetective {
    fn module_type(&self) -> ModuleType {
        ModuleType::Es6
    }

    fn detect(&self, input: DetectiveInput<'_>, options: Option<&Value>) -> Result<Detection> {
        let program = program_from(input, ModuleType::Es6, parse_source)?;
        let shared = DetectiveInput::Program(&program);

        let mut dependencies = Es6Detective.detect(shared, options)?.dependencies;
        dependencies.extend(CommonJsDetective.detect(shared, options)?.dependencies);

        Ok(detection_from(dependencies, program))
    }
}
