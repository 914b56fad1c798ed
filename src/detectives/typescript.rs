//! TypeScript and TSX detective.

use serde::Deserialize;
use serde_json::Value;
use swc_ecma_visit::VisitWith;

use super::es6::{ImportCollector, ImportRules};
use super::{Detection, Detective, DetectiveInput, decode_options, detection_from, program_from};
use crate::error::Result;
use crate::parser::{parse_with_syntax, typescript_syntax};
use crate::registry::ModuleType;

/// Options read from the `ts` / `tsx` keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeScriptOptions {
    /// Skip `import type`, type-only `import =` and `import('x')` types.
    pub skip_type_imports: bool,
    /// Skip dynamic `import()` calls.
    pub skip_async_imports: bool,
    /// Also collect `require('x')` calls.
    pub mixed_imports: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScriptDetective {
    tsx: bool,
}

impl TypeScriptDetective {
    pub fn plain() -> Self {
        Self { tsx: false }
    }

    pub fn tsx() -> Self {
        Self { tsx: true }
    }
}

impl Detective for TypeScriptDetective {
    fn module_type(&self) -> ModuleType {
        if self.tsx {
            ModuleType::Tsx
        } else {
            ModuleType::TypeScript
        }
    }

    fn detect(&self, input: DetectiveInput<'_>, options: Option<&Value>) -> Result<Detection> {
        let module_type = self.module_type();
        let options: TypeScriptOptions = decode_options(module_type, options)?;
        let program = program_from(input, module_type, |code| {
            parse_with_syntax(code, typescript_syntax(self.tsx))
        })?;

        let mut collector = ImportCollector::new(ImportRules {
            skip_type_imports: options.skip_type_imports,
            skip_async_imports: options.skip_async_imports,
            include_requires: options.mixed_imports,
            typescript_forms: true,
        });
        (*program).visit_with(&mut collector);

        Ok(detection_from(collector.dependencies, program))
    }
}
