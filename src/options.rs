//! Options for one extraction call.
//!
//! Both option structs deserialize from the JSON shape callers already use:
//!
//! ```json
//! {
//!   "type": "es6",
//!   "includeCore": false,
//!   "es6": { "mixedImports": true },
//!   "amd": { "skipLazyLoaded": true }
//! }
//! ```
//!
//! Every key other than `type` and `includeCore` is read as detective options
//! for the module type it names. Keys are canonicalized on the way in, so
//! options given under `esm` reach the ES module detective, and keys naming no
//! module type are dropped.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core_modules::CoreModules;
use crate::registry::ModuleType;

const MIXED_IMPORTS: &str = "mixedImports";

/// Detective options keyed by canonical module type, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StrategyOptions(BTreeMap<ModuleType, Value>);

impl StrategyOptions {
    pub fn get(&self, module_type: ModuleType) -> Option<&Value> {
        self.0.get(&module_type)
    }

    /// Replace the options of one module type, returning the old ones.
    pub fn insert(&mut self, module_type: ModuleType, options: Value) -> Option<Value> {
        self.0.insert(module_type, options)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for StrategyOptions {
    fn from(map: Map<String, Value>) -> Self {
        let mut options = BTreeMap::new();
        for (key, value) in map {
            match ModuleType::from_label(&key) {
                Some(module_type) => {
                    options.insert(module_type, value);
                }
                None => tracing::debug!(key = %key, "ignoring options for unknown module type"),
            }
        }
        Self(options)
    }
}

/// Options for [`extract`](crate::extract).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Explicit module-type label; skips sniffing when set.
    ///
    /// Kept as the caller spelled it: a label naming no module type selects
    /// no detective and the result is empty.
    #[serde(rename = "type")]
    pub module_type: Option<String>,

    /// Per-type detective options.
    #[serde(flatten)]
    pub detectives: StrategyOptions,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, label: impl Into<String>) -> Self {
        self.module_type = Some(label.into());
        self
    }

    /// Set `es6.mixedImports`, keeping the other `es6` options.
    pub fn with_mixed_imports(mut self, mixed: bool) -> Self {
        let mut es6 = match self.detectives.0.remove(&ModuleType::Es6) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        es6.insert(MIXED_IMPORTS.to_string(), Value::Bool(mixed));
        self.detectives.insert(ModuleType::Es6, Value::Object(es6));
        self
    }

    /// Replace the detective options of one module type.
    pub fn with_detective_options(mut self, module_type: ModuleType, options: Value) -> Self {
        self.detectives.insert(module_type, options);
        self
    }

    /// Whether `es6.mixedImports` is on.
    ///
    /// Any truthy JSON value turns it on: `false`, `null`, `0`, `""` and a
    /// missing key leave it off.
    pub fn mixed_imports(&self) -> bool {
        self.detectives
            .get(ModuleType::Es6)
            .and_then(|es6| es6.get(MIXED_IMPORTS))
            .is_some_and(is_truthy)
    }

    pub fn detective_options(&self, module_type: ModuleType) -> Option<&Value> {
        self.detectives.get(module_type)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The legacy form: a bare type label instead of an options object.
impl From<&str> for ExtractOptions {
    fn from(label: &str) -> Self {
        Self::new().with_type(label)
    }
}

impl From<String> for ExtractOptions {
    fn from(label: String) -> Self {
        Self::new().with_type(label)
    }
}

/// Options for [`paperwork`](crate::paperwork).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaperworkOptions {
    /// Keep built-in module specifiers in the result. Defaults to `true`.
    pub include_core: bool,

    /// Table deciding what counts as built-in when `include_core` is off.
    #[serde(skip)]
    pub core_modules: CoreModules,

    #[serde(flatten)]
    pub extract: ExtractOptions,
}

impl Default for PaperworkOptions {
    fn default() -> Self {
        Self {
            include_core: true,
            core_modules: CoreModules::default(),
            extract: ExtractOptions::default(),
        }
    }
}

impl PaperworkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_core(mut self, include_core: bool) -> Self {
        self.include_core = include_core;
        self
    }

    pub fn with_core_modules(mut self, core_modules: CoreModules) -> Self {
        self.core_modules = core_modules;
        self
    }

    pub fn with_type(mut self, label: impl Into<String>) -> Self {
        self.extract = self.extract.with_type(label);
        self
    }

    pub fn with_mixed_imports(mut self, mixed: bool) -> Self {
        self.extract = self.extract.with_mixed_imports(mixed);
        self
    }

    pub fn with_detective_options(mut self, module_type: ModuleType, options: Value) -> Self {
        self.extract = self.extract.with_detective_options(module_type, options);
        self
    }
}

impl From<ExtractOptions> for PaperworkOptions {
    fn from(extract: ExtractOptions) -> Self {
        Self {
            extract,
            ..Self::default()
        }
    }
}
