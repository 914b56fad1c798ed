//! Built-in module table used to filter core specifiers out of a result.
//!
//! The set of built-ins changes between platform versions, so the table is a
//! plain value: [`CoreModules::default`] carries the current Node.js list and
//! callers can swap in their own with
//! [`PaperworkOptions::with_core_modules`](crate::PaperworkOptions::with_core_modules).

use std::collections::HashSet;

/// Node.js built-ins reachable by their bare name.
const NODE_BUILTINS: &[&str] = &[
    "_http_agent",
    "_http_client",
    "_http_common",
    "_http_incoming",
    "_http_outgoing",
    "_http_server",
    "_stream_duplex",
    "_stream_passthrough",
    "_stream_readable",
    "_stream_transform",
    "_stream_wrap",
    "_stream_writable",
    "_tls_common",
    "_tls_wrap",
    "assert",
    "assert/strict",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "dns/promises",
    "domain",
    "events",
    "fs",
    "fs/promises",
    "http",
    "http2",
    "https",
    "inspector",
    "inspector/promises",
    "module",
    "net",
    "os",
    "path",
    "path/posix",
    "path/win32",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "readline/promises",
    "repl",
    "stream",
    "stream/consumers",
    "stream/promises",
    "stream/web",
    "string_decoder",
    "sys",
    "timers",
    "timers/promises",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "util/types",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Node.js built-ins that only resolve as `node:<name>`. A bare `test` is an
/// ordinary package.
const NODE_PREFIX_ONLY: &[&str] = &["sea", "sqlite", "test", "test/reporters"];

const NODE_PREFIX: &str = "node:";

/// Which specifiers name a platform built-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreModules {
    prefix: String,
    builtins: HashSet<String>,
    prefix_only: HashSet<String>,
}

impl Default for CoreModules {
    fn default() -> Self {
        Self::new(NODE_PREFIX, NODE_BUILTINS, NODE_PREFIX_ONLY)
    }
}

impl CoreModules {
    /// Build a table.
    ///
    /// Any specifier starting with `prefix` is core. `builtins` are core by
    /// their bare name, except those also listed in `prefix_only`.
    pub fn new<S: AsRef<str>>(prefix: &str, builtins: &[S], prefix_only: &[S]) -> Self {
        Self {
            prefix: prefix.to_string(),
            builtins: builtins.iter().map(|s| s.as_ref().to_string()).collect(),
            prefix_only: prefix_only.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn is_core(&self, specifier: &str) -> bool {
        if specifier.starts_with(&self.prefix) {
            return true;
        }
        if self.prefix_only.contains(specifier) {
            return false;
        }
        self.builtins.contains(specifier)
    }

    /// Drop every core specifier, keeping the order of the rest.
    pub fn retain_non_core(&self, dependencies: Vec<String>) -> Vec<String> {
        dependencies
            .into_iter()
            .filter(|dependency| {
                let core = self.is_core(dependency);
                if core {
                    tracing::debug!(dependency = %dependency, "dropping core module");
                }
                !core
            })
            .collect()
    }
}
