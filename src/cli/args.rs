//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// File to list the dependencies of
    pub filename: PathBuf,

    /// Collect both ES module imports and CommonJS requires
    #[arg(long = "es6-mixed-imports", alias = "es6-mixedImports")]
    pub es6_mixed_imports: bool,

    /// Type of the content (commonjs, es6, amd, ts, tsx, css, sass, scss,
    /// less, stylus); detected from the content when omitted
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub module_type: Option<String>,

    /// JSON options file; command-line flags override its values
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Leave built-in modules out of the output
    #[arg(long)]
    pub exclude_core: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
