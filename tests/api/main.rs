use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pretty_assertions::assert_eq;
use precinct::{
    CoreModules, Error, ExtractOptions, FileSystem, ModuleType, PaperworkOptions, ParsedTree,
    extract, extract_with_ast, last_ast, paperwork, paperwork_with_fs, parser::parse_source,
};
use serde_json::json;


pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

fn deps(name: &str, options: &ExtractOptions) -> Vec<String> {
    extract(read_fixture(name).as_str(), options).unwrap()
}

fn sniffed(name: &str) -> Vec<String> {
    deps(name, &ExtractOptions::default())
}

fn typed(name: &str, label: &str) -> Vec<String> {
    deps(name, &ExtractOptions::from(label))
}

#[test]
fn accepts_a_parsed_program() -> Result<()> {
    let program = parse_source(&read_fixture("amd.js"))?;
    let extraction = extract_with_ast(&program, &ExtractOptions::default())?;

    assert_eq!(extraction.dependencies, vec!["./a", "./b"]);
    assert_eq!(extraction.module_type, Some(ModuleType::Amd));
    assert_eq!(last_ast(), Some(ParsedTree::Script(program)));
    Ok(())
}

#[test]
fn exposes_the_parsed_program_of_text_content() -> Result<()> {
    let extraction = extract_with_ast(read_fixture("es6.js").as_str(), &ExtractOptions::default())?;
    let Some(ParsedTree::Script(program)) = extraction.ast else {
        panic!("expected a program");
    };
    assert_eq!(last_ast(), Some(ParsedTree::Script(program)));
    Ok(())
}

#[test]
fn exposes_the_style_sheet_of_style_detectives() -> Result<()> {
    for (fixture, label) in [("styles.scss", "scss"), ("styles.sass", "sass")] {
        extract(read_fixture(fixture).as_str(), &ExtractOptions::from(label))?;
        let sheet = last_ast().and_then(|tree| tree.as_stylesheet().cloned());
        assert!(sheet.is_some_and(|sheet| !sheet.at_rules.is_empty()));
    }
    Ok(())
}

#[test]
fn amd_modules() {
    assert_eq!(sniffed("amd.js"), vec!["./a", "./b"]);
}

#[test]
fn commonjs_modules() {
    assert_eq!(sniffed("commonjs.js"), vec!["./a", "./b"]);
}

#[test]
fn es6_modules() {
    assert_eq!(sniffed("es6.js"), vec!["lib"]);
}

#[test]
fn es6_modules_with_jsx() {
    assert_eq!(sniffed("jsx.js"), vec!["lib"]);
}

#[test]
fn es6_modules_with_newer_syntax() {
    assert_eq!(sniffed("es7.js"), vec!["lib"]);
}

#[test]
fn es6_modules_with_syntax_errors_have_no_dependencies() {
    assert!(sniffed("es6WithError.js").is_empty());
    assert_eq!(last_ast(), None);
}

#[test]
fn es6_extensions_by_content() {
    assert_eq!(sniffed("es6.mjs"), vec!["lib"]);
    assert_eq!(sniffed("es6.esm"), vec!["lib"]);
}

#[test]
fn css_files() {
    assert_eq!(
        typed("styles.css", "css"),
        vec!["foo.css", "baz.css", "bla.css", "another.css"]
    );
}

#[test]
fn css_url_references_on_request() {
    let options = ExtractOptions::from("css").with_detective_options(ModuleType::Css, json!({ "url": true }));
    assert_eq!(
        deps("styles.css", &options),
        vec!["foo.css", "baz.css", "bla.css", "another.css", "logo.png"]
    );
}

#[test]
fn scss_files() {
    assert_eq!(typed("styles.scss", "scss"), vec!["_foo", "baz.scss"]);
}

#[test]
fn sass_files() {
    assert_eq!(typed("styles.sass", "sass"), vec!["_foo"]);
}

#[test]
fn stylus_files() {
    assert_eq!(
        typed("styles.styl", "stylus"),
        vec!["mystyles", "styles2.styl", "styles3.styl", "styles4"]
    );
}

#[test]
fn less_files() {
    assert_eq!(typed("styles.less", "less"), vec!["_foo", "_bar.css", "baz.less"]);
}

#[test]
fn typescript_files() {
    assert_eq!(
        typed("typescript.ts", "ts"),
        vec!["fs", "lib", "./bar", "./my-module.js", "./ZipCodeValidator"]
    );
}

#[test]
fn tsx_files() {
    assert_eq!(typed("module.tsx", "tsx"), vec!["./none"]);
}

#[test]
fn untyped_typescript_with_errors_has_no_dependencies() {
    assert!(sniffed("typescriptWithError.ts").is_empty());
}

#[test]
fn typed_typescript_with_errors_is_a_detective_failure() {
    let err = extract(
        read_fixture("typescriptWithError.ts").as_str(),
        &ExtractOptions::from("ts"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            module_type: ModuleType::TypeScript,
            ..
        }
    ));
}

#[test]
fn options_object_and_bare_label_agree() -> Result<()> {
    let from_json: ExtractOptions = serde_json::from_value(json!({ "type": "stylus" }))?;
    assert_eq!(deps("styles.styl", &from_json), typed("styles.styl", "stylus"));
    Ok(())
}

#[test]
fn es6_modules_without_imports() {
    assert!(sniffed("es6NoImport.js").is_empty());
}

#[test]
fn scripts_without_module_syntax() {
    assert!(sniffed("none.js").is_empty());
}

#[test]
fn unparseable_files_have_no_dependencies() {
    assert!(sniffed("unparseable.js").is_empty());
}

#[test]
fn unknown_types_have_no_dependencies() {
    assert!(typed("es6.js", "coffee").is_empty());
}

#[test]
fn lazy_commonjs_exports() {
    assert_eq!(sniffed("cjsExportLazy.js"), vec!["./amd", "./es6", "./es7"]);
}

#[test]
fn require_main_require() {
    assert_eq!(sniffed("commonjs-requiremain.js"), vec!["./b"]);
}

#[test]
fn mixed_imports_in_es6_modules() {
    let mixed = ExtractOptions::new().with_mixed_imports(true);
    assert_eq!(deps("es6MixedExportLazy.js", &mixed), vec!["./amd", "./es6", "./es7"]);
    assert!(sniffed("es6MixedExportLazy.js").is_empty());
}

#[test]
fn mixed_imports_put_es6_results_first() {
    let mixed = ExtractOptions::new().with_mixed_imports(true);
    assert_eq!(deps("es6MixedImport.js", &mixed), vec!["./foo", "./debug"]);
}

#[test]
fn mixed_mode_without_cross_syntax_matches_single_mode() {
    let mixed = ExtractOptions::new().with_mixed_imports(true);
    for fixture in ["es6.js", "commonjs.js", "cjsExportLazy.js"] {
        assert_eq!(deps(fixture, &mixed), sniffed(fixture), "{fixture}");
    }
}

#[test]
fn mixed_mode_is_ignored_for_amd() {
    let mixed = ExtractOptions::new().with_mixed_imports(true);
    assert_eq!(deps("amd.js", &mixed), vec!["./a", "./b"]);
}

#[test]
fn dynamic_imports() {
    assert_eq!(sniffed("es6DynamicImport.js"), vec!["./bar"]);
}

#[test]
fn es6_modules_with_type_only_imports() -> Result<()> {
    let code = "import type { A } from './a';\nimport b from './b';\n";
    assert_eq!(extract(code, &ExtractOptions::default())?, vec!["./a", "./b"]);

    let skipping = ExtractOptions::from("es6")
        .with_detective_options(ModuleType::Es6, json!({ "skipTypeImports": true }));
    assert_eq!(extract(code, &skipping)?, vec!["./b"]);
    Ok(())
}

#[test]
fn amd_options_reach_the_amd_detective() -> Result<()> {
    assert_eq!(sniffed("amdLazy.js"), vec!["./a", "./lazy"]);

    let options: ExtractOptions = serde_json::from_value(json!({ "amd": { "skipLazyLoaded": true } }))?;
    assert_eq!(deps("amdLazy.js", &options), vec!["./a"]);
    Ok(())
}

#[test]
fn explicit_type_equal_to_sniffed_type_gives_the_same_result() -> Result<()> {
    for fixture in ["amd.js", "commonjs.js", "es6.js", "cjsExportLazy.js", "es6DynamicImport.js"] {
        let content = read_fixture(fixture);
        let sniffed = extract_with_ast(content.as_str(), &ExtractOptions::default())?;
        let label = sniffed.module_type.map(ModuleType::label).unwrap();
        let explicit = extract(content.as_str(), &ExtractOptions::from(label))?;
        assert_eq!(sniffed.dependencies, explicit, "{fixture}");
    }
    Ok(())
}

/// Serves files from memory and records what was read.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
    reads: RefCell<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn with_file(path: &str, content: &str) -> Self {
        let mut fs = Self::default();
        fs.files.insert(PathBuf::from(path), content.to_string());
        fs
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not found"))
    }
}

#[test]
fn core_modules_table_is_swappable() {
    let fs = MemoryFileSystem::with_file("/a.js", "require('fs'); require('lodash');");
    let options = PaperworkOptions::default()
        .with_include_core(false)
        .with_core_modules(CoreModules::new("npm:", &["lodash"], &[]));
    assert_eq!(paperwork_with_fs(&fs, "/a.js", &options).unwrap(), vec!["fs"]);
}

#[test]
fn paperwork_on_disk_smoke() {
    let deps = paperwork(fixture_path("commonjs.js"), &PaperworkOptions::default()).unwrap();
    assert_eq!(deps, vec!["./a", "./b"]);
}
