use crate::analyzers::Extractor;
use crate::core::{ClassInfo, FileAnalysis};
use crate::errors::UnparsableFile;
use rustpython_parser::{ast, Mode};
use std::path::Path;

/// Extractor backed by a real Python parser.
///
/// Only the module's top level is scanned: nested functions, classes inside
/// functions, and conditionally defined names are not part of the outline.
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PythonExtractor {
    fn extract(&self, content: &str, path: &Path) -> Result<FileAnalysis, UnparsableFile> {
        let parsed = rustpython_parser::parse(content, Mode::Module, &path.to_string_lossy())
            .map_err(|e| UnparsableFile::syntax(path, e.to_string()))?;

        let body: &[ast::Stmt] = match &parsed {
            ast::Mod::Module(module) => &module.body,
            _ => &[],
        };

        Ok(FileAnalysis {
            imports: extract_imports(body),
            classes: extract_classes(body),
            functions: extract_functions(body),
            line_count: content.lines().count(),
        })
    }
}

/// Record import statements in source order.
///
/// `import a.b` records the dotted name as written. A from-import records one
/// composite entry: the source module, a dot, then the comma-joined names, so
/// `from typing import List, Dict` becomes `typing.List, Dict`. Relative
/// imports have no module and keep an empty prefix.
fn extract_imports(body: &[ast::Stmt]) -> Vec<String> {
    let mut imports = Vec::new();

    for stmt in body {
        match stmt {
            ast::Stmt::Import(import) => {
                for alias in &import.names {
                    imports.push(alias.name.to_string());
                }
            }
            ast::Stmt::ImportFrom(import_from) => {
                let module = import_from
                    .module
                    .as_ref()
                    .map(|name| name.to_string())
                    .unwrap_or_default();
                let names = import_from
                    .names
                    .iter()
                    .map(|alias| alias.name.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                imports.push(format!("{module}.{names}"));
            }
            _ => {}
        }
    }

    imports
}

fn extract_functions(body: &[ast::Stmt]) -> Vec<String> {
    body.iter().filter_map(function_name).collect()
}

fn function_name(stmt: &ast::Stmt) -> Option<String> {
    match stmt {
        ast::Stmt::FunctionDef(def) => Some(def.name.to_string()),
        ast::Stmt::AsyncFunctionDef(def) => Some(def.name.to_string()),
        _ => None,
    }
}

fn extract_classes(body: &[ast::Stmt]) -> Vec<ClassInfo> {
    body.iter()
        .filter_map(|stmt| match stmt {
            ast::Stmt::ClassDef(class_def) => Some(ClassInfo {
                name: class_def.name.to_string(),
                methods: class_def.body.iter().filter_map(function_name).collect(),
                bases: class_def.bases.iter().filter_map(base_name).collect(),
            }),
            _ => None,
        })
        .collect()
}

/// Name of a base class expression. Dotted bases like `abc.ABC` are joined
/// back into one name; anything fancier (subscripts, calls) is dropped.
fn base_name(expr: &ast::Expr) -> Option<String> {
    match expr {
        ast::Expr::Name(name) => Some(name.id.to_string()),
        ast::Expr::Attribute(attr) => {
            let attribute = attr.attr.to_string();
            base_name(&attr.value).map(|prefix| format!("{prefix}.{attribute}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn extract(source: &str) -> FileAnalysis {
        PythonExtractor::new()
            .extract(source, Path::new("test.py"))
            .unwrap()
    }

    #[test]
    fn records_plain_and_dotted_imports_verbatim() {
        let analysis = extract(indoc! {"
            import os
            import os.path
            import sys, json
        "});

        assert_eq!(analysis.imports, vec!["os", "os.path", "sys", "json"]);
    }

    #[test]
    fn from_imports_become_one_composite_entry() {
        let analysis = extract("from typing import List, Dict\n");

        assert_eq!(analysis.imports, vec!["typing.List, Dict"]);
    }

    #[test]
    fn relative_imports_keep_an_empty_module_prefix() {
        let analysis = extract("from . import util\n");

        assert_eq!(analysis.imports, vec![".util"]);
    }

    #[test]
    fn import_aliases_record_the_real_name() {
        let analysis = extract("import numpy as np\nfrom os import path as p\n");

        assert_eq!(analysis.imports, vec!["numpy", "os.path"]);
    }

    #[test]
    fn nested_definitions_are_not_part_of_the_outline() {
        let analysis = extract(indoc! {"
            def outer():
                def inner():
                    pass
                return inner

            if True:
                class Hidden:
                    pass
        "});

        assert_eq!(analysis.functions, vec!["outer"]);
        assert!(analysis.classes.is_empty());
    }

    #[test]
    fn async_functions_count_as_functions_and_methods() {
        let analysis = extract(indoc! {"
            async def fetch():
                pass

            class Client:
                async def get(self):
                    pass
        "});

        assert_eq!(analysis.functions, vec!["fetch"]);
        assert_eq!(analysis.classes[0].methods, vec!["get"]);
    }

    #[test]
    fn class_bases_are_captured_when_they_are_names() {
        let analysis = extract(indoc! {"
            import abc

            class Base:
                pass

            class Impl(Base, abc.ABC, metaclass_factory()):
                pass
        "});

        assert_eq!(analysis.classes[1].bases, vec!["Base", "abc.ABC"]);
    }

    #[test]
    fn syntax_errors_surface_as_unparsable() {
        let err = PythonExtractor::new()
            .extract("def broken(:\n", Path::new("broken.py"))
            .unwrap_err();

        assert!(matches!(err, UnparsableFile::Syntax { .. }));
        assert_eq!(err.path(), Path::new("broken.py"));
    }

    #[test]
    fn line_count_ignores_a_trailing_newline() {
        assert_eq!(extract("import os\nimport sys\n").line_count, 2);
        assert_eq!(extract("import os\nimport sys").line_count, 2);
        assert_eq!(extract("").line_count, 0);
    }
}
