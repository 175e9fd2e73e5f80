//! WASM bindings for the Simplic front end.
//!
//! Exposes the hollow-tree and expression parsers to JavaScript via
//! wasm-bindgen. Trees come back either as plain JS objects
//! (`{ kind, lexeme, children, position }`) or as the indented dump.
//! Compile errors are thrown as JS errors.

use simplic_lexer::{CompileError, Node};
use simplic_parser::{ExprParser, Parser};
use wasm_bindgen::prelude::*;

/// Parse a compilation unit into its hollow tree.
///
/// Returns `{ tree: object, dump: string }`.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let tree = Parser::parse(source).map_err(to_js_error)?;
    tree_result(&tree)
}

/// Parse a single expression.
///
/// Returns `{ tree: object, dump: string }`.
#[wasm_bindgen]
pub fn parse_expression(source: &str) -> Result<JsValue, JsError> {
    let tree = ExprParser::parse(source).map_err(to_js_error)?;
    tree_result(&tree)
}

/// Indented dump of a compilation unit's hollow tree.
#[wasm_bindgen]
pub fn dump(source: &str) -> Result<String, JsError> {
    render_tree(source).map_err(to_js_error)
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Native helper behind [`dump`].
pub fn render_tree(source: &str) -> Result<String, CompileError> {
    Parser::parse(source).map(|tree| tree.to_string())
}

/// Native helper for expressions, mirroring [`render_tree`].
pub fn render_expression(source: &str) -> Result<String, CompileError> {
    ExprParser::parse(source).map(|tree| tree.to_string())
}

fn tree_result(tree: &Node) -> Result<JsValue, JsError> {
    let object = serde_wasm_bindgen::to_value(tree)
        .map_err(|e| JsError::new(&format!("Failed to convert tree: {e}")))?;

    let result = js_sys::Object::new();
    js_sys::Reflect::set(&result, &"tree".into(), &object)
        .map_err(|_| JsError::new("Failed to set tree property"))?;
    js_sys::Reflect::set(&result, &"dump".into(), &tree.to_string().into())
        .map_err(|_| JsError::new("Failed to set dump property"))?;

    Ok(result.into())
}

fn to_js_error(e: CompileError) -> JsError {
    JsError::new(&e.to_string())
}
