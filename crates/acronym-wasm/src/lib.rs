// WASM bindings for the logo acronym engine.
//
// Provides a `WasmAcronymEngine` class exported via wasm-bindgen that wraps
// `AcronymEngine` from acronym-engine. Results are serialized to JavaScript
// values using serde-wasm-bindgen, with camelCase field names.
//
// Usage from JavaScript:
//
//   const engine = new WasmAcronymEngine();          // built-in table
//   const engine = new WasmAcronymEngine(tableJson); // custom table
//   engine.generate("mango");
//     // => { assignment: [{ letter: "M", company: { name, logo }, isPlaceholder }, ...],
//     //      stats: { totalLetters, uniqueCompaniesUsed, placeholderCount, duplicateLetters },
//     //      canRegenerate }
//   engine.regenerateWithAlternatives("mango", result.assignment); // => [...] or null
//   sanitizeInput("hello, world!");                   // => "HELLO WORLD"
//   shareUrl(location.origin + location.pathname, "mango");

use serde::Serialize;
use wasm_bindgen::prelude::*;

use acronym_core::AssignmentEntry;
use acronym_core::logo::{self, LogoSize};
use acronym_core::normalize;
use acronym_engine::{AcronymEngine, CandidateTable, TableError};

// ============================================================================
// Conversion helpers
// ============================================================================

fn table_error_to_js(e: TableError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_level(name: &str) -> Option<log::Level> {
    name.parse().ok()
}

// ============================================================================
// Free functions
// ============================================================================

/// Route `log` output to the browser console.
///
/// `level` is one of "error", "warn", "info", "debug", "trace"
/// (default "warn"). Calling this more than once is harmless.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let level = match level.as_deref() {
        Some(name) => {
            parse_level(name).ok_or_else(|| JsError::new(&format!("unknown log level: {name}")))?
        }
        None => log::Level::Warn,
    };
    // A logger may already be installed; keep the first one.
    let _ = console_log::init_with_level(level);
    Ok(())
}

/// Filter text typed into the word field: ASCII letters and whitespace only,
/// uppercased.
#[wasm_bindgen(js_name = "sanitizeInput")]
pub fn sanitize_input(text: &str) -> String {
    normalize::sanitize_input(text)
}

/// Build a share link `<base>?word=<word>`. Returns null for a blank word.
#[wasm_bindgen(js_name = "shareUrl")]
pub fn share_url(base: &str, word: &str) -> Option<String> {
    normalize::share_url(base, word)
}

/// Asset path for a logo reference (`apple.svg` -> `/logos/apple.png`).
#[wasm_bindgen(js_name = "logoAssetPath")]
pub fn logo_asset_path(logo_ref: &str) -> String {
    logo::logo_path(logo_ref)
}

/// Fallback image path for a letter whose logo failed to load.
///
/// `size` is "sm", "md", "lg" or "xl" (default "lg").
#[wasm_bindgen(js_name = "placeholderAssetPath")]
pub fn placeholder_asset_path(size: Option<String>, letter: char) -> String {
    let size = size
        .as_deref()
        .and_then(LogoSize::from_name)
        .unwrap_or_default();
    logo::placeholder_asset_path(size, letter)
}

// ============================================================================
// WasmAcronymEngine
// ============================================================================

/// Letter-to-company assignment engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmAcronymEngine {
    engine: AcronymEngine,
}

#[wasm_bindgen]
impl WasmAcronymEngine {
    /// Create an engine over a candidate table.
    ///
    /// - `table_json`: table JSON (`{"A": [{"name", "logo"}, ...], ...}`);
    ///   the built-in table is used when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(table_json: Option<String>) -> Result<WasmAcronymEngine, JsError> {
        let table = match table_json {
            Some(json) => CandidateTable::from_json(&json),
            None => CandidateTable::builtin(),
        }
        .map_err(table_error_to_js)?;
        Ok(WasmAcronymEngine {
            engine: AcronymEngine::new(table),
        })
    }

    /// Assign one company per letter of `word`.
    ///
    /// Returns `{ assignment, stats, canRegenerate }`.
    pub fn generate(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&self.engine.generate(word))
    }

    /// Re-roll `word` for at least one company not in `current_assignment`.
    ///
    /// `current_assignment` is the `assignment` array of a previous result.
    /// Returns a new assignment array, or null when no alternative exists.
    #[wasm_bindgen(js_name = "regenerateWithAlternatives")]
    pub fn regenerate_with_alternatives(
        &self,
        word: &str,
        current_assignment: JsValue,
    ) -> Result<JsValue, JsError> {
        let current: Vec<AssignmentEntry> = serde_wasm_bindgen::from_value(current_assignment)
            .map_err(|e| JsError::new(&format!("invalid assignment: {e}")))?;
        match self.engine.regenerate_with_alternatives(word, &current) {
            Some(assignment) => to_js(&assignment),
            None => Ok(JsValue::NULL),
        }
    }

    /// Whether some letter of `word` has unused alternatives.
    #[wasm_bindgen(js_name = "canRegenerate")]
    pub fn can_regenerate(&self, word: &str) -> bool {
        self.engine.can_regenerate(word)
    }

    /// Set the maximum number of re-roll attempts.
    #[wasm_bindgen(js_name = "setMaxRegenerateAttempts")]
    pub fn set_max_regenerate_attempts(&mut self, attempts: usize) {
        self.engine.set_max_regenerate_attempts(attempts);
    }

    /// Number of letters covered by the loaded table.
    #[wasm_bindgen(js_name = "letterCount")]
    pub fn letter_count(&self) -> usize {
        self.engine.table().len()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("debug"), Some(log::Level::Debug));
        assert_eq!(parse_level("WARN"), Some(log::Level::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn placeholder_path_defaults_to_large() {
        assert_eq!(
            placeholder_asset_path(None, 'Z'),
            "/placeholder.svg?height=64&width=64&query=Z"
        );
        assert_eq!(
            placeholder_asset_path(Some("sm".to_string()), 'Z'),
            "/placeholder.svg?height=32&width=32&query=Z"
        );
    }

    #[test]
    fn free_helpers_delegate() {
        assert_eq!(sanitize_input("go 4 it"), "GO  IT");
        assert_eq!(share_url("/", "go").as_deref(), Some("/?word=go"));
        assert_eq!(logo_asset_path("meta.svg"), "/logos/meta.png");
    }
}
