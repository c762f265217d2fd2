//! Drawing-surface custom element.
//!
//! The element class lives in `js/canvas-element.js`, imported as a module so
//! pages with a strict `script-src` policy can still load it. It owns a child
//! `<canvas>` kept in sync with its `width` and `height` attributes and
//! exposes the 2D context as `context`.

use easel_bootstrap::CanvasRegistrar;
use js_sys::Function;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(module = "/js/canvas-element.js")]
extern "C" {
    #[wasm_bindgen(js_name = canvasElementClass, catch)]
    fn canvas_element_class() -> Result<Function, JsValue>;
}

/// Failures raised while defining the element.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The element class could not be constructed.
    #[error("canvas element class construction failed")]
    Class {
        /// Rendered JavaScript exception.
        detail: String,
    },
    /// `customElements.define` rejected the definition.
    #[error("custom element definition rejected")]
    Define {
        /// Tag that was being defined.
        tag: String,
        /// Rendered JavaScript exception.
        detail: String,
    },
}

/// Registrar backed by `window.customElements`.
pub(crate) struct CustomElementRegistrar;

impl CanvasRegistrar for CustomElementRegistrar {
    type Error = CanvasError;

    fn ensure_registered(&self, tag: &str) -> Result<(), CanvasError> {
        let registry = gloo::utils::window().custom_elements();
        if !registry.get(tag).is_undefined() {
            tracing::debug!(tag, "canvas element already defined");
            return Ok(());
        }
        let class = element_class()?;
        registry
            .define(tag, &class)
            .map_err(|err| CanvasError::Define {
                tag: tag.to_string(),
                detail: describe(&err),
            })?;
        tracing::debug!(tag, "canvas element defined");
        Ok(())
    }
}

fn element_class() -> Result<Function, CanvasError> {
    canvas_element_class().map_err(|err| CanvasError::Class {
        detail: describe(&err),
    })
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
