//! Browser wiring for the startup sequence.

mod canvas;
mod dom;
mod runtime;
mod service_worker;

use std::cell::RefCell;
use std::error::Error as _;

use easel_bootstrap::{Bootstrap, BootstrapConfig, InstanceRegistry};
use easel_telemetry::LoggingConfig;
use wasm_bindgen::JsValue;
use yew::AppHandle;

use crate::app::EaselApp;
use crate::settings::{CONFIG_ELEMENT_ID, resolve_or_default};

pub use canvas::CanvasError;
pub use runtime::RuntimeError;

use canvas::CustomElementRegistrar;
use dom::{WebDocument, inline_text};
use runtime::YewRuntime;
use service_worker::ServiceWorkerHelper;

thread_local! {
    static INSTANCES: RefCell<InstanceRegistry<AppHandle<EaselApp>>> =
        const { RefCell::new(InstanceRegistry::new()) };
}

/// Entrypoint invoked by Trunk for wasm32 builds.
///
/// Registers the canvas element, mounts the application on the configured
/// node and deregisters any service worker left by an earlier visit.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = easel_telemetry::init_logging(&LoggingConfig::default()) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let config = load_config();
    let runtime = YewRuntime::new(config.canvas_tag.clone());
    let mut bootstrap = Bootstrap::new(
        config,
        CustomElementRegistrar,
        runtime,
        ServiceWorkerHelper,
    );

    match bootstrap.run(&WebDocument) {
        Ok(handle) => {
            let id = INSTANCES.with(|instances| instances.borrow_mut().retain(handle));
            tracing::debug!(instance = id.get(), "application instance retained");
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                cause = ?err.source(),
                "application failed to start"
            );
        }
    }
}

/// Destroy every application instance started by [`run_app`].
///
/// Returns how many instances were torn down.
pub fn teardown() -> usize {
    INSTANCES.with(|instances| instances.borrow_mut().teardown(AppHandle::destroy))
}

fn load_config() -> BootstrapConfig {
    let inline = inline_text(CONFIG_ELEMENT_ID);
    let (config, rejected) = resolve_or_default(inline.as_deref());
    if let Some(err) = rejected {
        tracing::warn!(
            error = %err,
            cause = ?err.source(),
            "inline bootstrap config rejected; using defaults"
        );
    }
    config
}
