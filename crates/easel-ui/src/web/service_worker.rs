//! Offline-caching service worker deregistration.
//!
//! # Design
//! - `unregister` returns immediately; the browser work runs on `spawn_local`
//!   and nobody awaits it.
//! - Failures stay inside this module and are only logged.

use anyhow::anyhow;
use easel_bootstrap::WorkerLifecycle;
use gloo::utils::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::ServiceWorkerRegistration;

/// Deregisters the worker a previous visit may have installed.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ServiceWorkerHelper;

impl WorkerLifecycle for ServiceWorkerHelper {
    fn unregister(&self) {
        if !is_supported() {
            tracing::debug!("service workers unsupported; nothing to unregister");
            return;
        }
        spawn_local(async {
            match unregister_active().await {
                Ok(()) => tracing::debug!("service worker unregistered"),
                Err(err) => tracing::debug!(error = %err, "service worker deregistration failed"),
            }
        });
    }
}

fn is_supported() -> bool {
    js_sys::Reflect::has(&window().navigator(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false)
}

async fn unregister_active() -> anyhow::Result<()> {
    let container = window().navigator().service_worker();
    let ready = container.ready().map_err(js_error)?;
    let registration: ServiceWorkerRegistration = JsFuture::from(ready)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    JsFuture::from(registration.unregister().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(())
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
