//! Yew renderer behind the runtime seam.

use easel_bootstrap::{ApplicationRuntime, StartConfig};
use thiserror::Error;
use web_sys::Element;
use yew::{AppHandle, AttrValue};

use crate::app::{EaselApp, EaselAppProps};

/// Failures raised when starting the application.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No mount node was supplied.
    #[error("application mount node missing")]
    MissingMount,
}

/// Starts [`EaselApp`] inside the supplied node.
pub(crate) struct YewRuntime {
    canvas_tag: AttrValue,
}

impl YewRuntime {
    pub(crate) fn new(canvas_tag: impl Into<AttrValue>) -> Self {
        Self {
            canvas_tag: canvas_tag.into(),
        }
    }
}

impl ApplicationRuntime for YewRuntime {
    type Node = Element;
    type Instance = AppHandle<EaselApp>;
    type Error = RuntimeError;

    fn start(&self, config: StartConfig<Element>) -> Result<Self::Instance, RuntimeError> {
        let root = config.node.ok_or(RuntimeError::MissingMount)?;
        let props = EaselAppProps {
            canvas_tag: self.canvas_tag.clone(),
        };
        Ok(yew::Renderer::<EaselApp>::with_root_and_props(root, props).render())
    }
}
