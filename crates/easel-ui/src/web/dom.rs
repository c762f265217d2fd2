//! Mount point lookup against the live document.

use easel_bootstrap::MountDocument;
use web_sys::Element;

/// The page's `document`.
pub(crate) struct WebDocument;

impl MountDocument for WebDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        gloo::utils::document().get_element_by_id(id)
    }
}

/// Text of the element carrying `id`, if it exists.
pub(crate) fn inline_text(id: &str) -> Option<String> {
    gloo::utils::document()
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
}
