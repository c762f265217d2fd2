//! Root view mounted by the Yew renderer.
//!
//! # Design
//! - The view only hosts the drawing surface; everything drawn on it belongs
//!   to the custom element.
//! - The element tag is a prop so a renamed registration still renders.

use yew::prelude::*;

const CANVAS_WIDTH: &str = "800";
const CANVAS_HEIGHT: &str = "600";

#[derive(Properties, PartialEq)]
pub(crate) struct EaselAppProps {
    pub canvas_tag: AttrValue,
}

#[function_component(EaselApp)]
pub(crate) fn easel_app(props: &EaselAppProps) -> Html {
    let tag = props.canvas_tag.to_string();
    html! {
        <main class="easel-shell">
            <@{tag} width={CANVAS_WIDTH} height={CANVAS_HEIGHT} />
        </main>
    }
}
