use leptos::*;

use crate::GlobalState;

/// 3D earth next to the contact form. Rendering is left to the
/// `<model-viewer>` web component loaded by index.html.
#[component]
pub fn EarthScene() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let scene = state.site.scene.clone();

    view! {
        <model-viewer
            class="w-full h-full"
            src=scene.model_url
            alt=scene.alt
            auto-rotate=scene.auto_rotate
            camera-controls=true
            disable-zoom=true
        ></model-viewer>
    }
}
