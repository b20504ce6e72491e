use leptos::*;
use leptos_router::use_location;

use crate::vars::{SECTION_HEAD_TEXT, SECTION_PADDING, SECTION_SUB_TEXT};

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class=format!("{} max-w-7xl mx-auto", SECTION_PADDING)>
            <p class=SECTION_SUB_TEXT>{move || pathname.get()}</p>
            <h2 class=SECTION_HEAD_TEXT>"Not found."</h2>
            <a href="/" class="text-secondary hover:text-white">
                "Back to the portfolio"
            </a>
        </div>
    }
}
