use leptos::*;

use crate::vars::SECTION_PADDING;

/// Full-width page section with an anchor for the navigation bar.
#[component]
pub fn SectionWrapper(id: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=format!("{} max-w-7xl mx-auto relative z-0", SECTION_PADDING)>
            <span class="hash-span" id=id>
                "\u{00a0}"
            </span>
            {children()}
        </section>
    }
}
