mod service_card;

use leptos::*;

use crate::vars::{SECTION_HEAD_TEXT, SECTION_SUB_TEXT};
use crate::GlobalState;

pub use service_card::ServiceCard;

#[component]
pub fn About() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let overview = state.site.overview.clone();
    let services = state.site.services.clone();

    view! {
        <div>
            <p class=SECTION_SUB_TEXT>"Introduction"</p>
            <h2 class=SECTION_HEAD_TEXT>"Overview."</h2>
        </div>

        <p class="mt-4 text-secondary text-[17px] max-w-3xl leading-[30px]">
            {overview}
        </p>

        <div class="mt-20 flex flex-wrap gap-10">
            <For
                each=move || services.clone()
                key=|service| service.title.clone()
                children=move |service| view! { <ServiceCard service/> }
            />
        </div>
    }
}
