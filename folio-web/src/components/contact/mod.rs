mod contact_form;
mod info_cards;

use leptos::*;

use crate::components::EarthScene;
use crate::vars::{SECTION_HEAD_TEXT, SECTION_SUB_TEXT};

pub use contact_form::ContactForm;
pub use info_cards::ContactInfoCards;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="xl:mt-12 flex xl:flex-row flex-col-reverse gap-10 overflow-hidden">
            <div class="flex-[0.75] bg-black-100 p-8 rounded-2xl">
                <p class=SECTION_SUB_TEXT>"Get in touch"</p>
                <h3 class=SECTION_HEAD_TEXT>"Contact."</h3>
                <ContactInfoCards/>
                <ContactForm/>
            </div>

            <div class="xl:flex-1 xl:h-auto md:h-[550px] h-[350px]">
                <EarthScene/>
            </div>
        </div>
    }
}
