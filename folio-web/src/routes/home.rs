use leptos::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::SectionWrapper;
use crate::GlobalState;

const NAV_LINKS: [(&str, &str); 2] = [("about", "About"), ("contact", "Contact")];

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let owner = state.site.owner.clone();

    view! {
        <nav class="sm:px-16 px-6 w-full flex items-center py-5 fixed top-0 z-20 bg-primary">
            <div class="w-full flex justify-between items-center max-w-7xl mx-auto">
                <a href="#" class="flex items-center gap-2">
                    <p class="text-white text-[18px] font-bold cursor-pointer flex">
                        {owner.name}
                        {owner.tagline.map(|tagline| view! {
                            <span class="sm:block hidden">" | "{tagline}</span>
                        })}
                    </p>
                </a>
                <ul class="list-none hidden sm:flex flex-row gap-10">
                    {NAV_LINKS
                        .iter()
                        .map(|(id, label)| view! {
                            <li class="text-secondary hover:text-white text-[18px] font-medium cursor-pointer">
                                <a href=format!("#{}", id)>{*label}</a>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>

        <main class="relative z-0 bg-primary">
            <SectionWrapper id="about">
                <About/>
            </SectionWrapper>
            <SectionWrapper id="contact">
                <Contact/>
            </SectionWrapper>
        </main>
    }
}
