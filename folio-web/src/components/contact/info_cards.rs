use folio::ContactChannel;
use leptos::*;

use crate::components::ChannelIcon;
use crate::GlobalState;

const LINK_CLASS: &str =
    "text-secondary text-sm hover:text-white transition-colors";

#[component]
pub fn ContactInfoCards() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let channels = state.site.contact.clone();

    view! {
        <div class="mt-8 grid grid-cols-1 md:grid-cols-2 gap-4">
            {channels
                .into_iter()
                .map(|channel| view! { <ContactInfoCard channel/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactInfoCard(channel: ContactChannel) -> impl IntoView {
    let ContactChannel {
        kind,
        label,
        value,
        href,
        external,
    } = channel;

    let detail = match href {
        Some(href) if external => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=LINK_CLASS>
                {value}
            </a>
        }
        .into_view(),
        Some(href) => view! {
            <a href=href class=LINK_CLASS>{value}</a>
        }
        .into_view(),
        None => view! {
            <p class="text-secondary text-sm">{value}</p>
        }
        .into_view(),
    };

    view! {
        <div class="bg-tertiary p-4 rounded-xl flex items-center gap-4">
            <ChannelIcon kind/>
            <div>
                <p class="text-white font-medium">{label}</p>
                {detail}
            </div>
        </div>
    }
}
