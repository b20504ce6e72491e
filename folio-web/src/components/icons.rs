use folio::ChannelKind;
use leptos::*;

// feather icon paths, drawn with stroke="currentColor"
fn icon_paths(kind: ChannelKind) -> &'static [&'static str] {
    match kind {
        ChannelKind::Email => &[
            "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
            "M22 6l-10 7L2 6",
        ],
        ChannelKind::Whatsapp => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        ChannelKind::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
        ],
        ChannelKind::Location => &[
            "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
            "M12 7a3 3 0 1 1 0 6 3 3 0 0 1 0-6z",
        ],
    }
}

#[component]
pub fn ChannelIcon(kind: ChannelKind) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="text-white text-xl h-6 w-6"
            aria-hidden="true"
        >
            {icon_paths(kind)
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect_view()}
        </svg>
    }
}
