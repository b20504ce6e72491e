use folio::SiteConfig;
use leptos::logging::error;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::{Home, NotFound};
use crate::GlobalState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = match SiteConfig::load() {
        Ok(site) => site,
        Err(err) => {
            error!("Failed to load site config: {}", err);
            return view! {
                <div class="p-8 text-white">
                    "This site is not configured correctly."
                </div>
            }
            .into_view();
        }
    };

    let title = format!("{} | Portfolio", site.owner.name);
    provide_context(GlobalState::new(site));

    view! {
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Title text=title/>
        <Router fallback=|| view! { <NotFound/> }.into_view()>
            <Routes>
                <Route path="" view=|| view! { <Home/> }/>
            </Routes>
        </Router>
    }
    .into_view()
}
