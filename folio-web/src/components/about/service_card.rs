use folio::{Service, TiltOptions};
use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let options = TiltOptions::default();
    let transform = create_rw_signal(options.neutral_transform());

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(element) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let (px, py) = TiltOptions::ratio(
            (f64::from(ev.client_x()), f64::from(ev.client_y())),
            (rect.left(), rect.top()),
            (rect.width(), rect.height()),
        );
        transform.set(options.transform(px, py));
    };
    let on_mouse_leave =
        move |_: MouseEvent| transform.set(options.neutral_transform());

    let Service { title, icon } = service;

    view! {
        <div
            class="xs:w-[250px] w-full"
            style:transform=move || transform.get()
            style:transition=options.transition()
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
        >
            <div class="w-full green-pink-gradient p-[1px] rounded-[20px] shadow-card">
                <div class="bg-tertiary rounded-[20px] py-5 px-12 min-h-[280px] flex justify-evenly items-center flex-col">
                    <img src=icon alt=title.clone() class="w-16 h-16 object-contain"/>
                    <h3 class="text-white text-[20px] font-bold text-center">{title}</h3>
                </div>
            </div>
        </div>
    }
}
