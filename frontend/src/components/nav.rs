use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use super::anchor::AnchorLink;

const LINKS: [(&str, &str); 4] = [
    ("#home", "Início"),
    ("#features", "Serviços"),
    ("#gallery", "Galeria"),
    ("#contact", "Contato"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    // Setting an unchanged value does not re-render.
    let menu_open = use_state_eq(|| false);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Close the mobile menu when clicking anywhere outside of it
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let outside_click = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node: &NodeRef| {
                        node.get()
                            .map_or(false, |node| node.contains(target.as_ref()))
                    };
                    if !inside(&toggle_ref) && !inside(&menu_ref) {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document.add_event_listener_with_callback(
                        "click",
                        outside_click.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for outside clicks: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        if let Err(e) = document.remove_event_listener_with_callback(
                            "click",
                            outside_click.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not remove outside-click listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <AnchorLink href="#home" class="nav-logo">
                    {"Magia Total"}
                </AnchorLink>

                <button class={classes!("mobile-toggle", active)} ref={toggle_ref} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-menu", active)} ref={menu_ref}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} class="nav-link" onclick={close_menu.clone()}>
                            { *label }
                        </AnchorLink>
                    }) }
                </div>
            </div>
        </nav>
    }
}
