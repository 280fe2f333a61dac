use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use super::lazy_image::LazyImage;
use super::reveal::use_reveal;

#[derive(Clone, PartialEq)]
pub struct GalleryImage {
    pub src: AttrValue,
    pub alt: AttrValue,
}

impl GalleryImage {
    pub fn new(src: &'static str, alt: &'static str) -> Self {
        Self {
            src: AttrValue::from(src),
            alt: AttrValue::from(alt),
        }
    }
}

fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("Could not set body overflow: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: GalleryImage,
    pub on_close: Callback<()>,
}

/// Full-screen view of one gallery image. Page scrolling is locked while it is
/// mounted.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let overlay_ref = use_node_ref();

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                set_body_overflow("hidden");

                let document = web_sys::window().and_then(|w| w.document());
                let escape_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document.add_event_listener_with_callback(
                        "keydown",
                        escape_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for Escape: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        if let Err(e) = document.remove_event_listener_with_callback(
                            "keydown",
                            escape_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not remove Escape listener: {:?}", e);
                        }
                    }
                    set_body_overflow("");
                }
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Only clicks on the dark backdrop itself close the modal.
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let on_backdrop = overlay_ref
                .get()
                .map_or(false, |overlay| overlay.is_same_node(target.as_ref()));
            if on_backdrop {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="image-modal">
            <style>
                {r#"
                    .image-modal {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 10000;
                    }
                    .modal-overlay {
                        width: 100%;
                        height: 100%;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 20px;
                    }
                    .modal-content {
                        position: relative;
                        max-width: 90%;
                        max-height: 90%;
                    }
                    .modal-content img {
                        max-width: 100%;
                        max-height: 90vh;
                        border-radius: 12px;
                    }
                    .modal-close {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        background: white;
                        border: none;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        font-size: 24px;
                        cursor: pointer;
                        color: #333;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.3s;
                    }
                    .modal-close:hover {
                        background: #FF6B9D;
                        color: white;
                        transform: rotate(90deg);
                    }
                "#}
            </style>
            <div class="modal-overlay" ref={overlay_ref} onclick={on_overlay_click}>
                <div class="modal-content">
                    <button class="modal-close" onclick={close}>{"×"}</button>
                    <img src={props.image.src.clone()} alt={props.image.alt.clone()} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryItemProps {
    image: GalleryImage,
    on_select: Callback<GalleryImage>,
}

#[function_component(GalleryItem)]
fn gallery_item(props: &GalleryItemProps) -> Html {
    let item_ref = use_node_ref();
    use_reveal(item_ref.clone());

    let onclick = {
        let image = props.image.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(image.clone()))
    };

    html! {
        <div class="gallery-item" ref={item_ref} {onclick}>
            <LazyImage src={props.image.src.clone()} alt={props.image.alt.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let opened = use_state(|| None::<GalleryImage>);

    let on_select = {
        let opened = opened.clone();
        Callback::from(move |image: GalleryImage| opened.set(Some(image)))
    };
    let on_close = {
        let opened = opened.clone();
        Callback::from(move |_: ()| opened.set(None))
    };

    html! {
        <div class="gallery-grid">
            { for props.images.iter().map(|image| html! {
                <GalleryItem image={image.clone()} on_select={on_select.clone()} />
            }) }
            {
                if let Some(image) = (*opened).clone() {
                    html! { <Lightbox {image} {on_close} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
