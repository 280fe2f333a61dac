use log::{debug, warn};
use web_sys::{Element, IntersectionObserverInit};
use yew::prelude::*;

use super::observer::VisibilityWatch;

/// Moves `data-src` into `src` so the browser starts fetching the image.
fn load_deferred(element: &Element) {
    let Some(src) = element.get_attribute("data-src") else {
        return;
    };
    if let Err(e) = element.set_attribute("src", &src) {
        warn!("Could not load lazy image {}: {:?}", src, e);
        return;
    }
    if let Err(e) = element.remove_attribute("data-src") {
        warn!("Could not clear data-src of {}: {:?}", src, e);
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that is only fetched once it reaches the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let img_ref = use_node_ref();

    {
        use_effect_with_deps(
            move |img_ref: &NodeRef| {
                let watch = img_ref.cast::<Element>().and_then(|img| {
                    match VisibilityWatch::once(&img, &IntersectionObserverInit::new(), load_deferred) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            debug!("IntersectionObserver unavailable ({:?}), loading eagerly", e);
                            load_deferred(&img);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            img_ref.clone(),
        );
    }

    html! {
        <img
            ref={img_ref}
            class={props.class.clone()}
            data-src={props.src.clone()}
            alt={props.alt.clone()}
        />
    }
}
