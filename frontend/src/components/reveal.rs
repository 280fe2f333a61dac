use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use super::observer::{viewport_options, VisibilityWatch};
use crate::config;

const REVEALED_CLASS: &str = "fade-in";

fn reveal(element: &Element) {
    if let Err(e) = element.class_list().add_1(REVEALED_CLASS) {
        warn!("Could not reveal element: {:?}", e);
    }
}

/// Fades the referenced element in the first time it scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let watch = node.cast::<Element>().and_then(|element| {
                let options = viewport_options(config::REVEAL_THRESHOLD, config::REVEAL_ROOT_MARGIN);
                match VisibilityWatch::once(&element, &options, reveal) {
                    Ok(watch) => Some(watch),
                    Err(e) => {
                        debug!("IntersectionObserver unavailable ({:?}), showing element", e);
                        reveal(&element);
                        None
                    }
                }
            });
            move || drop(watch)
        },
        node,
    );
}
