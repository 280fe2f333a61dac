use log::warn;

/// Fire-and-forget navigation to an external URL.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn open(&self, url: &str);
}

/// Opens URLs in a new browsing context through `window.open`.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window available, cannot open {}", url);
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("window.open failed: {:?}", e);
        }
    }
}
