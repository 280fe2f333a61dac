use super::fields::{Field, FormFields};

/// Handle to one success banner on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);

/// The slice of the document the submission pipeline reads from and writes to.
///
/// Methods take `&self`: implementations sit on top of DOM handles or Yew
/// dispatchers, both of which are shared and internally mutable.
pub trait RenderSurface {
    fn read_fields(&self) -> FormFields;

    /// Drops every error annotation and errored-field marker.
    fn clear_errors(&self);

    fn insert_error(&self, field: Field, message: &str);

    fn reset_fields(&self);

    fn show_banner(&self, message: &str) -> BannerId;

    /// Starts the slide-out transition of a banner.
    fn begin_banner_exit(&self, id: BannerId);

    fn remove_banner(&self, id: BannerId);
}
