//! Display port — writes into page elements addressed by id.

use crate::error::RenderError;

/// A page whose elements can be updated in place.
///
/// Implementations never create, remove or reorder elements. Every method
/// reports [`RenderError::MissingElement`] when the id does not resolve.
pub trait DisplaySurface {
    /// Replace the text content of an element.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingElement`] if no element has this id.
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), RenderError>;

    /// Add (`present == true`) or remove a CSS class on an element.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingElement`] if no element has this id.
    fn set_class(&self, element_id: &str, class: &str, present: bool) -> Result<(), RenderError>;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &T {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), RenderError> {
        (**self).set_text(element_id, text)
    }

    fn set_class(&self, element_id: &str, class: &str, present: bool) -> Result<(), RenderError> {
        (**self).set_class(element_id, class, present)
    }
}
