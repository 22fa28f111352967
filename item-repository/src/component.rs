//! Rendering of items into elements.

use itemdom::Element;

/// Renders one item into an element.
///
/// The repository tags the returned element with the item snapshot and
/// places it among the bound element's children; implementations only build
/// the element.
pub trait Component<T> {
    /// Per-render configuration, forwarded from
    /// [`RepositoryOptions::child_component_options`](crate::RepositoryOptions).
    type Config;

    fn render(&self, item: &T, config: &Self::Config) -> Element;
}

impl<T, F> Component<T> for F
where
    F: Fn(&T) -> Element,
{
    type Config = ();

    fn render(&self, item: &T, _config: &()) -> Element {
        self(item)
    }
}
