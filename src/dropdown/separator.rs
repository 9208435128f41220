use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::widget::tree::Tree;
use crate::core::widget::Widget;
use crate::core::{Element, Layout, Length, Rectangle, Size};
use crate::style::{Catalog, SlotMap, Status, StyleFn};

/// The thickness of the line of a [`Separator`].
const THICKNESS: f32 = 1.0;

/// The space above and below the line of a [`Separator`].
const MARGIN: f32 = 4.0;

/// A horizontal line between groups of rows.
pub struct Separator<'a, Theme = crate::Theme>
where
    Theme: Catalog,
{
    class: Theme::Class<'a>,
}

impl<'a, Theme> Separator<'a, Theme>
where
    Theme: Catalog,
{
    /// Creates a new [`Separator`].
    pub fn new() -> Self {
        Self {
            class: Theme::default(),
        }
    }

    /// Sets the style of the [`Separator`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Separator`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<Theme> Default for Separator<'_, Theme>
where
    Theme: Catalog,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Separator<'_, Theme>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fixed(THICKNESS + MARGIN * 2.0))
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, THICKNESS + MARGIN * 2.0)
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let style = theme.slots(&self.class, Status::Active).separator;

        let Some(background) = style.background else {
            return;
        };

        let bounds = layout.bounds();

        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    y: bounds.y + MARGIN,
                    height: THICKNESS,
                    ..bounds
                },
                border: style.border,
                shadow: style.shadow,
                ..renderer::Quad::default()
            },
            background,
        );
    }
}

impl<'a, Message, Theme, Renderer> From<Separator<'a, Theme>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(separator: Separator<'a, Theme>) -> Self {
        Element::new(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::Point;
    use crate::dropdown::testing::{self, Message};

    #[test]
    fn test_separator_spans_panel() {
        let mut separator = Separator::<'static, Theme>::new();
        let mut tree = testing::tree::<Separator<'static, Theme>>(&separator);
        let node = testing::layout::<Separator<'static, Theme>>(&mut separator, &mut tree);

        assert_eq!(node.size(), Size::new(220.0, THICKNESS + MARGIN * 2.0));

        let (messages, captured) = testing::update::<Separator<'static, Theme>>(
            &mut separator,
            &mut tree,
            &node,
            testing::press(),
            Point::new(10.0, 4.0),
        );

        assert!(messages.is_empty());
        assert!(!captured);

        testing::draw::<Separator<'static, Theme>>(&separator, &tree, &node, Point::ORIGIN);

        let _: Element<'static, Message, Theme, ()> = separator.into();
    }
}
