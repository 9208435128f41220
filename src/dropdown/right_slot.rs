use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::widget::tree::Tree;
use crate::core::widget::{Operation, Widget};
use crate::core::{Element, Layout, Length, Point, Rectangle, Size};
use crate::dropdown::row::Empty;
use crate::style::{Catalog, SlotMap, Status, StyleFn};

const ICON_SPACING: f32 = 4.0;

/// A right-aligned slot, usually the trailing hint of an [`Item`].
///
/// [`Item`]: crate::dropdown::Item
pub struct RightSlot<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    icon: Element<'a, Message, Theme, Renderer>,
    content: Element<'a, Message, Theme, Renderer>,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme, Renderer> RightSlot<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Creates a new [`RightSlot`] with the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            icon: Element::new(Empty),
            content: content.into(),
            class: Theme::default(),
        }
    }

    /// Sets the icon drawn before the content.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the style of the [`RightSlot`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`RightSlot`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for RightSlot<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.icon), Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.icon, &self.content]);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.loose();

        let icon = self
            .icon
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &limits);

        let offset = if icon.size().width > 0.0 {
            icon.size().width + ICON_SPACING
        } else {
            0.0
        };

        let content = self.content.as_widget_mut().layout(
            &mut tree.children[1],
            renderer,
            &limits.shrink(Size::new(offset, 0.0)),
        );

        let height = icon.size().height.max(content.size().height);

        let icon_y = (height - icon.size().height) / 2.0;
        let content_y = (height - content.size().height) / 2.0;

        layout::Node::with_children(
            Size::new(offset + content.size().width, height),
            vec![
                icon.move_to(Point::new(0.0, icon_y)),
                content.move_to(Point::new(offset, content_y)),
            ],
        )
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content) = layout.children().nth(1) {
            self.content
                .as_widget_mut()
                .operate(&mut tree.children[1], content, renderer, operation);
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        defaults: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let style = theme.slots(&self.class, Status::Active).right_slot;

        if let Some(background) = style.background {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: layout.bounds(),
                    border: style.border,
                    shadow: style.shadow,
                    ..renderer::Quad::default()
                },
                background,
            );
        }

        let defaults = renderer::Style {
            text_color: style.text_color.unwrap_or(defaults.text_color),
        };

        for ((element, tree), layout) in [&self.icon, &self.content]
            .into_iter()
            .zip(&tree.children)
            .zip(layout.children())
        {
            element
                .as_widget()
                .draw(tree, renderer, theme, &defaults, layout, cursor, viewport);
        }
    }
}

impl<'a, Message, Theme, Renderer> From<RightSlot<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(slot: RightSlot<'a, Message, Theme, Renderer>) -> Self {
        Element::new(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::dropdown::testing::{self, Block, Message};

    #[test]
    fn test_shrinks_to_content() {
        let mut slot = RightSlot::<'static, Message, Theme, ()>::new(Block::new(30.0, 14.0));
        let mut tree = testing::tree(&slot);
        let node = testing::layout(&mut slot, &mut tree);

        assert_eq!(node.size(), Size::new(30.0, 14.0));
    }

    #[test]
    fn test_icon_precedes_content() {
        let mut slot = RightSlot::<'static, Message, Theme, ()>::new(Block::new(30.0, 14.0))
            .icon(Block::new(10.0, 10.0));
        let mut tree = testing::tree(&slot);
        let node = testing::layout(&mut slot, &mut tree);

        assert_eq!(node.size(), Size::new(10.0 + ICON_SPACING + 30.0, 14.0));

        let content = Layout::new(&node)
            .children()
            .nth(1)
            .map(|content| content.bounds().x);

        assert_eq!(content, Some(10.0 + ICON_SPACING));

        testing::draw(&slot, &tree, &node, Point::ORIGIN);
    }
}
