//! The shared layout of a menu row: a leading gutter, the content and an
//! optional trailing element.
use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{Operation, Widget};
use crate::core::{Clipboard, Element, Event, Layout, Length, Point, Rectangle, Shell, Size};
use crate::style;

/// The minimum height of a row.
pub const ROW_HEIGHT: f32 = 28.0;

/// The horizontal padding of a row.
pub const PADDING_X: f32 = 8.0;

/// The vertical padding of a row.
pub const PADDING_Y: f32 = 4.0;

/// The width of the leading gutter, where icons and indicators go.
pub const GUTTER: f32 = 20.0;

/// The spacing between the content and the trailing element.
pub const SPACING: f32 = 6.0;

pub(crate) struct Row<'a, Message, Theme, Renderer>
where
    Renderer: crate::core::Renderer,
{
    leading: Element<'a, Message, Theme, Renderer>,
    content: Element<'a, Message, Theme, Renderer>,
    trailing: Element<'a, Message, Theme, Renderer>,
}

impl<'a, Message, Theme, Renderer> Row<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: crate::core::Renderer + 'a,
{
    pub(crate) fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            leading: Element::new(Empty),
            content: content.into(),
            trailing: Element::new(Empty),
        }
    }

    pub(crate) fn leading(
        mut self,
        leading: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.leading = leading.into();
        self
    }

    pub(crate) fn trailing(
        mut self,
        trailing: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.trailing = trailing.into();
        self
    }
}

impl<Message, Theme, Renderer> Row<'_, Message, Theme, Renderer>
where
    Renderer: crate::core::Renderer,
{
    /// The child trees of the row, in leading, content, trailing order.
    pub(crate) fn children(&self) -> Vec<Tree> {
        vec![
            Tree::new(&self.leading),
            Tree::new(&self.content),
            Tree::new(&self.trailing),
        ]
    }

    /// A stateless tree holding the children of the row.
    pub(crate) fn tree(&self) -> Tree {
        Tree {
            tag: tree::Tag::stateless(),
            state: tree::State::None,
            children: self.children(),
        }
    }

    pub(crate) fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.leading, &self.content, &self.trailing]);
    }

    pub(crate) fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(Length::Fill).height(Length::Shrink);
        let max = limits.max();

        let leading = self.leading.as_widget_mut().layout(
            &mut tree.children[0],
            renderer,
            &layout::Limits::new(Size::ZERO, Size::new(GUTTER, max.height)),
        );

        let available = (max.width - PADDING_X * 2.0 - GUTTER).max(0.0);

        let trailing = self.trailing.as_widget_mut().layout(
            &mut tree.children[2],
            renderer,
            &layout::Limits::new(Size::ZERO, Size::new(available, max.height)),
        );

        let trailing_width = trailing.size().width;
        let gap = if trailing_width > 0.0 { SPACING } else { 0.0 };

        let content = self.content.as_widget_mut().layout(
            &mut tree.children[1],
            renderer,
            &layout::Limits::new(
                Size::ZERO,
                Size::new((available - trailing_width - gap).max(0.0), max.height),
            ),
        );

        let height = [leading.size(), content.size(), trailing.size()]
            .iter()
            .fold(0.0f32, |height, size| height.max(size.height))
            + PADDING_Y * 2.0;

        let intrinsic = Size::new(
            PADDING_X * 2.0 + GUTTER + content.size().width + gap + trailing_width,
            height.max(ROW_HEIGHT),
        );

        let size = limits.resolve(Length::Fill, Length::Shrink, intrinsic);
        let size = Size::new(
            if size.width.is_finite() {
                size.width
            } else {
                intrinsic.width
            },
            intrinsic.height,
        );

        let center = |node: &layout::Node| (size.height - node.size().height) / 2.0;

        let leading_position = Point::new(
            PADDING_X + (GUTTER - leading.size().width) / 2.0,
            center(&leading),
        );
        let content_position = Point::new(PADDING_X + GUTTER, center(&content));
        let trailing_position = Point::new(
            size.width - PADDING_X - trailing_width,
            center(&trailing),
        );

        layout::Node::with_children(
            size,
            vec![
                leading.move_to(leading_position),
                content.move_to(content_position),
                trailing.move_to(trailing_position),
            ],
        )
    }

    /// The bounds of the leading gutter of a row laid out by [`Row::layout`].
    pub(crate) fn gutter_bounds(layout: Layout<'_>) -> Rectangle {
        let bounds = layout.bounds();

        Rectangle {
            x: bounds.x + PADDING_X,
            y: bounds.y,
            width: GUTTER,
            height: bounds.height,
        }
    }

    pub(crate) fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        for ((element, tree), layout) in [&mut self.leading, &mut self.content, &mut self.trailing]
            .into_iter()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            element.as_widget_mut().update(
                tree, event, layout, cursor, renderer, clipboard, shell, viewport,
            );
        }
    }

    pub(crate) fn operate(
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

    /// Draws the row with the given slot styles.
    ///
    /// `row` styles the whole row, `leading` the gutter and `trailing` the
    /// trailing element. The gutter is skipped unless `show_leading` is set.
    pub(crate) fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        defaults: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        styles: Styles,
        show_leading: bool,
    ) {
        let bounds = layout.bounds();

        if let Some(background) = styles.row.background {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: styles.row.border,
                    shadow: styles.row.shadow,
                    ..renderer::Quad::default()
                },
                background,
            );
        }

        let text_color = styles.row.text_color.unwrap_or(defaults.text_color);
        let inherit = |style: &style::Style| renderer::Style {
            text_color: style.text_color.unwrap_or(text_color),
        };

        let mut children = layout.children();

        if let Some(leading) = children.next() && show_leading {
            self.leading.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                &inherit(&styles.leading),
                leading,
                cursor,
                viewport,
            );
        }

        if let Some(content) = children.next() {
            self.content.as_widget().draw(
                &tree.children[1],
                renderer,
                theme,
                &renderer::Style { text_color },
                content,
                cursor,
                viewport,
            );
        }

        if let Some(trailing) = children.next() {
            if let Some(background) = styles.trailing.background {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: trailing.bounds(),
                        border: styles.trailing.border,
                        shadow: styles.trailing.shadow,
                        ..renderer::Quad::default()
                    },
                    background,
                );
            }

            self.trailing.as_widget().draw(
                &tree.children[2],
                renderer,
                theme,
                &inherit(&styles.trailing),
                trailing,
                cursor,
                viewport,
            );
        }
    }
}

/// The slot styles a [`Row`] is drawn with.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Styles {
    pub(crate) row: style::Style,
    pub(crate) leading: style::Style,
    pub(crate) trailing: style::Style,
}

/// A widget that takes no space and draws nothing.
pub(crate) struct Empty;

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Empty
where
    Renderer: crate::core::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Shrink, Length::Shrink)
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(Size::ZERO)
    }

    fn draw(
        &self,
        _tree: &Tree,
        _renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::dropdown::testing::{Block, Message};

    fn row(trailing: bool) -> Row<'static, Message, Theme, ()> {
        let row = Row::new(Block::new(60.0, 14.0)).leading(Block::new(12.0, 12.0));

        if trailing {
            row.trailing(Block::new(40.0, 14.0))
        } else {
            row
        }
    }

    #[test]
    fn test_row_fills_width() {
        let mut row = row(true);
        let mut tree = row.tree();

        let node = row.layout(
            &mut tree,
            &(),
            &layout::Limits::new(Size::ZERO, Size::new(220.0, 600.0)),
        );

        assert_eq!(node.size(), Size::new(220.0, ROW_HEIGHT));

        let layout = Layout::new(&node);
        let children: Vec<_> = layout.children().map(|child| child.bounds()).collect();

        assert_eq!(children[0].x, PADDING_X + 4.0);
        assert_eq!(children[1].x, PADDING_X + GUTTER);
        assert_eq!(children[2].x + children[2].width, 220.0 - PADDING_X);
        assert_eq!(children[1].y, (ROW_HEIGHT - 14.0) / 2.0);
    }

    #[test]
    fn test_row_grows_with_content() {
        let mut row = Row::<'static, Message, Theme, ()>::new(Block::new(60.0, 40.0));
        let mut tree = row.tree();

        let node = row.layout(
            &mut tree,
            &(),
            &layout::Limits::new(Size::ZERO, Size::new(220.0, 600.0)),
        );

        assert_eq!(node.size().height, 40.0 + PADDING_Y * 2.0);
    }

    #[test]
    fn test_gutter_bounds() {
        let mut row = row(false);
        let mut tree = row.tree();

        let node = row
            .layout(
                &mut tree,
                &(),
                &layout::Limits::new(Size::ZERO, Size::new(220.0, 600.0)),
            )
            .move_to(Point::new(10.0, 50.0));

        let gutter = Row::<'static, Message, Theme, ()>::gutter_bounds(Layout::new(&node));

        assert_eq!(gutter, Rectangle::new(Point::new(18.0, 50.0), Size::new(GUTTER, ROW_HEIGHT)));
    }
}
