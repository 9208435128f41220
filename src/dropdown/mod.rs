//! The dropdown widget family.
//!
//! A [`Dropdown`] pairs a trigger with a floating panel. The panel is any
//! [`Element`](crate::core::Element), usually a column built from the rows of
//! this module:
//!
//! - [`Item`]: an actionable row.
//! - [`Checkbox`]: a row toggling a boolean.
//! - [`RadioGroup`] of [`Radio`] rows: a single selection among values.
//! - [`Label`], [`Separator`], [`Misc`] and [`RightSlot`]: structural rows.
//!
//! Every widget resolves its own [`Slot`](crate::style::Slot)s from the theme
//! it is drawn with, so each can be restyled independently.
mod checkbox;
mod item;
mod label;
mod misc;
mod overlay;
mod radio;
mod right_slot;
mod root;
mod row;
mod separator;

pub use checkbox::Checkbox;
pub use item::Item;
pub use label::Label;
pub use misc::Misc;
pub use radio::{Radio, RadioGroup};
pub use right_slot::RightSlot;
pub use root::Dropdown;
pub use separator::Separator;

pub use crate::placement::{Align, Side};

use crate::core::Element;
use crate::style::Catalog;

/// Creates a new [`Dropdown`] with the given trigger and panel content.
pub fn dropdown<'a, Message, Theme, Renderer>(
    trigger: impl Into<Element<'a, Message, Theme, Renderer>>,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Dropdown<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    Dropdown::new(trigger, content)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Headless helpers for widget tests.
    use crate::core::layout;
    use crate::core::mouse;
    use crate::core::renderer;
    use crate::core::widget::Widget;
    use crate::core::widget::tree::Tree;
    use crate::core::{Element, Event, Layout, Length, Point, Rectangle, Size, clipboard, touch};
    use crate::Theme;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Message {
        Opened(bool),
        Selected(&'static str),
        Toggled(bool),
        Picked(String),
    }

    /// A fixed-size widget that draws nothing.
    pub(crate) struct Block {
        size: Size,
    }

    impl Block {
        pub(crate) fn new(width: f32, height: f32) -> Self {
            Self {
                size: Size::new(width, height),
            }
        }
    }

    impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Block
    where
        Renderer: crate::core::Renderer,
    {
        fn size(&self) -> Size<Length> {
            Size::new(
                Length::Fixed(self.size.width),
                Length::Fixed(self.size.height),
            )
        }

        fn layout(
            &mut self,
            _tree: &mut Tree,
            _renderer: &Renderer,
            limits: &layout::Limits,
        ) -> layout::Node {
            layout::Node::new(limits.resolve(
                Length::Fixed(self.size.width),
                Length::Fixed(self.size.height),
                self.size,
            ))
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

    impl<'a, Message, Theme, Renderer> From<Block> for Element<'a, Message, Theme, Renderer>
    where
        Renderer: crate::core::Renderer,
    {
        fn from(block: Block) -> Self {
            Element::new(block)
        }
    }

    /// Builds the tree a runtime would create for `widget`.
    pub(crate) fn tree<W>(widget: &W) -> Tree
    where
        W: Widget<Message, Theme, ()>,
    {
        Tree {
            tag: widget.tag(),
            state: widget.state(),
            children: widget.children(),
        }
    }

    /// The viewport every test lays out in.
    pub(crate) fn viewport() -> Size {
        Size::new(800.0, 600.0)
    }

    pub(crate) fn layout<W>(widget: &mut W, tree: &mut Tree) -> layout::Node
    where
        W: Widget<Message, Theme, ()>,
    {
        widget.layout(
            tree,
            &(),
            &layout::Limits::new(Size::ZERO, Size::new(220.0, viewport().height)),
        )
    }

    /// Feeds `event` to `widget` with the cursor at `position`, returning the
    /// published messages and whether the event was captured.
    pub(crate) fn update<W>(
        widget: &mut W,
        tree: &mut Tree,
        node: &layout::Node,
        event: Event,
        position: Point,
    ) -> (Vec<Message>, bool)
    where
        W: Widget<Message, Theme, ()>,
    {
        let mut messages = Vec::new();
        let mut shell = crate::core::Shell::new(&mut messages);

        widget.update(
            tree,
            &event,
            Layout::new(node),
            mouse::Cursor::Available(position),
            &(),
            &mut clipboard::Null,
            &mut shell,
            &Rectangle::with_size(viewport()),
        );

        let captured = shell.is_event_captured();
        drop(shell);

        (messages, captured)
    }

    /// Presses and releases the left button at `position`.
    pub(crate) fn click<W>(
        widget: &mut W,
        tree: &mut Tree,
        node: &layout::Node,
        position: Point,
    ) -> Vec<Message>
    where
        W: Widget<Message, Theme, ()>,
    {
        let (mut messages, _) = update(widget, tree, node, press(), position);
        let (released, _) = update(widget, tree, node, release(), position);

        messages.extend(released);
        messages
    }

    pub(crate) fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    pub(crate) fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    pub(crate) fn lift() -> Event {
        Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: Point::ORIGIN,
        })
    }

    /// Draws `widget` with the null renderer.
    pub(crate) fn draw<W>(widget: &W, tree: &Tree, node: &layout::Node, position: Point)
    where
        W: Widget<Message, Theme, ()>,
    {
        widget.draw(
            tree,
            &mut (),
            &Theme::Light,
            &renderer::Style::default(),
            Layout::new(node),
            mouse::Cursor::Available(position),
            &Rectangle::with_size(viewport()),
        );
    }
}
