//! The floating panel of a [`Dropdown`](crate::dropdown::Dropdown).
use crate::control::Control;
use crate::core::keyboard;
use crate::core::keyboard::key::{self, Key};
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::touch;
use crate::core::widget::tree::Tree;
use crate::core::widget::Operation;
use crate::core::{
    Clipboard, Color, Element, Event, Layout, Length, Point, Rectangle, Shell, Size, Vector,
};
use crate::dropdown::root::{State, request};
use crate::placement::{self, Align, Side};
use crate::style::{Catalog, Status};

/// The space between the edge of the panel and its content.
pub(crate) const PANEL_PADDING: f32 = 4.0;

pub(crate) struct Content<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    pub(crate) state: &'b mut State,
    pub(crate) tree: &'b mut Tree,
    pub(crate) content: &'b mut Element<'a, Message, Theme, Renderer>,
    pub(crate) open: &'b Control<bool>,
    pub(crate) on_open_change: Option<&'b dyn Fn(bool) -> Message>,
    pub(crate) class: &'b Theme::Class<'a>,
    pub(crate) trigger: Rectangle,
    pub(crate) side: Side,
    pub(crate) align: Align,
    pub(crate) arrow: bool,
    pub(crate) width: Length,
    pub(crate) close_on_select: bool,
}

impl<Message, Theme, Renderer> Content<'_, '_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn close(&mut self, shell: &mut Shell<'_, Message>) {
        request(self.state, self.open, self.on_open_change, false, shell);
    }
}

impl<Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for Content<'_, '_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let limits = layout::Limits::new(Size::ZERO, bounds).width(self.width);
        let padding = Size::new(PANEL_PADDING * 2.0, PANEL_PADDING * 2.0);

        let node = self
            .content
            .as_widget_mut()
            .layout(self.tree, renderer, &limits.shrink(padding));

        let size = limits.resolve(
            self.width,
            Length::Shrink,
            Size::new(
                node.size().width + padding.width,
                node.size().height + padding.height,
            ),
        );

        let placement = placement::resolve(self.trigger, size, self.side, self.align, bounds);
        self.state.placement = Some(placement);

        layout::Node::with_children(
            size,
            vec![node.move_to(Point::new(PANEL_PADDING, PANEL_PADDING))],
        )
        .move_to(placement.content.position())
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let bounds = layout.bounds();
        let slots = theme.slots(self.class, Status::Active);

        if self.arrow
            && let Some(placement) = self.state.placement
            && let Some(background) = slots.arrow.background.or(slots.content.background)
        {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: placement.arrow,
                    border: slots.arrow.border,
                    shadow: slots.arrow.shadow,
                    ..renderer::Quad::default()
                },
                background,
            );
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: slots.content.border,
                shadow: slots.content.shadow,
                ..renderer::Quad::default()
            },
            slots
                .content
                .background
                .unwrap_or(Color::TRANSPARENT.into()),
        );

        let Some(content) = layout.children().next() else {
            return;
        };

        self.content.as_widget().draw(
            self.tree,
            renderer,
            theme,
            &renderer::Style {
                text_color: slots.content.text_color.unwrap_or(style.text_color),
            },
            content,
            cursor,
            &bounds,
        );
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        let bounds = layout.bounds();
        self.state.suppress_press = false;

        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        }) = event
        {
            self.close(shell);
            shell.capture_event();
            return;
        }

        let pressed_at = match event {
            Event::Mouse(mouse::Event::ButtonPressed(_)) => cursor.position(),
            Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(*position),
            _ => None,
        };

        if let Some(position) = pressed_at
            && !bounds.contains(position)
        {
            self.close(shell);

            // The trigger sees this press next and must not reopen.
            if self.trigger.contains(position) {
                self.state.suppress_press = true;
                shell.capture_event();
            }

            return;
        }

        let Some(content) = layout.children().next() else {
            return;
        };

        self.content.as_widget_mut().update(
            self.tree, event, content, cursor, renderer, clipboard, shell, &bounds,
        );

        if pressed_at.is_some() {
            shell.capture_event();
        }

        let released_inside = match event {
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                cursor.is_over(bounds)
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => bounds.contains(*position),
            _ => false,
        };

        if self.close_on_select && released_inside && shell.is_event_captured() {
            self.close(shell);
        }
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content) = layout.children().next() else {
            return mouse::Interaction::default();
        };

        self.content.as_widget().mouse_interaction(
            self.tree,
            content,
            cursor,
            &layout.bounds(),
            renderer,
        )
    }

    fn operate(
        &mut self,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content) = layout.children().next() {
            self.content
                .as_widget_mut()
                .operate(self.tree, content, renderer, operation);
        }
    }

    fn overlay<'c>(
        &'c mut self,
        layout: Layout<'c>,
        renderer: &Renderer,
    ) -> Option<overlay::Element<'c, Message, Theme, Renderer>> {
        let bounds = layout.bounds();

        self.content.as_widget_mut().overlay(
            self.tree,
            layout.children().next()?,
            renderer,
            &bounds,
            Vector::ZERO,
        )
    }
}
