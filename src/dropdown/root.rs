use crate::control::{Control, Mirror};
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::touch;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{Operation, Widget};
use crate::core::window;
use crate::core::{Clipboard, Element, Event, Layout, Length, Rectangle, Shell, Size, Vector};
use crate::dropdown::overlay::Content;
use crate::placement::{Align, Placement, Side};
use crate::style::{Catalog, SlotMap, Status, StyleFn};

/// A trigger paired with a floating panel.
///
/// Pressing the trigger opens the panel next to it. Pressing outside the
/// panel, pressing the trigger again, pressing <kbd>Esc</kbd> or selecting a
/// row of the panel closes it.
///
/// A [`Dropdown`] is uncontrolled and closed by default. Calling
/// [`Dropdown::open`] makes it controlled: it then only reports visibility
/// changes through [`Dropdown::on_open_change`] and the caller decides.
///
/// # Example
/// ```ignore
/// Dropdown::new(text("File"), column![
///     Item::new(text("New")).on_select(Message::New),
///     Item::new(text("Open")).on_select(Message::Open),
/// ])
/// .side(Side::Right)
/// .align(Align::Start)
/// .arrow(true)
/// ```
pub struct Dropdown<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    trigger: Element<'a, Message, Theme, Renderer>,
    content: Element<'a, Message, Theme, Renderer>,
    open: Control<bool>,
    on_open_change: Option<Box<dyn Fn(bool) -> Message + 'a>>,
    side: Side,
    align: Align,
    arrow: bool,
    width: Length,
    close_on_select: bool,
    class: Theme::Class<'a>,
    last_status: Option<Status>,
}

impl<'a, Message, Theme, Renderer> Dropdown<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    /// The default width of the panel.
    pub const DEFAULT_WIDTH: f32 = 220.0;

    /// Creates a new [`Dropdown`] with the given trigger and panel content.
    pub fn new(
        trigger: impl Into<Element<'a, Message, Theme, Renderer>>,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            content: content.into(),
            open: Control::default(),
            on_open_change: None,
            side: Side::default(),
            align: Align::default(),
            arrow: false,
            width: Length::Fixed(Self::DEFAULT_WIDTH),
            close_on_select: true,
            class: Theme::default(),
            last_status: None,
        }
    }

    /// Makes the [`Dropdown`] controlled, showing the panel when `open` is
    /// `true`.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Control::Controlled(open);
        self
    }

    /// Sets whether an uncontrolled [`Dropdown`] starts open.
    #[must_use]
    pub fn default_open(mut self, open: bool) -> Self {
        self.open = Control::Uncontrolled { initial: open };
        self
    }

    /// Sets the function producing the message published when the panel
    /// asks to open or close.
    #[must_use]
    pub fn on_open_change(mut self, on_open_change: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_open_change = Some(Box::new(on_open_change));
        self
    }

    /// Sets the preferred [`Side`] of the panel.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Sets the [`Align`]ment of the panel along its side.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets whether an arrow points from the panel to the trigger.
    #[must_use]
    pub fn arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    /// Sets the width of the panel.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets whether selecting a row of the panel closes it.
    #[must_use]
    pub fn close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = close_on_select;
        self
    }

    /// Sets the style of the [`Dropdown`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Dropdown`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }

    /// Returns whether the panel is shown in `tree`.
    pub(crate) fn is_open(&self, tree: &Tree) -> bool {
        *tree.state.downcast_ref::<State>().mirror.current(&self.open)
    }

    pub(crate) fn content_overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        trigger: Rectangle,
    ) -> Content<'a, 'b, Message, Theme, Renderer> {
        let Tree {
            state, children, ..
        } = tree;

        Content {
            state: state.downcast_mut::<State>(),
            tree: &mut children[1],
            content: &mut self.content,
            open: &self.open,
            on_open_change: self.on_open_change.as_deref(),
            class: &self.class,
            trigger,
            side: self.side,
            align: self.align,
            arrow: self.arrow,
            width: self.width,
            close_on_select: self.close_on_select,
        }
    }
}

pub(crate) struct State {
    pub(crate) mirror: Mirror<bool>,
    /// Set when the panel closed on a press over the trigger.
    pub(crate) suppress_press: bool,
    pub(crate) placement: Option<Placement>,
}

/// Requests a visibility change.
///
/// `on_open_change` is published first; an uncontrolled mirror is updated
/// afterwards.
pub(crate) fn request<Message>(
    state: &mut State,
    control: &Control<bool>,
    on_open_change: Option<&dyn Fn(bool) -> Message>,
    open: bool,
    shell: &mut Shell<'_, Message>,
) {
    state.mirror.commit(control, open, |change| {
        log::debug!(
            "dropdown visibility change requested: {} -> {}",
            change.previous,
            change.next
        );

        if let Some(on_open_change) = on_open_change {
            shell.publish(on_open_change(*change.next));
        }
    });

    shell.invalidate_layout();
    shell.request_redraw();
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Dropdown<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            mirror: self.open.mirror(),
            suppress_press: false,
            placement: None,
        })
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.trigger), Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.trigger, &self.content]);
    }

    fn size(&self) -> Size<Length> {
        self.trigger.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.trigger
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn update(
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
        let is_over = cursor.is_over(layout.bounds());

        {
            let state = tree.state.downcast_mut::<State>();
            let suppressed = std::mem::take(&mut state.suppress_press);

            if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) = event
                && is_over
            {
                if !suppressed && !*state.mirror.current(&self.open) {
                    request(
                        state,
                        &self.open,
                        self.on_open_change.as_deref(),
                        true,
                        shell,
                    );
                }

                shell.capture_event();
                return;
            }

            let is_open = *state.mirror.current(&self.open);
            let current_status = if is_open || is_over {
                Status::Hovered
            } else {
                Status::Active
            };

            if let Event::Window(window::Event::RedrawRequested(_now)) = event {
                self.last_status = Some(current_status);
            } else if self
                .last_status
                .is_some_and(|last_status| last_status != current_status)
            {
                shell.request_redraw();
            }
        }

        self.trigger.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Pointer;
        }

        self.trigger.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.trigger
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let status = if self.is_open(tree) || cursor.is_over(layout.bounds()) {
            Status::Hovered
        } else {
            Status::Active
        };

        let trigger = theme.slots(&self.class, status).trigger;

        if let Some(background) = trigger.background {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: layout.bounds(),
                    border: trigger.border,
                    shadow: trigger.shadow,
                    ..renderer::Quad::default()
                },
                background,
            );
        }

        self.trigger.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            &renderer::Style {
                text_color: trigger.text_color.unwrap_or(style.text_color),
            },
            layout,
            cursor,
            viewport,
        );
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        if !self.is_open(tree) {
            return self.trigger.as_widget_mut().overlay(
                &mut tree.children[0],
                layout,
                renderer,
                viewport,
                translation,
            );
        }

        let trigger = layout.bounds() + translation;

        Some(overlay::Element::new(Box::new(
            self.content_overlay(tree, trigger),
        )))
    }
}

impl<'a, Message, Theme, Renderer> From<Dropdown<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(dropdown: Dropdown<'a, Message, Theme, Renderer>) -> Self {
        Element::new(dropdown)
    }
}
