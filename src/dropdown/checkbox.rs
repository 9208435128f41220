use crate::control::{Control, Mirror};
use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::text;
use crate::core::touch;
use crate::core::widget::text::{self as text_widget, Text};
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{Operation, Widget};
use crate::core::window;
use crate::core::{Clipboard, Element, Event, Layout, Length, Rectangle, Shell, Size};
use crate::dropdown::item::status;
use crate::dropdown::row::{Row, Styles};
use crate::style::{Catalog, SlotMap, Status, StyleFn};

/// The size of the default check mark.
const CHECK_SIZE: f32 = 12.0;

/// A row of a dropdown panel that toggles a boolean.
///
/// A [`Checkbox`] is uncontrolled and unchecked by default. Calling
/// [`Checkbox::checked`] makes it controlled: it then always displays the
/// given value and only reports changes through [`Checkbox::on_change`].
///
/// # Example
/// ```ignore
/// Checkbox::new(text("Word wrap"))
///     .checked(state.word_wrap)
///     .on_change(Message::WordWrapToggled)
/// ```
pub struct Checkbox<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    row: Row<'a, Message, Theme, Renderer>,
    checked: Control<bool>,
    on_change: Option<Box<dyn Fn(bool) -> Message + 'a>>,
    disabled: bool,
    indicator: Indicator,
    class: Theme::Class<'a>,
    last_status: Option<Status>,
}

/// The indicator a [`Checkbox`] shows while checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    /// The built-in check mark.
    Default,
    /// An indicator supplied with [`Checkbox::indicator`].
    Custom,
}

impl<'a, Message, Theme, Renderer> Checkbox<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + text_widget::Catalog + 'a,
    Renderer: text::Renderer + 'a,
{
    /// Creates a new [`Checkbox`] with the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        let check = Text::new(Renderer::CHECKMARK_ICON.to_string())
            .font(Renderer::ICON_FONT)
            .size(CHECK_SIZE);

        Self {
            row: Row::new(content).leading(check),
            checked: Control::default(),
            on_change: None,
            disabled: false,
            indicator: Indicator::Default,
            class: <Theme as Catalog>::default(),
            last_status: None,
        }
    }
}

impl<'a, Message, Theme, Renderer> Checkbox<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Makes the [`Checkbox`] controlled, displaying `checked`.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Control::Controlled(checked);
        self
    }

    /// Sets the value an uncontrolled [`Checkbox`] starts with.
    #[must_use]
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.checked = Control::Uncontrolled { initial: checked };
        self
    }

    /// Sets the function producing the message published when the
    /// [`Checkbox`] is toggled.
    ///
    /// The message is published before an uncontrolled [`Checkbox`] updates
    /// its own state.
    #[must_use]
    pub fn on_change(mut self, on_change: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Sets whether the [`Checkbox`] is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replaces the default check mark with a custom indicator.
    #[must_use]
    pub fn indicator(
        mut self,
        indicator: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.row = self.row.leading(indicator);
        self.indicator = Indicator::Custom;
        self
    }

    /// Sets the style of the [`Checkbox`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Checkbox`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<Message, Theme, Renderer> Checkbox<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    /// Returns whether the [`Checkbox`] displays as checked in `tree`.
    pub(crate) fn is_checked(&self, tree: &Tree) -> bool {
        *tree.state.downcast_ref::<State>().mirror.current(&self.checked)
    }

    /// Returns the indicator shown in `tree`, if any.
    pub(crate) fn shown_indicator(&self, tree: &Tree) -> Option<Indicator> {
        self.is_checked(tree).then_some(self.indicator)
    }
}

struct State {
    mirror: Mirror<bool>,
    is_pressed: bool,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Checkbox<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            mirror: self.checked.mirror(),
            is_pressed: false,
        })
    }

    fn children(&self) -> Vec<Tree> {
        self.row.children()
    }

    fn diff(&self, tree: &mut Tree) {
        self.row.diff(tree);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.row.layout(tree, renderer, limits)
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
        self.row.update(
            tree, event, layout, cursor, renderer, clipboard, shell, viewport,
        );

        if shell.is_event_captured() {
            return;
        }

        let state = tree.state.downcast_mut::<State>();
        let is_over = cursor.is_over(layout.bounds());

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if !self.disabled && is_over {
                    state.is_pressed = true;
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if state.is_pressed {
                    state.is_pressed = false;

                    if is_over && !self.disabled {
                        let next = !*state.mirror.current(&self.checked);
                        let on_change = self.on_change.as_deref();

                        state.mirror.commit(&self.checked, next, |change| {
                            if let Some(on_change) = on_change {
                                shell.publish(on_change(*change.next));
                            }
                        });

                        shell.capture_event();
                        shell.request_redraw();
                    }
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                state.is_pressed = false;
            }
            _ => {}
        }

        let current_status = status(self.disabled, is_over);

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.last_status = Some(current_status);
        } else if self
            .last_status
            .is_some_and(|last_status| last_status != current_status)
        {
            shell.request_redraw();
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if !self.disabled && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.row.operate(tree, layout, renderer, operation);
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
        let status = status(self.disabled, cursor.is_over(layout.bounds()));
        let slots = theme.slots(&self.class, status);

        self.row.draw(
            tree,
            renderer,
            theme,
            defaults,
            layout,
            cursor,
            viewport,
            Styles {
                row: slots.input_row(),
                leading: slots.check,
                ..Styles::default()
            },
            self.shown_indicator(tree).is_some(),
        );
    }
}

impl<'a, Message, Theme, Renderer> From<Checkbox<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(checkbox: Checkbox<'a, Message, Theme, Renderer>) -> Self {
        Element::new(checkbox)
    }
}
