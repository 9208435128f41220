use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::touch;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{Operation, Widget};
use crate::core::window;
use crate::core::{Clipboard, Element, Event, Layout, Length, Rectangle, Shell, Size};
use crate::dropdown::RightSlot;
use crate::dropdown::row::{Row, Styles};
use crate::style::{Catalog, SlotMap, Status, StyleFn};

/// An actionable row of a dropdown panel.
///
/// # Example
/// ```ignore
/// Item::new(text("Copy"))
///     .icon(copy_icon())
///     .right_slot(text("Ctrl+C"))
///     .on_select(Message::Copy)
/// ```
pub struct Item<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    row: Row<'a, Message, Theme, Renderer>,
    on_select: Option<Message>,
    disabled: bool,
    class: Theme::Class<'a>,
    last_status: Option<Status>,
}

impl<'a, Message, Theme, Renderer> Item<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Creates a new [`Item`] with the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            row: Row::new(content),
            on_select: None,
            disabled: false,
            class: Theme::default(),
            last_status: None,
        }
    }

    /// Sets the icon drawn in the leading gutter of the [`Item`].
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.row = self.row.leading(icon);
        self
    }

    /// Sets the trailing content of the [`Item`], usually a shortcut hint.
    ///
    /// The content is wrapped in a [`RightSlot`].
    #[must_use]
    pub fn right_slot(mut self, content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.row = self.row.trailing(RightSlot::new(content));
        self
    }

    /// Sets the message published when the [`Item`] is selected.
    #[must_use]
    pub fn on_select(mut self, message: Message) -> Self {
        self.on_select = Some(message);
        self
    }

    /// Sets the message published when the [`Item`] is selected, if any.
    #[must_use]
    pub fn on_select_maybe(mut self, message: Option<Message>) -> Self {
        self.on_select = message;
        self
    }

    /// Sets whether the [`Item`] is disabled.
    ///
    /// A disabled [`Item`] never publishes its message.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the style of the [`Item`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Item`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    is_pressed: bool,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Item<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
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
                        if let Some(on_select) = self.on_select.clone() {
                            shell.publish(on_select);
                        }

                        shell.capture_event();
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

        self.row.draw(
            tree,
            renderer,
            theme,
            defaults,
            layout,
            cursor,
            viewport,
            self.styles(theme, status),
            true,
        );
    }
}

impl<Message, Theme, Renderer> Item<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    /// The row is drawn with the item slot and its trailing content with the
    /// right slot of the same class.
    fn styles(&self, theme: &Theme, status: Status) -> Styles {
        let slots = theme.slots(&self.class, status);

        Styles {
            row: slots.item,
            trailing: slots.right_slot,
            ..Styles::default()
        }
    }
}

pub(crate) fn status(disabled: bool, is_over: bool) -> Status {
    if disabled {
        Status::Disabled
    } else if is_over {
        Status::Hovered
    } else {
        Status::Active
    }
}

impl<'a, Message, Theme, Renderer> From<Item<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(item: Item<'a, Message, Theme, Renderer>) -> Self {
        Element::new(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::{Color, Point};
    use crate::dropdown::testing::{self, Block, Message};

    fn item() -> Item<'static, Message, Theme, ()> {
        Item::new(Block::new(80.0, 14.0))
            .right_slot(Block::new(30.0, 14.0))
            .on_select(Message::Selected("copy"))
    }

    const INSIDE: Point = Point::new(50.0, 10.0);
    const OUTSIDE: Point = Point::new(50.0, 100.0);

    #[test]
    fn test_click_selects() {
        let mut item = item();
        let mut tree = testing::tree(&item);
        let node = testing::layout(&mut item, &mut tree);

        let messages = testing::click(&mut item, &mut tree, &node, INSIDE);

        assert_eq!(messages, vec![Message::Selected("copy")]);
    }

    #[test]
    fn test_press_is_captured() {
        let mut item = item();
        let mut tree = testing::tree(&item);
        let node = testing::layout(&mut item, &mut tree);

        let (messages, captured) =
            testing::update(&mut item, &mut tree, &node, testing::press(), INSIDE);

        assert!(messages.is_empty());
        assert!(captured);
    }

    #[test]
    fn test_release_outside_does_not_select() {
        let mut item = item();
        let mut tree = testing::tree(&item);
        let node = testing::layout(&mut item, &mut tree);

        let _ = testing::update(&mut item, &mut tree, &node, testing::press(), INSIDE);
        let (messages, captured) =
            testing::update(&mut item, &mut tree, &node, testing::release(), OUTSIDE);

        assert!(messages.is_empty());
        assert!(!captured);
    }

    #[test]
    fn test_disabled_never_selects() {
        let mut item = item().disabled(true);
        let mut tree = testing::tree(&item);
        let node = testing::layout(&mut item, &mut tree);

        let mut messages = testing::click(&mut item, &mut tree, &node, INSIDE);

        for event in [testing::press(), testing::lift(), testing::release()] {
            let (published, captured) = testing::update(&mut item, &mut tree, &node, event, INSIDE);

            assert!(!captured);
            messages.extend(published);
        }

        assert!(messages.is_empty());
    }

    #[test]
    fn test_layout_fills_panel_width() {
        let mut item = item();
        let mut tree = testing::tree(&item);
        let node = testing::layout(&mut item, &mut tree);

        assert_eq!(node.size().width, 220.0);
        assert_eq!(node.children().len(), 3);

        testing::draw(&item, &tree, &node, INSIDE);
    }

    #[test]
    fn test_right_slot_uses_item_class() {
        let hint = Color::from_rgb(0.5, 0.5, 0.5);

        let item = item().style(move |theme: &Theme, status| {
            let mut slots = crate::style::default(theme, status);
            slots.right_slot.text_color = Some(hint);
            slots
        });

        let styles = item.styles(&Theme::Light, Status::Active);

        assert_eq!(styles.trailing.text_color, Some(hint));
        assert_eq!(
            styles.row,
            crate::style::default(&Theme::Light, Status::Active).item
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(status(true, true), Status::Disabled);
        assert_eq!(status(false, true), Status::Hovered);
        assert_eq!(status(false, false), Status::Active);
    }
}
