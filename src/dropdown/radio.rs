use crate::control::{Control, Mirror};
use crate::core::border;
use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::touch;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{Operation, Widget};
use crate::core::window;
use crate::core::{Clipboard, Element, Event, Layout, Length, Point, Rectangle, Shell, Size, Vector};
use crate::dropdown::item::status;
use crate::dropdown::row::{Row, Styles};
use crate::style::{Catalog, SlotMap, Status, StyleFn};

/// The diameter of the default selection dot.
const DOT_SIZE: f32 = 6.0;

/// A row of a [`RadioGroup`], carrying its candidate value.
pub struct Radio<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Renderer: crate::core::Renderer,
{
    value: String,
    row: Row<'a, Message, Theme, Renderer>,
    has_indicator: bool,
    disabled: bool,
}

impl<'a, Message, Theme, Renderer> Radio<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Creates a new [`Radio`] with the given value and content.
    pub fn new(
        value: impl Into<String>,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            value: value.into(),
            row: Row::new(content),
            has_indicator: false,
            disabled: false,
        }
    }

    /// Replaces the default selection dot with a custom indicator.
    #[must_use]
    pub fn indicator(
        mut self,
        indicator: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.row = self.row.leading(indicator);
        self.has_indicator = true;
        self
    }

    /// Sets whether the [`Radio`] is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the value of the [`Radio`].
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A group of [`Radio`] rows with a single selected value.
///
/// The group owns the selection. An empty selection, the default, matches
/// no row. When several rows share a value, only the first one is selected.
/// Other elements, like a [`Label`] or a [`Separator`], can be placed between
/// the rows with [`RadioGroup::push_element`].
///
/// [`Label`]: crate::dropdown::Label
/// [`Separator`]: crate::dropdown::Separator
///
/// # Example
/// ```ignore
/// RadioGroup::new([
///     Radio::new("light", text("Light")),
///     Radio::new("dark", text("Dark")),
/// ])
/// .value(&state.theme)
/// .on_change(Message::ThemeSelected)
/// ```
pub struct RadioGroup<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    children: Vec<Child<'a, Message, Theme, Renderer>>,
    value: Control<String>,
    on_change: Option<Box<dyn Fn(String) -> Message + 'a>>,
    class: Theme::Class<'a>,
    last_hovered: Option<Option<usize>>,
}

impl<'a, Message, Theme, Renderer> RadioGroup<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Creates a new [`RadioGroup`] with the given rows.
    pub fn new(radios: impl IntoIterator<Item = Radio<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            children: radios.into_iter().map(Child::Radio).collect(),
            value: Control::default(),
            on_change: None,
            class: Theme::default(),
            last_hovered: None,
        }
    }

    /// Adds a [`Radio`] to the [`RadioGroup`].
    #[must_use]
    pub fn push(mut self, radio: Radio<'a, Message, Theme, Renderer>) -> Self {
        self.children.push(Child::Radio(radio));
        self
    }

    /// Adds an element that takes no part in the selection.
    #[must_use]
    pub fn push_element(
        mut self,
        element: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        self.children.push(Child::Element(element.into()));
        self
    }

    /// Makes the [`RadioGroup`] controlled, selecting `value`.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Control::Controlled(value.into());
        self
    }

    /// Sets the value an uncontrolled [`RadioGroup`] starts with.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.value = Control::Uncontrolled {
            initial: value.into(),
        };
        self
    }

    /// Sets the function producing the message published when a different
    /// [`Radio`] is selected.
    ///
    /// The message is published before an uncontrolled [`RadioGroup`] updates
    /// its own selection.
    #[must_use]
    pub fn on_change(mut self, on_change: impl Fn(String) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Sets the style of the [`RadioGroup`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`RadioGroup`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<Message, Theme, Renderer> RadioGroup<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    /// Returns the index of the [`Radio`] matching `selection`.
    fn selected_index(&self, selection: &str) -> Option<usize> {
        if selection.is_empty() {
            return None;
        }

        self.children
            .iter()
            .position(|child| child.radio().is_some_and(|radio| radio.value == selection))
    }

    /// Returns the index of the child holding the selected [`Radio`] in
    /// `tree`, if any.
    pub(crate) fn selected(&self, tree: &Tree) -> Option<usize> {
        let state = tree.state.downcast_ref::<State>();

        self.selected_index(state.mirror.current(&self.value))
    }

    fn hovered(&self, layout: Layout<'_>, cursor: mouse::Cursor) -> Option<usize> {
        layout.children().zip(&self.children).position(|(layout, child)| {
            child
                .radio()
                .is_some_and(|radio| !radio.disabled && cursor.is_over(layout.bounds()))
        })
    }
}

enum Child<'a, Message, Theme, Renderer>
where
    Renderer: crate::core::Renderer,
{
    Radio(Radio<'a, Message, Theme, Renderer>),
    Element(Element<'a, Message, Theme, Renderer>),
}

impl<'a, Message, Theme, Renderer> Child<'a, Message, Theme, Renderer>
where
    Renderer: crate::core::Renderer,
{
    fn radio(&self) -> Option<&Radio<'a, Message, Theme, Renderer>> {
        match self {
            Child::Radio(radio) => Some(radio),
            Child::Element(_) => None,
        }
    }

    fn tree(&self) -> Tree {
        match self {
            Child::Radio(radio) => radio.row.tree(),
            Child::Element(element) => Tree::new(element),
        }
    }

    fn diff(&self, tree: &mut Tree) {
        match self {
            Child::Radio(radio) if tree.tag == tree::Tag::stateless() => radio.row.diff(tree),
            Child::Radio(radio) => *tree = radio.row.tree(),
            Child::Element(element) => tree.diff(element),
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        match self {
            Child::Radio(radio) => radio.row.layout(tree, renderer, limits),
            Child::Element(element) => element.as_widget_mut().layout(tree, renderer, limits),
        }
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
        match self {
            Child::Radio(radio) => radio.row.update(
                tree, event, layout, cursor, renderer, clipboard, shell, viewport,
            ),
            Child::Element(element) => element.as_widget_mut().update(
                tree, event, layout, cursor, renderer, clipboard, shell, viewport,
            ),
        }
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        match self {
            Child::Radio(radio) => radio.row.operate(tree, layout, renderer, operation),
            Child::Element(element) => {
                element
                    .as_widget_mut()
                    .operate(tree, layout, renderer, operation);
            }
        }
    }
}

struct State {
    mirror: Mirror<String>,
    pressed: Option<usize>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for RadioGroup<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            mirror: self.value.mirror(),
            pressed: None,
        })
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Child::tree).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.children.truncate(self.children.len());

        for (i, child) in self.children.iter().enumerate() {
            if let Some(child_tree) = tree.children.get_mut(i) {
                child.diff(child_tree);
            } else {
                tree.children.push(child.tree());
            }
        }
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
        let limits = limits.width(Length::Fill).height(Length::Shrink);

        let mut height = 0.0;
        let mut width = 0.0f32;

        let children = self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .map(|(child, tree)| {
                let node = child
                    .layout(tree, renderer, &limits)
                    .move_to(Point::new(0.0, height));

                height += node.size().height;
                width = width.max(node.size().width);

                node
            })
            .collect();

        layout::Node::with_children(Size::new(width, height), children)
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
        for ((child, tree), layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child.update(
                tree, event, layout, cursor, renderer, clipboard, shell, viewport,
            );
        }

        if shell.is_event_captured() {
            return;
        }

        let hovered = self.hovered(layout, cursor);
        let state = tree.state.downcast_mut::<State>();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if hovered.is_some() {
                    state.pressed = hovered;
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if let Some(pressed) = state.pressed.take()
                    && hovered == Some(pressed)
                    && let Some(radio) = self.children.get(pressed).and_then(Child::radio)
                {
                    let next = radio.value.clone();
                    let on_change = self.on_change.as_deref();

                    state.mirror.commit(&self.value, next, |change| {
                        if let Some(on_change) = on_change {
                            shell.publish(on_change(change.next.clone()));
                        }
                    });

                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                state.pressed = None;
            }
            _ => {}
        }

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.last_hovered = Some(hovered);
        } else if self
            .last_hovered
            .is_some_and(|last_hovered| last_hovered != hovered)
        {
            shell.request_redraw();
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.hovered(layout, cursor).is_some() {
            return mouse::Interaction::Pointer;
        }

        self.children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .filter_map(|((child, tree), layout)| match child {
                Child::Element(element) => Some(element.as_widget().mouse_interaction(
                    tree, layout, cursor, viewport, renderer,
                )),
                Child::Radio(_) => None,
            })
            .max()
            .unwrap_or_default()
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        for ((child, tree), layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child.operate(tree, layout, renderer, operation);
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
        let selected = self.selected(tree);

        for (i, ((child, tree), layout)) in self
            .children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .enumerate()
        {
            let radio = match child {
                Child::Radio(radio) => radio,
                Child::Element(element) => {
                    element
                        .as_widget()
                        .draw(tree, renderer, theme, defaults, layout, cursor, viewport);
                    continue;
                }
            };

            let is_selected = selected == Some(i);
            let status = status(radio.disabled, cursor.is_over(layout.bounds()));
            let slots = theme.slots(&self.class, status);

            radio.row.draw(
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
                is_selected && radio.has_indicator,
            );

            if is_selected && !radio.has_indicator {
                let gutter = Row::<'_, Message, Theme, Renderer>::gutter_bounds(layout);
                let center = gutter.center() - Vector::new(DOT_SIZE / 2.0, DOT_SIZE / 2.0);

                renderer.fill_quad(
                    renderer::Quad {
                        bounds: Rectangle::new(center, Size::new(DOT_SIZE, DOT_SIZE)),
                        border: border::rounded(DOT_SIZE / 2.0),
                        ..renderer::Quad::default()
                    },
                    slots
                        .check
                        .text_color
                        .or(slots.input_row().text_color)
                        .unwrap_or(defaults.text_color),
                );
            }
        }
    }
}

impl<'a, Message, Theme, Renderer> From<RadioGroup<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(group: RadioGroup<'a, Message, Theme, Renderer>) -> Self {
        Element::new(group)
    }
}
