use crate::core::layout;
use crate::core::mouse;
use crate::core::renderer;
use crate::core::widget::tree::Tree;
use crate::core::widget::{Operation, Widget};
use crate::core::{Clipboard, Element, Event, Layout, Length, Rectangle, Shell, Size};
use crate::dropdown::row::{Row, Styles};
use crate::style::{Catalog, SlotMap, Status, StyleFn};

/// A free-form row of a dropdown panel.
///
/// Unlike an [`Item`], a [`Misc`] row is never highlighted or selected. Its
/// content still receives events, so it can host its own widgets.
///
/// [`Item`]: crate::dropdown::Item
pub struct Misc<'a, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    row: Row<'a, Message, Theme, Renderer>,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme, Renderer> Misc<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Creates a new [`Misc`] row with the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            row: Row::new(content),
            class: Theme::default(),
        }
    }

    /// Sets the icon drawn in the leading gutter.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.row = self.row.leading(icon);
        self
    }

    /// Sets the style of the [`Misc`] row.
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> SlotMap + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Misc`] row.
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Misc<'_, Message, Theme, Renderer>
where
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
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
        let slots = theme.slots(&self.class, Status::Active);

        self.row.draw(
            tree,
            renderer,
            theme,
            defaults,
            layout,
            cursor,
            viewport,
            Styles {
                row: slots.misc,
                ..Styles::default()
            },
            true,
        );
    }
}

impl<'a, Message, Theme, Renderer> From<Misc<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(misc: Misc<'a, Message, Theme, Renderer>) -> Self {
        Element::new(misc)
    }
}
