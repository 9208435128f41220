//! Slot styling for the dropdown family.
//!
//! Every widget of the family asks its theme for a [`SlotMap`] when it is
//! drawn and picks the [`Slot`]s it paints.
use crate::core::border::Border;
use crate::core::{Background, Color, Shadow, Theme, Vector};

/// A named visual region of the dropdown family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// The floating panel.
    Content,
    /// The region wrapping the trigger.
    Trigger,
    /// The arrow pointing from the panel to the trigger.
    Arrow,
    /// An actionable row.
    Item,
    /// A checkbox or radio row, painted on top of [`Slot::Item`].
    Input,
    /// The indicator of a checked or selected row.
    Check,
    /// A label row.
    Label,
    /// A separator line.
    Separator,
    /// A misc row.
    Misc,
    /// A right-aligned slot.
    RightSlot,
}

impl Slot {
    /// All the slots, in declaration order.
    pub const ALL: [Slot; 10] = [
        Slot::Content,
        Slot::Trigger,
        Slot::Arrow,
        Slot::Item,
        Slot::Input,
        Slot::Check,
        Slot::Label,
        Slot::Separator,
        Slot::Misc,
        Slot::RightSlot,
    ];

    /// Returns the key of the slot in theme files.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Content => "content",
            Slot::Trigger => "trigger",
            Slot::Arrow => "arrow",
            Slot::Item => "item",
            Slot::Input => "input",
            Slot::Check => "check",
            Slot::Label => "label",
            Slot::Separator => "seperator",
            Slot::Misc => "misc",
            Slot::RightSlot => "right_slot",
        }
    }

    /// Looks up a slot by its key. `separator` is accepted as well.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == "separator" {
            return Some(Slot::Separator);
        }

        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

/// The appearance of a single [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// The [`Background`] of the slot, if any.
    pub background: Option<Background>,
    /// The text [`Color`] of the slot, if it overrides the inherited one.
    pub text_color: Option<Color>,
    /// The [`Border`] of the slot.
    pub border: Border,
    /// The [`Shadow`] of the slot.
    pub shadow: Shadow,
}

impl Style {
    /// Returns the [`Style`] with the given background.
    pub fn with_background(self, background: impl Into<Background>) -> Self {
        Self {
            background: Some(background.into()),
            ..self
        }
    }
}

/// The resolved appearance of every [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotMap {
    /// The [`Style`] of [`Slot::Content`].
    pub content: Style,
    /// The [`Style`] of [`Slot::Trigger`].
    pub trigger: Style,
    /// The [`Style`] of [`Slot::Arrow`].
    pub arrow: Style,
    /// The [`Style`] of [`Slot::Item`].
    pub item: Style,
    /// The [`Style`] of [`Slot::Input`].
    pub input: Style,
    /// The [`Style`] of [`Slot::Check`].
    pub check: Style,
    /// The [`Style`] of [`Slot::Label`].
    pub label: Style,
    /// The [`Style`] of [`Slot::Separator`].
    pub separator: Style,
    /// The [`Style`] of [`Slot::Misc`].
    pub misc: Style,
    /// The [`Style`] of [`Slot::RightSlot`].
    pub right_slot: Style,
}

impl SlotMap {
    /// Returns the [`Style`] of a [`Slot`].
    pub fn get(&self, slot: Slot) -> &Style {
        match slot {
            Slot::Content => &self.content,
            Slot::Trigger => &self.trigger,
            Slot::Arrow => &self.arrow,
            Slot::Item => &self.item,
            Slot::Input => &self.input,
            Slot::Check => &self.check,
            Slot::Label => &self.label,
            Slot::Separator => &self.separator,
            Slot::Misc => &self.misc,
            Slot::RightSlot => &self.right_slot,
        }
    }

    /// Returns a mutable reference to the [`Style`] of a [`Slot`].
    pub fn get_mut(&mut self, slot: Slot) -> &mut Style {
        match slot {
            Slot::Content => &mut self.content,
            Slot::Trigger => &mut self.trigger,
            Slot::Arrow => &mut self.arrow,
            Slot::Item => &mut self.item,
            Slot::Input => &mut self.input,
            Slot::Check => &mut self.check,
            Slot::Label => &mut self.label,
            Slot::Separator => &mut self.separator,
            Slot::Misc => &mut self.misc,
            Slot::RightSlot => &mut self.right_slot,
        }
    }

    /// Returns the combined [`Style`] of an input row: [`Slot::Item`] with
    /// [`Slot::Input`] painted on top.
    pub fn input_row(&self) -> Style {
        Style {
            background: self.input.background.or(self.item.background),
            text_color: self.input.text_color.or(self.item.text_color),
            border: if self.input.border == Border::default() {
                self.item.border
            } else {
                self.input.border
            },
            shadow: self.item.shadow,
        }
    }
}

/// The possible status of a widget of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The widget can be interacted with.
    Active,
    /// The widget is being hovered, or its panel is open.
    Hovered,
    /// The widget cannot be interacted with.
    Disabled,
}

/// The theme catalog of the dropdown family.
pub trait Catalog {
    /// The item class of the [`Catalog`].
    type Class<'a>;

    /// The default class produced by the [`Catalog`].
    fn default<'a>() -> Self::Class<'a>;

    /// The [`SlotMap`] of a class with the given status.
    fn slots(&self, class: &Self::Class<'_>, status: Status) -> SlotMap;
}

/// A styling function for the dropdown family.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme, Status) -> SlotMap + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn slots(&self, class: &Self::Class<'_>, status: Status) -> SlotMap {
        class(self, status)
    }
}

/// The default slots of the dropdown family.
pub fn default(theme: &Theme, status: Status) -> SlotMap {
    let palette = theme.extended_palette();

    let text = palette.background.base.text;
    let muted = text.scale_alpha(0.6);

    let content = Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(if palette.is_dark { 0.5 } else { 0.2 }),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
    };

    let item = Style {
        background: None,
        text_color: Some(text),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    };

    let item = match status {
        Status::Active => item,
        Status::Hovered => Style {
            text_color: Some(palette.primary.strong.text),
            ..item.with_background(palette.primary.strong.color)
        },
        Status::Disabled => Style {
            text_color: Some(text.scale_alpha(0.4)),
            ..item
        },
    };

    SlotMap {
        content,
        trigger: Style {
            background: match status {
                Status::Hovered => Some(palette.background.weak.color.into()),
                Status::Active | Status::Disabled => None,
            },
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..Style::default()
        },
        arrow: Style {
            background: content.background,
            ..Style::default()
        },
        item,
        input: Style::default(),
        check: Style {
            text_color: Some(item.text_color.unwrap_or(text)),
            ..Style::default()
        },
        label: Style {
            text_color: Some(muted),
            ..Style::default()
        },
        separator: Style {
            background: Some(palette.background.strong.color.into()),
            ..Style::default()
        },
        misc: Style {
            text_color: Some(muted),
            ..Style::default()
        },
        right_slot: Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_key(slot.key()), Some(slot));
        }

        assert_eq!(Slot::from_key("separator"), Some(Slot::Separator));
        assert_eq!(Slot::from_key("footer"), None);
    }

    #[test]
    fn test_hovered_item_is_highlighted() {
        let theme = Theme::Light;

        let active = theme.slots(&<Theme as Catalog>::default(), Status::Active);
        let hovered = theme.slots(&<Theme as Catalog>::default(), Status::Hovered);

        assert!(active.item.background.is_none());
        assert!(hovered.item.background.is_some());
        assert_eq!(active.content, hovered.content);
    }

    #[test]
    fn test_disabled_item_is_dimmed() {
        let slots = default(&Theme::Dark, Status::Disabled);
        let active = default(&Theme::Dark, Status::Active);

        let dimmed = slots.item.text_color.map(|color| color.a);
        let normal = active.item.text_color.map(|color| color.a);

        assert!(dimmed < normal);
    }

    #[test]
    fn test_input_row_layers_over_item() {
        let mut slots = SlotMap::default();
        slots.item.text_color = Some(Color::WHITE);
        slots.input.background = Some(Color::BLACK.into());

        let row = slots.input_row();

        assert_eq!(row.text_color, Some(Color::WHITE));
        assert_eq!(row.background, Some(Color::BLACK.into()));
    }
}
