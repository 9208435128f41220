//! Theme registries loaded from RON files.
//!
//! A [`Registry`] maps a component family name, like `"dropdown"`, to a set of
//! per-slot overrides. Overrides are layered over a base [`SlotMap`] when a
//! widget is drawn, so only the fields a file sets change the appearance.
//!
//! ```ron
//! (
//!     families: {
//!         "dropdown": {
//!             "content": (background: Some("#202020"), border_width: Some(1.0)),
//!             "item": (hovered_background: Some("#3a3a3a")),
//!         },
//!     },
//! )
//! ```
use crate::core::{Color, Theme};
use crate::style::{self, Slot, SlotMap, Status, StyleFn};

use serde::Deserialize;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// An error produced while loading a [`Registry`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The theme file does not exist.
    #[error("theme file not found: {0}")]
    NotFound(String),
    /// The theme file could not be read.
    #[error("failed to read theme file {path}: {source}")]
    Read {
        /// The path of the file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The theme file is not valid RON.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A family names a slot that does not exist.
    #[error("unknown slot `{slot}` in family `{family}`")]
    UnknownSlot {
        /// The family containing the slot.
        family: String,
        /// The unknown slot key.
        slot: String,
    },
    /// A color could not be parsed.
    #[error("invalid color `{value}` for `{family}.{slot}`")]
    InvalidColor {
        /// The family containing the color.
        family: String,
        /// The slot containing the color.
        slot: String,
        /// The value that failed to parse.
        value: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct File {
    families: BTreeMap<String, BTreeMap<String, RawOverride>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOverride {
    background: Option<String>,
    hovered_background: Option<String>,
    text: Option<String>,
    border_color: Option<String>,
    border_width: Option<f32>,
    radius: Option<f32>,
}

/// The fields a theme file sets on a single [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Override {
    /// Replaces the background.
    pub background: Option<Color>,
    /// Replaces the background while hovered.
    pub hovered_background: Option<Color>,
    /// Replaces the text color.
    pub text: Option<Color>,
    /// Replaces the border color.
    pub border_color: Option<Color>,
    /// Replaces the border width.
    pub border_width: Option<f32>,
    /// Replaces the border radius.
    pub radius: Option<f32>,
}

impl Override {
    /// Applies the [`Override`] to a [`style::Style`].
    pub fn apply(&self, style: &mut style::Style, status: Status) {
        let background = match status {
            Status::Hovered => self.hovered_background.or(self.background),
            Status::Active | Status::Disabled => self.background,
        };

        if let Some(background) = background {
            style.background = Some(background.into());
        }

        if let Some(text) = self.text {
            style.text_color = Some(text);
        }

        if let Some(color) = self.border_color {
            style.border.color = color;
        }

        if let Some(width) = self.border_width {
            style.border.width = width;
        }

        if let Some(radius) = self.radius {
            style.border.radius = radius.into();
        }
    }
}

/// The overrides of a component family.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Family {
    overrides: BTreeMap<Slot, Override>,
}

impl Family {
    /// Creates an empty [`Family`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`Override`] of a [`Slot`].
    #[must_use]
    pub fn with(mut self, slot: Slot, value: Override) -> Self {
        let _ = self.overrides.insert(slot, value);
        self
    }

    /// Returns the [`Override`] of a [`Slot`], if any.
    pub fn get(&self, slot: Slot) -> Option<&Override> {
        self.overrides.get(&slot)
    }

    /// Applies every [`Override`] of the [`Family`] to a [`SlotMap`].
    pub fn apply(&self, slots: &mut SlotMap, status: Status) {
        for (slot, value) in &self.overrides {
            value.apply(slots.get_mut(*slot), status);
        }
    }
}

/// A set of named component families.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    families: BTreeMap<String, Arc<Family>>,
}

impl Registry {
    /// Creates an empty [`Registry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a [`Registry`] from RON.
    pub fn from_ron(source: &str) -> Result<Self, LoadError> {
        let file: File = ron::from_str(source)?;
        let mut registry = Self::new();

        for (name, raw) in file.families {
            let family = parse_family(&name, raw)?;
            registry.insert(name, family);
        }

        Ok(registry)
    }

    /// Loads a [`Registry`] from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let registry = Self::from_ron(&source)?;

        log::debug!(
            "loaded {} theme families from {}",
            registry.families.len(),
            path.display()
        );

        Ok(registry)
    }

    /// Adds or replaces a [`Family`].
    pub fn insert(&mut self, name: impl Into<String>, family: Family) {
        let _ = self.families.insert(name.into(), Arc::new(family));
    }

    /// Returns the [`Family`] registered under `name`, if any.
    pub fn family(&self, name: &str) -> Option<&Family> {
        self.families.get(name).map(AsRef::as_ref)
    }

    /// Returns a style class that layers the family `name` over the default
    /// slots of the built-in [`Theme`].
    pub fn class<'a>(&self, name: &str) -> StyleFn<'a, Theme> {
        self.class_with(name, style::default)
    }

    /// Returns a style class that layers the family `name` over the slots
    /// produced by `base`.
    ///
    /// An unknown family leaves `base` untouched.
    pub fn class_with<'a, T>(
        &self,
        name: &str,
        base: impl Fn(&T, Status) -> SlotMap + 'a,
    ) -> StyleFn<'a, T> {
        let family = self.families.get(name).cloned();

        if family.is_none() {
            log::warn!("theme family `{name}` is not registered, using defaults");
        }

        Box::new(move |theme, status| {
            let mut slots = base(theme, status);

            if let Some(family) = &family {
                family.apply(&mut slots, status);
            }

            slots
        })
    }
}

fn parse_family(name: &str, raw: BTreeMap<String, RawOverride>) -> Result<Family, LoadError> {
    let mut family = Family::new();

    for (key, raw) in raw {
        let slot = Slot::from_key(&key).ok_or_else(|| LoadError::UnknownSlot {
            family: name.to_owned(),
            slot: key.clone(),
        })?;

        let color = |value: Option<String>| -> Result<Option<Color>, LoadError> {
            value
                .map(|value| {
                    value.parse::<Color>().ok().ok_or_else(|| LoadError::InvalidColor {
                        family: name.to_owned(),
                        slot: key.clone(),
                        value,
                    })
                })
                .transpose()
        };

        let value = Override {
            background: color(raw.background)?,
            hovered_background: color(raw.hovered_background)?,
            text: color(raw.text)?,
            border_color: color(raw.border_color)?,
            border_width: raw.border_width,
            radius: raw.radius,
        };

        family = family.with(slot, value);
    }

    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Background;

    const SOURCE: &str = r##"
        (
            families: {
                "dropdown": {
                    "content": (background: Some("#202020"), border_width: Some(2.0)),
                    "item": (hovered_background: Some("#ff0000")),
                    "separator": (background: Some("#00ff00")),
                },
            },
        )
    "##;

    #[test]
    fn test_parse_families() {
        let registry = Registry::from_ron(SOURCE).expect("valid registry");
        let family = registry.family("dropdown").expect("dropdown family");

        let content = family.get(Slot::Content).expect("content override");
        assert_eq!(content.background, "#202020".parse::<Color>().ok());
        assert_eq!(content.border_width, Some(2.0));

        assert!(family.get(Slot::Separator).is_some());
        assert!(family.get(Slot::Arrow).is_none());
    }

    #[test]
    fn test_overrides_only_set_fields() {
        let registry = Registry::from_ron(SOURCE).expect("valid registry");
        let class = registry.class("dropdown");
        let theme = Theme::Light;

        let base = style::default(&theme, Status::Active);
        let slots = class(&theme, Status::Active);

        assert_eq!(
            slots.content.background,
            "#202020".parse::<Color>().ok().map(Background::Color)
        );
        assert_eq!(slots.content.border.width, 2.0);
        assert_eq!(slots.content.border.color, base.content.border.color);
        assert_eq!(slots.label, base.label);

        // Only hovered rows pick up the hovered background.
        assert_eq!(slots.item.background, base.item.background);

        let hovered = class(&theme, Status::Hovered);
        assert_eq!(
            hovered.item.background,
            "#ff0000".parse::<Color>().ok().map(Background::Color)
        );
    }

    #[test]
    fn test_unknown_family_falls_back() {
        let registry = Registry::new();
        let class = registry.class("dropdown");
        let theme = Theme::Dark;

        assert_eq!(
            class(&theme, Status::Active),
            style::default(&theme, Status::Active)
        );
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let error = Registry::from_ron(r#"(families: { "dropdown": { "footer": () } })"#)
            .expect_err("unknown slot");

        assert!(matches!(
            error,
            LoadError::UnknownSlot { ref family, ref slot }
                if family == "dropdown" && slot == "footer"
        ));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let error = Registry::from_ron(
            r#"(families: { "dropdown": { "item": (text: Some("not a color")) } })"#,
        )
        .expect_err("invalid color");

        assert!(matches!(
            error,
            LoadError::InvalidColor { ref value, .. } if value == "not a color"
        ));
    }

    #[test]
    fn test_parse_error() {
        let error = Registry::from_ron("(families: {").expect_err("truncated file");
        assert!(matches!(error, LoadError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "icy_ui_dropdown_theme_{}.ron",
            std::process::id()
        ));

        std::fs::write(&path, SOURCE).expect("write theme file");
        let registry = Registry::load(&path);
        std::fs::remove_file(&path).expect("remove theme file");

        assert!(registry.expect("loaded registry").family("dropdown").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let error = Registry::load("/definitely/not/here.ron").expect_err("missing file");
        assert!(matches!(error, LoadError::NotFound(_)));
    }

    #[test]
    fn test_custom_base() {
        let family = Family::new().with(
            Slot::Check,
            Override {
                text: Some(Color::WHITE),
                ..Override::default()
            },
        );

        let mut registry = Registry::new();
        registry.insert("dropdown", family);

        let class = registry.class_with("dropdown", |_: &(), _| SlotMap::default());
        let slots = class(&(), Status::Active);

        assert_eq!(slots.check.text_color, Some(Color::WHITE));
        assert_eq!(slots.item, style::Style::default());
    }
}
