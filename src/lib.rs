//! A dropdown menu widget family for iced.
//!
//! The [`dropdown`] module exposes a [`Dropdown`] root, which pairs a trigger
//! with a floating panel, and the rows a panel is usually built from:
//! items, checkbox items, radio groups, labels, separators, misc rows and
//! right-aligned slots.
//!
//! Every widget resolves its appearance through the [`style::Catalog`] of the
//! theme it is drawn with. Themes can be swapped at composition time with a
//! [`theme::Registry`] loaded from RON.
//!
//! # Example
//! ```ignore
//! use icy_ui_dropdown::dropdown::{self, Checkbox, Item, Label, Radio, RadioGroup, Separator};
//! use iced_widget::{column, text};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     MenuToggled(bool),
//!     Copy,
//!     WrapToggled(bool),
//!     ZoomSelected(String),
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     let menu = column![
//!         Label::new(text("Edit")),
//!         Item::new(text("Copy")).right_slot(text("Ctrl+C")).on_select(Message::Copy),
//!         Separator::new(),
//!         Checkbox::new(text("Word wrap"))
//!             .checked(state.wrap)
//!             .on_change(Message::WrapToggled),
//!         RadioGroup::new(vec![
//!             Radio::new("100", text("100%")),
//!             Radio::new("200", text("200%")),
//!         ])
//!         .on_change(Message::ZoomSelected),
//!     ];
//!
//!     dropdown::dropdown(text("Menu"), menu)
//!         .side(dropdown::Side::Right)
//!         .arrow(true)
//!         .on_open_change(Message::MenuToggled)
//!         .into()
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use iced_core as core;
pub use iced_widget::Renderer;

pub use crate::core::Theme;

pub mod control;
pub mod dropdown;
pub mod placement;
pub mod style;
pub mod theme;

pub use dropdown::{Dropdown, dropdown};
