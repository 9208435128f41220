//! Controlled and uncontrolled widget values.
//!
//! A value is either owned by the caller ([`Control::Controlled`]) or by the
//! widget itself ([`Control::Uncontrolled`]). The choice is made once, when
//! the widget is built, and the widget keeps a [`Mirror`] of the value in its
//! tree state for the uncontrolled case.

/// Where the truth of a widget value lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control<T> {
    /// The caller owns the value and updates it in response to change
    /// messages. The widget never alters it on its own.
    Controlled(T),
    /// The widget owns the value, starting from `initial`.
    Uncontrolled {
        /// The value the widget starts with when it enters the tree.
        initial: T,
    },
}

impl<T> Control<T> {
    /// Returns `true` if the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Control::Controlled(_))
    }

    /// Creates the [`Mirror`] a widget stores when it enters the tree.
    pub fn mirror(&self) -> Mirror<T>
    where
        T: Clone,
    {
        match self {
            Control::Controlled(value) | Control::Uncontrolled { initial: value } => {
                Mirror::new(value.clone())
            }
        }
    }
}

impl<T: Default> Default for Control<T> {
    fn default() -> Self {
        Control::Uncontrolled {
            initial: T::default(),
        }
    }
}

/// A requested transition of a [`Mirror`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change<'a, T> {
    /// The value displayed before the change.
    pub previous: &'a T,
    /// The value the change moves to.
    pub next: &'a T,
}

/// The widget-side copy of a [`Control`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirror<T> {
    value: T,
}

impl<T> Mirror<T> {
    /// Creates a new [`Mirror`] holding `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the value stored by the widget.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the value the widget should display for the given [`Control`].
    pub fn current<'a>(&'a self, control: &'a Control<T>) -> &'a T {
        match control {
            Control::Controlled(value) => value,
            Control::Uncontrolled { .. } => &self.value,
        }
    }

    /// Commits a transition to `next`.
    ///
    /// `notify` runs first, while the mirror still holds the previous value.
    /// The mirror is updated afterwards, and only for uncontrolled values.
    /// Nothing happens if `next` is already the displayed value.
    pub fn commit(&mut self, control: &Control<T>, next: T, notify: impl FnOnce(Change<'_, T>))
    where
        T: PartialEq,
    {
        let previous = self.current(control);

        if *previous == next {
            return;
        }

        notify(Change {
            previous,
            next: &next,
        });

        if !control.is_controlled() {
            self.value = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_defaults() {
        let toggle = Control::<bool>::default();
        let selection = Control::<String>::default();

        assert!(!*toggle.mirror().get());
        assert_eq!(selection.mirror().get(), "");
        assert!(!toggle.is_controlled());
    }

    #[test]
    fn test_notify_runs_before_update() {
        let control = Control::Uncontrolled { initial: false };
        let mut mirror = control.mirror();
        let mut observed = None;

        mirror.commit(&control, true, |change| {
            observed = Some((*change.previous, *change.next));
        });

        assert_eq!(observed, Some((false, true)));
        assert!(*mirror.get());
        assert!(*mirror.current(&control));
    }

    #[test]
    fn test_controlled_value_is_never_altered() {
        let control = Control::Controlled(false);
        let mut mirror = control.mirror();
        let mut notified = 0;

        mirror.commit(&control, true, |_| notified += 1);

        assert_eq!(notified, 1);
        assert!(!*mirror.current(&control));

        let control = Control::Controlled(true);
        assert!(*mirror.current(&control));
    }

    #[test]
    fn test_commit_without_change_is_silent() {
        let control = Control::Uncontrolled {
            initial: String::from("a"),
        };
        let mut mirror = control.mirror();
        let mut notified = false;

        mirror.commit(&control, String::from("a"), |_| notified = true);

        assert!(!notified);
        assert_eq!(mirror.get(), "a");
    }

    #[test]
    fn test_initial_only_applies_on_creation() {
        let mut mirror = Control::Uncontrolled { initial: false }.mirror();
        let rebuilt = Control::Uncontrolled { initial: false };

        mirror.commit(&rebuilt, true, |_| {});

        // A rebuilt widget with the same initial value keeps the committed state.
        assert!(*mirror.current(&rebuilt));
    }
}
