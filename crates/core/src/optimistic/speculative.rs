//! Local mirror of server state that can run ahead of confirmation.

/// Pairs the last server-confirmed value with the value currently displayed.
///
/// `apply` only touches the displayed value. The next `confirm`, `rollback`
/// or `reconcile` brings both back in line.
#[derive(Debug, Clone, PartialEq)]
pub struct Speculative<T> {
    confirmed: T,
    displayed: T,
}

impl<T: Clone> Speculative<T> {
    pub fn new(value: T) -> Self {
        Self {
            displayed: value.clone(),
            confirmed: value,
        }
    }

    /// The value to show.
    pub fn current(&self) -> &T {
        &self.displayed
    }

    /// The last value the server confirmed.
    pub fn confirmed(&self) -> &T {
        &self.confirmed
    }

    /// Applies a speculative mutation and returns the closure's output.
    pub fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.displayed)
    }

    /// Accepts `value` as the new server truth.
    pub fn confirm(&mut self, value: T) {
        self.displayed = value.clone();
        self.confirmed = value;
    }

    /// Discards every speculative change.
    pub fn rollback(&mut self) {
        self.displayed = self.confirmed.clone();
    }

    /// Store-driven refresh. Same as [`Speculative::confirm`]; named apart so
    /// call sites read as the effect they implement.
    pub fn reconcile(&mut self, value: T) {
        self.confirm(value);
    }
}

impl<T: Clone + PartialEq> Speculative<T> {
    /// Whether the displayed value differs from the confirmed one.
    pub fn is_ahead(&self) -> bool {
        self.displayed != self.confirmed
    }
}

impl<T: Clone + Default> Default for Speculative<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
