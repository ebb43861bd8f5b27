/// The caller-owned open flag of a dropdown menu.
///
/// The components never hold it: wrap it in a signal, flip it in the trigger's
/// `onclick` and in the menu's `on_dismiss`, and pass [`is_open`](Self::is_open)
/// as the `open` prop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    /// A flag to indicate whether the menu is open or not.
    open: bool,
}

impl DropdownState {
    /// Creates a new instance in the closed state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the menu.
    #[inline]
    pub fn activate(&mut self) {
        self.open = true;
    }

    /// Closes the menu.
    #[inline]
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Flips the open flag.
    #[inline]
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns `true` if the menu is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::DropdownState;

    #[test]
    fn it_transitions_between_states() {
        let mut state = DropdownState::new();
        assert!(!state.is_open());

        state.activate();
        assert!(state.is_open());
        state.activate();
        assert!(state.is_open());

        state.dismiss();
        assert!(!state.is_open());

        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }
}
