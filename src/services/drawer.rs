//! Slide-in drawer state for the add/edit/view forms.

/// The single, mutually exclusive drawer per screen. Opening one mode
/// replaces whatever was open before.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Add,
    Edit(String),
    View(String),
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DrawerState::Closed)
    }

    /// The id of the record backing an edit/view drawer, if any.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            DrawerState::Edit(id) | DrawerState::View(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
        assert!(!DrawerState::default().is_open());
    }

    #[test]
    fn record_id_only_for_edit_and_view() {
        assert_eq!(DrawerState::Add.record_id(), None);
        assert_eq!(DrawerState::Edit("m1".into()).record_id(), Some("m1"));
        assert_eq!(DrawerState::View("m2".into()).record_id(), Some("m2"));
    }
}
