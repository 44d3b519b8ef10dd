//! View state for the cookie settings panel, kept free of any rendering so
//! that every transition can be exercised without a browser.

use cookie_consent_data::CookieCategories;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Expanded row and per-category switch values for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentState {
    categories: CookieCategories,
    expanded: Option<String>,
    checked: BTreeMap<String, bool>,
}

impl ConsentState {
    /// Seeds every known category as unchecked.
    pub fn new(categories: CookieCategories) -> Self {
        let checked = categories
            .ids()
            .map(|id| (id.to_string(), false))
            .collect();
        ConsentState {
            categories,
            expanded: None,
            checked,
        }
    }

    pub fn categories(&self) -> &CookieCategories {
        &self.categories
    }

    /// Expands `id`, or collapses it when it is already the expanded row.
    pub fn toggle_row(&mut self, id: &str) {
        if !self.categories.contains(id) {
            warn!("Ignoring toggle for unknown category: {}", id);
            return;
        }
        if self.expanded.as_deref() == Some(id) {
            debug!("Collapsing {}", id);
            self.expanded = None;
        } else {
            debug!("Expanding {}", id);
            self.expanded = Some(id.to_string());
        }
    }

    /// Unknown ids are stored as given; rendering only reads known ones.
    pub fn set_checked(&mut self, id: &str, value: bool) {
        debug!("Setting {} to {}", id, value);
        self.checked.insert(id.to_string(), value);
    }

    pub fn apply(&mut self, id: &str, event: RowEvent) {
        match event {
            RowEvent::Toggle => self.toggle_row(id),
            RowEvent::Check(value) => self.set_checked(id, value),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or_default()
    }

    pub fn consent(&self) -> Consent {
        Consent {
            choices: self.checked.clone(),
        }
    }
}

/// What a user did to one preference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    Toggle,
    Check(bool),
}

impl RowEvent {
    /// Enter and space activate the row toggle like a pointer click.
    pub fn from_key(key: &str) -> Option<RowEvent> {
        match key {
            "Enter" | " " => Some(RowEvent::Toggle),
            _ => None,
        }
    }
}

/// Snapshot of the switch values handed to the save callback.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Consent {
    choices: BTreeMap<String, bool>,
}

impl Consent {
    pub fn is_granted(&self, id: &str) -> bool {
        self.choices.get(id).copied().unwrap_or_default()
    }

    pub fn granted(&self) -> impl Iterator<Item = &str> {
        self.choices
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(id, _)| id.as_str())
    }
}

impl std::fmt::Display for Consent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let granted: Vec<&str> = self.granted().collect();
        if granted.is_empty() {
            write!(f, "no optional cookies")
        } else {
            write!(f, "{}", granted.join(", "))
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn open(&mut self) {
        *self = DialogState::Open;
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn is_open(self) -> bool {
        self == DialogState::Open
    }
}

/// Everything the settings container owns: the row state plus, in the
/// dialog presentation, whether the dialog is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    pub consent: ConsentState,
    pub dialog: DialogState,
}

impl SettingsState {
    pub fn new(categories: CookieCategories) -> Self {
        SettingsState {
            consent: ConsentState::new(categories),
            dialog: DialogState::default(),
        }
    }

    /// Snapshots the switch values and closes the dialog. The switches keep
    /// their values.
    pub fn save(&mut self) -> Consent {
        let consent = self.consent.consent();
        debug!("Saving cookie preferences: {:?}", consent);
        self.dialog.close();
        consent
    }
}

/// Client render gate: nothing is shown until the component is mounted in
/// the browser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

impl Readiness {
    pub fn mounted(&mut self) {
        *self = Readiness::Ready;
    }

    pub fn is_ready(self) -> bool {
        self == Readiness::Ready
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    #[default]
    Inline,
    Dialog,
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod test {
    use super::*;
    use cookie_consent_data::CookieCategory;

    fn three() -> ConsentState {
        ConsentState::new(CookieCategories::default())
    }

    fn expanded(state: &ConsentState) -> Option<&str> {
        state.categories().ids().find(|id| state.is_expanded(id))
    }

    fn open_settings() -> SettingsState {
        let mut settings = SettingsState::new(CookieCategories::default());
        settings.dialog.open();
        settings
    }

    #[test]
    fn starts_unchecked_and_collapsed() {
        let state = three();
        assert_eq!(expanded(&state), None);
        for id in ["pc", "fc", "tc"] {
            assert!(!state.is_checked(id));
            assert!(!state.is_expanded(id));
        }
        let consent = state.consent();
        assert_eq!(consent.granted().count(), 0);
        assert_eq!(
            serde_json::to_string(&consent).unwrap(),
            r#"{"choices":{"fc":false,"pc":false,"tc":false}}"#
        );
    }

    #[test]
    fn toggling_twice_restores_expansion() {
        let mut state = three();
        state.toggle_row("fc");
        state.toggle_row("fc");
        assert_eq!(expanded(&state), None);

        state.toggle_row("pc");
        state.toggle_row("tc");
        state.toggle_row("tc");
        assert_eq!(expanded(&state), None);
    }

    #[test]
    fn single_row_expanded() {
        let mut state = three();
        state.toggle_row("pc");
        state.toggle_row("fc");
        assert!(!state.is_expanded("pc"));
        assert!(state.is_expanded("fc"));
        let expanded = state
            .categories()
            .ids()
            .filter(|id| state.is_expanded(id))
            .count();
        assert_eq!(expanded, 1);
    }

    #[test]
    fn unknown_row_is_ignored() {
        let mut state = three();
        state.toggle_row("pc");
        state.toggle_row("xx");
        assert_eq!(expanded(&state), Some("pc"));
    }

    #[test]
    fn last_check_wins() {
        let mut state = three();
        state.set_checked("pc", true);
        state.set_checked("pc", false);
        assert!(!state.is_checked("pc"));
        assert_eq!(state, three());
    }

    #[test]
    fn independent_checks_commute() {
        let mut first = three();
        first.set_checked("pc", true);
        first.set_checked("tc", true);
        first.set_checked("fc", false);

        let mut second = three();
        second.set_checked("fc", false);
        second.set_checked("tc", true);
        second.set_checked("pc", true);

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_check_is_stored() {
        let mut state = three();
        state.set_checked("xx", true);
        assert!(state.is_checked("xx"));
        assert!(state.consent().is_granted("xx"));
    }

    #[test]
    fn keys_drive_row_toggle() {
        let mut state = three();
        let mut press = |key: &str| match RowEvent::from_key(key) {
            Some(event) => {
                state.apply("pc", event);
                true
            }
            None => false,
        };
        assert!(press("Enter"));
        assert!(!press("Tab"));
        assert!(!press("a"));
        assert!(!press("Escape"));
        assert!(state.is_expanded("pc"));

        let mut state = three();
        for key in ["Enter", " "] {
            if let Some(event) = RowEvent::from_key(key) {
                state.apply("pc", event);
            }
        }
        assert_eq!(expanded(&state), None);
    }

    #[test]
    fn each_row_event_applies_once() {
        let mut state = three();
        state.apply("fc", RowEvent::Toggle);
        assert!(state.is_expanded("fc"));
        state.apply("fc", RowEvent::Check(true));
        assert!(state.is_checked("fc"));
        assert!(state.is_expanded("fc"));
        state.apply("fc", RowEvent::Check(false));
        assert!(!state.is_checked("fc"));
        state.apply("fc", RowEvent::Toggle);
        assert_eq!(expanded(&state), None);
    }

    #[test]
    fn scenario_expand_check_save() {
        let mut settings = open_settings();

        settings.consent.apply("pc", RowEvent::Toggle);
        assert!(settings.consent.is_expanded("pc"));
        assert!(!settings.consent.is_expanded("fc"));
        assert!(!settings.consent.is_expanded("tc"));

        settings.consent.apply("fc", RowEvent::Toggle);
        assert!(!settings.consent.is_expanded("pc"));
        assert!(settings.consent.is_expanded("fc"));

        settings.consent.apply("tc", RowEvent::Check(true));
        let before = settings.consent.clone();

        let consent = settings.save();
        assert_eq!(settings.dialog, DialogState::Closed);
        assert_eq!(settings.consent, before);
        assert_eq!(consent.granted().collect::<Vec<_>>(), vec!["tc"]);
        assert!(!consent.is_granted("pc"));
        assert!(!consent.is_granted("fc"));
    }

    #[test]
    fn saved_consent_is_a_snapshot() {
        let mut settings = open_settings();
        settings.consent.set_checked("fc", true);
        let consent = settings.save();
        settings.consent.set_checked("fc", false);
        settings.consent.set_checked("pc", true);

        assert!(consent.is_granted("fc"));
        assert!(!consent.is_granted("pc"));
        assert_eq!(consent.to_string(), "fc");
        assert_eq!(settings.consent.consent().to_string(), "pc");
    }

    #[test]
    fn save_without_changes() {
        let mut settings = open_settings();
        let consent = settings.save();
        assert!(!settings.dialog.is_open());
        assert_eq!(consent.to_string(), "no optional cookies");
        assert_eq!(settings, SettingsState::new(CookieCategories::default()));
    }

    #[test]
    fn consent_serializes_choices() {
        let mut state = ConsentState::new(
            CookieCategories::new(vec![CookieCategory::new("ac", "Analytics", "")]).unwrap(),
        );
        state.set_checked("ac", true);
        let json = serde_json::to_string(&state.consent()).unwrap();
        assert_eq!(json, r#"{"choices":{"ac":true}}"#);
    }

    #[test]
    fn dialog_transitions() {
        let mut dialog = DialogState::default();
        assert!(!dialog.is_open());
        dialog.open();
        assert!(dialog.is_open());
        dialog.open();
        assert!(dialog.is_open());
        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }

    #[test]
    fn readiness_gate() {
        let mut readiness = Readiness::default();
        assert!(!readiness.is_ready());
        readiness.mounted();
        assert!(readiness.is_ready());
    }

    #[test]
    fn default_mode_is_inline() {
        assert_eq!(PresentationMode::default(), PresentationMode::Inline);
    }
}
