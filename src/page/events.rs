/// A form-submit event, carrying the id of the submitting form.
///
/// `prevent_default` mirrors the page runtime's contract: once set, the
/// page performs no native navigation for this submission.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub form_id: String,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form_id: &str) -> Self {
        SubmitEvent {
            form_id: form_id.to_string(),
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Keys the popup lifecycle cares about. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Other,
}

/// What an overlay click actually landed on. Only clicks on the backdrop
/// itself dismiss the popup; clicks inside the panel do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Panel,
}
