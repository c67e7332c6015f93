use crate::{
    controller::controller::SubmissionController,
    page::{
        events::{ClickTarget, Key, SubmitEvent},
        page_model::PageState,
    },
    popup::notifier::{Dialog, DismissTrigger},
};

pub mod cli;
pub mod controller;
pub mod page;
pub mod popup;
pub mod trace;
pub mod transport;

/// Top-level wiring for one hosting page.
///
/// Models the original's process-wide initialization: constructed once at
/// startup, attached once per page-ready signal, and fed every relevant
/// page event afterward. It routes submit events to the controller and
/// dismissal events to the currently open outcome dialog. There is no
/// dialog stack: only the most recent dialog is tracked.
pub struct ContactFormApp {
    controller: SubmissionController,
    dialog: Option<Dialog>,
    attached: bool,
}

impl ContactFormApp {
    pub fn new(controller: SubmissionController) -> Self {
        ContactFormApp {
            controller,
            dialog: None,
            attached: false,
        }
    }

    /// Page-load-complete signal. Attaches to the contact form if the page
    /// has one; with no matching form the app stays inert.
    pub fn on_page_ready(&mut self, page: &PageState) -> bool {
        self.attached = page.form(self.controller.form_id()).is_some();
        self.attached
    }

    /// Route a form-submit event. Returns true when a submission ran and
    /// an outcome popup opened.
    pub fn on_submit(&mut self, page: &mut PageState, event: &mut SubmitEvent) -> bool {
        if !self.attached {
            return false;
        }

        match self.controller.handle_submit(page, event) {
            Some(dialog) => {
                self.dialog = Some(dialog);
                true
            }
            None => false,
        }
    }

    /// Scheduler tick: applies the open dialog's deferred focus move.
    pub fn tick(&mut self, page: &mut PageState) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.tick(page);
        }
    }

    /// Route a document-level key event to the open dialog.
    pub fn on_key(&mut self, page: &mut PageState, key: Key) -> bool {
        let Some(dialog) = self.dialog.as_mut() else {
            return false;
        };

        if dialog.handle_key(page, key) {
            self.controller.note_dismissed(DismissTrigger::EscapeKey);
            self.dialog = None;
            return true;
        }
        false
    }

    /// Route a click landing somewhere on the open dialog's overlay.
    pub fn on_overlay_click(&mut self, page: &mut PageState, target: ClickTarget) -> bool {
        let Some(dialog) = self.dialog.as_mut() else {
            return false;
        };

        let trigger = DismissTrigger::OverlayClick(target);
        if dialog.dismiss(page, trigger) {
            self.controller.note_dismissed(trigger);
            self.dialog = None;
            return true;
        }
        false
    }

    /// Activate the open dialog's close control.
    pub fn on_close_control(&mut self, page: &mut PageState) -> bool {
        let Some(dialog) = self.dialog.as_mut() else {
            return false;
        };

        if dialog.dismiss(page, DismissTrigger::CloseControl) {
            self.controller.note_dismissed(DismissTrigger::CloseControl);
            self.dialog = None;
            return true;
        }
        false
    }

    /// The currently open outcome dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }
}
