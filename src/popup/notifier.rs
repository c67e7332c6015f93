use crate::page::events::{ClickTarget, Key};
use crate::page::page_model::{FocusTarget, PageState};
use crate::popup::popup_model::PopupDescriptor;

/// What caused a dismissal attempt. All triggers funnel into the same
/// close transition; only the overlay-click trigger can be a no-op (when
/// the click landed on the panel rather than the backdrop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    OverlayClick(ClickTarget),
    EscapeKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Closed,
}

/// A modal dialog mounted on a page.
///
/// Lifecycle is `Closed -> Open -> Closed`. Opening records the previously
/// focused element and the prior body overflow style, suppresses page
/// scroll, mounts the overlay, and registers a document key listener.
/// Initial focus moves to the close control on the next scheduling tick,
/// not synchronously. Closing undoes all of it, in any dismissal path.
#[derive(Debug)]
pub struct Dialog {
    pub descriptor: PopupDescriptor,
    overlay_id: u64,
    prior_focus: Option<FocusTarget>,
    prior_overflow: String,
    focus_pending: bool,
    phase: Phase,
}

impl Dialog {
    /// Open a popup on the page. There is no open-dialog stack: opening
    /// while another dialog is up is harmless overlap, and each dialog
    /// restores the state it recorded here.
    pub fn open(page: &mut PageState, descriptor: PopupDescriptor) -> Dialog {
        let prior_focus = page.focus.clone();
        let prior_overflow = page.body_overflow.clone();

        page.body_overflow = "hidden".to_string();
        let overlay_id = page.mount_overlay();
        page.key_listeners += 1;

        Dialog {
            descriptor,
            overlay_id,
            prior_focus,
            prior_overflow,
            focus_pending: true,
            phase: Phase::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Apply work deferred to the next scheduling tick: the initial focus
    /// move onto the close control.
    pub fn tick(&mut self, page: &mut PageState) {
        if self.phase == Phase::Open && self.focus_pending {
            page.focus = Some(FocusTarget::PopupClose);
            self.focus_pending = false;
        }
    }

    /// Route a document-level key event. Returns true if it dismissed the
    /// dialog.
    pub fn handle_key(&mut self, page: &mut PageState, key: Key) -> bool {
        match key {
            Key::Escape => self.dismiss(page, DismissTrigger::EscapeKey),
            _ => false,
        }
    }

    /// Attempt to dismiss the dialog. Returns true when the dialog
    /// actually closed. Dismissing an already-closed dialog is a no-op.
    pub fn dismiss(&mut self, page: &mut PageState, trigger: DismissTrigger) -> bool {
        if self.phase == Phase::Closed {
            return false;
        }

        let closes = match trigger {
            DismissTrigger::CloseControl | DismissTrigger::EscapeKey => true,
            DismissTrigger::OverlayClick(target) => target == ClickTarget::Backdrop,
        };

        if !closes {
            return false;
        }

        self.close(page);
        true
    }

    /// The single close transition: unmount the overlay, restore the prior
    /// scroll state and focus, deregister the key listener.
    fn close(&mut self, page: &mut PageState) {
        page.unmount_overlay(self.overlay_id);
        page.body_overflow = self.prior_overflow.clone();
        page.focus = self.prior_focus.clone();
        page.key_listeners = page.key_listeners.saturating_sub(1);
        self.phase = Phase::Closed;
    }
}
