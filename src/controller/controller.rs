use crate::controller::payload::SubmissionPayload;
use crate::page::events::SubmitEvent;
use crate::page::page_model::PageState;
use crate::popup::notifier::{Dialog, DismissTrigger};
use crate::popup::popup_model::{PopupDescriptor, PopupKind, Segment};
use crate::trace::{logger::TraceLogger, trace::TraceEvent};
use crate::transport::sender::{DeliveryOutcome, Transport};

/// Id of the form this controller attaches to.
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Label shown on the submit control while a submission is in flight.
pub const DEFAULT_BUSY_LABEL: &str = "Sending\u{2026}";

/// Fixed contact fallback info shown in outcome popups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(email: &str, phone: &str) -> Self {
        ContactInfo {
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// Orchestrates one submission: intercepts the submit event, disables the
/// submit control for the duration of the attempt, delegates to the
/// Transport, restores the control regardless of outcome, and opens the
/// result popup. Holds no per-submission state; failure is non-fatal and
/// the user may simply resubmit.
pub struct SubmissionController {
    transport: Transport,
    contact: ContactInfo,
    form_id: String,
    busy_label: String,
    tracer: TraceLogger,
}

impl SubmissionController {
    pub fn new(transport: Transport, contact: ContactInfo, tracer: TraceLogger) -> Self {
        SubmissionController {
            transport,
            contact,
            form_id: CONTACT_FORM_ID.to_string(),
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
            tracer,
        }
    }

    pub fn with_form_id(mut self, form_id: &str) -> Self {
        self.form_id = form_id.to_string();
        self
    }

    pub fn with_busy_label(mut self, busy_label: &str) -> Self {
        self.busy_label = busy_label.to_string();
        self
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Handle a form-submit event. Returns the opened outcome dialog, or
    /// None when the event targets another form or the page has no
    /// matching form (in which case nothing on the page is touched).
    pub fn handle_submit(&self, page: &mut PageState, event: &mut SubmitEvent) -> Option<Dialog> {
        if event.form_id != self.form_id {
            return None;
        }

        let page_url = page.url.clone();
        let form = page.form_mut(&self.form_id)?;

        event.prevent_default();

        // Disable the submit control for the duration of the attempt
        let prior_label = form.submit.as_mut().map(|control| {
            let prior = control.label.clone();
            control.disabled = true;
            control.dimmed = true;
            control.label = self.busy_label.clone();
            prior
        });

        let payload = SubmissionPayload::from_form(form, &page_url);
        let fingerprint = payload.fingerprint();

        self.tracer.log(
            &TraceEvent::now("submit_started")
                .with_form(&self.form_id)
                .with_fingerprint(&fingerprint),
        );

        let outcome = self.transport.send(&payload);

        // Restore the submit control regardless of outcome
        if let (Some(control), Some(prior)) = (form.submit.as_mut(), prior_label) {
            control.disabled = false;
            control.dimmed = false;
            control.label = prior;
        }

        let descriptor = match &outcome {
            DeliveryOutcome::Delivered { opaque, .. } => {
                form.reset();
                self.tracer.log(
                    &TraceEvent::now("outcome")
                        .with_form(&self.form_id)
                        .with_fingerprint(&fingerprint)
                        .with_outcome(if *opaque { "delivered_opaque" } else { "delivered" }),
                );
                self.success_descriptor()
            }
            DeliveryOutcome::Failed { message } => {
                self.tracer.log(
                    &TraceEvent::now("outcome")
                        .with_form(&self.form_id)
                        .with_fingerprint(&fingerprint)
                        .with_outcome("failed")
                        .with_detail(message),
                );
                self.failure_descriptor(message, &payload)
            }
        };

        let dialog = Dialog::open(page, descriptor);
        self.tracer.log(
            &TraceEvent::now("popup_opened")
                .with_form(&self.form_id)
                .with_fingerprint(&fingerprint),
        );

        Some(dialog)
    }

    /// Record a completed dismissal in the trace.
    pub fn note_dismissed(&self, trigger: DismissTrigger) {
        self.tracer.log(
            &TraceEvent::now("popup_closed")
                .with_form(&self.form_id)
                .with_detail(format!("{:?}", trigger)),
        );
    }

    fn success_descriptor(&self) -> PopupDescriptor {
        PopupDescriptor::new(PopupKind::Success)
            .with_title("Thanks! We received your message")
            .with_body(vec![
                Segment::text("We will get back to you shortly. For anything urgent, write to "),
                Segment::strong(&self.contact.email),
                Segment::text(" or call "),
                Segment::strong(&self.contact.phone),
                Segment::text("."),
            ])
    }

    fn failure_descriptor(&self, message: &str, payload: &SubmissionPayload) -> PopupDescriptor {
        PopupDescriptor::new(PopupKind::Error)
            .with_title("We could not send your message")
            .with_body(vec![
                Segment::text("Please try again in a few minutes."),
                Segment::LineBreak,
                Segment::text("Detail: "),
                Segment::emphasis(message),
                Segment::LineBreak,
                Segment::text("If the problem persists, write to "),
                Segment::strong(&self.contact.email),
                Segment::text(" or call "),
                Segment::strong(&self.contact.phone),
                Segment::text("."),
                Segment::LineBreak,
                Segment::strong("Preview of the submitted data (no sensitive values):"),
                Segment::Preformatted(payload.preview_json()),
            ])
    }
}
