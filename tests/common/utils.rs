use contact_relay::controller::controller::{CONTACT_FORM_ID, ContactInfo, SubmissionController};
use contact_relay::page::page_model::{FormElement, PageState};
use contact_relay::trace::logger::TraceLogger;
use contact_relay::transport::fetch::{FetchResponse, MockBackend};
use contact_relay::transport::sender::Transport;

/// A page hosting a filled contact form, as the controller expects it.
pub fn contact_page() -> PageState {
    PageState::new("https://example.com/contact", "Contact").with_form(
        FormElement::new(CONTACT_FORM_ID)
            .with_field("nombre", "Jane Doe")
            .with_field("email", "jane@example.com")
            .with_field("mensaje", "Hello there")
            .with_submit("Send"),
    )
}

/// A controller wired to a scripted backend and a disabled trace.
pub fn controller_with(backend: MockBackend) -> SubmissionController {
    SubmissionController::new(
        Transport::with_backend("https://relay.example/exec", Box::new(backend)),
        ContactInfo::new("help@example.com", "+1 555-0100"),
        TraceLogger::disabled(),
    )
}

/// A 200 response whose body carries the explicit success marker.
pub fn success_json_response() -> FetchResponse {
    FetchResponse::readable(200, Some(r#"{"result":"success"}"#))
}
