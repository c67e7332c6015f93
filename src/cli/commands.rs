use crate::cli::config::AppConfig;
use crate::controller::controller::{ContactInfo, SubmissionController};
use crate::controller::payload::SubmissionPayload;
use crate::page::events::SubmitEvent;
use crate::page::page_model::{FormElement, PageState};
use crate::popup::popup_model::PopupKind;
use crate::popup::render::{render_console, render_html};
use crate::trace::logger::TraceLogger;
use crate::transport::sender::Transport;
use crate::ContactFormApp;

// ============================================================================
// send subcommand
// ============================================================================

/// Submit a message end-to-end and return whether it was delivered.
///
/// Builds a simulated page hosting the contact form, runs the full
/// controller -> transport -> notifier path against the real endpoint,
/// and renders the resulting popup.
pub fn cmd_send(
    fields: &[String],
    source: &str,
    format: &str,
    output: Option<&str>,
    endpoint: &str,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let entries = parse_fields(fields)?;

    let mut form = FormElement::new(&config.form.id).with_submit("Send");
    for (name, value) in &entries {
        form.push_field(name, value);
    }
    let mut page = PageState::new(source, "contact-relay").with_form(form);

    let tracer = match config.trace.path.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };
    let contact = ContactInfo::new(&config.contact.email, &config.contact.phone);
    let controller = SubmissionController::new(Transport::new(endpoint), contact, tracer)
        .with_form_id(&config.form.id)
        .with_busy_label(&config.form.busy_label);

    let mut app = ContactFormApp::new(controller);
    app.on_page_ready(&page);

    if verbose > 0 {
        eprintln!("Sending {} fields to {}...", entries.len(), endpoint);
    }

    let mut event = SubmitEvent::new(&config.form.id);
    app.on_submit(&mut page, &mut event);
    app.tick(&mut page);

    let dialog = match app.dialog() {
        Some(d) => d,
        None => return Err("submission produced no outcome popup".into()),
    };
    let delivered = dialog.descriptor.kind != PopupKind::Error;

    let rendered = match format {
        "html" => render_html(&dialog.descriptor),
        _ => render_console(&dialog.descriptor),
    };

    match output {
        Some(path) => std::fs::write(path, &rendered)?,
        None => print!("{}", rendered),
    }

    // Close the popup so the simulated page ends in its resting state
    app.on_close_control(&mut page);

    Ok(delivered)
}

// ============================================================================
// preview subcommand
// ============================================================================

/// Show the payload and the error-popup preview without any network attempt.
pub fn cmd_preview(
    fields: &[String],
    source: &str,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = parse_fields(fields)?;

    let mut form = FormElement::new("preview");
    for (name, value) in &entries {
        form.push_field(name, value);
    }
    let payload = SubmissionPayload::from_form(&form, source);

    if verbose > 0 {
        eprintln!("Dry run: nothing is sent.");
    }

    println!("Payload entries:");
    for (name, value) in payload.entries() {
        println!("  {} = {}", name, value);
    }
    println!();
    println!("Error-popup preview:");
    println!("{}", payload.preview_json());

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse one `NAME=VALUE` field argument.
pub fn parse_field(raw: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("Invalid field '{}': expected NAME=VALUE", raw).into()),
    }
}

/// Parse all field arguments, failing on the first malformed one.
pub fn parse_fields(raw: &[String]) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
    raw.iter().map(|r| parse_field(r)).collect()
}
