use contact_relay::popup::popup_model::{PopupDescriptor, PopupKind, Segment};
use contact_relay::popup::render::{escape_html, render_console, render_html};

// =========================================================================
// Console renderer
// =========================================================================

#[test]
fn console_render_carries_marker_and_title() {
    let descriptor = PopupDescriptor::new(PopupKind::Success)
        .with_body(vec![Segment::text("All good.")]);
    let out = render_console(&descriptor);

    assert!(out.contains("\u{2713}"), "Success marker: {}", out);
    assert!(out.contains("Message sent!"));
    assert!(out.contains("All good."));
    assert!(out.contains("[Close]"), "Close control rendered");
}

#[test]
fn console_render_indents_preformatted_blocks() {
    let descriptor = PopupDescriptor::new(PopupKind::Error)
        .with_body(vec![Segment::Preformatted("{\n  \"a\": 1\n}".to_string())]);
    let out = render_console(&descriptor);

    assert!(out.contains("    {\n"), "Each preformatted line indented");
    assert!(out.contains("    \"a\": 1"));
}

// =========================================================================
// HTML renderer
// =========================================================================

#[test]
fn html_render_escapes_untrusted_body_text() {
    let descriptor = PopupDescriptor::new(PopupKind::Error)
        .with_body(vec![Segment::text("<script>alert(1)</script>")]);
    let out = render_html(&descriptor);

    assert!(!out.contains("<script>"), "Markup injection blocked");
    assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn html_render_escapes_title_and_preformatted() {
    let descriptor = PopupDescriptor::new(PopupKind::Info)
        .with_title("a < b & c")
        .with_body(vec![Segment::Preformatted("{\"x\":\"<y>\"}".to_string())]);
    let out = render_html(&descriptor);

    assert!(out.contains("a &lt; b &amp; c"));
    assert!(out.contains("&lt;y&gt;"));
}

#[test]
fn html_render_marks_strong_and_emphasis() {
    let descriptor = PopupDescriptor::new(PopupKind::Success).with_body(vec![
        Segment::strong("help@example.com"),
        Segment::emphasis("soon"),
        Segment::LineBreak,
    ]);
    let out = render_html(&descriptor);

    assert!(out.contains("<strong>help@example.com</strong>"));
    assert!(out.contains("<em>soon</em>"));
    assert!(out.contains("<br>"));
}

#[test]
fn html_render_uses_kind_color_and_dialog_role() {
    let out = render_html(&PopupDescriptor::new(PopupKind::Error));
    assert!(out.contains("#dc2626"), "Error badge color");
    assert!(out.contains(r#"role="dialog""#));
    assert!(out.contains(r#"aria-modal="true""#));

    let out = render_html(&PopupDescriptor::new(PopupKind::Success));
    assert!(out.contains("#16a34a"), "Success badge color");
}

// =========================================================================
// Escape helper
// =========================================================================

#[test]
fn escape_html_covers_special_characters() {
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(
        escape_html(r#"<a href="x">&'"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
    );
}
