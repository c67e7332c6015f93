use crate::popup::popup_model::{PopupDescriptor, PopupKind, Segment};

// ============================================================================
// Console renderer — formatted terminal output
// ============================================================================

/// Format a popup for terminal output.
///
/// Produces output like:
/// ```text
/// === ✓ Message sent! ===
///
/// We will get back to you shortly. ...
///
/// [Close]
/// ```
pub fn render_console(descriptor: &PopupDescriptor) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} {} ===\n\n",
        descriptor.kind.icon_marker(),
        descriptor.title
    ));

    for segment in &descriptor.body {
        match segment {
            Segment::LineBreak => out.push('\n'),
            Segment::Preformatted(text) => {
                out.push('\n');
                for line in text.lines() {
                    out.push_str(&format!("    {}\n", line));
                }
            }
            other => {
                if let Some(text) = other.raw_text() {
                    out.push_str(text);
                }
            }
        }
    }

    out.push_str("\n\n[Close]\n");
    out
}

// ============================================================================
// HTML renderer — self-contained overlay + panel markup
// ============================================================================

/// Generate self-contained HTML for a popup: overlay, panel, typed icon
/// badge, title, body, close control. Inline CSS, no external assets.
///
/// Every piece of descriptor text goes through `escape_html` — segments are
/// structured content, never raw markup, so untrusted text (error messages,
/// submitted field values) cannot inject elements.
pub fn render_html(descriptor: &PopupDescriptor) -> String {
    let mut body = String::new();
    for segment in &descriptor.body {
        match segment {
            Segment::Text(text) => body.push_str(&escape_html(text)),
            Segment::Strong(text) => {
                body.push_str(&format!("<strong>{}</strong>", escape_html(text)));
            }
            Segment::Emphasis(text) => {
                body.push_str(&format!("<em>{}</em>", escape_html(text)));
            }
            Segment::LineBreak => body.push_str("<br>\n"),
            Segment::Preformatted(text) => {
                body.push_str(&format!(
                    "<pre class=\"preview\">{}</pre>\n",
                    escape_html(text)
                ));
            }
        }
    }

    format!(
        r##"<div class="overlay" role="dialog" aria-modal="true" aria-labelledby="popup-title">
<style>
.overlay {{ position: fixed; inset: 0; background: rgba(15, 23, 42, .55); display: grid; place-items: center; z-index: 9999; padding: 1rem; }}
.panel {{ width: 100%; max-width: 28rem; background: #ffffff; border-radius: 1rem; padding: 1.25rem; font-family: system-ui, sans-serif; }}
.icon {{ display: inline-grid; place-items: center; width: 2rem; height: 2rem; border-radius: 9999px; color: #fff; background: {icon_color}; }}
.panel h4 {{ display: inline; font-size: 1.125rem; font-weight: 700; color: #0f172a; margin-left: .5rem; }}
.panel p {{ margin-top: .25rem; color: #475569; line-height: 1.5; }}
.preview {{ white-space: pre-wrap; font-size: .875rem; background: #f8fafc; padding: .5rem; border-radius: .5rem; border: 1px solid #e2e8f0; }}
.close {{ padding: .625rem 1rem; border-radius: .75rem; border: 1px solid #e2e8f0; background: #ffffff; color: #0f172a; cursor: pointer; }}
</style>
<div class="panel">
<div><span class="icon">{marker}</span><h4 id="popup-title">{title}</h4></div>
<p>{body}</p>
<div><button type="button" class="close">Close</button></div>
</div>
</div>
"##,
        icon_color = descriptor.kind.icon_color(),
        marker = marker_html(descriptor.kind),
        title = escape_html(&descriptor.title),
        body = body,
    )
}

fn marker_html(kind: PopupKind) -> String {
    escape_html(kind.icon_marker())
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
