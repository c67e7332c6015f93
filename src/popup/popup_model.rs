/// Visual category of a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
    Info,
}

impl PopupKind {
    /// Glyph shown inside the colored icon badge.
    pub fn icon_marker(&self) -> &'static str {
        match self {
            PopupKind::Success => "\u{2713}",
            PopupKind::Error => "\u{2715}",
            PopupKind::Info => "i",
        }
    }

    /// Badge background color.
    pub fn icon_color(&self) -> &'static str {
        match self {
            PopupKind::Success => "#16a34a",
            PopupKind::Error => "#dc2626",
            PopupKind::Info => "#0ea5e9",
        }
    }

    /// Title used when the descriptor does not set one.
    pub fn default_title(&self) -> &'static str {
        match self {
            PopupKind::Success => "Message sent!",
            PopupKind::Error => "Something went wrong",
            PopupKind::Info => "Notice",
        }
    }
}

/// One piece of popup body content.
///
/// The body is a sequence of typed segments rather than raw markup: any
/// text echoed into a popup (error messages, submitted field values) is
/// untrusted and gets escaped by the renderer, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Strong(String),
    Emphasis(String),
    LineBreak,
    /// Preformatted block, e.g. the JSON preview of submitted fields.
    Preformatted(String),
}

impl Segment {
    pub fn text(s: &str) -> Self {
        Segment::Text(s.to_string())
    }

    pub fn strong(s: &str) -> Self {
        Segment::Strong(s.to_string())
    }

    pub fn emphasis(s: &str) -> Self {
        Segment::Emphasis(s.to_string())
    }

    /// The raw text carried by this segment, if any.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Segment::Text(s)
            | Segment::Strong(s)
            | Segment::Emphasis(s)
            | Segment::Preformatted(s) => Some(s),
            Segment::LineBreak => None,
        }
    }
}

/// Configuration driving one popup: title, body segments, and kind.
/// Ephemeral; exists only while the dialog is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupDescriptor {
    pub title: String,
    pub body: Vec<Segment>,
    pub kind: PopupKind,
}

impl PopupDescriptor {
    pub fn new(kind: PopupKind) -> Self {
        PopupDescriptor {
            title: kind.default_title().to_string(),
            body: Vec::new(),
            kind,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_body(mut self, body: Vec<Segment>) -> Self {
        self.body = body;
        self
    }

    /// Concatenation of all body text, for searching in assertions and
    /// for plain-text rendering.
    pub fn body_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.body {
            match segment {
                Segment::LineBreak => out.push('\n'),
                other => {
                    if let Some(text) = other.raw_text() {
                        out.push_str(text);
                    }
                }
            }
        }
        out
    }
}
