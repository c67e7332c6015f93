/// Where keyboard focus currently rests on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// A named field inside a form.
    Field { form_id: String, name: String },
    /// A form's submit control.
    SubmitControl { form_id: String },
    /// The close control of an open popup.
    PopupClose,
    /// The document body (no specific element).
    Body,
}

/// A single named field inside a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// The submit control of a form. `disabled` is the functional state,
/// `dimmed` the visual one; both are toggled together while a submission
/// is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
    pub dimmed: bool,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        SubmitControl {
            label: label.to_string(),
            disabled: false,
            dimmed: false,
        }
    }
}

/// A form hosted on the page: an id, ordered fields, and an optional
/// submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormElement {
    pub id: String,
    pub fields: Vec<FormField>,
    pub submit: Option<SubmitControl>,
}

impl FormElement {
    pub fn new(id: &str) -> Self {
        FormElement {
            id: id.to_string(),
            fields: Vec::new(),
            submit: None,
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.push_field(name, value);
        self
    }

    pub fn with_submit(mut self, label: &str) -> Self {
        self.submit = Some(SubmitControl::new(label));
        self
    }

    pub fn push_field(&mut self, name: &str, value: &str) {
        self.fields.push(FormField {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Clear every field value, leaving the field list itself intact.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

/// Minimal in-memory model of the hosting page.
///
/// This is the seam that stands in for the real DOM: forms, the focused
/// element, the body overflow style, mounted overlays, and the number of
/// document-level key listeners. Everything the popup lifecycle and the
/// submission controller touch is observable here.
#[derive(Debug, Clone)]
pub struct PageState {
    pub url: String,
    pub title: String,
    /// CSS overflow value on the body; empty string means the stylesheet
    /// default.
    pub body_overflow: String,
    pub focus: Option<FocusTarget>,
    /// Number of document-level key listeners currently registered.
    pub key_listeners: usize,
    pub forms: Vec<FormElement>,
    overlays: Vec<u64>,
    next_overlay: u64,
}

impl PageState {
    pub fn new(url: &str, title: &str) -> Self {
        PageState {
            url: url.to_string(),
            title: title.to_string(),
            body_overflow: String::new(),
            focus: Some(FocusTarget::Body),
            key_listeners: 0,
            forms: Vec::new(),
            overlays: Vec::new(),
            next_overlay: 1,
        }
    }

    pub fn with_form(mut self, form: FormElement) -> Self {
        self.forms.push(form);
        self
    }

    pub fn form(&self, id: &str) -> Option<&FormElement> {
        self.forms.iter().find(|f| f.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut FormElement> {
        self.forms.iter_mut().find(|f| f.id == id)
    }

    /// Mount an overlay and return its handle.
    pub fn mount_overlay(&mut self) -> u64 {
        let id = self.next_overlay;
        self.next_overlay += 1;
        self.overlays.push(id);
        id
    }

    /// Unmount an overlay by handle. Unknown handles are ignored.
    pub fn unmount_overlay(&mut self, id: u64) {
        self.overlays.retain(|&o| o != id);
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}
