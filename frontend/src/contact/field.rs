/// The inputs the contact form exposes, keyed by their `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Project,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Project => "project",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
}

impl FieldKind {
    /// Value for the `type` attribute. Textareas have none.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::Textarea => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Untested,
    Valid,
    Invalid,
}

/// What the form controller needs from an input. The controller never
/// touches DOM nodes, only this.
pub trait Field {
    fn name(&self) -> FieldName;
    fn kind(&self) -> FieldKind;
    fn required(&self) -> bool;
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);

    /// Drops any rendered valid/invalid marker and message.
    fn clear_validity(&mut self);
    fn set_validity(&mut self, valid: bool, message: Option<&str>);
}

/// In-memory field backing the Yew contact form. The component re-renders
/// decoration from `validity` and `message`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    pub name: FieldName,
    pub kind: FieldKind,
    pub required: bool,
    pub label: &'static str,
    pub value: String,
    pub validity: Validity,
    pub message: Option<String>,
}

impl FieldState {
    pub fn new(name: FieldName, kind: FieldKind, label: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            label,
            value: String::new(),
            validity: Validity::Untested,
            message: None,
        }
    }

    /// Marks the field as not required. Form validation skips optional
    /// fields entirely, so a non-empty but malformed value is still sent.
    /// Blur and input events validate them as usual.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// The five inputs of the project inquiry form, in render order.
    pub fn contact_fields() -> Vec<FieldState> {
        vec![
            FieldState::new(FieldName::FirstName, FieldKind::Text, "First Name"),
            FieldState::new(FieldName::LastName, FieldKind::Text, "Last Name"),
            FieldState::new(FieldName::Email, FieldKind::Email, "Email Address"),
            FieldState::new(FieldName::Phone, FieldKind::Tel, "Phone Number"),
            FieldState::new(FieldName::Project, FieldKind::Textarea, "Project Description"),
        ]
    }

    /// Bootstrap classes for the input element.
    pub fn input_class(&self) -> &'static str {
        match self.validity {
            Validity::Untested => "form-control",
            Validity::Valid => "form-control is-valid",
            Validity::Invalid => "form-control is-invalid",
        }
    }
}

impl Field for FieldState {
    fn name(&self) -> FieldName {
        self.name
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn required(&self) -> bool {
        self.required
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn clear_validity(&mut self) {
        self.validity = Validity::Untested;
        self.message = None;
    }

    fn set_validity(&mut self, valid: bool, message: Option<&str>) {
        self.validity = if valid { Validity::Valid } else { Validity::Invalid };
        self.message = message.map(str::to_string);
    }
}
