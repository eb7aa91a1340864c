use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// `local@domain.tld`: one `@`, non-empty local part, some dot in the domain
/// with non-empty text on both sides, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // Any dot with a non-empty label on each side will do.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, NAME_REQUIRED);
        }

        if !is_valid_email(&self.email) {
            errors.insert(Field::Email, EMAIL_INVALID);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(Field::Message, MESSAGE_REQUIRED);
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(Field::Message, MESSAGE_TOO_SHORT);
        }

        errors
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not resolved yet.
    InFlight,
    /// Validation failed; errors are now on the state.
    Invalid,
}

/// Everything the contact form tracks between keystrokes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl ContactState {
    /// Stores the new value and drops only this field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Re-validates and, if the form is clean, enters the busy state and
    /// returns the snapshot to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }
        self.submitting = true;
        Ok(self.form.clone())
    }

    /// Leaves the busy state. On success the form is cleared; on failure
    /// the user's input stays for a retry.
    pub fn finish(&mut self, delivered: bool) {
        self.submitting = false;
        if delivered {
            self.form = ContactForm::default();
            self.errors = FieldErrors::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.edit(Field::Name, "Ada".to_string());
        state.edit(Field::Email, "ada@lovelace.dev".to_string());
        state.edit(Field::Message, "Let's build an engine together".to_string());
        state
    }

    #[test]
    fn empty_name_is_required() {
        let mut state = filled();
        for blank in ["", "   ", "\t\n"] {
            state.edit(Field::Name, blank.to_string());
            assert_eq!(state.begin_submit(), Err(SubmitBlocked::Invalid));
            assert_eq!(state.errors.get(Field::Name), Some(NAME_REQUIRED));
            assert_eq!(state.errors.len(), 1);
            assert!(!state.submitting);
        }
    }

    #[test]
    fn email_shape() {
        for bad in ["", "plain", "no-dot@domain", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co", " a@b.co"] {
            assert!(!is_valid_email(bad), "{:?} should be rejected", bad);
        }
        for good in ["a@b.co", "first.last@sub.example.org", "x+tag@mail.io", "a@b.co.", "a@b.c.", "a@.b.co"] {
            assert!(is_valid_email(good), "{:?} should pass", good);
        }

        let form = ContactForm { email: "nope".into(), ..filled().form };
        assert_eq!(form.validate().get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn message_length_boundary() {
        let mut form = filled().form;
        form.message = "  123456789  ".to_string();
        assert_eq!(form.validate().get(Field::Message), Some(MESSAGE_TOO_SHORT));

        form.message = "  1234567890  ".to_string();
        assert_eq!(form.validate().get(Field::Message), None);

        form.message = "   ".to_string();
        assert_eq!(form.validate().get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        let form = ContactForm { message: "éééééééééé".into(), ..filled().form };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut state = ContactState::default();
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(state.errors.len(), 3);

        state.edit(Field::Email, "still wrong".to_string());
        assert_eq!(state.errors.get(Field::Email), None);
        assert_eq!(state.errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(state.errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn success_resets_fields_and_errors() {
        let mut state = filled();
        let snapshot = state.begin_submit().unwrap();
        assert_eq!(snapshot.name, "Ada");
        assert!(state.submitting);

        state.finish(true);
        assert_eq!(state.form, ContactForm::default());
        assert!(state.errors.is_empty());
        assert!(!state.submitting);
    }

    #[test]
    fn failure_keeps_what_the_user_typed() {
        let mut state = filled();
        let before = state.form.clone();
        state.begin_submit().unwrap();
        state.finish(false);
        assert_eq!(state.form, before);
        assert!(!state.submitting);
    }

    #[test]
    fn busy_flag_spans_exactly_one_submission() {
        let mut state = filled();
        assert!(!state.submitting);
        state.begin_submit().unwrap();
        assert!(state.submitting);
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(state.submitting);
        state.finish(false);
        assert!(!state.submitting);

        // rejected validation never enters the busy state
        state.edit(Field::Name, String::new());
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(!state.submitting);
    }
}
