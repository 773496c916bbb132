//! Contact form validation and the simulated submit sequence.
//!
//! Nothing is sent anywhere. A valid submission walks the button through
//! "Sending..." and "Message Sent!" on timers, clearing the form in between.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part (dotted atoms or a quoted string) `@` domain (dotted labels
/// ending in a 2+ letter TLD, or a bracketed IPv4 literal).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

/// Shape check for an email address. Matching is case-insensitive.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// The three required inputs, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id and `name` attribute of the input.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl FieldError {
    /// Inline message shown under the field.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::MissingName => "Please enter your name",
            FieldError::MissingEmail => "Please enter your email",
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::MissingMessage => "Please enter your message",
        }
    }
}

/// Current input values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Per-field outcome of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    errors: [Option<FieldError>; 3],
}

impl Validation {
    pub fn check(fields: &FormFields) -> Self {
        let name = fields
            .name
            .trim()
            .is_empty()
            .then_some(FieldError::MissingName);
        let email = if fields.email.trim().is_empty() {
            Some(FieldError::MissingEmail)
        } else if !is_valid_email(&fields.email) {
            Some(FieldError::InvalidEmail)
        } else {
            None
        };
        let message = fields
            .message
            .trim()
            .is_empty()
            .then_some(FieldError::MissingMessage);
        Self {
            errors: [name, email, message],
        }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Fields that failed, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.error(*f).is_some())
            .collect()
    }
}

/// Where the simulated submission is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field is invalid; inline messages are set.
    Blocked,
    /// Validation passed and the button moved to "Sending...".
    Started,
    /// A previous submission is still running.
    InFlight,
}

/// Contact form state: values, inline errors and submit progress.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: FormFields,
    validation: Validation,
    state: SubmitState,
}

impl ContactForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.validation.error(field)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Validate and, when everything passes, start the submit sequence.
    ///
    /// Values are kept on failure so the visitor can correct them.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state != SubmitState::Idle {
            return SubmitOutcome::InFlight;
        }
        self.validation = Validation::check(&self.fields);
        if !self.validation.is_valid() {
            return SubmitOutcome::Blocked;
        }
        self.state = SubmitState::Sending;
        SubmitOutcome::Started
    }

    /// Step the submit sequence after its delay elapsed.
    ///
    /// Sending -> Sent clears the inputs. Returns the new state, or `None`
    /// when nothing was in flight.
    pub fn advance(&mut self) -> Option<SubmitState> {
        self.state = match self.state {
            SubmitState::Idle => return None,
            SubmitState::Sending => {
                self.fields = FormFields::default();
                SubmitState::Sent
            }
            SubmitState::Sent => SubmitState::Idle,
        };
        Some(self.state)
    }

    pub fn button_disabled(&self) -> bool {
        self.state != SubmitState::Idle
    }

    /// Submit button text; `resting` is shown while idle.
    pub fn button_label<'a>(&self, resting: &'a str) -> &'a str {
        match self.state {
            SubmitState::Idle => resting,
            SubmitState::Sending => "Sending...",
            SubmitState::Sent => "Message Sent!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, name);
        form.edit(Field::Email, email);
        form.edit(Field::Message, message);
        form
    }

    #[test]
    fn email_shapes() {
        for ok in [
            "a@b.com",
            "first.last@sub.example.org",
            "USER@EXAMPLE.COM",
            "\"john doe\"@example.com",
            "x@[192.168.0.1]",
            "o'neil+tag@mail-server.co",
        ] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in [
            "",
            "plain",
            "a@b",
            "a@b.c",
            "a..b@c.com",
            ".a@c.com",
            "a b@c.com",
            "a@@b.com",
            "a@b_c.com",
            " a@b.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn empty_name_blocks_only_name() {
        let mut form = filled("", "a@b.com", "hello");
        assert_eq!(form.submit(), SubmitOutcome::Blocked);
        assert_eq!(form.error(Field::Name), Some(FieldError::MissingName));
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Message), None);
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.value(Field::Email), "a@b.com");
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let v = Validation::check(&FormFields {
            name: "   ".into(),
            email: "\t".into(),
            message: "\n".into(),
        });
        assert_eq!(
            v.invalid_fields(),
            vec![Field::Name, Field::Email, Field::Message]
        );
        assert_eq!(v.error(Field::Email), Some(FieldError::MissingEmail));
    }

    #[test]
    fn malformed_email_message() {
        let v = Validation::check(&FormFields {
            name: "Ann".into(),
            email: "ann@".into(),
            message: "hi".into(),
        });
        assert_eq!(v.error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(
            FieldError::InvalidEmail.message(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn fixing_a_field_clears_its_error_on_next_submit() {
        let mut form = filled("", "a@b.com", "hello");
        form.submit();
        form.edit(Field::Name, "Ann");
        // stale until resubmitted
        assert_eq!(form.error(Field::Name), Some(FieldError::MissingName));
        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert_eq!(form.error(Field::Name), None);
    }

    #[test]
    fn submit_sequence_resets_form() {
        let mut form = filled("Ann", "a@b.com", "hello");
        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert!(form.button_disabled());
        assert_eq!(form.button_label("Send Message"), "Sending...");

        assert_eq!(form.advance(), Some(SubmitState::Sent));
        assert!(form.fields().is_empty());
        assert!(form.button_disabled());
        assert_eq!(form.button_label("Send Message"), "Message Sent!");

        assert_eq!(form.advance(), Some(SubmitState::Idle));
        assert!(!form.button_disabled());
        assert_eq!(form.button_label("Send Message"), "Send Message");
        assert_eq!(form.advance(), None);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = filled("Ann", "a@b.com", "hello");
        form.submit();
        assert_eq!(form.submit(), SubmitOutcome::InFlight);
        assert_eq!(form.state(), SubmitState::Sending);
    }
}
