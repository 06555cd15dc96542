//! Login form state and its reducer.
//!
//! DESIGN
//! ======
//! The page keeps one `LoginForm` in a signal and only ever replaces it with
//! `reduce(state, event)`, so every transition is testable without a
//! rendering layer.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

/// Editable input on the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// HTML `name` attribute of the input bound to this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Everything the form can be told to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    SubmitStarted,
    SubmitFailed(String),
    SubmitFinished,
}

/// Field values plus submission status for one login form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// True strictly while a login request is in flight.
    pub loading: bool,
    /// Message for the last failed attempt; empty otherwise.
    pub error: String,
}

impl LoginForm {
    /// Apply one event, producing the next state.
    #[must_use]
    pub fn reduce(self, event: FormEvent) -> Self {
        match event {
            FormEvent::FieldChanged { field: Field::Email, value } => Self { email: value, ..self },
            FormEvent::FieldChanged { field: Field::Password, value } => Self { password: value, ..self },
            FormEvent::SubmitStarted => Self { loading: true, error: String::new(), ..self },
            FormEvent::SubmitFailed(message) => Self { error: message, ..self },
            FormEvent::SubmitFinished => Self { loading: false, ..self },
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Signing in..." } else { "Login" }
    }
}
