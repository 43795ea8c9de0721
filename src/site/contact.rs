//! Contact form state machine.
//!
//! `Idle -> Submitting -> Idle(status)`. The surface calls
//! [`ContactForm::begin_submit`], runs the [`Submitter`] off the UI thread,
//! then feeds the returned [`SubmitTicket`] back through
//! [`ContactForm::complete`].

use std::time::Duration;

use thiserror::Error;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn step(self, delta: i32) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as i32;
        Self::ALL[(idx + delta).rem_euclid(Self::ALL.len() as i32) as usize]
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Required(FormField),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("A submission is already in progress")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

/// Identifies one submission so late completions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket {
    form: u64,
    seq: u64,
}

/// Submitted values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    form_id: u64,
    seq: u64,
    name: String,
    email: String,
    message: String,
    focus: FormField,
    in_flight: Option<SubmitTicket>,
    status: SubmitStatus,
}

impl ContactForm {
    /// `form_id` distinguishes one form instance from the next.
    pub fn new(form_id: u64) -> Self {
        Self {
            form_id,
            seq: 0,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: FormField::Name,
            in_flight: None,
            status: SubmitStatus::None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<SubmitTicket> {
        self.in_flight
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Required(field));
            }
        }
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Enter the submitting state. State is untouched on error.
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, ContactMessage), FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        self.validate()?;
        self.seq += 1;
        let ticket = SubmitTicket {
            form: self.form_id,
            seq: self.seq,
        };
        self.in_flight = Some(ticket);
        Ok((
            ticket,
            ContactMessage {
                name: self.name.clone(),
                email: self.email.clone(),
                message: self.message.clone(),
            },
        ))
    }

    /// Finish the in-flight submission. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<(), String>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = FormField::Name;
                self.status = SubmitStatus::Success(SUCCESS_MESSAGE.to_string());
            }
            Err(reason) => {
                tracing::warn!(
                    component = "contact",
                    operation = "complete",
                    reason = %reason,
                    "Contact submission failed"
                );
                self.status = SubmitStatus::Error(ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn dismiss(&mut self) {
        self.status = SubmitStatus::None;
    }
}

/// Delivery backend for contact messages.
pub trait Submitter: Send + Sync {
    /// Blocks until delivery finished.
    fn submit(&self, message: &ContactMessage) -> Result<(), String>;
}

/// Waits a fixed delay and always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), String> {
        tracing::debug!(
            component = "contact",
            operation = "submit",
            delay_ms = self.delay.as_millis() as u64,
            message_len = message.message.len(),
            "Simulated submission"
        );
        std::thread::sleep(self.delay);
        Ok(())
    }
}
