//! Contact form model: field values, live counters, validation and the
//! simulated submission lifecycle.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const NAME_MAX_CHARS: usize = 255;
pub const NAME_WARN_ABOVE: usize = 200;
pub const MESSAGE_MIN_CHARS: usize = 30;
pub const MESSAGE_MAX_CHARS: usize = 300;
pub const MESSAGE_WARN_ABOVE: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("please fill in every required field")]
    MissingFields,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("the message must be at least {} characters", MESSAGE_MIN_CHARS)]
    MessageTooShort,
    #[error("the message cannot exceed {} characters", MESSAGE_MAX_CHARS)]
    MessageTooLong,
}

/// Colour band for a character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTone {
    Normal,
    Warning,
    Error,
}

impl CounterTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Normal => "char-count",
            Self::Warning => "char-count warning",
            Self::Error => "char-count error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub country: String,
    pub message: String,
    pub status: SubmitStatus,
}

/// Trimmed field values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub country: String,
    pub message: String,
}

impl ContactForm {
    /// Check fields in order: required, email, message length.
    ///
    /// # Errors
    ///
    /// Returns the first rule the form breaks.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let company = self.company.trim();
        let country = self.country.trim();
        let message = self.message.trim();

        if [name, email, company, country, message].iter().any(|f| f.is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let len = message.chars().count();
        if len < MESSAGE_MIN_CHARS {
            return Err(ContactError::MessageTooShort);
        }
        if len > MESSAGE_MAX_CHARS {
            return Err(ContactError::MessageTooLong);
        }

        Ok(ContactSubmission {
            name: name.to_owned(),
            email: email.to_owned(),
            company: company.to_owned(),
            country: country.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Clear every field and return to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn name_counter(&self) -> String {
        format!("{}/{NAME_MAX_CHARS}", self.name.chars().count())
    }

    pub fn name_tone(&self) -> CounterTone {
        if self.name.chars().count() > NAME_WARN_ABOVE {
            CounterTone::Warning
        } else {
            CounterTone::Normal
        }
    }

    pub fn message_counter(&self) -> String {
        format!("{}/{MESSAGE_MAX_CHARS}", self.message.chars().count())
    }

    pub fn message_tone(&self) -> CounterTone {
        let len = self.message.chars().count();
        if len < MESSAGE_MIN_CHARS {
            CounterTone::Error
        } else if len > MESSAGE_WARN_ABOVE {
            CounterTone::Warning
        } else {
            CounterTone::Normal
        }
    }
}

/// `local@domain.tld`: no whitespace, one `@`, and a dot with text on both
/// sides somewhere in the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}
