//! Contact form state machine.
//!
//! Submission is simulated: a valid submit enters Sending for a fixed delay,
//! then Sent with a success banner that clears itself. All timing flows
//! through `Instant`s passed by the caller, so the phases are steppable in
//! tests.

use std::time::{Duration, Instant};

/// Simulated network latency for a submit.
pub const SEND_DELAY_MS: u64 = 1500;

/// How long the success banner stays up.
pub const BANNER_MS: u64 = 4000;

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Submit accepted; flips to Sent at `done_at`.
    Sending { done_at: Instant },
    /// Success banner visible until `until`.
    Sent { until: Instant },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    values: [String; 3],
    errors: [Option<&'static str>; 3],
    focus: Field,
    phase: Phase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            values: Default::default(),
            errors: Default::default(),
            focus: Field::Name,
            phase: Phase::Editing,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    pub fn editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    /// Type a character into the focused field. Input is ignored while a
    /// submit is in flight or the banner is up.
    pub fn input(&mut self, ch: char) {
        if !self.editing() || ch.is_control() {
            return;
        }
        let field = self.focus.index();
        self.values[field].push(ch);
        self.errors[field] = None;
    }

    pub fn backspace(&mut self) {
        if !self.editing() {
            return;
        }
        let field = self.focus.index();
        self.values[field].pop();
        self.errors[field] = None;
    }

    pub fn next_field(&mut self) {
        if self.editing() {
            self.focus = self.focus.next();
        }
    }

    /// Validate all fields, recording per-field errors. Returns overall
    /// validity and moves focus to the first offender on failure.
    pub fn validate(&mut self) -> bool {
        self.errors[Field::Name.index()] = if self.values[Field::Name.index()].trim().is_empty() {
            Some("name is required")
        } else {
            None
        };
        let email = self.values[Field::Email.index()].trim();
        self.errors[Field::Email.index()] = if email.is_empty() {
            Some("email is required")
        } else if !email_shaped(email) {
            Some("that does not look like an email")
        } else {
            None
        };
        self.errors[Field::Message.index()] =
            if self.values[Field::Message.index()].trim().is_empty() {
                Some("message is required")
            } else {
                None
            };

        match Field::ALL.iter().find(|f| self.errors[f.index()].is_some()) {
            Some(first) => {
                self.focus = *first;
                false
            }
            None => true,
        }
    }

    /// Attempt a submit at `now`. Invalid input stays in Editing with errors
    /// set; valid input enters Sending.
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.editing() || !self.validate() {
            return false;
        }
        self.phase = Phase::Sending {
            done_at: now + Duration::from_millis(SEND_DELAY_MS),
        };
        true
    }

    /// Advance timed phases. Sending flips to Sent (clearing the fields);
    /// Sent returns to Editing when the banner expires. Returns true if the
    /// phase changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Sending { done_at } if now >= done_at => {
                self.values = Default::default();
                self.focus = Field::Name;
                self.phase = Phase::Sent {
                    until: now + Duration::from_millis(BANNER_MS),
                };
                true
            }
            Phase::Sent { until } if now >= until => {
                self.phase = Phase::Editing;
                true
            }
            _ => false,
        }
    }

    /// The next instant poll() needs to run, if a phase is timed.
    pub fn next_due(&self) -> Option<Instant> {
        match self.phase {
            Phase::Editing => None,
            Phase::Sending { done_at } => Some(done_at),
            Phase::Sent { until } => Some(until),
        }
    }
}

/// Minimal shape check: something, `@`, something, `.`, something.
fn email_shaped(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
