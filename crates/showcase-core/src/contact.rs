// Contact form checks: field validation plus a per-gate cooldown
use crate::{config::ContactConfig, Error, Result};
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use showcase_cache::Clock;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::info;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// First failing rule wins
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() < MIN_NAME_CHARS {
            return Err(Error::Validation(
                "Name must be at least 2 characters.".into(),
            ));
        }
        if !looks_like_email(&self.email) {
            return Err(Error::Validation("Invalid email address.".into()));
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(Error::Validation(
                "Message must be at least 10 characters.".into(),
            ));
        }
        Ok(())
    }
}

/// Something, an `@`, something, a `.`, something; no whitespace anywhere
const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

fn looks_like_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
        .is_match(email)
}

/// Accepts at most one submission per cooldown window
pub struct ContactGate {
    cooldown: Duration,
    clock: Arc<dyn Clock>,
    last_accepted: Mutex<Option<DateTime<Utc>>>,
}

impl ContactGate {
    pub fn new(cooldown: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            cooldown,
            clock,
            last_accepted: Mutex::new(None),
        }
    }

    pub fn from_config(config: &ContactConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self::new(config.cooldown()?, clock))
    }

    /// Check the cooldown, then the fields, and record the submission if both pass
    pub fn submit(&self, form: &ContactForm) -> Result<()> {
        let now = self.clock.now();
        let mut last = self
            .last_accepted
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        if let Some(previous) = *last {
            let elapsed = now - previous;
            if elapsed < self.cooldown {
                let remaining = (self.cooldown - elapsed).num_seconds().max(1);
                return Err(Error::RateLimitExceeded {
                    retry_after: remaining as u64,
                });
            }
        }

        form.validate()?;

        *last = Some(now);
        info!("Contact submission accepted from {}", form.email);
        Ok(())
    }
}
