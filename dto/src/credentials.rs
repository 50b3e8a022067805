use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Identity used to authenticate onto the mail transport.
/// The email address doubles as the sender address.
/// A missing field is read as blank, to be reported by validation rather than by the JSON guard.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
#[serde(default)]
pub struct EmailCredentials {
    email: String,
    password: String,
}

impl Debug for EmailCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Email Credentials {{email={}, password=MASKED}}",
            self.email
        )
    }
}

#[cfg(any(test, feature = "test"))]
impl EmailCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}
