//! # Simulated Authentication
//!
//! The auth modal has two tabs. Submitting either one only closes the modal
//! and raises a success toast; no credentials are checked or stored.
//!
//! ```text
//! ┌──────────────┐  submit_auth(Login)   ┌──────────────────────────────────┐
//! │  Auth modal  │ ────────────────────► │ toast: "Login successful! ..."   │
//! │  (open)      │  submit_auth(Signup)  │ toast: "Signup successful! ..."  │
//! └──────────────┘ ────────────────────► │ modal closed                     │
//!                                        └──────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;
use ts_rs::TS;

use onlypets_core::{ToastId, ToastKind};

use crate::store::AppStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }

    /// Toast text shown after a submit in this mode.
    pub fn success_message(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login successful! (Simulated)",
            AuthMode::Signup => "Signup successful! Welcome! (Simulated)",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "login" => Ok(AuthMode::Login),
            "signup" => Ok(AuthMode::Signup),
            other => Err(format!("unknown auth mode: {}", other)),
        }
    }
}

impl AppStore {
    /// Handles a submit from the auth modal.
    pub fn submit_auth(&self, mode: AuthMode) -> ToastId {
        info!(%mode, "Simulated auth submit");
        let id = self.add_toast(mode.success_message(), ToastKind::Success);
        self.toggle_auth_modal(false);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::GeneratedPetSource;
    use std::sync::Arc;

    #[test]
    fn test_submit_login_closes_modal_and_toasts() {
        let store = AppStore::new(Arc::new(GeneratedPetSource::new(1)));
        store.toggle_auth_modal(true);

        let id = store.submit_auth(AuthMode::Login);

        assert!(!store.is_auth_modal_open());
        let toasts = store.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, id);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Login successful! (Simulated)");
    }

    #[test]
    fn test_signup_message() {
        let store = AppStore::new(Arc::new(GeneratedPetSource::new(1)));
        store.submit_auth(AuthMode::Signup);
        assert_eq!(
            store.toasts()[0].message,
            "Signup successful! Welcome! (Simulated)"
        );
    }

    #[test]
    fn test_auth_mode_parse() {
        assert_eq!("SIGNUP".parse::<AuthMode>(), Ok(AuthMode::Signup));
        assert!("oauth".parse::<AuthMode>().is_err());
        assert_eq!(AuthMode::default().to_string(), "login");
    }
}
