//! Account actions
//!
//! Login and password-change handlers. Both flows fail fast: the first
//! failing check produces the displayed message and nothing later runs.

use log::{info, warn};

use super::{ActionResult, Screen, Session};
use crate::auth::{
    CredentialRecord, DEFAULT_PASSWORD_PROMPT, check_current_details, check_new_details, sha1_hex,
};
use crate::store::{CatalogStore, CredentialStore};
use crate::validation::{change_fields_present, login_fields_present};

impl<C: CatalogStore, U: CredentialStore> Session<C, U> {
    /// Authenticates the entered credentials.
    ///
    /// On success the session moves to the query screen, unless the account
    /// still has its factory-default password, in which case it moves to the
    /// password-reset screen and the result carries the reset prompt.
    pub fn login(&mut self, username: &str, password: &str) -> ActionResult {
        let fields = login_fields_present(username, password);
        if !fields.ok {
            return self.action(fields);
        }

        let stored = self.lookup_credential(username);
        let auth = check_current_details(stored.as_ref(), username, password);

        if auth.ok {
            if auth.message == DEFAULT_PASSWORD_PROMPT {
                self.screen = Screen::PasswordReset;
            } else {
                info!("User {} logged in", username);
                self.screen = Screen::Query;
            }
        }
        self.action(auth)
    }

    /// Replaces the account's password after re-authenticating.
    ///
    /// The new password is confirmed against itself here; a presentation
    /// layer with a separate confirmation field passes that value through
    /// [`change_password_confirmed`](Self::change_password_confirmed).
    pub fn change_password(&mut self, username: &str, old: &str, new: &str) -> ActionResult {
        self.change_password_confirmed(username, old, new, new)
    }

    /// Password change with an explicit confirmation value.
    pub fn change_password_confirmed(
        &mut self,
        username: &str,
        old: &str,
        new: &str,
        confirm: &str,
    ) -> ActionResult {
        let fields = change_fields_present(username, old, new);
        if !fields.ok {
            return self.action(fields);
        }

        let stored = self.lookup_credential(username);
        let auth = check_current_details(stored.as_ref(), username, old);
        if !auth.ok {
            return self.action(auth);
        }

        let policy = check_new_details(old, new, confirm);
        if !policy.ok {
            return self.action(policy);
        }

        // The update is fire-and-forget toward the caller; a store failure
        // is logged but the flow proceeds as if it took effect.
        if let Err(e) = self.credentials.update(username, &sha1_hex(new)) {
            warn!("Password update for {} failed: {}", username, e);
        } else {
            info!("Password changed for {}", username);
        }

        self.screen = Screen::Query;
        ActionResult {
            ok: true,
            message: "Password changed successfully.".to_string(),
            screen: self.screen,
        }
    }

    /// Looks up a credential, degrading store failures to absence.
    fn lookup_credential(&self, name: &str) -> Option<CredentialRecord> {
        match self.credentials.find(name) {
            Ok(found) => found,
            Err(e) => {
                warn!("Credential lookup for {} failed: {}", name, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::sha1_hex;
    use crate::session::{Screen, Session};
    use crate::store::{MemoryCatalog, MemoryCredentialStore};

    fn session_with_user(name: &str, stored_password: &str) -> Session<MemoryCatalog, MemoryCredentialStore> {
        let mut credentials = MemoryCredentialStore::new();
        credentials.insert(name, stored_password);
        Session::new(MemoryCatalog::default(), credentials)
    }

    #[test]
    fn test_login_missing_fields_stays_on_login() {
        let mut session = session_with_user("alice", "password");
        let res = session.login("alice", "");
        assert!(!res.ok);
        assert_eq!(res.message, "Both username and password are required.");
        assert_eq!(res.screen, Screen::Login);
    }

    #[test]
    fn test_login_unknown_user() {
        let mut session = session_with_user("alice", "password");
        let res = session.login("mallory", "whatever");
        assert!(!res.ok);
        assert_eq!(res.message, "Username not found.");
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn test_login_default_password_redirects_to_reset() {
        let mut session = session_with_user("alice", "password");
        let res = session.login("alice", "anything");
        assert!(res.ok);
        assert_eq!(res.message, "Default password, please change.");
        assert_eq!(res.screen, Screen::PasswordReset);
    }

    #[test]
    fn test_login_correct_password_reaches_query() {
        let mut session = session_with_user("bob", &sha1_hex("Secret123!"));
        let res = session.login("bob", "Secret123!");
        assert!(res.ok);
        assert_eq!(res.message, "");
        assert_eq!(res.screen, Screen::Query);
    }

    #[test]
    fn test_login_wrong_password_stays_on_login() {
        let mut session = session_with_user("bob", &sha1_hex("Secret123!"));
        let res = session.login("bob", "wrong");
        assert!(!res.ok);
        assert_eq!(res.message, "Incorrect password.");
        assert_eq!(res.screen, Screen::Login);
    }

    #[test]
    fn test_change_password_happy_path_updates_digest() {
        let mut session = session_with_user("alice", "password");
        session.login("alice", "anything");

        let res = session.change_password("alice", "anything", "NewPass1$");
        assert!(res.ok);
        assert_eq!(res.message, "Password changed successfully.");
        assert_eq!(res.screen, Screen::Query);

        // The replacement digest now authenticates.
        let mut fresh = session_with_user("alice", &sha1_hex("NewPass1$"));
        let res = fresh.login("alice", "NewPass1$");
        assert!(res.ok);
        assert_eq!(res.message, "");
    }

    #[test]
    fn test_change_password_rejects_weak_replacement() {
        let mut session = session_with_user("alice", "password");
        let res = session.change_password("alice", "anything", "weak");
        assert!(!res.ok);
        assert_eq!(res.message, "Password must be at least 8 characters long.");
        assert_eq!(res.screen, Screen::Login);
    }

    #[test]
    fn test_change_password_missing_fields() {
        let mut session = session_with_user("alice", "password");
        let res = session.change_password("alice", "", "NewPass1$");
        assert!(!res.ok);
        assert_eq!(res.message, "All fields are required.");
    }

    #[test]
    fn test_change_password_wrong_old_password() {
        let mut session = session_with_user("bob", &sha1_hex("RightOne1!"));
        let res = session.change_password("bob", "wrong", "NewPass1$");
        assert!(!res.ok);
        assert_eq!(res.message, "Incorrect password.");
    }

    #[test]
    fn test_change_password_mismatched_confirmation() {
        let mut session = session_with_user("bob", &sha1_hex("RightOne1!"));
        let res = session.change_password_confirmed("bob", "RightOne1!", "NewPass1$", "Other1$x");
        assert!(!res.ok);
        assert_eq!(res.message, "Passwords do not match.");
    }

    #[test]
    fn test_store_update_actually_persists() {
        let mut credentials = MemoryCredentialStore::new();
        credentials.insert("carol", &sha1_hex("OldPass1!"));
        let mut session = Session::new(MemoryCatalog::default(), credentials);

        session.login("carol", "OldPass1!");
        session.change_password("carol", "OldPass1!", "NewPass1$");

        // Old password no longer works after the update.
        let res = session.login("carol", "OldPass1!");
        assert!(!res.ok);
        assert_eq!(res.message, "Incorrect password.");
        let res = session.login("carol", "NewPass1$");
        assert!(res.ok);
    }

    #[test]
    fn test_exit_to_login_from_reset() {
        let mut session = session_with_user("alice", "password");
        session.login("alice", "anything");
        assert_eq!(session.screen(), Screen::PasswordReset);
        session.exit_to_login();
        assert_eq!(session.screen(), Screen::Login);
    }
}
