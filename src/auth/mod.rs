//! Authentication
//!
//! Handles credential records, password digests, and login validation.

pub mod credentials;
pub mod digest;
pub mod validator;

pub use credentials::{CredentialRecord, StoredPassword};
pub use digest::sha1_hex;
pub use validator::{DEFAULT_PASSWORD_PROMPT, check_current_details, check_new_details};
