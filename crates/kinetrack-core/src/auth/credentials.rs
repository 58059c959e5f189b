use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "kinetrack";

/// OS-keychain storage for the login password, keyed by RUT.
/// Used to pre-fill the login form; the session token lives elsewhere.
pub struct CredentialStore;

impl CredentialStore {
    /// Store a password for a RUT in the OS keychain
    pub fn store(rut: &str, password: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, rut).context("Failed to create keyring entry")?;
        entry
            .set_password(password)
            .context("Failed to store password in keychain")?;
        Ok(())
    }

    /// Retrieve the password for a RUT from the OS keychain
    pub fn get_password(rut: &str) -> Result<String> {
        let entry = Entry::new(SERVICE_NAME, rut).context("Failed to create keyring entry")?;
        entry
            .get_password()
            .context("Failed to retrieve password from keychain")
    }

    /// Delete stored credentials for a RUT
    pub fn delete(rut: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, rut).context("Failed to create keyring entry")?;
        entry
            .delete_credential()
            .context("Failed to delete credential from keychain")?;
        Ok(())
    }

    /// Check if credentials exist for a RUT
    pub fn has_credentials(rut: &str) -> bool {
        if let Ok(entry) = Entry::new(SERVICE_NAME, rut) {
            entry.get_password().is_ok()
        } else {
            false
        }
    }
}
