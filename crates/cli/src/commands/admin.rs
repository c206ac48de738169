//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! WIGHUB_ADMIN_PASSWORD=... wighub admin create -e admin@example.com -n "Admin Name" -r super_admin
//! ```
//!
//! # Environment Variables
//!
//! - `WIGHUB_ADMIN_PASSWORD` - Password for the new admin

use secrecy::SecretString;
use tracing::info;

use wighub_admin::services::AdminAuthService;
use wighub_core::{AdminId, AdminRole};
use wighub_store::KeyValueStore;

use super::CommandError;

const PASSWORD_VAR: &str = "WIGHUB_ADMIN_PASSWORD";

/// Read the new admin's password from the environment.
///
/// # Errors
///
/// Returns `CommandError::MissingEnvVar` if `WIGHUB_ADMIN_PASSWORD` is unset.
pub fn password_from_env() -> Result<SecretString, CommandError> {
    std::env::var(PASSWORD_VAR)
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar(PASSWORD_VAR))
}

/// Create a new admin user.
///
/// # Arguments
///
/// * `email` - Admin's email address
/// * `name` - Admin's display name
/// * `role` - Admin's role (`super_admin`, `admin`, or `viewer`)
///
/// # Returns
///
/// The ID of the created admin user.
///
/// # Errors
///
/// Returns `CommandError::InvalidRole` for an unknown role and
/// `CommandError::Admin` if the admin cannot be created.
pub fn create_user(
    store: &dyn KeyValueStore,
    email: &str,
    name: &str,
    role: &str,
    password: &SecretString,
) -> Result<AdminId, CommandError> {
    let role: AdminRole = role
        .parse()
        .map_err(|_| CommandError::InvalidRole(role.to_owned()))?;

    info!("Creating admin user: {} ({})", email, role);
    let admin = AdminAuthService::new(store).create_admin(name, email, password, role)?;

    info!(
        "Admin user created successfully! ID: {}, Email: {}, Role: {}",
        admin.id, admin.email, admin.role
    );
    Ok(admin.id)
}
