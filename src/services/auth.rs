//! Authentication service implementation
//!
//! This service is the identity store: it signs users in and out, registers
//! new accounts, switches the session role and updates profiles. The signed-in
//! user lives in an injected [`SessionStore`].

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn, debug};
use crate::config::AuthConfig;
use crate::database::repositories::UserRepository;
use crate::models::user::{User, Role, CreateUserRequest, UpdateUserRequest};
use crate::services::credentials::{hash_password_async, verify_password_async};
use crate::services::session::SessionStore;
use crate::utils::errors::{YogaBookError, Result};
use crate::utils::helpers::{is_valid_email, is_valid_phone};
use crate::utils::logging::{log_rejected, log_user_action};

/// Account registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// Authentication service for managing the current session
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: Arc<dyn SessionStore>,
    config: AuthConfig,
    role_override: Option<Role>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(users: UserRepository, sessions: Arc<dyn SessionStore>, config: AuthConfig) -> Self {
        Self {
            users,
            sessions,
            config,
            role_override: None,
        }
    }

    /// Force every session user to appear with the given role (for tests)
    pub fn with_role_override(mut self, role: Role) -> Self {
        self.role_override = Some(role);
        self
    }

    /// Get the signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        let mut user = self.sessions.load()?;
        if let Some(role) = self.role_override {
            user.role = role;
        }
        Some(user)
    }

    /// Get the signed-in user or fail
    pub fn require_user(&self) -> Result<User> {
        self.current_user()
            .ok_or_else(|| YogaBookError::Authentication("You need to sign in first".to_string()))
    }

    /// Get the signed-in user if they hold the given role
    pub fn require_role(&self, role: Role) -> Result<User> {
        let user = self.require_user()?;
        if user.role != role {
            log_rejected("require_role", Some(&user.id), &format!("requires {}", role));
            return Err(YogaBookError::PermissionDenied(
                format!("This action is only available to {}s", role)
            ));
        }
        Ok(user)
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        debug!(email = %email, "Attempting login");

        let invalid = || YogaBookError::Authentication("Invalid email or password".to_string());

        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email = %email, "Login for unknown email");
                return Err(invalid());
            }
        };

        let stored = self.users.password_hash(&user.id).await?.ok_or_else(invalid)?;
        if !verify_password_async(password.to_string(), stored).await {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(invalid());
        }

        self.sessions.save(user.clone());
        log_user_action(&user.id, user.role, "login", None);
        Ok(user)
    }

    /// Register a new account and sign it in
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        self.validate_registration(&request)?;

        let user = self.users.create(CreateUserRequest {
            name: request.name,
            email: request.email,
            role: request.role,
            phone: request.phone.filter(|p| !p.trim().is_empty()),
        }).await?;

        let hash = hash_password_async(request.password, self.config.scrypt_log_n).await?;
        self.users.set_password_hash(&user.id, hash).await?;

        self.sessions.save(user.clone());
        info!(user_id = %user.id, role = %user.role, "New user registered successfully");
        Ok(user)
    }

    /// Sign out
    pub fn logout(&self) {
        if let Some(user) = self.sessions.load() {
            log_user_action(&user.id, user.role, "logout", None);
        }
        self.sessions.clear();
    }

    /// Switch the role of the current session without touching the stored account
    pub fn switch_role(&self, role: Role) -> Result<User> {
        let mut user = self.require_user()?;
        user.role = role;
        self.sessions.save(user.clone());
        log_user_action(&user.id, role, "switch_role", None);
        Ok(user)
    }

    /// Update the profile of the signed-in user
    pub async fn update_profile(&self, request: UpdateUserRequest) -> Result<User> {
        let session_user = self.require_user()?;

        if let Some(ref name) = request.name {
            if name.trim().is_empty() {
                return Err(YogaBookError::Validation("Name is required".to_string()));
            }
        }
        if let Some(ref email) = request.email {
            if !is_valid_email(email) {
                return Err(YogaBookError::Validation("Please enter a valid email address".to_string()));
            }
        }
        if let Some(ref phone) = request.phone {
            if !phone.trim().is_empty() && !is_valid_phone(phone) {
                return Err(YogaBookError::Validation("Please enter a valid phone number".to_string()));
            }
        }

        let mut updated = self.users.update(&session_user.id, request).await?;
        // keep a switched role for the rest of the session
        updated.role = session_user.role;
        self.sessions.save(updated.clone());

        log_user_action(&updated.id, updated.role, "update_profile", None);
        Ok(updated)
    }

    /// Change the password of the signed-in user
    pub async fn change_password(&self, current: &str, new_password: &str, confirm_password: &str) -> Result<()> {
        let user = self.require_user()?;

        let stored = self.users.password_hash(&user.id).await?
            .ok_or_else(|| YogaBookError::Authentication("No password set for this account".to_string()))?;
        if !verify_password_async(current.to_string(), stored).await {
            return Err(YogaBookError::Authentication("Current password is incorrect".to_string()));
        }

        self.validate_password(new_password, confirm_password)?;
        let hash = hash_password_async(new_password.to_string(), self.config.scrypt_log_n).await?;
        self.users.set_password_hash(&user.id, hash).await?;

        log_user_action(&user.id, user.role, "change_password", None);
        Ok(())
    }

    fn validate_registration(&self, request: &RegisterRequest) -> Result<()> {
        if request.name.trim().is_empty() {
            return Err(YogaBookError::Validation("Name is required".to_string()));
        }
        if !is_valid_email(&request.email) {
            return Err(YogaBookError::Validation("Please enter a valid email address".to_string()));
        }
        if let Some(ref phone) = request.phone {
            if !phone.trim().is_empty() && !is_valid_phone(phone) {
                return Err(YogaBookError::Validation("Please enter a valid phone number".to_string()));
            }
        }
        self.validate_password(&request.password, &request.confirm_password)
    }

    fn validate_password(&self, password: &str, confirm_password: &str) -> Result<()> {
        if password.chars().count() < self.config.min_password_length {
            return Err(YogaBookError::Validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }
        if password != confirm_password {
            return Err(YogaBookError::Validation("Passwords do not match".to_string()));
        }
        Ok(())
    }
}
