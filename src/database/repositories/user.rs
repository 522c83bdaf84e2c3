//! User repository implementation

use chrono::Utc;
use crate::database::store::{Collection, CredentialTable};
use crate::models::user::{User, CreateUserRequest, UpdateUserRequest, TeacherProfile};
use crate::utils::errors::YogaBookError;
use crate::utils::helpers::{generate_id, normalize_email};

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    users: Collection<User>,
    credentials: CredentialTable,
}

impl UserRepository {
    pub fn new(users: Collection<User>, credentials: CredentialTable) -> Self {
        Self { users, credentials }
    }

    /// Create a new user; emails are unique case-insensitively
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, YogaBookError> {
        self.insert(User {
            id: generate_id(),
            name: request.name.trim().to_string(),
            email: normalize_email(&request.email),
            role: request.role,
            phone: request.phone,
            profile: TeacherProfile::default(),
            created_at: Utc::now(),
        }).await
    }

    /// Insert a fully formed user record
    pub async fn insert(&self, user: User) -> Result<User, YogaBookError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(YogaBookError::Validation(
                format!("An account with email {} already exists", user.email)
            ));
        }
        if users.iter().any(|u| u.id == user.id) {
            return Err(YogaBookError::Validation(format!("Duplicate user id {}", user.id)));
        }
        users.push(user.clone());
        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, YogaBookError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, YogaBookError> {
        let email = normalize_email(email);
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    /// Update user; only provided fields change
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, YogaBookError> {
        let mut users = self.users.write().await;

        if let Some(ref email) = request.email {
            let email = normalize_email(email);
            if users.iter().any(|u| u.email == email && u.id != id) {
                return Err(YogaBookError::Validation(
                    format!("An account with email {} already exists", email)
                ));
            }
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| YogaBookError::UserNotFound { user_id: id.to_string() })?;

        let mut profile = user.profile.clone();
        if let Some(bio) = request.bio {
            profile.bio = Some(bio);
        }
        if let Some(specialties) = request.specialties {
            profile.specialties = specialties;
        }
        let profile = profile.validated()?;

        if let Some(name) = request.name {
            user.name = name.trim().to_string();
        }
        if let Some(email) = request.email {
            user.email = normalize_email(&email);
        }
        if let Some(phone) = request.phone {
            user.phone = Some(phone).filter(|p| !p.trim().is_empty());
        }
        user.profile = profile;

        Ok(user.clone())
    }

    /// List all users in registration order
    pub async fn list(&self) -> Result<Vec<User>, YogaBookError> {
        Ok(self.users.read().await.clone())
    }

    /// Count total users
    pub async fn count(&self) -> Result<usize, YogaBookError> {
        Ok(self.users.read().await.len())
    }

    /// Store the password hash for a user
    pub async fn set_password_hash(&self, user_id: &str, hash: String) -> Result<(), YogaBookError> {
        self.credentials.write().await.insert(user_id.to_string(), hash);
        Ok(())
    }

    /// Fetch the stored password hash for a user
    pub async fn password_hash(&self, user_id: &str) -> Result<Option<String>, YogaBookError> {
        Ok(self.credentials.read().await.get(user_id).cloned())
    }
}
