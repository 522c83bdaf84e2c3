//! User model

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::errors::{YogaBookError, Result};

/// Maximum length of a teacher bio
pub const MAX_BIO_LENGTH: usize = 1000;
/// Maximum number of specialties a teacher can list
pub const MAX_SPECIALTIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
        }
    }
}

/// Optional teacher-facing profile fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl TeacherProfile {
    /// Normalize and validate the profile fields
    pub fn validated(self) -> Result<Self> {
        let bio = self.bio
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        if let Some(ref bio) = bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(YogaBookError::Validation(
                    format!("Bio cannot exceed {} characters", MAX_BIO_LENGTH)
                ));
            }
        }

        let mut specialties: Vec<String> = Vec::with_capacity(self.specialties.len());
        for specialty in self.specialties {
            let specialty = specialty.trim().to_string();
            if specialty.is_empty() {
                return Err(YogaBookError::Validation("Specialties cannot be blank".to_string()));
            }
            if !specialties.iter().any(|s| s.eq_ignore_ascii_case(&specialty)) {
                specialties.push(specialty);
            }
        }

        if specialties.len() > MAX_SPECIALTIES {
            return Err(YogaBookError::Validation(
                format!("At most {} specialties are allowed", MAX_SPECIALTIES)
            ));
        }

        Ok(Self { bio, specialties })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    #[serde(default)]
    pub profile: TeacherProfile,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
}
