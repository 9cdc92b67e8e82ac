use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::validation::WireEnum;

/// Identifier wrapper for registered accounts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Jobseeker,
    Employer,
    Admin,
}

impl UserRole {
    /// Employers wait for an admin before they can post; everyone else starts approved.
    pub const fn approved_by_default(self) -> bool {
        !matches!(self, UserRole::Employer)
    }

    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Jobseeker => "Job Seeker",
            UserRole::Employer => "Employer",
            UserRole::Admin => "Administrator",
        }
    }
}

impl WireEnum for UserRole {
    const VARIANTS: &'static [Self] = &[UserRole::Jobseeker, UserRole::Employer, UserRole::Admin];

    fn as_str(self) -> &'static str {
        match self {
            UserRole::Jobseeker => "jobseeker",
            UserRole::Employer => "employer",
            UserRole::Admin => "admin",
        }
    }
}

/// Stored account record. The password field holds an argon2 hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub resume: Option<String>,
    pub bio: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_employer(&self) -> bool {
        self.role == UserRole::Employer
    }

    pub fn is_jobseeker(&self) -> bool {
        self.role == UserRole::Jobseeker
    }

    /// Approved employers are the only accounts allowed to publish listings.
    pub fn can_post_jobs(&self) -> bool {
        self.is_employer() && self.is_approved
    }

    /// Employers still waiting on an admin decision.
    pub fn awaiting_approval(&self) -> bool {
        self.is_employer() && !self.is_approved
    }

    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            company_name: self.company_name.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            resume: self.resume.clone(),
            bio: self.bio.clone(),
            is_approved: self.is_approved,
            created_at: self.created_at,
        }
    }
}

/// Account representation returned to clients; never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}
