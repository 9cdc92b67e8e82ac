use serde_json::Value;

use super::domain::UserRole;
use crate::board::validation::{PayloadReader, ValidationErrors};

pub const USERNAME_MIN: usize = 3;
pub const PASSWORD_MIN: usize = 6;

/// Insert-variant of a user: everything the caller supplies at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub resume: Option<String>,
    pub bio: Option<String>,
}

impl NewUser {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let draft = Self::read(&mut reader);
        match draft {
            Some(user) if reader.is_clean() => Ok(user),
            _ => Err(reader.into_errors()),
        }
    }

    fn read(reader: &mut PayloadReader<'_>) -> Option<Self> {
        let username = reader.required_text("username");
        let password = reader.required_text("password");
        let email = reader.required_text("email");
        let name = reader.required_text("name");
        let role = reader.required_enum::<UserRole>("role");
        let company_name = non_blank(reader.optional_text("companyName"));
        let location = non_blank(reader.optional_text("location"));
        let skills = reader.text_list("skills");
        let resume = non_blank(reader.optional_text("resume"));
        let bio = non_blank(reader.optional_text("bio"));

        if company_name.is_some() && role.is_some_and(|role| role != UserRole::Employer) {
            reader.reject(
                "companyName",
                "Company name is only allowed for employer accounts",
            );
        }

        Some(Self {
            username: username?,
            password: password?,
            email: email?,
            name: name?,
            role: role?,
            company_name,
            location,
            skills,
            resume,
            bio,
        })
    }
}

/// Blank optional text is stored as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Registration form: the user insert schema plus a matching password confirmation.
/// Administrators are provisioned by operators, never through this form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPayload {
    pub user: NewUser,
}

impl RegisterPayload {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let draft = NewUser::read(&mut reader);
        let confirm = reader.required_text("confirmPassword");

        if draft.as_ref().is_some_and(|user| user.role == UserRole::Admin) {
            reader.reject("role", "Administrator accounts cannot self-register");
        }

        if let (Some(user), Some(confirm)) = (&draft, &confirm) {
            if user.password != *confirm {
                reader.reject("confirmPassword", "Passwords don't match");
            }
        }

        match draft {
            Some(user) if reader.is_clean() => Ok(Self { user }),
            _ => Err(reader.into_errors()),
        }
    }
}

/// Credentials accepted by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

impl LoginPayload {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let username = reader.required_text("username");
        let password = reader.required_text("password");

        reader.min_length(
            "username",
            username.as_deref(),
            USERNAME_MIN,
            "Username must be at least 3 characters",
        );
        reader.min_length(
            "password",
            password.as_deref(),
            PASSWORD_MIN,
            "Password must be at least 6 characters",
        );

        match (username, password) {
            (Some(username), Some(password)) if reader.is_clean() => {
                Ok(Self { username, password })
            }
            _ => Err(reader.into_errors()),
        }
    }
}

/// Partial profile edit. `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub skills: Option<Vec<String>>,
    pub resume: Option<Option<String>>,
    pub bio: Option<Option<String>>,
}

impl ProfileUpdate {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let name = reader.optional_text("name");
        let email = reader.optional_text("email");
        let company_name = reader.nullable_text("companyName").map(non_blank);
        let location = reader.nullable_text("location").map(non_blank);
        let skills = reader.optional_text_list("skills");
        let resume = reader.nullable_text("resume").map(non_blank);
        let bio = reader.nullable_text("bio").map(non_blank);

        if let Some(name) = &name {
            if name.trim().is_empty() {
                reader.reject("name", "Name cannot be empty");
            }
        }
        if let Some(email) = &email {
            if email.trim().is_empty() {
                reader.reject("email", "Email cannot be empty");
            }
        }

        if !reader.is_clean() {
            return Err(reader.into_errors());
        }

        Ok(Self {
            name,
            email,
            company_name,
            location,
            skills,
            resume,
            bio,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `{ "approved": bool }` body used by employer moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalUpdate {
    pub approved: bool,
}

impl ApprovalUpdate {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let approved = reader.required_bool("approved");
        match approved {
            Some(approved) if reader.is_clean() => Ok(Self { approved }),
            _ => Err(reader.into_errors()),
        }
    }
}
