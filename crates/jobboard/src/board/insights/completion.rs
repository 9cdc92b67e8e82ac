use serde::Serialize;

use crate::board::users::{User, UserRole};

/// Share of role-relevant profile fields that are filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletion {
    pub percent: u8,
    pub completed_fields: Vec<&'static str>,
    pub missing_fields: Vec<&'static str>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|text| !text.trim().is_empty())
}

pub fn profile_completion(user: &User) -> ProfileCompletion {
    let name = !user.name.trim().is_empty();
    let email = !user.email.trim().is_empty();
    let checks: Vec<(&'static str, bool)> = match user.role {
        UserRole::Jobseeker => vec![
            ("name", name),
            ("email", email),
            ("location", present(&user.location)),
            ("bio", present(&user.bio)),
            ("skills", !user.skills.is_empty()),
            ("resume", present(&user.resume)),
        ],
        UserRole::Employer => vec![
            ("name", name),
            ("email", email),
            ("location", present(&user.location)),
            ("bio", present(&user.bio)),
            ("companyName", present(&user.company_name)),
        ],
        UserRole::Admin => vec![("name", name), ("email", email)],
    };

    let (completed, missing): (Vec<_>, Vec<_>) = checks.into_iter().partition(|(_, ok)| *ok);
    let total = completed.len() + missing.len();
    let percent = if total == 0 {
        100
    } else {
        ((completed.len() as f32 / total as f32) * 100.0).round() as u8
    };

    ProfileCompletion {
        percent,
        completed_fields: completed.into_iter().map(|(field, _)| field).collect(),
        missing_fields: missing.into_iter().map(|(field, _)| field).collect(),
    }
}
