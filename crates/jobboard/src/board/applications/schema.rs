use serde_json::Value;

use crate::board::jobs::JobId;
use crate::board::users::UserId;
use crate::board::validation::{PayloadReader, ValidationErrors};

/// Insert-variant of an application. Status starts at pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: JobId,
    pub user_id: UserId,
    pub cover_letter: Option<String>,
}

impl NewApplication {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let job_id = reader.required_integer("jobId");
        let user_id = reader.required_integer("userId");
        let cover_letter = reader.optional_text("coverLetter");

        match (job_id, user_id) {
            (Some(job_id), Some(user_id)) if reader.is_clean() => Ok(Self {
                job_id: JobId(job_id),
                user_id: UserId(user_id),
                cover_letter,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}
