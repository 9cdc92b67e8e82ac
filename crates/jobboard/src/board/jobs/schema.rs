use chrono::{DateTime, Utc};
use serde_json::Value;

use super::domain::{ExperienceLevel, JobType};
use crate::board::users::UserId;
use crate::board::validation::{PayloadReader, ValidationErrors};

/// Insert-variant of a listing. Status and timestamps are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: Option<String>,
    pub requirements: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub posted_by: UserId,
    pub deadline: Option<DateTime<Utc>>,
}

impl NewJob {
    pub fn from_json(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload);
        let title = reader.required_text("title");
        let company = reader.required_text("company");
        let description = reader.required_text("description");
        let location = reader.required_text("location");
        let job_type = reader.required_enum::<JobType>("type");
        let salary = reader.optional_text("salary");
        let requirements = reader.optional_text("requirements");
        let experience_level = reader.optional_enum::<ExperienceLevel>("experienceLevel");
        let posted_by = reader.required_integer("postedBy");
        let deadline = reader.optional_timestamp("deadline");

        match (title, company, description, location, job_type, posted_by) {
            (
                Some(title),
                Some(company),
                Some(description),
                Some(location),
                Some(job_type),
                Some(posted_by),
            ) if reader.is_clean() => Ok(Self {
                title,
                company,
                description,
                location,
                job_type,
                salary,
                requirements,
                experience_level,
                posted_by: UserId(posted_by),
                deadline,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}

/// Filters accepted by the public search read path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearch {
    pub query: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
}

impl JobSearch {
    /// Build from query-string pairs; empty values are ignored, unknown enum values rejected.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ValidationErrors> {
        let mut object = serde_json::Map::new();
        for (key, value) in pairs {
            let value = value.trim();
            if !value.is_empty() {
                object.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
        let payload = Value::Object(object);
        let mut reader = PayloadReader::new(&payload);
        let query = reader.optional_text("q");
        let location = reader.optional_text("location");
        let job_type = reader.optional_enum::<JobType>("type");
        let experience_level = reader.optional_enum::<ExperienceLevel>("experienceLevel");

        if !reader.is_clean() {
            return Err(reader.into_errors());
        }
        Ok(Self {
            query,
            location,
            job_type,
            experience_level,
        })
    }
}
