use super::domain::{Job, JobStatus};
use super::schema::JobSearch;

impl JobSearch {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = [&job.title, &job.company, &job.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if self.job_type.is_some_and(|job_type| job_type != job.job_type) {
            return false;
        }
        if self
            .experience_level
            .is_some_and(|level| Some(level) != job.experience_level)
        {
            return false;
        }
        true
    }
}

/// Public listing view: active jobs only, newest first. Flagged jobs never pass.
pub fn public_results(jobs: Vec<Job>, search: &JobSearch) -> Vec<Job> {
    let mut results: Vec<Job> = jobs
        .into_iter()
        .filter(|job| job.status == JobStatus::Active)
        .filter(|job| search.matches(job))
        .collect();
    results.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    results
}
