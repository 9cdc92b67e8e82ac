use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{PublicUser, User, UserId, UserRole};
use super::password::{hash_password, verify_password};
use super::repository::UserRepository;
use super::schema::{LoginPayload, NewUser, ProfileUpdate, RegisterPayload};
use crate::board::error::{BoardError, EntityKind};
use crate::board::insights::{profile_completion, ProfileCompletion};
use crate::board::validation::{ValidationErrors, WireEnum};
use crate::board::views::{BoardView, Mutation};

/// Load the calling account from any user store.
pub(crate) fn resolve_actor<S>(store: &S, id: UserId) -> Result<User, BoardError>
where
    S: UserRepository + ?Sized,
{
    store.fetch_user(id)?.ok_or(BoardError::Unauthenticated)
}

/// Registration, login, and profile management.
pub struct AccountService<S> {
    store: Arc<S>,
}

impl<S> AccountService<S>
where
    S: UserRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a new account from a validated registration form.
    pub fn register(&self, payload: RegisterPayload) -> Result<Mutation<PublicUser>, BoardError> {
        self.create(payload.user)
            .map(|mutation| mutation.map(|user| user.public_view()))
    }

    /// Store a validated insert payload, hashing the credential and applying role defaults.
    pub fn create(&self, new_user: NewUser) -> Result<Mutation<User>, BoardError> {
        let mut conflicts = ValidationErrors::new();
        if self
            .store
            .find_user_by_username(&new_user.username)?
            .is_some()
        {
            conflicts.push("username", "Username already exists");
        }
        if self.store.find_user_by_email(&new_user.email)?.is_some() {
            conflicts.push("email", "Email already registered");
        }
        if !conflicts.is_empty() {
            return Err(conflicts.into());
        }

        let NewUser {
            username,
            password,
            email,
            name,
            role,
            company_name,
            location,
            skills,
            resume,
            bio,
        } = new_user;

        let user = User {
            id: self.store.next_user_id()?,
            username,
            password: hash_password(&password)?,
            email,
            name,
            role,
            company_name,
            location,
            skills,
            resume,
            bio,
            is_approved: role.approved_by_default(),
            created_at: Utc::now(),
        };

        let stored = self.store.insert_user(user)?;
        info!(user_id = %stored.id, role = stored.role.as_str(), "account registered");

        let mut refresh = vec![BoardView::AdminUsers, BoardView::AdminStats];
        if stored.awaiting_approval() {
            refresh.push(BoardView::AdminPendingEmployers);
        }
        Ok(Mutation::new(stored, refresh))
    }

    /// Check credentials; unknown users and wrong passwords are indistinguishable.
    pub fn login(&self, payload: LoginPayload) -> Result<PublicUser, BoardError> {
        let Some(user) = self.store.find_user_by_username(&payload.username)? else {
            debug!(username = %payload.username, "login for unknown username");
            return Err(BoardError::InvalidCredentials);
        };

        if !verify_password(&payload.password, &user.password)? {
            warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(BoardError::InvalidCredentials);
        }

        info!(user_id = %user.id, "login accepted");
        Ok(user.public_view())
    }

    pub fn get(&self, id: UserId) -> Result<User, BoardError> {
        self.store
            .fetch_user(id)?
            .ok_or(BoardError::not_found(EntityKind::User, id.0))
    }

    /// Load the calling account; an unknown caller is unauthenticated rather than missing.
    pub fn resolve_actor(&self, id: UserId) -> Result<User, BoardError> {
        resolve_actor(self.store.as_ref(), id)
    }

    pub fn update_profile(
        &self,
        actor: UserId,
        update: ProfileUpdate,
    ) -> Result<Mutation<User>, BoardError> {
        let mut user = self.resolve_actor(actor)?;
        if update.is_empty() {
            return Ok(Mutation::unchanged(user));
        }

        let mut errors = ValidationErrors::new();
        if let Some(email) = &update.email {
            if let Some(existing) = self.store.find_user_by_email(email)? {
                if existing.id != user.id {
                    errors.push("email", "Email already registered");
                }
            }
        }
        if let Some(Some(_)) = &update.company_name {
            if user.role != UserRole::Employer {
                errors.push(
                    "companyName",
                    "Company name is only allowed for employer accounts",
                );
            }
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let ProfileUpdate {
            name,
            email,
            company_name,
            location,
            skills,
            resume,
            bio,
        } = update;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(company_name) = company_name {
            user.company_name = company_name;
        }
        if let Some(location) = location {
            user.location = location;
        }
        if let Some(skills) = skills {
            user.skills = skills;
        }
        if let Some(resume) = resume {
            user.resume = resume;
        }
        if let Some(bio) = bio {
            user.bio = bio;
        }

        self.store.update_user(user.clone())?;
        debug!(user_id = %user.id, "profile updated");

        Ok(Mutation::new(
            user,
            vec![
                BoardView::Profile(actor),
                BoardView::Dashboard(actor),
                BoardView::AdminUsers,
            ],
        ))
    }

    pub fn profile_completion(&self, actor: UserId) -> Result<ProfileCompletion, BoardError> {
        let user = self.resolve_actor(actor)?;
        Ok(profile_completion(&user))
    }
}
