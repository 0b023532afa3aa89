use crate::server::{
    error::validate::ValidationError,
    util::validate::{require_hex, require_positive, sanitize_text, validate_email},
};

/// A validated profile: the identity and credential record at the
/// root of the data model.
///
/// Fields are private and only reachable through the validating
/// constructor and setters, so an observable profile is always fully
/// valid. `id` is `None` until the profile is first persisted; the
/// activation token is `None` once the profile has been activated.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    id: Option<i32>,
    activation_token: Option<String>,
    email: String,
    password_hash: String,
    password_salt: String,
    username: String,
    location: String,
}

impl Profile {
    /// Validates every field and constructs the profile atomically:
    /// the first invalid field fails the whole construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<i32>,
        activation_token: Option<&str>,
        email: &str,
        password_hash: &str,
        password_salt: &str,
        username: &str,
        location: &str,
    ) -> Result<Self, ValidationError> {
        if let Some(id) = id {
            require_positive("profile_id", id)?;
        }

        Ok(Self {
            id,
            activation_token: activation_token
                .map(|token| require_hex("activation_token", token, 32))
                .transpose()?,
            email: validate_email("email", email)?,
            password_hash: require_hex("password_hash", password_hash, 128)?,
            password_salt: require_hex("password_salt", password_salt, 64)?,
            username: sanitize_text("username", username, 32)?,
            location: sanitize_text("location", location, 50)?,
        })
    }

    /// Materializes a stored row back into a validated profile.
    pub fn from_model(model: &entity::profile::Model) -> Result<Self, ValidationError> {
        Self::new(
            Some(model.id),
            model.activation_token.as_deref(),
            &model.email,
            &model.password_hash,
            &model.password_salt,
            &model.username,
            &model.location,
        )
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn password_salt(&self) -> &str {
        &self.password_salt
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// `None` marks the profile as activated.
    pub fn set_activation_token(
        &mut self,
        activation_token: Option<&str>,
    ) -> Result<(), ValidationError> {
        self.activation_token = activation_token
            .map(|token| require_hex("activation_token", token, 32))
            .transpose()?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = validate_email("email", email)?;
        Ok(())
    }

    pub fn set_password_hash(&mut self, password_hash: &str) -> Result<(), ValidationError> {
        self.password_hash = require_hex("password_hash", password_hash, 128)?;
        Ok(())
    }

    pub fn set_password_salt(&mut self, password_salt: &str) -> Result<(), ValidationError> {
        self.password_salt = require_hex("password_salt", password_salt, 64)?;
        Ok(())
    }

    pub fn set_username(&mut self, username: &str) -> Result<(), ValidationError> {
        self.username = sanitize_text("username", username, 32)?;
        Ok(())
    }

    pub fn set_location(&mut self, location: &str) -> Result<(), ValidationError> {
        self.location = sanitize_text("location", location, 50)?;
        Ok(())
    }
}
