use std::fmt;
use thiserror::Error;

use crate::model::ids::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Mobile,
    Email,
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoginField::Name => "name",
            LoginField::Mobile => "mobile",
            LoginField::Email => "email",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoginError {
    #[error("{0} is required")]
    MissingField(LoginField),
}

/// Raw values typed into the welcome form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub mobile: String,
    pub email: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            email: email.into(),
        }
    }

    /// Presence check only: each field must be non-empty. Formats are not validated.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::MissingField` naming the first empty field.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.name.is_empty() {
            return Err(LoginError::MissingField(LoginField::Name));
        }
        if self.mobile.is_empty() {
            return Err(LoginError::MissingField(LoginField::Mobile));
        }
        if self.email.is_empty() {
            return Err(LoginError::MissingField(LoginField::Email));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// The signed-in student for the lifetime of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    id: UserId,
    name: String,
    mobile: String,
    email: String,
}

impl UserProfile {
    /// # Errors
    ///
    /// Returns `LoginError` if any form field is empty.
    pub fn register(id: UserId, form: LoginForm) -> Result<Self, LoginError> {
        form.validate()?;
        Ok(Self {
            id,
            name: form.name,
            mobile: form.mobile,
            email: form.email,
        })
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
