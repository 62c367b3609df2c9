//! Commands: intents to mutate state.
//!
//! Every command carries already-validated value objects. The `parse`
//! constructors turn raw input into a command and are where validation
//! failures surface, before any handler runs.

use crate::domain::{
    Email, Name, PasswordHash, ResumeId, ResumeStatus, UserId, ValidationError,
};

/// Create a resume. Status defaults to draft when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResumeCommand {
    pub name: Name,
    pub email: Email,
    pub status: Option<ResumeStatus>,
}

impl CreateResumeCommand {
    pub fn parse(name: &str, email: &str, status: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            email: Email::new(email)?,
            status: status.map(ResumeStatus::parse).transpose()?,
        })
    }
}

/// Replace a resume's name and email; change status only when supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResumeCommand {
    pub id: ResumeId,
    pub name: Name,
    pub email: Email,
    pub status: Option<ResumeStatus>,
}

impl UpdateResumeCommand {
    pub fn parse(
        id: i64,
        name: &str,
        email: &str,
        status: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ResumeId::new(id)?,
            name: Name::new(name)?,
            email: Email::new(email)?,
            status: status.map(ResumeStatus::parse).transpose()?,
        })
    }
}

/// Change only the supplied fields of a resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResumeCommand {
    pub id: ResumeId,
    pub name: Option<Name>,
    pub email: Option<Email>,
    pub status: Option<ResumeStatus>,
}

impl PatchResumeCommand {
    /// A patch that changes nothing; fill in fields with the `with_*` methods.
    pub fn new(id: ResumeId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            status: None,
        }
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_status(mut self, status: ResumeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn parse(
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ResumeId::new(id)?,
            name: name.map(Name::new).transpose()?,
            email: email.map(Email::new).transpose()?,
            status: status.map(ResumeStatus::parse).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResumeCommand {
    pub id: ResumeId,
}

impl DeleteResumeCommand {
    pub fn new(id: ResumeId) -> Self {
        Self { id }
    }

    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        Ok(Self::new(ResumeId::new(id)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub name: Name,
    pub email: Email,
    pub password_hash: PasswordHash,
}

impl CreateUserCommand {
    pub fn parse(name: &str, email: &str, password_hash: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            email: Email::new(email)?,
            password_hash: PasswordHash::new(password_hash)?,
        })
    }
}

/// Replace a user's name and email; change the password hash only when supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub id: UserId,
    pub name: Name,
    pub email: Email,
    pub password_hash: Option<PasswordHash>,
}

impl UpdateUserCommand {
    pub fn parse(
        id: i64,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: UserId::new(id)?,
            name: Name::new(name)?,
            email: Email::new(email)?,
            password_hash: password_hash.map(PasswordHash::new).transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchUserCommand {
    pub id: UserId,
    pub name: Option<Name>,
    pub email: Option<Email>,
    pub password_hash: Option<PasswordHash>,
}

impl PatchUserCommand {
    pub fn parse(
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: UserId::new(id)?,
            name: name.map(Name::new).transpose()?,
            email: email.map(Email::new).transpose()?,
            password_hash: password_hash.map(PasswordHash::new).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUserCommand {
    pub id: UserId,
}

impl DeleteUserCommand {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        Ok(Self::new(UserId::new(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_resume_parse() {
        let command = CreateResumeCommand::parse(" Jane Doe ", "jane@x.com", None).unwrap();
        assert_eq!(command.name.as_str(), "Jane Doe");
        assert_eq!(command.status, None);

        let command =
            CreateResumeCommand::parse("Jane Doe", "jane@x.com", Some("Published")).unwrap();
        assert_eq!(command.status, Some(ResumeStatus::Published));
    }

    #[test]
    fn test_parse_fails_fast_on_invalid_input() {
        assert_eq!(
            CreateResumeCommand::parse("", "jane@x.com", None),
            Err(ValidationError::EmptyName)
        );
        assert!(matches!(
            UpdateResumeCommand::parse(1, "Jane", "not-an-email", None),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert_eq!(
            PatchResumeCommand::parse(-1, None, None, None),
            Err(ValidationError::NegativeId(-1))
        );
        assert!(matches!(
            PatchResumeCommand::parse(1, None, None, Some("deleted")),
            Err(ValidationError::InvalidStatus(_))
        ));
        assert_eq!(
            CreateUserCommand::parse("Admin", "admin@example.com", "  "),
            Err(ValidationError::EmptyPasswordHash)
        );
        assert_eq!(
            DeleteUserCommand::parse(-7),
            Err(ValidationError::NegativeId(-7))
        );
    }

    #[test]
    fn test_patch_parse_keeps_absent_fields_absent() {
        let command = PatchResumeCommand::parse(3, None, None, Some("archived")).unwrap();
        assert_eq!(
            command,
            PatchResumeCommand::new(ResumeId::from_u64(3)).with_status(ResumeStatus::Archived)
        );

        let command = PatchUserCommand::parse(2, Some("New"), None, None).unwrap();
        assert!(command.email.is_none());
        assert!(command.password_hash.is_none());
    }
}
