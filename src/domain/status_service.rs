//! Resume status transitions.

use super::{Resume, ResumeStatus};

/// Applies status transitions to resumes.
///
/// Any status may follow any other; restricting transitions is left to
/// business rules layered on top of this service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeStatusService;

impl ResumeStatusService {
    pub fn new() -> Self {
        Self
    }

    /// Set `status` on `resume` and hand the same resume back.
    pub fn apply<'a>(&self, resume: &'a mut Resume, status: ResumeStatus) -> &'a mut Resume {
        resume.change_status(status);
        resume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Name};

    #[test]
    fn test_apply_allows_every_transition() {
        let service = ResumeStatusService::new();
        let mut resume = Resume::new(
            Name::new("Jane Doe").unwrap(),
            Email::new("jane@x.com").unwrap(),
            ResumeStatus::Draft,
        );

        for from in ResumeStatus::ALL {
            for to in ResumeStatus::ALL {
                service.apply(&mut resume, from);
                let updated = service.apply(&mut resume, to);
                assert_eq!(updated.status(), to);
            }
        }
    }

    #[test]
    fn test_apply_leaves_other_fields() {
        let service = ResumeStatusService::new();
        let mut resume = Resume::new(
            Name::new("Jane Doe").unwrap(),
            Email::new("jane@x.com").unwrap(),
            ResumeStatus::Draft,
        );
        service.apply(&mut resume, ResumeStatus::Published);

        assert_eq!(resume.name().as_str(), "Jane Doe");
        assert_eq!(resume.email().as_str(), "jane@x.com");
    }
}
