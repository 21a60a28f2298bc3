/// Result of one submission attempt.
///
/// Every create-user invocation produces exactly one of these; remote and
/// transport failures are normalized into a variant rather than propagated.
/// The caller switches on this (or on [`message`](Self::message)) to decide
/// what to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 200, the user exists now.
    Success,
    /// 401 or 403, the token was missing, invalid or expired.
    AuthFailure,
    /// 500, transient, the user may retry.
    ServerError,
    /// 422 with the `not_allowed` code, the server refused the password.
    PolicyRejected,
    /// Anything else, including transport errors and unreadable bodies.
    UnknownFailure,
}

impl SubmissionOutcome {
    /// User-facing message for failure variants, `None` on success.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::AuthFailure => Some("You are not authenticated for this action"),
            Self::ServerError => Some("The server had a problem, please try again"),
            Self::PolicyRejected => Some("That password is not allowed, please choose another"),
            Self::UnknownFailure => Some("Something went wrong, please try again"),
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_has_no_message() {
        assert_eq!(SubmissionOutcome::Success.message(), None);

        for outcome in [
            SubmissionOutcome::AuthFailure,
            SubmissionOutcome::ServerError,
            SubmissionOutcome::PolicyRejected,
            SubmissionOutcome::UnknownFailure,
        ] {
            assert!(outcome.message().is_some(), "{outcome:?}");
        }
    }

    #[test]
    fn only_success_is_success() {
        assert!(SubmissionOutcome::Success.is_success());
        assert!(!SubmissionOutcome::UnknownFailure.is_success());
    }
}
