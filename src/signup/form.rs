//! One signup form session.
//!
//! The form owns the pieces a presentation layer needs: the token resolved
//! once from the page URL, the live violation list, the single user-visible
//! message, and the user-created flag. State from a submission is applied
//! only after the network call resolves; `submit` takes `&mut self`, so a
//! second submission cannot start while one is in flight.

use crate::signup::{client::SignupClient, outcome::SubmissionOutcome, policy, token};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Local validation message shown when the username is blank.
pub const USERNAME_REQUIRED: &str = "Username is required";

#[derive(Debug)]
pub struct SignupForm {
    client: SignupClient,
    token: String,
    violations: Vec<&'static str>,
    local_error: Option<&'static str>,
    outcome: Option<SubmissionOutcome>,
    created: bool,
}

impl SignupForm {
    /// Create a form for a signup page, resolving the token from its URL.
    #[must_use]
    pub fn new(client: SignupClient, page_url: &str) -> Self {
        Self::with_token(client, token::resolve(page_url))
    }

    /// Create a form with a pre-resolved token.
    #[must_use]
    pub fn with_token(client: SignupClient, token: String) -> Self {
        Self {
            client,
            token,
            violations: Vec::new(),
            local_error: None,
            outcome: None,
            created: false,
        }
    }

    /// Token cached for the lifetime of the form.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Recompute the violation list for a changed password, returning it for
    /// live display. Safe to call on every keystroke.
    pub fn password_changed(&mut self, password: &str) -> &[&'static str] {
        self.violations = policy::violations(password);

        &self.violations
    }

    /// Current policy violations.
    #[must_use]
    pub fn violations(&self) -> &[&'static str] {
        &self.violations
    }

    /// Submit the current field values.
    ///
    /// Local validation runs first: a blank username or a failing password
    /// makes no network call and produces no outcome. Otherwise exactly one
    /// request is sent and its outcome replaces any prior one wholesale.
    pub async fn submit(
        &mut self,
        username: &str,
        password: &SecretString,
    ) -> Option<SubmissionOutcome> {
        self.local_error = None;

        if username.trim().is_empty() {
            self.local_error = Some(USERNAME_REQUIRED);

            return None;
        }

        self.violations = policy::violations(password.expose_secret());

        if !self.violations.is_empty() {
            debug!("submit blocked by {} policy violations", self.violations.len());

            return None;
        }

        let outcome = self.client.create_user(username, password, &self.token).await;

        if outcome.is_success() {
            self.created = true;
        }

        self.outcome = Some(outcome);

        Some(outcome)
    }

    /// Outcome of the last submission, if one has occurred.
    #[must_use]
    pub fn outcome(&self) -> Option<SubmissionOutcome> {
        self.outcome
    }

    /// The single user-visible message: the local validation error if set,
    /// otherwise the last outcome's message.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.local_error
            .or_else(|| self.outcome.and_then(SubmissionOutcome::message))
    }

    /// True once a submission succeeded; the caller switches views on this.
    #[must_use]
    pub fn user_created(&self) -> bool {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STRONG_PASSWORD: &str = "Abcdef1234";

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn password(secret: &str) -> SecretString {
        SecretString::from(secret.to_string())
    }

    #[test]
    fn token_is_resolved_once_from_the_page_url() -> Result<()> {
        let client = SignupClient::new("http://example.com")?;
        let form = SignupForm::new(client, "https://x/signup/abc123?token=tok1");

        assert_eq!(form.token(), "tok1");
        Ok(())
    }

    #[test]
    fn password_changes_refresh_the_violation_list() -> Result<()> {
        let client = SignupClient::new("http://example.com")?;
        let mut form = SignupForm::new(client, "https://x/signup/abc123");

        let changed = form.password_changed("abc").to_vec();
        assert_eq!(changed, form.violations());
        assert!(!form.violations().is_empty());

        form.password_changed(STRONG_PASSWORD);
        assert!(form.violations().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn blank_username_makes_no_network_call() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = SignupClient::new(&server.uri())?;
        let mut form = SignupForm::with_token(client, "tok1".to_string());

        let outcome = form.submit("   ", &password(STRONG_PASSWORD)).await;

        assert_eq!(outcome, None);
        assert_eq!(form.outcome(), None);
        assert_eq!(form.message(), Some(USERNAME_REQUIRED));
        assert!(!form.user_created());
        Ok(())
    }

    #[tokio::test]
    async fn failing_password_makes_no_network_call() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = SignupClient::new(&server.uri())?;
        let mut form = SignupForm::with_token(client, "tok1".to_string());

        let outcome = form.submit("ferris", &password("weak")).await;

        assert_eq!(outcome, None);
        assert_eq!(form.outcome(), None);
        assert!(!form.violations().is_empty());
        assert!(!form.user_created());
        Ok(())
    }

    #[tokio::test]
    async fn successful_submit_flips_the_created_flag() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = SignupClient::new(&server.uri())?;
        let mut form = SignupForm::with_token(client, "tok1".to_string());

        let outcome = form.submit("ferris", &password(STRONG_PASSWORD)).await;

        assert_eq!(outcome, Some(SubmissionOutcome::Success));
        assert_eq!(form.message(), None);
        assert!(form.user_created());
        Ok(())
    }

    #[tokio::test]
    async fn rejected_password_sets_the_not_allowed_message() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "errors": ["not_allowed"]
            })))
            .mount(&server)
            .await;

        let client = SignupClient::new(&server.uri())?;
        let mut form = SignupForm::with_token(client, "tok1".to_string());

        let outcome = form.submit("ferris", &password(STRONG_PASSWORD)).await;

        assert_eq!(outcome, Some(SubmissionOutcome::PolicyRejected));
        assert_eq!(form.message(), SubmissionOutcome::PolicyRejected.message());
        assert!(!form.user_created());
        Ok(())
    }

    #[tokio::test]
    async fn a_new_outcome_replaces_the_previous_one() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = SignupClient::new(&server.uri())?;
        let mut form = SignupForm::with_token(client, "tok1".to_string());

        let first = form.submit("ferris", &password(STRONG_PASSWORD)).await;
        assert_eq!(first, Some(SubmissionOutcome::ServerError));
        assert_eq!(form.message(), SubmissionOutcome::ServerError.message());

        let second = form.submit("ferris", &password(STRONG_PASSWORD)).await;
        assert_eq!(second, Some(SubmissionOutcome::Success));
        assert_eq!(form.outcome(), Some(SubmissionOutcome::Success));
        assert_eq!(form.message(), None);
        assert!(form.user_created());
        Ok(())
    }

    #[tokio::test]
    async fn local_error_clears_on_the_next_submit() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = SignupClient::new(&server.uri())?;
        let mut form = SignupForm::with_token(client, "tok1".to_string());

        form.submit("", &password(STRONG_PASSWORD)).await;
        assert_eq!(form.message(), Some(USERNAME_REQUIRED));

        form.submit("ferris", &password(STRONG_PASSWORD)).await;
        assert_eq!(form.message(), None);
        assert!(form.user_created());
        Ok(())
    }
}
