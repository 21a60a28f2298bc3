//! # Alighi (signup client)
//!
//! `alighi` drives a user-signup credential workflow against an IAM signup
//! endpoint: it resolves the bearer token carried by the signup page URL,
//! enforces the password-strength policy locally before any network call,
//! submits the create-user request, and maps the response into a single
//! user-facing outcome.
//!
//! The library is split in two:
//!
//! 1. **`signup`:** the workflow itself (token resolution, password policy,
//!    HTTP client, form session). Everything here is UI-agnostic; callers
//!    read the violation list, the outcome message, and the user-created
//!    flag and decide how to render them.
//! 2. **`cli`:** a thin command-line driver that runs one submission.
//!
//! All remote failures are normalized into [`signup::SubmissionOutcome`];
//! the workflow never surfaces a transport error to the caller.

pub mod cli;
pub mod signup;

pub use signup::{SignupClient, SignupForm, SubmissionOutcome};
