pub mod client;
pub mod form;
pub mod outcome;
pub mod policy;
pub mod token;

pub use self::client::SignupClient;
pub use self::form::SignupForm;
pub use self::outcome::SubmissionOutcome;
