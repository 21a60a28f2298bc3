pub mod signup;

use secrecy::SecretString;

/// Action parsed from the command line
#[derive(Debug)]
pub enum Action {
    Signup {
        endpoint: String,
        page_url: Option<String>,
        token: Option<String>,
        username: String,
        password: SecretString,
    },
}
