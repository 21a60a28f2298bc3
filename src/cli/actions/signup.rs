use crate::cli::actions::Action;
use crate::signup::{SignupClient, SignupForm};
use anyhow::{anyhow, Result};
use tracing::debug;

/// Handle the signup action: run one submission and report the result.
pub async fn handle(action: Action) -> Result<()> {
    let Action::Signup {
        endpoint,
        page_url,
        token,
        username,
        password,
    } = action;

    let client = SignupClient::new(&endpoint)?;

    debug!("create-user endpoint: {}", client.endpoint());

    // An explicit token wins over resolving one from the page URL
    let mut form = match token {
        Some(token) => SignupForm::with_token(client, token),
        None => {
            let page_url = page_url
                .ok_or_else(|| anyhow!("missing required argument: --token or --page-url"))?;

            SignupForm::new(client, &page_url)
        }
    };

    form.submit(&username, &password).await;

    if form.user_created() {
        println!("user created");

        return Ok(());
    }

    for violation in form.violations() {
        eprintln!("{violation}");
    }

    Err(anyhow!(form.message().unwrap_or("Signup failed")))
}
