use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Signup {
        endpoint: matches
            .get_one("endpoint")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --endpoint"))?,
        page_url: matches
            .get_one("page-url")
            .map(|s: &String| s.to_string()),
        token: matches.get_one("token").map(|s: &String| s.to_string()),
        username: matches
            .get_one("username")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --username"))?,
        password: matches
            .get_one("password")
            .map(|s: &String| SecretString::from(s.to_string()))
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --password"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_builds_signup_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "alighi",
            "--endpoint",
            "https://iam.tld",
            "--page-url",
            "https://x/signup/abc123",
            "--username",
            "ferris",
            "--password",
            "Abcdef1234",
        ]);

        let Action::Signup {
            endpoint,
            page_url,
            token,
            username,
            password,
        } = handler(&matches)?;

        assert_eq!(endpoint, "https://iam.tld");
        assert_eq!(page_url.as_deref(), Some("https://x/signup/abc123"));
        assert_eq!(token, None);
        assert_eq!(username, "ferris");
        assert_eq!(password.expose_secret(), "Abcdef1234");
        Ok(())
    }
}
