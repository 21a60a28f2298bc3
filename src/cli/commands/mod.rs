use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("alighi")
        .about("User signup client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .help("Base URL of the signup API, example: https://iam.tld")
                .env("ALIGHI_ENDPOINT")
                .required(true),
        )
        .arg(
            Arg::new("page-url")
                .long("page-url")
                .help("Signup page URL to resolve the token from")
                .env("ALIGHI_PAGE_URL"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .help("Pre-resolved signup token")
                .env("ALIGHI_TOKEN")
                .required_unless_present("page-url"),
        )
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .help("Username to sign up")
                .env("ALIGHI_USERNAME")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Candidate password, checked locally before submitting")
                .env("ALIGHI_PASSWORD")
                .required(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ALIGHI_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
