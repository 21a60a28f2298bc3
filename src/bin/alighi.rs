use alighi::cli::{actions, actions::Action, start};
use anyhow::Result;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Signup { .. } => actions::signup::handle(action).await?,
    }

    Ok(())
}
