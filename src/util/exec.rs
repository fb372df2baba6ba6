use tokio::process::Command;

use crate::error::AppError;

/// Lists the given path with `ls`. The input is passed as a single
/// argv element, so no shell ever interprets it. Output goes straight
/// to the inherited stdio.
pub async fn run_system_command(user_input: &str) -> Result<(), AppError> {
    let status = Command::new("ls").arg(user_input).status().await?;

    if !status.success() {
        return Err(AppError::CommandFailed {
            command: format!("ls {user_input}"),
            status,
        });
    }

    Ok(())
}
