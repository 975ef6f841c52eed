//! Interactive prompts for values the user types at startup

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

/// Asks for an API key on stdin. An empty answer means "skip".
///
/// The key is read as a plain line; the terminal echoes it.
pub async fn prompt_for_credential(label: &str) -> Result<Option<String>, AppError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(format!("Enter {label} (leave empty to skip): ").as_bytes())
        .await?;
    stdout.flush().await?;

    let mut input = String::new();
    let mut reader = io::BufReader::new(io::stdin());
    reader.read_line(&mut input).await?;

    let trimmed = input.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
