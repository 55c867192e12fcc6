use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fixed name of the downloaded summary file.
pub const DOWNLOAD_FILENAME: &str = "summary.txt";

const COMPOSE_SUBJECT: &str = "Topic Summary";

/// Write the exported summary text to `summary.txt` in `dir`, defaulting to
/// the user's Documents directory. Safe to call repeatedly; the file is
/// regenerated from the text passed in.
pub fn save_summary_text(text: &str, dir: Option<&Path>) -> Result<PathBuf> {
    let target_dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::document_dir().unwrap_or_else(|| PathBuf::from(".")),
    };

    let filepath = target_dir.join(DOWNLOAD_FILENAME);
    fs::write(&filepath, text)
        .with_context(|| format!("Failed to write summary file: {}", filepath.display()))?;

    Ok(filepath)
}

/// Build a Gmail web-compose link carrying the summary text, with an empty
/// `to` field and a fixed subject.
pub fn gmail_compose_url(text: &str) -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to=&su={}&body={}",
        urlencoding::encode(COMPOSE_SUBJECT),
        urlencoding::encode(text)
    )
}

/// Hand a URL to the platform opener. Callers print the URL first, so a
/// spawn failure only costs the convenience of the auto-opened tab.
pub fn open_in_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(url).status();

    #[cfg(target_os = "windows")]
    let status = Command::new("cmd").args(["/C", "start", "", url]).status();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let status = Command::new("xdg-open").arg(url).status();

    let status = status.context("Failed to launch browser opener")?;
    if !status.success() {
        anyhow::bail!("Browser opener exited with {}", status);
    }

    Ok(())
}
