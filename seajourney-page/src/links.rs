//! Opening footer links in the desktop's default handler.

use std::process::{Command, Stdio};

/// Footer entries without a destination yet are written as `#`.
pub fn is_placeholder(href: &str) -> bool {
    let href = href.trim();
    href.is_empty() || href.starts_with('#')
}

/// Command that hands `href` to the platform's URL handler.
pub fn opener_command(href: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(href);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(href);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(href);
        cmd
    }
}

/// Spawn the opener without waiting for it.
pub fn open(href: &str) -> Result<(), String> {
    opener_command(href)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("failed to open {href}: {e}"))
}
