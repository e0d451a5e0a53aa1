//! Opening external links in the system browser.

use std::process::Command;

use tracing::warn;

/// Platform command that opens `url` in the default browser
fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    }

    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

/// Open a URL in the default browser, logging if the launcher fails
pub fn open_url(url: &str) {
    if let Err(e) = browser_command(url).spawn() {
        warn!(url, error = %e, "could not launch browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_command_passes_url() {
        let url = "https://example.com/tiles";
        let command = browser_command(url);
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().copied(), Some(std::ffi::OsStr::new(url)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_uses_xdg_open() {
        assert_eq!(browser_command("https://example.com").get_program(), std::ffi::OsStr::new("xdg-open"));
    }
}
