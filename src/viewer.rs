//! Opening a rendered animation in the user's browser.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("cannot resolve {path}: {source}")]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// `file://` URL for an existing file
pub fn file_url(path: &Path) -> Result<String, ViewerError> {
    let absolute = path.canonicalize().map_err(|source| ViewerError::Path {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("file://{}", absolute.display()))
}

/// Program and arguments used to open a URL: `$BROWSER` if set, else the platform opener
pub fn opener_command(url: &str, browser: Option<&str>) -> (String, Vec<String>) {
    if let Some(browser) = browser.filter(|b| !b.trim().is_empty()) {
        return (browser.trim().to_string(), vec![url.to_string()]);
    }
    if cfg!(target_os = "windows") {
        ("cmd".into(), vec!["/C".into(), "start".into(), String::new(), url.into()])
    } else if cfg!(target_os = "macos") {
        ("open".into(), vec![url.into()])
    } else {
        ("xdg-open".into(), vec![url.into()])
    }
}

/// Open a rendered file and wait for the opener to return
pub fn open(path: &Path) -> Result<(), ViewerError> {
    let url = file_url(path)?;
    let browser = env::var("BROWSER").ok();
    let (program, args) = opener_command(&url, browser.as_deref());

    let status = Command::new(&program)
        .args(&args)
        .status()
        .map_err(|source| ViewerError::Launch {
            program: program.clone(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(ViewerError::Failed { program, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_variable_wins() {
        let (program, args) = opener_command("file:///tmp/output.gif", Some(" firefox "));
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["file:///tmp/output.gif".to_string()]);
    }

    #[test]
    fn blank_browser_falls_back_to_platform() {
        let (program, args) = opener_command("file:///x.gif", Some(""));
        assert_ne!(program, "");
        assert_eq!(args.last().map(String::as_str), Some("file:///x.gif"));
    }

    #[test]
    fn missing_file_has_no_url() {
        let err = file_url(Path::new("definitely/not/here.gif")).unwrap_err();
        assert!(matches!(err, ViewerError::Path { .. }));
    }
}
