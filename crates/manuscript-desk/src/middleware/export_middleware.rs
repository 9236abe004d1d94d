//! Export Middleware
//!
//! Saves the open modal (an AI result, an outline, an export) as a small
//! standalone HTML document. All text is escaped before it is written, since
//! it comes straight from the server or the user.

use anyhow::{Context, Result};
use manuscript_client::escape_for_display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::actions::{Action, ToolAction};
use crate::dispatcher::Dispatcher;
use crate::feedback::Feedback;
use crate::middleware::Middleware;
use crate::state::{AppState, ModalContent, Severity};

pub struct ExportMiddleware {
    export_dir: PathBuf,
}

impl ExportMiddleware {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    fn save(&self, content: &ModalContent) -> Result<PathBuf> {
        fs::create_dir_all(&self.export_dir)
            .with_context(|| format!("Failed to create export directory {:?}", self.export_dir))?;

        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = unique_path(
            &self.export_dir,
            &format!("{}-{}", slugify(&content.title), timestamp),
        );

        fs::write(&path, render_html(content))
            .with_context(|| format!("Failed to write export {:?}", path))?;
        Ok(path)
    }
}

impl Middleware for ExportMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Tools(ToolAction::SaveModal) = action else {
            return true;
        };

        match &state.feedback.modal {
            Some(modal) => match self.save(&modal.content) {
                Ok(path) => {
                    log::info!("Exported modal to {:?}", path);
                    dispatcher.success(&format!("Saved {}", path.display()));
                }
                Err(e) => {
                    log::error!("Export failed: {:#}", e);
                    dispatcher.error(&format!("{:#}", e));
                }
            },
            None => dispatcher.notify("Nothing to save", Severity::Warning),
        }
        false
    }
}

/// Standalone HTML document for a title and a plain-text body
///
/// Blank lines separate paragraphs; single newlines become `<br>`.
pub fn render_html(content: &ModalContent) -> String {
    let title = escape_for_display(&content.title);
    let paragraphs: Vec<String> = content
        .body
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let lines: Vec<String> = p.lines().map(escape_for_display).collect();
            format!("<p>{}</p>", lines.join("<br>\n"))
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = title,
        body = paragraphs.join("\n"),
    )
}

/// Lowercase ASCII slug for file names; falls back to "export"
fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "export".to_string()
    } else {
        slug.to_string()
    }
}

/// `<stem>.html`, or `<stem>-N.html` when that already exists
fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(format!("{}.html", stem));
    if !first.exists() {
        return first;
    }
    (2..)
        .map(|n| dir.join(format!("{}-{}.html", stem, n)))
        .find(|path| !path.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FeedbackAction;
    use crate::middleware::test_support::channel_dispatcher;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_html_escapes_untrusted_text() {
        let html = render_html(&ModalContent::new(
            "Tom & Jerry",
            "<script>alert('x')</script>\nsecond line\n\nNew paragraph",
            "",
        ));
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains(
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;<br>\nsecond line</p>\n<p>New paragraph</p>"
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Query letter: The Salt Road"), "query-letter-the-salt-road");
        assert_eq!(slugify("???"), "export");
    }

    #[test]
    fn test_save_open_modal_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("exports");
        let mut middleware = ExportMiddleware::new(&export_dir);
        let (dispatcher, rx) = channel_dispatcher();

        let mut state = AppState::default();
        state
            .feedback
            .open_modal(ModalContent::new("Expand idea", "Act one", ""));

        let forwarded =
            middleware.handle(&Action::Tools(ToolAction::SaveModal), &state, &dispatcher);
        assert!(!forwarded);

        let files: Vec<_> = fs::read_dir(&export_dir).unwrap().collect();
        assert_eq!(files.len(), 1);
        let path = files[0].as_ref().unwrap().path();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("expand-idea-"));
        assert!(fs::read_to_string(&path).unwrap().contains("<p>Act one</p>"));

        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Feedback(FeedbackAction::Notify { severity: Severity::Success, .. })
        ));
    }

    #[test]
    fn test_save_without_modal_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut middleware = ExportMiddleware::new(dir.path());
        let (dispatcher, rx) = channel_dispatcher();

        middleware.handle(
            &Action::Tools(ToolAction::SaveModal),
            &AppState::default(),
            &dispatcher,
        );

        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Feedback(FeedbackAction::Notify { severity: Severity::Warning, .. })
        ));
    }

    #[test]
    fn test_unique_path_avoids_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();
        assert_eq!(unique_path(dir.path(), "a"), dir.path().join("a-2.html"));
    }
}
