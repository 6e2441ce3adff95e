use crate::models::{RuleViolation, ValidationResult};
use crate::services::display::shorten_url_for_display;
use crate::services::slug::{normalize_typed, validate_for_submit};
use crate::Config;
use std::time::Duration;

/// State behind the channel-URL edit dialog.
///
/// Owns the field text and the error display; the validation rules live in
/// [`crate::services::slug`]. An inbound update to the channel's slug is
/// applied only while the field is pristine; once the user has typed, the
/// field is theirs until the dialog is submitted or dismissed.
pub struct UrlEditDialog {
    config: Config,
    upstream_slug: String,
    text: String,
    dirty: bool,
    violations: Vec<RuleViolation>,
    server_error: Option<String>,
}

impl UrlEditDialog {
    pub fn new(config: Config, current_slug: &str) -> Self {
        Self {
            upstream_slug: current_slug.to_string(),
            text: current_slug.to_string(),
            dirty: false,
            violations: Vec::new(),
            server_error: None,
            config,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Inbound update from the channel record. The snapshot is always taken
    /// (it is what `handle_dismiss` restores), but the field text is left
    /// alone while an edit is in progress.
    pub fn sync_upstream(&mut self, slug: &str) {
        self.upstream_slug = slug.to_string();
        if self.dirty {
            tracing::debug!(slug, "upstream slug changed mid-edit, keeping field text");
            return;
        }
        self.text = slug.to_string();
    }

    /// Keystroke handler: filter to the slug alphabet and clamp to the
    /// configured length limit.
    pub fn handle_input(&mut self, raw: &str) {
        let normalized = normalize_typed(raw);
        self.text = normalized
            .chars()
            .take(self.config.channel.max_slug_length)
            .collect();
        self.dirty = true;
    }

    /// Submit click. Returns the accepted slug, or records the ordered
    /// violations (replacing any previous error) and blocks the submission.
    pub fn handle_submit(&mut self) -> Option<String> {
        match validate_for_submit(&self.text) {
            ValidationResult::Valid(slug) => {
                self.violations.clear();
                self.server_error = None;
                self.dirty = false;
                self.upstream_slug = slug.clone();
                Some(slug)
            }
            ValidationResult::Invalid(violations) => {
                tracing::debug!(
                    text = %self.text,
                    count = violations.len(),
                    "slug rejected on submit"
                );
                self.violations = violations;
                None
            }
        }
    }

    /// Cancel click: clear errors and edits, restore the upstream slug.
    pub fn handle_dismiss(&mut self) {
        self.violations.clear();
        self.server_error = None;
        self.dirty = false;
        self.text = self.upstream_slug.clone();
    }

    /// Opaque failure reported by the caller after a submission attempt,
    /// e.g. the name is already taken.
    pub fn set_server_error(&mut self, message: impl Into<String>) {
        self.server_error = Some(message.into());
    }

    pub fn clear_server_error(&mut self) {
        self.server_error = None;
    }

    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    /// Error block for the dialog, one message per line. Local slug errors
    /// take precedence over a server-reported one.
    pub fn error_text(&self) -> Option<String> {
        if !self.violations.is_empty() {
            let mut out = String::new();
            for violation in &self.violations {
                out.push_str(&violation.to_string());
                out.push('\n');
            }
            return Some(out);
        }
        self.server_error.clone()
    }

    /// Full channel URL compacted for the dialog header.
    pub fn display_url(&self) -> String {
        let full = format!("{}{}", self.config.channel.base_url, self.text);
        shorten_url_for_display(&full, self.config.ui.display_max_chars)
    }

    pub fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.config.ui.tooltip_delay_ms)
    }
}
