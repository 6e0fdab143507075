//! Application state for the update loop.

use railplan_api::ExportFormat;
use railplan_core::Proposal;

use crate::config::Settings;
use crate::form::FormState;

/// Which screen the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Form,
    Results,
}

/// Severity of the status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One-line status message shown in the status bar until replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// In-flight flags for the three export formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportState {
    in_flight: [bool; 3],
}

impl ExportState {
    fn index(format: ExportFormat) -> usize {
        match format {
            ExportFormat::Pdf => 0,
            ExportFormat::Dxf => 1,
            ExportFormat::Dwg => 2,
        }
    }

    pub fn is_in_flight(&self, format: ExportFormat) -> bool {
        self.in_flight[Self::index(format)]
    }

    pub fn set_in_flight(&mut self, format: ExportFormat, value: bool) {
        self.in_flight[Self::index(format)] = value;
    }

    pub fn any_in_flight(&self) -> bool {
        self.in_flight.iter().any(|f| *f)
    }
}

/// Root application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub form: FormState,
    /// Last successful computation, cached verbatim for exports. Survives
    /// failed submissions and mode switches.
    pub proposal: Option<Proposal>,
    /// A computation request is in flight; submissions are ignored until
    /// it completes.
    pub computing: bool,
    pub exports: ExportState,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::default(),
            form: FormState::default(),
            proposal: None,
            computing: false,
            exports: ExportState::default(),
            notice: None,
            should_quit: false,
            settings,
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_flags_are_independent_per_format() {
        let mut exports = ExportState::default();
        exports.set_in_flight(ExportFormat::Pdf, true);

        assert!(exports.is_in_flight(ExportFormat::Pdf));
        assert!(!exports.is_in_flight(ExportFormat::Dxf));
        assert!(exports.any_in_flight());

        exports.set_in_flight(ExportFormat::Pdf, false);
        assert!(!exports.any_in_flight());
    }
}
