//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + key hints)
    pub header: Rect,

    /// Main content area (form or results)
    pub content: Rect,

    /// Status bar area (notices, in-flight operations)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(5),    // Content
        Constraint::Length(3), // Status bar (bordered)
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_gets_the_remaining_height() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 3);
        assert_eq!(areas.content.height, 18);
        assert_eq!(areas.content.y, 3);
        assert_eq!(areas.status.y, 21);
    }

    #[test]
    fn tiny_terminal_still_produces_three_areas() {
        let areas = create(Rect::new(0, 0, 40, 8));
        assert_eq!(areas.header.height, 3);
        assert!(areas.content.height >= 2);
    }
}
