//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and view tabs
    pub header: Rect,

    /// Active screen content
    pub body: Rect,

    /// Single status line
    pub status: Rect,
}

/// Split the terminal into header, body, and status line
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (top border + tabs + bottom border)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status line
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_create_layout_tiny_terminal() {
        let layout = create(Rect::new(0, 0, 20, 5));
        assert!(layout.body.height <= 3);
        assert_eq!(layout.header.width, 20);
    }
}
