use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use rust_decimal::Decimal;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal forms.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Collapse an error chain into one status line: the outermost message, plus
/// the root cause when it adds something.
pub(crate) fn surface_error(err: &Error) -> String {
    let top = err.to_string();
    match err.chain().last().map(|cause| cause.to_string()) {
        Some(root) if root != top => format!("{top} ({root})"),
        _ => top,
    }
}

/// Currency amounts are shown with two decimals.
pub(crate) fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn single_errors_are_shown_as_is() {
        let err = anyhow!("All fields must be filled!");
        assert_eq!(surface_error(&err), "All fields must be filled!");
    }

    #[test]
    fn root_cause_is_appended() {
        let err = anyhow!("FOREIGN KEY constraint failed").context("failed to insert bill");
        assert_eq!(
            surface_error(&err),
            "failed to insert bill (FOREIGN KEY constraint failed)"
        );
    }

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(Decimal::new(150, 0)), "150.00");
        assert_eq!(format_amount(Decimal::new(125, 1)), "12.50");
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }
}
