use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Confirmation prompt shown before an in-progress session is discarded.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 7, area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Cancel this quiz?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red).bold()),
            Span::styled(" discard  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled("n", Style::default().fg(Color::Green).bold()),
            Span::styled(" keep playing", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
