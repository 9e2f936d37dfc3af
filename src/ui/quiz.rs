use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_counter(frame, chunks[0], app);
    render_progress_bar(frame, chunks[1], app);
    render_question_text(frame, chunks[2], &app.current_question().text);
    render_choices(frame, chunks[3], app);
    render_feedback(frame, chunks[4], app);
    render_controls(frame, chunks[5], app);
}

fn render_counter(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Gauge::default()
        .ratio(app.progress_ratio())
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .label("");
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_choices(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();
    let revealed = app.state == AppState::Reveal;
    let grading = app.last_grading();

    let mut lines: Vec<Line> = Vec::with_capacity(question.choices.len() * 2);

    for (index, choice) in question.choices.iter().enumerate() {
        let is_selected = index == app.selected_choice();

        let style = if revealed {
            if choice.label == question.correct {
                Style::default().fg(Color::Green).bold()
            } else if grading.is_some_and(|g| g.selected == choice.label) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        let marker = if !revealed && is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}. ", choice.label), style),
            Span::styled(choice.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    if app.state != AppState::Reveal {
        return;
    }
    let Some(grading) = app.last_grading() else {
        return;
    };

    let question = app.current_question();
    let line = if grading.is_correct {
        Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled("Wrong! ", Style::default().fg(Color::Red).bold()),
            Span::styled(
                format!("Correct: {}. {}", question.correct, question.correct_text()),
                Style::default().fg(Color::White),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.state == AppState::Reveal {
        "enter/n next  ·  esc cancel  ·  q quit"
    } else {
        "j/k navigate  ·  1-4 answer  ·  enter select  ·  esc cancel  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
