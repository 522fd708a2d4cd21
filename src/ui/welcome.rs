use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let total = app.total_questions();
    let multiple = app
        .session()
        .questions()
        .iter()
        .filter(|question| question.allow_multiple)
        .count();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Questions · {} with several answers", total, multiple),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::models::Question;
    use crate::session::Session;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_welcome_counts_questions() {
        let session = Session::with_questions(vec![
            Question::single("q1", "One", &["a"], 0),
            Question::multiple("q2", "Two", &["a", "b"], &[0, 1]),
        ])
        .unwrap();

        let screen = render_to_string(&App::with_session(session), 60, 20);
        assert!(screen.contains("2 Questions · 1 with several answers"));
        assert!(screen.contains("ENTER"));
    }
}
