use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::{QuestionResult, Score};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(evaluation) = app.evaluation() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &evaluation.score);
    render_question_breakdown(frame, chunks[2], &evaluation.results, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percent: u32) -> Color {
    match percent {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, score: &Score) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", score.correct, score.total, score.percent),
            Style::default().fg(get_grade_color(score.percent)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// Three lines per question: verdict and prompt, the user's answer, the
/// correct answer. Scrolling moves one question at a time.
fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    results: &[QuestionResult],
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(results.len() * 3);

    for (index, result) in results.iter().enumerate() {
        let (symbol, color) = if result.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(truncate_question(&result.prompt), Style::default().fg(Color::Gray)),
        ]));

        let answer_style = if result.user_answers.is_answered() {
            Style::default().fg(color)
        } else {
            Style::default().fg(Color::DarkGray).italic()
        };
        lines.push(Line::from(vec![
            Span::styled("       Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(result.user_answers.to_string(), answer_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled("       Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(result.correct_answers.join(", "), Style::default().fg(Color::Gray)),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll(((scroll * 3) as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
