use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, Selection};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], app.current_question_number(), &question.prompt);
    render_hint(frame, chunks[2], question);
    render_options(frame, chunks[3], question, app.current_selection(), app.cursor());
    render_controls(frame, chunks[4], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
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

fn render_prompt(frame: &mut Frame, area: Rect, number: usize, prompt: &str) {
    let widget = Paragraph::new(format!("Question {}. {}", number, prompt))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_hint(frame: &mut Frame, area: Rect, question: &Question) {
    let hint = if question.allow_multiple {
        "Select all that apply"
    } else {
        "Select one answer"
    };
    frame.render_widget(Paragraph::new(hint).fg(Color::DarkGray).italic(), area);
}

fn marker(allow_multiple: bool, checked: bool) -> &'static str {
    match (allow_multiple, checked) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selection: Option<&Selection>,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let under_cursor = index == cursor;
        let checked = selection.is_some_and(|s| s.includes(index, &question.options));

        let style = match (under_cursor, checked) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let pointer = if under_cursor { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", pointer), style),
            Span::styled(format!("{} ", marker(question.allow_multiple, checked)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let select = if app
        .current_question()
        .is_some_and(|question| question.allow_multiple)
    {
        "space toggle"
    } else {
        "space select"
    };

    let mut controls = vec!["j/k move", select];
    if app.has_previous() {
        controls.push("h back");
    }
    if app.has_next() {
        controls.push("l next");
    }
    if app.can_submit() {
        controls.push("s submit");
    }
    controls.push("q quit");

    let widget = Paragraph::new(controls.join("  ·  "))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
