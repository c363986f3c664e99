use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use memora_games::NBackState;

use super::app::{App, Feedback};
use crate::palette::{cue_color, cue_name};

pub fn draw_header(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let n = app.session.config().nback.n;
    let text = vec![
        Line::from(format!("{n}-Back Challenge").bold()),
        Line::from(
            format!("Press Space when the color matches the one {n} step(s) back.")
                .fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

pub fn draw_grid(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let Some(game) = app.session.nback() else {
        return;
    };
    let categories = game.config().categories;
    let current = game.current_cue();

    let per_row = usize::from(categories).div_ceil(2).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(*row_area);
        for (col_index, cell) in cols.iter().enumerate() {
            let Ok(cue) = u8::try_from(row_index * per_row + col_index) else {
                continue;
            };
            if cue >= categories {
                continue;
            }
            let lit = current == Some(cue);
            let style = if lit {
                Style::default().bg(cue_color(cue)).fg(Color::Black).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(cue_color(cue)))
                .style(style);
            let label = Paragraph::new(cue_name(cue))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(label, *cell);
        }
    }
}

pub fn draw_feedback(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let line = match &app.feedback {
        Some(Feedback::Hit) => Line::from("Match!".fg(Color::Green).bold()),
        Some(Feedback::Miss) => Line::from("No match".fg(Color::Red)),
        Some(Feedback::Rejected(reason)) => Line::from(reason.clone().fg(Color::Yellow)),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn draw_status_bar(frame: &mut Frame, app: &App<'_>, area: Rect) {
    let status = match app.session.nback() {
        Some(game) if game.state() == NBackState::NotStarted => {
            "Enter:start ?:help Esc:quit".to_string()
        }
        Some(game) => format!(
            "Item {}/{} | {} correct of {} | Space:match r:restart ?:help Esc:quit",
            game.current_index().map_or(0, |i| i + 1),
            game.sequence().len(),
            game.score(),
            game.total_attempts()
        ),
        None => String::new(),
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());
    let text = vec![
        Line::from("Keys".bold()),
        Line::from(""),
        Line::from("Enter / s   start"),
        Line::from("Space / m   declare a match"),
        Line::from("r           restart with a new sequence"),
        Line::from("?           toggle this help"),
        Line::from("Esc / q     quit without scoring"),
    ];
    let popup = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Help ").borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
