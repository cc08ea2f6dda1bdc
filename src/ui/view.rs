//! Form rendering
//!
//! Layout: platform cards (left), goal + tone + submit (middle column),
//! result pane (right). The error line sits under the submit control.

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::llm::Tone;
use crate::platforms::{PlatformConfig, TargetPlatform};
use crate::ui::state::{App, Focus};

/// Render the whole form
pub fn render<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> std::io::Result<()> {
    terminal.draw(|f| draw(f, app))?;
    Ok(())
}

/// Draw one frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TargetPlatform::ALL.len() as u16 * 2 + 2),
            Constraint::Min(5),
            Constraint::Length(Tone::ALL.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(columns[0]);

    render_platforms(f, app, form[0]);
    render_goal(f, app, form[1]);
    render_tone(f, app, form[2]);
    render_submit(f, app, form[3]);
    render_error(f, app, form[4]);
    render_result(f, app, columns[1]);
    render_status_bar(f, chunks[1]);
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn card_color(config: &PlatformConfig) -> Color {
    match config.rgb() {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::White,
    }
}

fn render_platforms(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for platform in TargetPlatform::ALL {
        let config = platform.config();
        let selected = platform == app.selected_platform;
        let marker = if selected { "▶ " } else { "  " };
        let mut name_style = Style::default().fg(card_color(config));
        if selected {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("[{}] ", config.icon), name_style),
            Span::styled(config.label, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", config.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(" Plataforma ")
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::Platform));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_goal(f: &mut Frame, app: &App, area: Rect) {
    let mut text = app.user_goal.clone();
    if app.focus == Focus::Goal && !app.is_loading() {
        text.push('█');
    }
    let block = Block::default()
        .title(" Objetivo ")
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::Goal));
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_tone(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Tone::ALL
        .iter()
        .map(|tone| {
            if *tone == app.tone {
                Line::from(Span::styled(
                    format!("● {}", tone.display_label()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("○ {}", tone.display_label()))
            }
        })
        .collect();
    let block = Block::default()
        .title(" Tom ")
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::Tone));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_submit(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.is_loading() {
        Style::default().fg(Color::Yellow)
    } else if app.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(style);
    f.render_widget(
        Paragraph::new(Span::styled(app.submit_label(), style))
            .centered()
            .block(block),
        area,
    );
}

fn render_error(f: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.error() {
        f.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_copied() {
        " Prompt (Copiado!) "
    } else {
        " Prompt "
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let Some(result) = app.result() else {
        let hint = if app.is_loading() {
            "Processando..."
        } else {
            "O prompt otimizado aparece aqui."
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).block(block),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = result.markdown.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Por que funciona",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for line in result.explanation.lines() {
        lines.push(Line::from(Span::styled(
            line,
            Style::default().fg(Color::Gray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let help = "Tab: foco | ↑/↓: selecionar | Enter: gerar | Ctrl+Y: copiar | Esc: limpar erro | Ctrl+Q: sair";
    f.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        area,
    );
}
