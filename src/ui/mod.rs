pub mod playfield;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::config::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::games::{Game, GameOver};

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 150, 220)))
        .title(" 💥 Popper ")
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD));

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(4),    // Playfield
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_status(frame, app, chunks[0]);

    let field = playfield::fit(chunks[1], FIELD_WIDTH, FIELD_HEIGHT);
    app.mouse.set_viewport(field);
    app.draw_frame();
    if field.width > 0 && field.height > 0 {
        let lines = playfield::render_surface(&app.frame, field.width, field.height);
        frame.render_widget(Paragraph::new(lines), field);
    }

    render_help(frame, app, chunks[2]);

    if let Some(over) = app.game_over {
        render_game_over(frame, area, over);
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let popper = &app.popper;
    let charges = popper.left().max(0) as usize;
    let status = Line::from(vec![
        Span::styled(
            format!(" Round: {} ", popper.get_round()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Score: {} ", popper.get_score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Charges: {}{} ", "◆ ".repeat(charges), "◇ ".repeat((popper.available() as usize).saturating_sub(charges))),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Spheres: {} ", popper.spheres().len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Seed: {} ", popper.seed()),
            Style::default().fg(Color::Rgb(120, 120, 140)),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = if app.paused {
        Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )])
    } else {
        Line::from(vec![
            Span::styled(" Click ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("Detonate ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("P Pause ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("R Restart ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(help), area);
}

fn render_game_over(frame: &mut Frame, area: Rect, over: GameOver) {
    let overlay_w = 40u16.min(area.width.saturating_sub(4));
    let overlay_h = 9u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .title(" 💀 GAME OVER ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("  Round: {}", over.round),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            format!("  Score: {}", over.score),
            Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" play again  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("Q", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" quit", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
    ];

    let p = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
