//! Modal overlays: start screen, pause, sorting guide, and game over.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::build_info;
use crate::game::session::{GameOverKind, GameSession};
use crate::game::types::TrashCategory;
use crate::ui::play_scene::category_color;

/// Render a centered modal box with a colored border and title, returning
/// nothing; lines are centered inside.
fn render_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    lines: Vec<Line>,
    width: u16,
    height: u16,
) {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// The start screen: what the game is, the stored record, and controls.
pub fn render_start(frame: &mut Frame, area: Rect, session: &GameSession) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Trash rides the belt. Drag each piece into its bin",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "with the mouse before it gets away!",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Best score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[I]", Style::default().fg(Color::White)),
            Span::styled(" Sorting guide  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(frame, area, " ♻ Recycle Rush ", Color::Cyan, lines, 56, 11);
}

/// A minimal pause modal; the frozen scene stays visible around it.
pub fn render_paused(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[P]", Style::default().fg(Color::White)),
            Span::styled(" Resume", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_modal(frame, area, "", Color::Yellow, lines, 24, 6);
}

/// The sorting guide shown by the info key. Opening it pauses the game.
pub fn render_info(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Each piece of trash belongs in one bin:",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    let notes = [
        (TrashCategory::Organic, "food scraps and leftovers"),
        (TrashCategory::Paper, "paper, cardboard, cartons"),
        (TrashCategory::Plastic, "bottles, cups, packaging"),
        (TrashCategory::General, "everything else"),
    ];
    for (category, note) in notes {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>8}  ", category.name()),
                Style::default()
                    .fg(category_color(category))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(category.icons().join(" "), Style::default()),
            Span::styled(format!("  {}", note), Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "A correct drop scores 10. A wrong bin or a lost piece",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        "costs a life. The belt only gets faster!",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[I]", Style::default().fg(Color::White)),
        Span::styled(" Close", Style::default().fg(Color::DarkGray)),
    ]));

    render_modal(frame, area, " Sorting Guide ", Color::Cyan, lines, 64, 14);
}

/// The game-over screen, with a distinct celebration for a new record.
pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    kind: Option<GameOverKind>,
) {
    let (title_text, title_color, message) = match kind {
        Some(GameOverKind::NewRecord) => (
            "NEW RECORD! 🏆",
            Color::Yellow,
            format!("You beat the old best — new record: {}", session.high_score),
        ),
        _ => (
            "GAME OVER",
            Color::Red,
            format!("Final score: {}", session.score),
        ),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title_text,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Play again  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_modal(frame, area, "", title_color, lines, 52, 8);
}
