//! The conveyor scene: HUD, belt, trash items, and bins.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::ITEM_HEIGHT;
use crate::game::session::GameSession;
use crate::game::types::{Bin, PlayArea, TrashCategory};
use crate::ui::ViewState;

/// Display color for each category's bin.
pub fn category_color(category: TrashCategory) -> Color {
    match category {
        TrashCategory::Organic => Color::Green,
        TrashCategory::Paper => Color::Blue,
        TrashCategory::Plastic => Color::Yellow,
        TrashCategory::General => Color::Gray,
    }
}

/// Scale a logical x to a column offset within `play`.
fn scale_x(play: Rect, area: PlayArea, x: f64) -> i32 {
    (x / area.width * play.width as f64).round() as i32
}

/// Scale a logical y to a row offset within `play`.
fn scale_y(play: Rect, area: PlayArea, y: f64) -> i32 {
    (y / area.height * play.height as f64).round() as i32
}

/// Render the top bar: score, record, lives, and key hints.
pub fn render_hud(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Recycle Rush ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 {
        return;
    }

    let hearts = "♥".repeat(session.lives as usize);
    let stats = Line::from(vec![
        Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Best: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.high_score),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("   Lives: ", Style::default().fg(Color::DarkGray)),
        Span::styled(hearts, Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(stats), inner);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[I]", Style::default().fg(Color::White)),
        Span::styled(" Guide  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[P]", Style::default().fg(Color::White)),
        Span::styled(" Pause  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::White)),
        Span::styled(" Quit ", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(hints, inner);
}

/// Render the play area: belt line, bins, then items on top.
pub fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    bins: &[Bin],
    view: &ViewState,
    now_ms: u64,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    render_belt(frame, area, session.area);
    for bin in bins {
        let flashing = matches!(
            view.bin_flash,
            Some((category, until)) if category == bin.category && now_ms < until
        );
        render_bin(frame, area, session.area, bin, flashing);
    }
    render_items(frame, area, session, view);
}

fn render_belt(frame: &mut Frame, play: Rect, area: PlayArea) {
    // The belt line sits under the items riding it.
    let row = scale_y(play, area, area.belt_y() + ITEM_HEIGHT);
    if row < 0 || row >= play.height as i32 {
        return;
    }
    let line = "═".repeat(play.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        Rect::new(play.x, play.y + row as u16, play.width, 1),
    );
}

fn render_bin(frame: &mut Frame, play: Rect, area: PlayArea, bin: &Bin, flashing: bool) {
    let x = scale_x(play, area, bin.region.x).max(0) as u16;
    let y = scale_y(play, area, bin.region.y).max(0) as u16;
    let w = (scale_x(play, area, bin.region.w).max(2) as u16).min(play.width.saturating_sub(x));
    let h = (scale_y(play, area, bin.region.h).max(3) as u16).min(play.height.saturating_sub(y));
    if w < 2 || h < 2 {
        return;
    }

    let style = if flashing {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(category_color(bin.category))
    };

    let rect = Rect::new(play.x + x, play.y + y, w, h);
    let block = Block::default()
        .title(format!(" {} ", bin.category.name()))
        .borders(Borders::ALL)
        .border_style(style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if inner.height >= 1 {
        let sample = Paragraph::new(bin.category.icons()[0])
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(sample, Rect { height: 1, ..inner });
    }
}

fn render_items(frame: &mut Frame, play: Rect, session: &GameSession, view: &ViewState) {
    for item in &session.items {
        let col = scale_x(play, session.area, item.x);
        let row = scale_y(play, session.area, item.y);
        // Items enter off-screen left; skip anything not on a cell yet.
        if col < 0 || row < 0 || col >= play.width as i32 || row >= play.height as i32 {
            continue;
        }
        let width = 2u16.min(play.width - col as u16);
        let glyph = item.category.icons()[item.icon % item.category.icons().len()];
        let style = if view.dragging == Some(item.id) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(glyph).style(style),
            Rect::new(play.x + col as u16, play.y + row as u16, width, 1),
        );
    }
}
