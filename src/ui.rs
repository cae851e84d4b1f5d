#![allow(
    // Field coordinates are bounds-checked against the board before narrowing
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::app::App;
use crate::components::PieceType;
use crate::session::Snapshot;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

// Each cell is 2 characters wide and 1 tall
const CELL_WIDTH: u16 = 2;
const MIN_INFO_WIDTH: u16 = 24;

/// Colour used for every block of `kind`.
#[must_use]
pub fn piece_color(kind: PieceType) -> Color {
    match kind {
        PieceType::I => Color::Cyan,
        PieceType::T => Color::Magenta,
        PieceType::L => Color::LightRed,
        PieceType::J => Color::Blue,
        PieceType::S => Color::Green,
        PieceType::Z => Color::Red,
        PieceType::O => Color::Yellow,
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let field = &app.config().field;
    let board_width = field.width * CELL_WIDTH + 2; // +2 for borders
    let board_height = field.height + 2;
    let min_total_width = board_width + MIN_INFO_WIDTH;
    let min_total_height = board_height + 2; // Title row above the board

    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(format!(
            "Terminal too small!\nNeed {min_total_width}x{min_total_height}\nPlease resize your terminal."
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Minofall"));

        let warning_area = centered_rect(60, 40, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let snapshot = app.snapshot();

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(MIN_INFO_WIDTH)])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(board_height), // Game board (fixed height)
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let title = Paragraph::new("MINOFALL")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_game_board(f, app, &snapshot, game_layout[1]);
    render_info(f, &snapshot, main_layout[1]);
}

fn render_game_board(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let field = &app.config().field;
    let block = Block::default().borders(Borders::ALL);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    for (position, kind) in app.get_render_blocks() {
        // Interior columns start at 1 because column 0 is the wall
        let column = position.x - 1;
        if column < 0
            || position.y < 0
            || column >= i32::from(field.width)
            || position.y >= i32::from(field.height)
        {
            continue;
        }

        let block_x = inner_area.left() + column as u16 * CELL_WIDTH;
        let block_y = inner_area.top() + position.y as u16;
        if block_y >= inner_area.bottom() {
            continue;
        }

        let color = piece_color(kind);
        for dx in 0..CELL_WIDTH {
            if block_x + dx >= inner_area.right() {
                break;
            }
            if let Some(cell) = f.buffer_mut().cell_mut((block_x + dx, block_y)) {
                cell.set_symbol("█");
                cell.set_fg(color);
                cell.set_bg(Color::Black);
            }
        }
    }

    let overlay = if snapshot.game_over {
        Some(("GAME OVER", Color::Red))
    } else if snapshot.paused {
        Some(("PAUSED", Color::Yellow))
    } else {
        None
    };
    if let Some((text, color)) = overlay {
        let width = (text.len() as u16).min(inner_area.width);
        let overlay_area = Rect {
            x: inner_area.x + (inner_area.width - width) / 2,
            y: inner_area.y + inner_area.height / 2,
            width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            overlay_area,
        );
    }
}

fn render_info(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Lines, level, next
            Constraint::Length(2), // Status
            Constraint::Min(8),    // Controls
        ])
        .split(area);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let next = snapshot.next.map_or("-", PieceType::name);
    let stats = Paragraph::new(format!(
        "Lines: {}\nLevel: {}\nNext: {next}",
        snapshot.lines_cleared, snapshot.level
    ))
    .wrap(Wrap { trim: true });
    f.render_widget(stats, info_layout[1]);

    let status = if snapshot.game_over {
        Paragraph::new("GAME OVER!\nPress Enter to restart").style(Style::default().fg(Color::Red))
    } else if snapshot.paused {
        Paragraph::new("Paused\nPress P to play").style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new("Playing").style(Style::default().fg(Color::Green))
    };
    f.render_widget(status.wrap(Wrap { trim: true }), info_layout[2]);

    let controls = Paragraph::new(
        "Controls:\n\
        A/←, D/→: Move\n\
        S/↓: Move down\n\
        R: Rotate clockwise\n\
        E: Rotate counter-clockwise\n\
        P: Pause\n\
        Q: Quit",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[3]);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
