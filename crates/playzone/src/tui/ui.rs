//! Stateless UI rendering.

use super::app::{self, App, Screen};
use playzone_dice::DiceColor;
use playzone_tictactoe::{Player, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BOARD_HELP: &str =
    "arrows/1-9 move  enter place  h hint  r restart  n dice  q quit";
const DICE_HELP: &str = "left/right/1-6 choose  space select  enter roll  b back  q quit";

/// Renders whichever screen is active.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Game
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(area);

    let (title, help) = match app.screen() {
        Screen::TicTacToe => ("Play Zone - Tic-Tac-Toe", BOARD_HELP),
        Screen::Dice => ("Play Zone - Color Dice", DICE_HELP),
    };

    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::TicTacToe => draw_board(frame, chunks[1], app),
        Screen::Dice => draw_dice(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(24)])
        .split(area);

    let board_area = center_rect(halves[0], 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let line = app::highlighted_line(app.state());
    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, line, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(40)).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }

    draw_tally(frame, halves[1], app);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, line: Option<[usize; 3]>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, line, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, line: Option<[usize; 3]>, pos: Position) {
    let index = pos.to_index();
    let square = app.state().board().get(index).unwrap_or(Square::Empty);

    let (symbol, mut style) = match square {
        Square::Empty => (
            format!(" {} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!(" {} ", player.symbol()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if line.is_some_and(|l| l.contains(&index)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if app.hint() == Some(index) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_tally(frame: &mut Frame, area: Rect, app: &App) {
    let tally = app.tally();
    let lines = vec![
        Line::from(vec![
            Span::styled("You (X)   ", Style::default().fg(player_color(Player::Human))),
            Span::raw(tally.human.to_string()),
        ]),
        Line::from(vec![
            Span::styled(
                "Computer  ",
                Style::default().fg(player_color(Player::Computer)),
            ),
            Span::raw(tally.computer.to_string()),
        ]),
        Line::from(vec![Span::raw("Draws     "), Span::raw(tally.draws.to_string())]),
    ];
    let block = Block::default().borders(Borders::ALL).title("Score");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_dice(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Color choices
    let mut choices = Vec::new();
    for color in DiceColor::ALL {
        let mut style = Style::default().fg(dice_color(color));
        if *app.dice().selected() == Some(color) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if color == app.dice_cursor() {
            style = style.bg(Color::White);
        }
        choices.push(Span::styled(format!(" {} {} ", color.index() + 1, color), style));
    }
    let choices = Paragraph::new(Line::from(choices))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Pick a color"));
    frame.render_widget(choices, rows[0]);

    // Last roll
    let faces: Vec<Span> = match app.dice().last_roll() {
        Some(outcome) => outcome
            .faces()
            .iter()
            .map(|&face| {
                let mut style = Style::default().fg(Color::Black).bg(dice_color(face));
                if face == *outcome.selected() {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Span::styled(format!(" [{}] ", face), style)
            })
            .collect(),
        None => vec![Span::styled(
            "No roll yet",
            Style::default().fg(Color::DarkGray),
        )],
    };
    let faces = Paragraph::new(Line::from(faces))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} dice", app.dice().dice_count())),
        );
    frame.render_widget(faces, rows[2]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Blue,
        Player::Computer => Color::Red,
    }
}

fn dice_color(color: DiceColor) -> Color {
    match color {
        DiceColor::Red => Color::Red,
        DiceColor::Blue => Color::Blue,
        DiceColor::Green => Color::Green,
        DiceColor::Yellow => Color::Yellow,
        DiceColor::Purple => Color::Magenta,
        DiceColor::Orange => Color::Rgb(255, 165, 0),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_centered() {
        let rect = center_rect(Rect::new(0, 0, 100, 41), 40, 11);
        assert_eq!(rect, Rect::new(30, 15, 40, 11));
    }

    #[test]
    fn test_every_dice_color_is_distinct() {
        let colors: Vec<Color> = DiceColor::ALL.iter().map(|&c| dice_color(c)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }
}
