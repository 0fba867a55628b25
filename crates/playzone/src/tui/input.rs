//! Key mapping for keyboard navigation.

use crossterm::event::KeyCode;
use playzone_dice::DiceColor;
use playzone_tictactoe::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Maps `1`-`9` to a board square.
pub fn digit_square(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Maps `1`-`6` to a die color.
pub fn digit_color(key: KeyCode) -> Option<DiceColor> {
    match key {
        KeyCode::Char(c @ '1'..='6') => c
            .to_digit(10)
            .and_then(|d| DiceColor::ALL.get(d as usize - 1).copied()),
        _ => None,
    }
}

/// Moves the color cursor with left/right, wrapping around.
pub fn move_color(cursor: DiceColor, key: KeyCode) -> DiceColor {
    match key {
        KeyCode::Left => cursor.prev(),
        KeyCode::Right => cursor.next(),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_square(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_square(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_square(KeyCode::Char('0')), None);
        assert_eq!(digit_color(KeyCode::Char('5')), Some(DiceColor::Purple));
        assert_eq!(digit_color(KeyCode::Char('7')), None);
    }
}
