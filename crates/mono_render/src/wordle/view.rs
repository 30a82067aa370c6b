//! Draws a game onto the display canvas.
//!
//! Layout, left to right: the guess grid (one square cell per letter), then a
//! hints panel listing known letters by state, and in the bottom row of the
//! panel a status line once the game is over.

use crate::raster::canvas::Canvas;
use crate::raster::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

use super::scoring::{LetterResult, LetterState};
use super::session::{GameSession, Phase};
use super::{GameConfig, WORD_LENGTH};

pub const CELL_SIZE: i32 = 14;
pub const CELL_PITCH: i32 = 16;
pub const GRID_X: i32 = 4;
pub const GRID_Y: i32 = 2;
/// Inset of the inner border drawn around Present cells.
const DOUBLE_OUTLINE_INSET: i32 = 2;

const PANEL_GAP: i32 = 12;
const LINE_HEIGHT: i32 = GLYPH_HEIGHT + 3;
const TITLE: &str = "WORDLE";

pub fn panel_x() -> i32 {
    GRID_X + WORD_LENGTH as i32 * CELL_PITCH + PANEL_GAP
}

/// Top left corner of the cell at `row`, `column`.
pub fn cell_origin(row: usize, column: usize) -> (i32, i32) {
    (GRID_X + column as i32 * CELL_PITCH, GRID_Y + row as i32 * CELL_PITCH)
}

/// Message shown once the game waits for a restart.
pub fn status_message(session: &GameSession) -> Option<String> {
    if session.phase() != Phase::WaitingRestart {
        return None;
    }

    if session.is_won() {
        Some("YOU WON! SAY PLAY AGAIN".to_string())
    } else {
        Some(format!("THE WORD WAS {}. SAY NEW GAME", session.target()))
    }
}

/// Y coordinate of the status line.
pub fn status_y(canvas_height: u16) -> i32 {
    i32::from(canvas_height) - GLYPH_HEIGHT - 2
}

pub fn render_session(session: &GameSession, config: &GameConfig) -> Canvas {
    let mut canvas = Canvas::new(config.canvas_width, config.canvas_height);
    draw_grid(&mut canvas, session);
    draw_hints(&mut canvas, session, config.hint_line_chars);

    if let Some(message) = status_message(session) {
        let y = status_y(canvas.height());
        font::draw_text(&mut canvas, &message, panel_x(), y, 1, true);
    }

    canvas
}

fn draw_grid(canvas: &mut Canvas, session: &GameSession) {
    for (row_index, row) in session.rows().iter().enumerate() {
        for (column, cell) in row.iter().enumerate() {
            let (x, y) = cell_origin(row_index, column);
            draw_cell(canvas, x, y, cell);
        }
    }
}

fn draw_cell(canvas: &mut Canvas, x: i32, y: i32, cell: &LetterResult) {
    let ink = match cell.state {
        LetterState::Correct => {
            canvas.draw_rect(x, y, CELL_SIZE, CELL_SIZE, true, true);
            false
        },
        LetterState::Present => {
            canvas.draw_rect(x, y, CELL_SIZE, CELL_SIZE, false, true);
            let inner = CELL_SIZE - 2 * DOUBLE_OUTLINE_INSET;
            canvas.draw_rect(
                x + DOUBLE_OUTLINE_INSET,
                y + DOUBLE_OUTLINE_INSET,
                inner,
                inner,
                false,
                true,
            );
            true
        },
        LetterState::Absent | LetterState::Empty => {
            canvas.draw_rect(x, y, CELL_SIZE, CELL_SIZE, false, true);
            true
        },
    };

    if let Some(letter) = cell.letter {
        let mut buf = [0u8; 4];
        let text = letter.encode_utf8(&mut buf);
        let glyph_x = x + (CELL_SIZE - GLYPH_WIDTH) / 2;
        let glyph_y = y + (CELL_SIZE - GLYPH_HEIGHT) / 2;
        font::draw_text(canvas, text, glyph_x, glyph_y, 1, ink);
    }
}

fn draw_hints(canvas: &mut Canvas, session: &GameSession, line_chars: usize) {
    let x = panel_x();
    let mut y = GRID_Y;

    font::draw_text(canvas, TITLE, x, y, 2, true);
    y += font::text_height(2) + 4;

    let hints = session.hints();
    let groups = [
        ("CORRECT: ", LetterState::Correct),
        ("PRESENT: ", LetterState::Present),
        ("ABSENT: ", LetterState::Absent),
    ];

    for (label, state) in groups {
        let letters = hints.letters_in(state);
        let indent = x + font::text_width(label, 1);
        font::draw_text(canvas, label, x, y, 1, true);

        let lines = wrap_letters(&letters, line_chars);
        if lines.is_empty() {
            y += LINE_HEIGHT;
        }
        for line in lines {
            font::draw_text(canvas, &line, indent, y, 1, true);
            y += LINE_HEIGHT;
        }
    }
}

/// Joins letters with single spaces, starting a new line whenever the joined
/// text would exceed `budget` characters. A budget below one letter still
/// places one letter per line.
pub fn wrap_letters(letters: &[char], budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for &letter in letters {
        if !current.is_empty() && current.len() + 2 > budget {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push(letter);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::dictionary::Dictionary;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn played(target: &str, guesses: &[&str], max_guesses: usize) -> GameSession {
        let dictionary = Dictionary::from_words([target], ["NACRE", "SLATE", "PLANT"]).unwrap();
        let mut session = GameSession::new(target, max_guesses);
        for guess in guesses {
            session.submit(guess, &dictionary).unwrap();
        }
        session
    }

    #[test]
    fn wrap_respects_budget() {
        let letters: Vec<char> = ('A'..='J').collect();
        assert_eq!(wrap_letters(&letters, 9), vec!["A B C D E", "F G H I J"]);
        assert_eq!(wrap_letters(&letters, 100), vec!["A B C D E F G H I J"]);
        assert_eq!(wrap_letters(&['A', 'B'], 0), vec!["A", "B"]);
        assert!(wrap_letters(&[], 10).is_empty());
    }

    #[test]
    fn empty_board_draws_outlined_cells() {
        let session = GameSession::new("CRANE", 6);
        let canvas = render_session(&session, &config());
        assert_eq!(canvas.width(), 526);
        assert_eq!(canvas.height(), 100);

        let (x, y) = cell_origin(5, 4);
        assert!(canvas.pixel(x, y));
        assert!(canvas.pixel(x + CELL_SIZE - 1, y + CELL_SIZE - 1));
        assert!(!canvas.pixel(x + 1, y + 1));
        assert!(!canvas.pixel(x + CELL_SIZE / 2, y + CELL_SIZE / 2));
    }

    #[test]
    fn cell_styles_follow_letter_state() {
        // NACRE against CRANE: four letters present, E correct.
        let session = played("CRANE", &["NACRE"], 6);
        let canvas = render_session(&session, &config());

        // N is present: double outline.
        let (x, y) = cell_origin(0, 0);
        assert!(canvas.pixel(x, y));
        assert!(!canvas.pixel(x + 1, y + 1));
        assert!(canvas.pixel(x + 2, y + 2));

        // E is correct: filled cell with the letter punched out.
        let (x, y) = cell_origin(0, 4);
        assert!(canvas.pixel(x + 1, y + 1));
        let glyph_x = x + (CELL_SIZE - GLYPH_WIDTH) / 2;
        let glyph_y = y + (CELL_SIZE - GLYPH_HEIGHT) / 2;
        // Top bar of E.
        assert!(!canvas.pixel(glyph_x, glyph_y));
        assert!(!canvas.pixel(glyph_x + 4, glyph_y));
    }

    #[test]
    fn absent_cells_have_a_single_outline() {
        let session = played("CRANE", &["SLATE"], 6);
        let canvas = render_session(&session, &config());
        let (x, y) = cell_origin(0, 0);
        assert!(canvas.pixel(x, y));
        assert!(!canvas.pixel(x + 2, y + 2));
    }

    #[test]
    fn status_only_when_waiting_for_restart() {
        let playing = played("CRANE", &["SLATE"], 6);
        assert_eq!(status_message(&playing), None);

        let won = played("CRANE", &["CRANE"], 6);
        assert_eq!(status_message(&won).as_deref(), Some("YOU WON! SAY PLAY AGAIN"));

        let lost = played("CRANE", &["SLATE", "PLANT"], 2);
        let message = status_message(&lost).unwrap();
        assert!(message.contains("CRANE"));
        assert!(message.contains("NEW GAME"));
    }

    #[test]
    fn status_line_is_drawn_for_finished_games() {
        let status_row = |canvas: &Canvas| {
            let y0 = status_y(canvas.height());
            (y0..y0 + GLYPH_HEIGHT)
                .flat_map(|y| (panel_x()..i32::from(canvas.width())).map(move |x| (x, y)))
                .filter(|&(x, y)| canvas.pixel(x, y))
                .count()
        };

        let playing = render_session(&played("CRANE", &["SLATE"], 6), &config());
        assert_eq!(status_row(&playing), 0);

        let lost = played("CRANE", &["SLATE", "PLANT"], 2);
        let canvas = render_session(&lost, &config());
        let mut expected = Canvas::new(526, 100);
        let message = status_message(&lost).unwrap();
        font::draw_text(&mut expected, &message, panel_x(), status_y(100), 1, true);
        assert_eq!(status_row(&canvas), status_row(&expected));
        assert!(status_row(&canvas) > 0);
    }

    #[test]
    fn extra_rows_are_clipped_not_wrapped() {
        let session = GameSession::new("CRANE", 12);
        let canvas = render_session(&session, &config());
        assert_eq!(canvas.height(), 100);
    }
}
