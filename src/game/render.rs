use super::{Game, GameState};
use crate::consts;
use crate::surface::{centered_col, Canvas};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = self.board.screen_size();
        let mut canvas = Canvas::new(area, buf);
        canvas.clear();
        draw_border(&mut canvas, screen.width, screen.height);

        for (i, &pos) in self.snake.segments().iter().enumerate() {
            let symbol = if i == 0 {
                consts::SNAKE_HEAD_SYMBOL
            } else {
                consts::SNAKE_BODY_SYMBOL
            };
            canvas.write_char(i32::from(pos.y), i32::from(pos.x), symbol, consts::SNAKE_STYLE);
        }
        if let Some(pos) = self.food {
            canvas.write_char(
                i32::from(pos.y),
                i32::from(pos.x),
                consts::FOOD_SYMBOL,
                consts::FOOD_STYLE,
            );
        }

        let score = format!(" Score: {} ", self.score);
        canvas.write_text(
            0,
            centered_col(screen.width, &score),
            &score,
            consts::SCORE_STYLE,
        );

        if self.game_over() {
            let headline = if self.state == GameState::Exhausted {
                "BOARD FULL!"
            } else {
                "GAME OVER!"
            };
            let lines = [
                String::from(headline),
                format!("Final score: {}", self.score),
                String::from("Press R to restart"),
                String::from("Press Q to quit"),
            ];
            // There are only ever four lines.
            let top = i32::from(screen.height) / 2 - 2;
            for (row, line) in (top..).zip(&lines) {
                canvas.write_text(
                    row,
                    centered_col(screen.width, line),
                    line,
                    consts::GAME_OVER_STYLE,
                );
            }
        }
    }
}

/// Draw a box around the edge of a `width` by `height` region
fn draw_border(canvas: &mut Canvas<'_>, width: u16, height: u16) {
    if width == 0 || height == 0 {
        return;
    }
    let max_x = i32::from(width) - 1;
    let max_y = i32::from(height) - 1;
    let style = Style::new();
    for x in 1..max_x {
        canvas.write_char(0, x, consts::BORDER_HORIZONTAL, style);
        canvas.write_char(max_y, x, consts::BORDER_HORIZONTAL, style);
    }
    for y in 1..max_y {
        canvas.write_char(y, 0, consts::BORDER_VERTICAL, style);
        canvas.write_char(y, max_x, consts::BORDER_VERTICAL, style);
    }
    canvas.write_char(0, 0, consts::BORDER_TOP_LEFT, style);
    canvas.write_char(0, max_x, consts::BORDER_TOP_RIGHT, style);
    canvas.write_char(max_y, 0, consts::BORDER_BOTTOM_LEFT, style);
    canvas.write_char(max_y, max_x, consts::BORDER_BOTTOM_RIGHT, style);
}
