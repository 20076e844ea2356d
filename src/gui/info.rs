use crate::game::rules::GameRules;
use crate::game::session::Phase;
use crate::gui::Surface;
use quicksilver::geom::{Rectangle, Vector};
use quicksilver::graphics::Color;
use quicksilver::Result;

const START_PROMPT: &str = "Press any key or tap to start!";
const CONTINUE_PROMPT: &str = "Press any key or tap to continue";

/// Start prompt and game-over panel, drawn over the playfield.
pub struct InfoWindow {
    pub text_color: Color,
    pub panel_color: Color,
    pub prompt_size: f32,
    pub prompt_pos: Vector,
}

impl Default for InfoWindow {
    fn default() -> Self {
        InfoWindow {
            text_color: Color::BLACK,
            panel_color: Color::WHITE.with_alpha(0.85f32),
            prompt_size: 24f32,
            prompt_pos: Vector::new(20f32, 300f32),
        }
    }
}

impl InfoWindow {
    pub fn draw(&self, phase: Phase, rules: &GameRules, surface: &mut impl Surface) -> Result<()> {
        match phase {
            // prompt appears once the sprite image has loaded
            Phase::NotStarted if surface.sprite_ready() => {
                surface.draw_text(START_PROMPT, self.prompt_pos, self.prompt_size, self.text_color)
            }
            Phase::NotStarted | Phase::Running => Ok(()),
            Phase::Over { final_score } => {
                let panel = Rectangle::new(
                    (20f32, rules.canvas_height / 2f32 - 80f32),
                    (rules.canvas_width - 40f32, 140f32),
                );
                surface.fill_rect(panel, self.panel_color)?;
                let message = format!("Game Over  Score: {}", final_score);
                surface.draw_text(&message, panel.pos + Vector::new(20f32, 50f32), self.prompt_size, self.text_color)?;
                surface.draw_text(CONTINUE_PROMPT, panel.pos + Vector::new(20f32, 100f32), 18f32, self.text_color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::recording::{Op, RecordingSurface};

    #[test]
    fn start_prompt_once_sprite_loaded() {
        let mut surface = RecordingSurface::new(true);

        InfoWindow::default().draw(Phase::NotStarted, &GameRules::default(), &mut surface).unwrap();

        assert_eq!(surface.ops, vec![
            Op::Text(START_PROMPT.to_string(), (20.0, 300.0), 24.0, Color::BLACK),
        ]);
    }

    #[test]
    fn no_prompt_before_sprite_loaded() {
        let mut surface = RecordingSurface::new(false);

        InfoWindow::default().draw(Phase::NotStarted, &GameRules::default(), &mut surface).unwrap();

        assert!(surface.ops.is_empty());
    }

    #[test]
    fn nothing_while_running() {
        let mut surface = RecordingSurface::new(true);

        InfoWindow::default().draw(Phase::Running, &GameRules::default(), &mut surface).unwrap();

        assert!(surface.ops.is_empty());
    }

    #[test]
    fn game_over_shows_final_score() {
        let mut surface = RecordingSurface::new(true);

        InfoWindow::default().draw(Phase::Over { final_score: 7 }, &GameRules::default(), &mut surface).unwrap();

        assert_eq!(surface.ops[0], Op::FillRect((20.0, 220.0, 360.0, 140.0), Color::WHITE.with_alpha(0.85)));
        assert_eq!(surface.texts(), vec!["Game Over  Score: 7", CONTINUE_PROMPT]);
    }

    // rough sans-serif advance, half the font size per character
    fn estimated_right_edge(text: &str, pos: (f32, f32), size: f32) -> f32 {
        pos.0 + text.chars().count() as f32 * size * 0.5
    }

    #[test]
    fn prompts_fit_the_canvas() {
        let rules = GameRules::default();
        let mut surface = RecordingSurface::new(true);
        let info = InfoWindow::default();

        info.draw(Phase::NotStarted, &rules, &mut surface).unwrap();
        info.draw(Phase::Over { final_score: 1234 }, &rules, &mut surface).unwrap();

        for op in &surface.ops {
            if let Op::Text(text, pos, size, _) = op {
                assert!(pos.0 >= 0.0);
                assert!(estimated_right_edge(text, *pos, *size) <= rules.canvas_width, "{:?} overflows", text);
            }
        }
    }
}
