use crate::game::collision::{obstacle_hitboxes, sprite_hitbox};
use crate::game::world::World;
use crate::gui::Surface;
use quicksilver::geom::Vector;
use quicksilver::graphics::Color;
use quicksilver::Result;

/// Playfield: background, obstacles, sprite and the running score.
pub struct GameWindow {
    pub background: Color,
    pub obstacle_color: Color,
    pub text_color: Color,
    pub score_pos: Vector,
    pub score_size: f32,
}

impl Default for GameWindow {
    fn default() -> Self {
        GameWindow {
            background: Color::WHITE,
            obstacle_color: Color::GREEN,
            text_color: Color::BLACK,
            score_pos: Vector::new(10f32, 30f32),
            score_size: 20f32,
        }
    }
}

impl GameWindow {
    pub fn draw(&self, world: &World, surface: &mut impl Surface) -> Result<()> {
        surface.clear(self.background)?;

        let canvas_height = world.rules().canvas_height;
        for obstacle in world.obstacles() {
            let (top, bottom) = obstacle_hitboxes(obstacle, canvas_height);
            surface.fill_rect(top, self.obstacle_color)?;
            surface.fill_rect(bottom, self.obstacle_color)?;
        }

        surface.draw_sprite(sprite_hitbox(world.sprite()))?;

        let score = format!("Score: {}", world.score());
        surface.draw_text(&score, self.score_pos, self.score_size, self.text_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::GameRules;
    use crate::gui::recording::{Op, RecordingSurface};

    #[test]
    fn fresh_world_draws_sprite_and_zero_score() {
        let world = World::new(GameRules::default(), 1);
        let mut surface = RecordingSurface::new(true);

        GameWindow::default().draw(&world, &mut surface).unwrap();

        assert_eq!(surface.ops, vec![
            Op::Clear(Color::WHITE),
            Op::Sprite((50.0, 150.0, 40.0, 40.0)),
            Op::Text("Score: 0".to_string(), (10.0, 30.0), 20.0, Color::BLACK),
        ]);
    }

    #[test]
    fn obstacles_drawn_as_two_segments() {
        let mut world = World::new(GameRules::default(), 1);
        world.update_frame();
        let obstacle = world.obstacles()[0].clone();
        let mut surface = RecordingSurface::new(true);

        GameWindow::default().draw(&world, &mut surface).unwrap();

        assert_eq!(surface.ops[1], Op::FillRect((obstacle.pos_x, 0.0, 55.0, obstacle.top), Color::GREEN));
        assert_eq!(
            surface.ops[2],
            Op::FillRect((obstacle.pos_x, 600.0 - obstacle.bot, 55.0, obstacle.bot), Color::GREEN)
        );
    }

    #[test]
    fn unloaded_sprite_is_skipped() {
        let world = World::new(GameRules::default(), 1);
        let mut surface = RecordingSurface::new(false);

        GameWindow::default().draw(&world, &mut surface).unwrap();

        assert!(surface.ops.iter().all(|op| !matches!(op, Op::Sprite(_))));
        assert_eq!(surface.texts(), vec!["Score: 0"]);
    }
}
