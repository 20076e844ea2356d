use crate::game::model::{Obstacle, Sprite};
use crate::game::rules::GameRules;
use quicksilver::geom::{Rectangle, Shape};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collision {
    /// Index into the obstacle collection.
    TopSegment(usize),
    BottomSegment(usize),
    Ceiling,
    Floor,
}

/// First collision found this frame, obstacles checked in spawn order before the playfield bounds.
pub fn check_collision(sprite: &Sprite, obstacles: &[Obstacle], rules: &GameRules) -> Option<Collision> {
    let hitbox = sprite_hitbox(sprite);
    for (index, obstacle) in obstacles.iter().enumerate() {
        let (top, bottom) = obstacle_hitboxes(obstacle, rules.canvas_height);
        if hitbox.overlaps(&top) {
            return Some(Collision::TopSegment(index));
        }
        if hitbox.overlaps(&bottom) {
            return Some(Collision::BottomSegment(index));
        }
    }

    if sprite.pos_y < 0f32 {
        Some(Collision::Ceiling)
    } else if sprite.pos_y + sprite.height > rules.canvas_height {
        Some(Collision::Floor)
    } else {
        None
    }
}

pub fn sprite_hitbox(sprite: &Sprite) -> Rectangle {
    Rectangle::new((sprite.pos_x, sprite.pos_y), (sprite.width, sprite.height))
}

pub fn obstacle_hitboxes(obstacle: &Obstacle, canvas_height: f32) -> (Rectangle, Rectangle) {
    let top = Rectangle::new((obstacle.pos_x, 0f32), (obstacle.width, obstacle.top));
    let bottom = Rectangle::new(
        (obstacle.pos_x, canvas_height - obstacle.bot),
        (obstacle.width, obstacle.bot),
    );
    (top, bottom)
}
