use crate::game::rules::GameRules;

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub pos_x: f32,
    pub pos_y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical only, positive is downward.
    pub velocity: f32,
}

impl Sprite {
    pub fn new(rules: &GameRules) -> Sprite {
        Sprite {
            pos_x: rules.sprite_start_x,
            pos_y: rules.sprite_start_y,
            width: rules.sprite_width,
            height: rules.sprite_height,
            velocity: 0f32,
        }
    }
}

/// A top/bottom segment pair. The gap is whatever the two segments leave of the canvas height.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub pos_x: f32,
    pub width: f32,
    pub top: f32,
    pub bot: f32,
}

impl Obstacle {
    pub fn right_edge(&self) -> f32 {
        self.pos_x + self.width
    }

    pub fn gap(&self, canvas_height: f32) -> f32 {
        canvas_height - self.top - self.bot
    }
}
