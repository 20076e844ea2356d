use crate::game::model::Sprite;
use crate::game::rules::GameRules;

/// Gravity, then damping, then the fall-speed cap, then integrate position.
pub fn step(sprite: &mut Sprite, rules: &GameRules) {
    let velocity = (sprite.velocity + rules.gravity) * rules.flap_damping;
    sprite.velocity = f32::min(velocity, rules.max_fall_speed);
    sprite.pos_y += sprite.velocity;
}

/// Overrides the velocity, never accumulates.
pub fn flap(sprite: &mut Sprite, rules: &GameRules) {
    sprite.velocity = rules.lift;
}
