use crate::game::model::Obstacle;
use crate::game::rules::GameRules;
use rand::Rng;

/// One frame of obstacle bookkeeping: spawn on cadence, then advance everything, then prune.
pub fn update_obstacles(obstacles: &mut Vec<Obstacle>, frame: u64, rules: &GameRules, rng: &mut impl Rng) {
    if frame % rules.spawn_interval == 0 {
        let obstacle = generate_obstacle(rules, rng);
        log::trace!("frame {}: spawned obstacle, top {} gap {}", frame, obstacle.top, obstacle.gap(rules.canvas_height));
        obstacles.push(obstacle);
    }
    advance(obstacles, rules);
    prune(obstacles);
}

/// New obstacle at the right edge with a top segment drawn uniformly from `[top_min, top_max)`.
pub fn generate_obstacle(rules: &GameRules, rng: &mut impl Rng) -> Obstacle {
    let top = rng.gen_range(rules.obstacle_top_min, rules.obstacle_top_max);
    let bot = rules.canvas_height - top - rules.obstacle_gap;
    Obstacle {
        pos_x: rules.canvas_width,
        width: rules.obstacle_width,
        top,
        bot,
    }
}

pub fn advance(obstacles: &mut [Obstacle], rules: &GameRules) {
    for obstacle in obstacles.iter_mut() {
        obstacle.pos_x -= rules.obstacle_speed;
    }
}

/// Drops every obstacle whose right edge has left the screen, keeping spawn order.
pub fn prune(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|obstacle| obstacle.right_edge() >= 0f32);
}
