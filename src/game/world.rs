use crate::game::collision::{check_collision, Collision};
use crate::game::model::{Obstacle, Sprite};
use crate::game::obstacles::update_obstacles;
use crate::game::physics;
use crate::game::rules::GameRules;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    Continue,
    Collided(Collision),
}

/// Everything that changes during one play: sprite, obstacles, score and frame counter.
pub struct World {
    sprite: Sprite,
    obstacles: Vec<Obstacle>,
    score: u32,
    frames: u64,
    crashed: Option<Collision>,
    rules: GameRules,
    rng: StdRng,
}

impl World {
    pub fn new(rules: GameRules, seed: u64) -> World {
        World {
            sprite: Sprite::new(&rules),
            obstacles: Vec::new(),
            score: 0,
            frames: 0,
            crashed: None,
            rng: StdRng::seed_from_u64(seed),
            rules,
        }
    }

    /// Physics, obstacles, collision and scoring for one frame.
    /// A colliding frame stops there and neither counts nor scores. Once collided the world
    /// is frozen: later calls change nothing and report the same collision.
    pub fn update_frame(&mut self) -> FrameOutcome {
        if let Some(collision) = self.crashed {
            return FrameOutcome::Collided(collision);
        }
        physics::step(&mut self.sprite, &self.rules);
        update_obstacles(&mut self.obstacles, self.frames, &self.rules, &mut self.rng);

        if let Some(collision) = check_collision(&self.sprite, &self.obstacles, &self.rules) {
            self.crashed = Some(collision);
            return FrameOutcome::Collided(collision);
        }

        self.frames += 1;
        if self.frames % self.rules.score_interval == 0 {
            self.score += 1;
            log::debug!("frame {}: score {}", self.frames, self.score);
        }
        FrameOutcome::Continue
    }

    pub fn flap(&mut self) {
        physics::flap(&mut self.sprite, &self.rules);
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}
