use crate::game::rules::GameRules;
use crate::game::world::{FrameOutcome, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    NotStarted,
    Running,
    /// The crashed world stays visible until the next press.
    Over { final_score: u32 },
}

/// Sounds the driver should play in response to a press or a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cue {
    Flap,
    Hit,
}

/// Score and lifecycle controller. Owns the current world and replaces it wholesale on reset.
pub struct Session {
    phase: Phase,
    world: World,
    rules: GameRules,
    seeds: StdRng,
}

impl Session {
    pub fn new(rules: GameRules, seed: u64) -> Session {
        let mut seeds = StdRng::seed_from_u64(seed);
        let world = World::new(rules.clone(), seeds.gen());
        Session { phase: Phase::NotStarted, world, rules, seeds }
    }

    pub fn from_entropy(rules: GameRules) -> Session {
        Session::new(rules, rand::random())
    }

    /// Key press or tap.
    pub fn press(&mut self) -> Option<Cue> {
        match self.phase {
            Phase::NotStarted => {
                log::info!("game started");
                self.phase = Phase::Running;
                self.world.flap();
                Some(Cue::Flap)
            }
            Phase::Running => {
                self.world.flap();
                Some(Cue::Flap)
            }
            Phase::Over { .. } => {
                self.reset();
                None
            }
        }
    }

    /// One frame. Does nothing unless running.
    pub fn tick(&mut self) -> Option<Cue> {
        if self.phase != Phase::Running {
            return None;
        }
        match self.world.update_frame() {
            FrameOutcome::Continue => None,
            FrameOutcome::Collided(collision) => {
                let final_score = self.world.score();
                log::info!("game over at frame {} after {:?}, score {}", self.world.frames(), collision, final_score);
                self.phase = Phase::Over { final_score };
                Some(Cue::Hit)
            }
        }
    }

    pub fn reset(&mut self) {
        self.world = World::new(self.rules.clone(), self.seeds.gen());
        self.phase = Phase::NotStarted;
        log::info!("game reset");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
