use std::error::Error;
use std::fmt::{self, Display};

/// Every tuning value of the game. `Default` is the beginner friendly reference tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRules {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub sprite_start_x: f32,
    pub sprite_start_y: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub gravity: f32,
    /// Velocity assigned on every flap, negative is upward.
    pub lift: f32,
    pub flap_damping: f32,
    pub max_fall_speed: f32,
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    pub obstacle_top_min: f32,
    /// Exclusive.
    pub obstacle_top_max: f32,
    pub spawn_interval: u64,
    /// Kept equal to `spawn_interval` by default so one point is scored per spawned obstacle.
    pub score_interval: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            canvas_width: 400f32,
            canvas_height: 600f32,
            sprite_start_x: 50f32,
            sprite_start_y: 150f32,
            sprite_width: 40f32,
            sprite_height: 40f32,
            gravity: 0.25f32,
            lift: -5.5f32,
            flap_damping: 0.94f32,
            max_fall_speed: 5f32,
            obstacle_speed: 1.2f32,
            obstacle_width: 55f32,
            obstacle_gap: 150f32,
            obstacle_top_min: 60f32,
            obstacle_top_max: 240f32,
            spawn_interval: 130,
            score_interval: 130,
        }
    }
}

impl GameRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if !(self.canvas_width > 0f32 && self.canvas_height > 0f32) {
            return Err(RulesError::EmptyCanvas);
        }
        if !(self.sprite_width > 0f32 && self.sprite_height > 0f32) {
            return Err(RulesError::EmptySprite);
        }
        if self.spawn_interval == 0 {
            return Err(RulesError::ZeroInterval("spawn"));
        }
        if self.score_interval == 0 {
            return Err(RulesError::ZeroInterval("score"));
        }
        if !(self.flap_damping > 0f32) {
            return Err(RulesError::NonPositive("flap damping"));
        }
        if !(self.max_fall_speed > 0f32) {
            return Err(RulesError::NonPositive("max fall speed"));
        }
        if !(self.obstacle_width > 0f32) {
            return Err(RulesError::NonPositive("obstacle width"));
        }
        if self.obstacle_gap < 0f32 {
            return Err(RulesError::NegativeGap);
        }
        if !(self.obstacle_top_min >= 0f32 && self.obstacle_top_min < self.obstacle_top_max) {
            return Err(RulesError::InvalidTopRange {
                min: self.obstacle_top_min,
                max: self.obstacle_top_max,
            });
        }
        if self.obstacle_top_max + self.obstacle_gap > self.canvas_height {
            return Err(RulesError::GapDoesNotFit {
                top_max: self.obstacle_top_max,
                gap: self.obstacle_gap,
                canvas_height: self.canvas_height,
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum RulesError {
    EmptyCanvas,
    EmptySprite,
    ZeroInterval(&'static str),
    NonPositive(&'static str),
    NegativeGap,
    InvalidTopRange { min: f32, max: f32 },
    GapDoesNotFit { top_max: f32, gap: f32, canvas_height: f32 },
}

impl Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::EmptyCanvas => write!(f, "canvas must have a positive size"),
            RulesError::EmptySprite => write!(f, "sprite must have a positive size"),
            RulesError::ZeroInterval(name) => write!(f, "{} interval must be at least one frame", name),
            RulesError::NonPositive(name) => write!(f, "{} must be positive", name),
            RulesError::NegativeGap => write!(f, "obstacle gap must not be negative"),
            RulesError::InvalidTopRange { min, max } => {
                write!(f, "obstacle top range [{}, {}) is empty or negative", min, max)
            }
            RulesError::GapDoesNotFit { top_max, gap, canvas_height } => write!(
                f,
                "obstacle top {} plus gap {} exceeds canvas height {}",
                top_max, gap, canvas_height
            ),
        }
    }
}

impl Error for RulesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        assert_eq!(GameRules::default().validate(), Ok(()));
    }

    #[test]
    fn default_intervals_match_but_are_separate() {
        let rules = GameRules::default();
        assert_eq!(rules.spawn_interval, rules.score_interval);

        let rules = GameRules { score_interval: 60, ..GameRules::default() };
        assert_eq!(rules.validate(), Ok(()));
    }

    #[test]
    fn zero_spawn_interval_rejected() {
        let rules = GameRules { spawn_interval: 0, ..GameRules::default() };
        assert_eq!(rules.validate(), Err(RulesError::ZeroInterval("spawn")));
    }

    #[test]
    fn inverted_top_range_rejected() {
        let rules = GameRules { obstacle_top_min: 240.0, obstacle_top_max: 60.0, ..GameRules::default() };
        assert_eq!(rules.validate(), Err(RulesError::InvalidTopRange { min: 240.0, max: 60.0 }));
    }

    #[test]
    fn gap_larger_than_canvas_rejected() {
        let rules = GameRules { obstacle_gap: 400.0, ..GameRules::default() };
        assert!(matches!(rules.validate(), Err(RulesError::GapDoesNotFit { .. })));
    }

    #[test]
    fn error_message_names_the_problem() {
        let message = RulesError::ZeroInterval("score").to_string();
        assert_eq!(message, "score interval must be at least one frame");
    }
}
