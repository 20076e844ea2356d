pub mod collision;
pub mod model;
pub mod obstacles;
pub mod physics;
pub mod rules;
pub mod session;
pub mod world;
