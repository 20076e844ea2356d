mod control;
mod info;
mod game;

pub use control::ControlWindow;
pub use info::InfoWindow;
pub use game::GameWindow;

use quicksilver::geom::{Rectangle, Vector};
use quicksilver::graphics::Color;
use quicksilver::Result;

/// The 2D drawing operations the windows need.
pub trait Surface {
    fn clear(&mut self, color: Color) -> Result<()>;

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<()>;

    /// Skipped while the sprite image is not available.
    fn draw_sprite(&mut self, rect: Rectangle) -> Result<()>;

    fn sprite_ready(&mut self) -> bool;

    /// `pos` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, pos: Vector, size: f32, color: Color) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// x, y, width, height
    pub type Bounds = (f32, f32, f32, f32);

    pub fn bounds(rect: &Rectangle) -> Bounds {
        (rect.pos.x, rect.pos.y, rect.size.x, rect.size.y)
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(Color),
        FillRect(Bounds, Color),
        Sprite(Bounds),
        Text(String, (f32, f32), f32, Color),
    }

    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub sprite_loaded: bool,
    }

    impl RecordingSurface {
        pub fn new(sprite_loaded: bool) -> Self {
            RecordingSurface { ops: Vec::new(), sprite_loaded }
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops.iter()
                .filter_map(|op| match op {
                    Op::Text(text, ..) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) -> Result<()> {
            self.ops.push(Op::Clear(color));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<()> {
            self.ops.push(Op::FillRect(bounds(&rect), color));
            Ok(())
        }

        fn draw_sprite(&mut self, rect: Rectangle) -> Result<()> {
            if self.sprite_loaded {
                self.ops.push(Op::Sprite(bounds(&rect)));
            }
            Ok(())
        }

        fn sprite_ready(&mut self) -> bool {
            self.sprite_loaded
        }

        fn draw_text(&mut self, text: &str, pos: Vector, size: f32, color: Color) -> Result<()> {
            self.ops.push(Op::Text(text.to_string(), (pos.x, pos.y), size, color));
            Ok(())
        }
    }
}
