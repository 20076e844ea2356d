use quicksilver::geom::{Rectangle, Vector};
use quicksilver::graphics::{Background::{Col, Img}, Color, Font, FontStyle, Image};
use quicksilver::lifecycle::{Asset, Window};
use quicksilver::sound::Sound;
use quicksilver::Result;

use crate::gui::Surface;

/// File names under quicksilver's `static/` directory.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub sprite: String,
    pub flap_sound: String,
    pub hit_sound: String,
    pub font: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            sprite: "friend.png".to_string(),
            flap_sound: "flap.wav".to_string(),
            hit_sound: "hit.wav".to_string(),
            font: "font.ttf".to_string(),
        }
    }
}

/// An asset that may still be loading or may have failed. A failed load is reported once
/// and the asset behaves as permanently absent afterwards.
pub enum Loadable<T> {
    Pending(&'static str, Asset<T>),
    Failed,
}

impl<T> Loadable<T> {
    pub fn new(name: &'static str, asset: Asset<T>) -> Self {
        Loadable::Pending(name, asset)
    }

    /// Runs `action` if the asset has finished loading. Returns whether it ran.
    pub fn with(&mut self, action: impl FnOnce(&mut T) -> Result<()>) -> Result<bool> {
        let (name, asset) = match self {
            Loadable::Pending(name, asset) => (*name, asset),
            Loadable::Failed => return Ok(false),
        };
        let mut ran = false;
        let mut action_result = Ok(());
        let loaded = asset.execute(|value| {
            ran = true;
            action_result = action(value);
            Ok(())
        });
        if let Err(error) = loaded {
            log::error!("failed to load {}: {:?}", name, error);
            *self = Loadable::Failed;
            return Ok(false);
        }
        action_result.map(|_| ran)
    }
}

pub struct Assets {
    sprite: Loadable<Image>,
    flap_sound: Loadable<Sound>,
    hit_sound: Loadable<Sound>,
    font: Loadable<Font>,
}

impl Assets {
    pub fn load(paths: &AssetPaths) -> Assets {
        Assets {
            sprite: Loadable::new("sprite image", Asset::new(Image::load(paths.sprite.clone()))),
            flap_sound: Loadable::new("flap sound", Asset::new(Sound::load(paths.flap_sound.clone()))),
            hit_sound: Loadable::new("hit sound", Asset::new(Sound::load(paths.hit_sound.clone()))),
            font: Loadable::new("font", Asset::new(Font::load(paths.font.clone()))),
        }
    }

    pub fn play_flap(&mut self) {
        play(&mut self.flap_sound);
    }

    pub fn play_hit(&mut self) {
        play(&mut self.hit_sound);
    }

    pub fn surface<'a>(&'a mut self, window: &'a mut Window) -> WindowSurface<'a> {
        WindowSurface { window, assets: self }
    }
}

// Sound is cosmetic, playback problems are logged and dropped.
fn play(sound: &mut Loadable<Sound>) {
    match sound.with(|sound| sound.play()) {
        Ok(true) => {}
        Ok(false) => log::debug!("sound not ready, skipped"),
        Err(error) => log::warn!("sound playback failed: {:?}", error),
    }
}

/// The game window as a drawing surface backed by the loaded assets.
pub struct WindowSurface<'a> {
    window: &'a mut Window,
    assets: &'a mut Assets,
}

impl<'a> Surface for WindowSurface<'a> {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.window.clear(color)
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<()> {
        self.window.draw(&rect, Col(color));
        Ok(())
    }

    fn draw_sprite(&mut self, rect: Rectangle) -> Result<()> {
        let window = &mut *self.window;
        self.assets.sprite.with(|image| {
            window.draw(&rect, Img(image));
            Ok(())
        })?;
        Ok(())
    }

    fn sprite_ready(&mut self) -> bool {
        match self.assets.sprite.with(|_| Ok(())) {
            Ok(ready) => ready,
            Err(_) => false,
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vector, size: f32, color: Color) -> Result<()> {
        let window = &mut *self.window;
        self.assets.font.with(|font| {
            let rendered = font.render(text, &FontStyle::new(size, color))?;
            let top_left = Vector::new(pos.x, pos.y - size);
            window.draw(&Rectangle::new(top_left, rendered.area().size), Img(&rendered));
            Ok(())
        })?;
        Ok(())
    }
}
