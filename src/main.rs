mod assets;
mod game;
mod gui;

use quicksilver::{
    geom::Vector,
    lifecycle::{run, Event, Settings, State, Window},
    Error,
    Result,
};
use crate::assets::{AssetPaths, Assets};
use crate::game::rules::GameRules;
use crate::game::session::{Cue, Session};
use crate::gui::{ControlWindow, GameWindow, InfoWindow};

const FRAMES_PER_SECOND: f64 = 60.0;

struct PhotoFlap {
    session: Session,
    assets: Assets,
    game_window: GameWindow,
    info_window: InfoWindow,
    control_window: ControlWindow,
}

impl PhotoFlap {
    fn play(&mut self, cue: Option<Cue>) {
        match cue {
            Some(Cue::Flap) => self.assets.play_flap(),
            Some(Cue::Hit) => self.assets.play_hit(),
            None => {}
        }
    }
}

impl State for PhotoFlap {
    fn new() -> Result<Self> {
        let rules = GameRules::default();
        rules.validate().map_err(|error| Error::ContextError(error.to_string()))?;

        let assets = Assets::load(&AssetPaths::default());
        let session = Session::from_entropy(rules);

        let game_window = GameWindow::default();
        let info_window = InfoWindow::default();
        let control_window = ControlWindow;

        Ok(Self { session, assets, game_window, info_window, control_window })
    }

    fn event(&mut self, event: &Event, _window: &mut Window) -> Result<()> {
        if self.control_window.is_press(event) {
            let cue = self.session.press();
            self.play(cue);
        }
        Ok(())
    }

    fn update(&mut self, _window: &mut Window) -> Result<()> {
        let cue = self.session.tick();
        self.play(cue);
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        let world = self.session.world();
        let mut surface = self.assets.surface(window);
        self.game_window.draw(world, &mut surface)?;
        self.info_window.draw(self.session.phase(), world.rules(), &mut surface)
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let rules = GameRules::default();
    let settings = Settings {
        update_rate: 1000.0 / FRAMES_PER_SECOND,
        ..Default::default()
    };
    log::info!("starting on a {}x{} canvas", rules.canvas_width, rules.canvas_height);
    run::<PhotoFlap>("PhotoFlap", Vector::new(rules.canvas_width, rules.canvas_height), settings);
}
