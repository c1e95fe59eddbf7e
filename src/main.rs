//! Junk Blaster entry point
//!
//! Loads settings and assets, then runs the frame loop. The native build
//! ships window-less backends and plays a scripted demo round.

use std::process::ExitCode;

use junk_blaster::assets::{AssetManifest, Assets, FsAssetLoader};
use junk_blaster::headless::{HeadlessAudio, HeadlessRenderer, ScriptedInput};
use junk_blaster::platform::SystemClock;
use junk_blaster::{Session, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Junk Blaster starting...");

    let settings = Settings::load();

    let mut loader = FsAssetLoader::new();
    let assets = match Assets::load(&mut loader, &AssetManifest::default(), &settings.asset_dir) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(
        settings,
        HeadlessRenderer::with_assets(assets),
        HeadlessAudio::default(),
        ScriptedInput::demo(),
        SystemClock,
    );
    session.run();

    let board = session.state().scoreboard;
    log::info!("Final score {}, health {}", board.score, board.health);
    ExitCode::SUCCESS
}
