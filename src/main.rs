//! Demo binary that drives the post-processing blend engine.

use std::path::PathBuf;
use std::time::Duration;

use postfx_blend::channel::{ChannelKind, ChannelValue};
use postfx_blend::cycler::PresetCycler;
use postfx_blend::engine::PostFxEngine;
use postfx_blend::options::BlendOptions;
use postfx_blend::preset;
use postfx_blend::store::EffectProfile;
use postfx_blend::util::frame_clock::FrameClock;

const FIXED_STEP: f32 = 1.0 / 60.0;

struct Args {
    options_path: Option<PathBuf>,
    realtime: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        options_path: None,
        realtime: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            args.realtime = true;
        } else if args.options_path.is_none() {
            args.options_path = Some(PathBuf::from(arg));
        } else {
            log::warn!("ignoring extra argument {arg}");
        }
    }
    args
}

fn log_state(engine: &PostFxEngine<EffectProfile>, t: f32) {
    let bloom = match engine.value(ChannelKind::Bloom) {
        Some(ChannelValue::Bloom { intensity, .. }) => intensity,
        _ => 0.0,
    };
    let vignette = match engine.value(ChannelKind::Vignette) {
        Some(ChannelValue::Vignette { intensity }) => intensity,
        _ => 0.0,
    };
    log::info!(
        "t={t:6.2}s bloom={bloom:.3} vignette={vignette:.3} active={:?}",
        engine.list_active_channels()
    );
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let options = match &args.options_path {
        Some(path) => match BlendOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => BlendOptions::default(),
    };

    let mut engine = PostFxEngine::new(EffectProfile::with_defaults());
    engine.add_preset_to_list(preset::warm_film());
    engine.add_preset_to_list(preset::cold_noir());
    engine.add_preset_to_list(preset::dream());
    options.install_presets(&mut engine);

    let mut cycler = PresetCycler::new(options.cycle.clone());
    cycler.start(&mut engine);
    cycler.set_auto_cycle(true);
    engine.apply_dof_focus(5.0, options.defaults);

    #[allow(clippy::cast_precision_loss)]
    let run_for = options.cycle.cycle_interval * engine.presets().len() as f32
        + options.cycle.transition_duration;

    let mut clock = FrameClock::new();
    let mut t = 0.0;
    let mut frame = 0_u64;
    while t < run_for {
        let dt = if args.realtime {
            std::thread::sleep(Duration::from_secs_f32(FIXED_STEP));
            clock.tick()
        } else {
            FIXED_STEP
        };
        t += dt;
        cycler.tick(&mut engine, dt);
        let _ = engine.tick(dt);

        if frame % 30 == 0 {
            log_state(&engine, t);
        }
        frame += 1;
    }

    if args.realtime {
        log::info!("finished at {:.1} fps", clock.fps());
    }
    log_state(&engine, t);
}
