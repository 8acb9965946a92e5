mod scene;
mod sim;

use anyhow::{Context, Result};
use tactus_engine::HapticContext;
use tactus_engine::coords::{Matrix4, Vec3};
use tactus_engine::haptics::HapticDevice;
use tactus_engine::logging::{init_logging, LoggingConfig};
use tactus_engine::render::{DrawBin, RenderInfo, State, StateSet};
use tactus_engine::sensor::{SensorCallback, TransformNode};
use tactus_engine::time::FrameClock;

use scene::ForceVector;
use sim::SimulatedDriver;

/// Demo settings.
///
/// `frames` can be overridden with `TACTUS_FRAMES`.
#[derive(Debug, Clone)]
struct DemoConfig {
    frames: u64,
    /// Draw every frame twice (left/right eye).
    stereo: bool,
    sphere_radius: f32,
    workspace_min: Vec3,
    workspace_max: Vec3,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            stereo: true,
            sphere_radius: 0.5,
            workspace_min: Vec3::new(-2.0, -1.0, -1.0),
            workspace_max: Vec3::new(2.0, 1.0, 1.0),
        }
    }
}

impl DemoConfig {
    fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(frames) = std::env::var("TACTUS_FRAMES") {
            config.frames = frames
                .parse()
                .with_context(|| format!("TACTUS_FRAMES must be a frame count, got `{frames}`"))?;
        }
        Ok(config)
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    // One top-level handler, as the frame loop has no recovery path of its own.
    if let Err(err) = DemoConfig::from_env().and_then(run) {
        log::error!("tactus demo failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: DemoConfig) -> Result<()> {
    log::info!("starting haptic demo: {config:?}");

    let mut ctx = HapticContext::new();
    let (device, sensor) = ctx.add_tracked_device(HapticDevice::new(Box::new(
        SimulatedDriver::new("simulated-stylus", config.sphere_radius),
    )));
    {
        let d = ctx.registry.device_mut(device)?;
        d.set_workspace(config.workspace_min, config.workspace_max)?;
        d.set_touch_workspace_matrix(Matrix4::identity());
    }

    let (mut root, counters) = scene::build(&mut ctx, device);

    let mut proxy = TransformNode::new("proxy");
    let mut proxy_callback = SensorCallback::new(sensor);
    let mut force_vector = ForceVector::default();

    let mut clock = FrameClock::new();
    let camera = StateSet::new("camera");
    let mut state = State::default();

    let eyes = if config.stereo { 2 } else { 1 };

    for _ in 0..config.frames {
        let stamp = clock.tick();

        ctx.update().context("sensor update failed")?;
        proxy_callback.update(&mut proxy, stamp.frame_number, &ctx.sensors);

        let d = ctx.registry.device(device)?;
        force_vector.set(d.proxy_position(), d.force());

        state.set_frame_stamp(stamp);
        for _eye in 0..eyes {
            state.pop_all_state_sets();
            state.push_state_set(camera.clone());
            let mut previous = None;
            root.draw(&mut RenderInfo::new(&mut state, &ctx.registry), &mut previous);
        }

        if force_vector.magnitude() > 0.0 {
            log::debug!(
                "frame {}: proxy {:?}, force {:.3}",
                stamp.frame_number,
                proxy.matrix.get_translation(),
                force_vector.magnitude(),
            );
        }
    }

    log::info!(
        "{} frames, {} draw calls: visual {}, sphere haptic {}, floor haptic {}",
        config.frames,
        state.draw_calls(),
        counters.visual.get(),
        counters.sphere_haptic.get(),
        counters.floor_haptic.get(),
    );

    ctx.shutdown().context("haptic shutdown failed")?;
    Ok(())
}
