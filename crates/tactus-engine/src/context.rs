use anyhow::Result;

use crate::haptics::{DeviceId, HapticDevice, HapticRegistry};
use crate::sensor::{DeviceSensor, SensorId, SensorManager};

/// Application-wide haptic state: devices, shapes and sensors.
///
/// Created at startup, passed to the main loop and to callback registration, shut down
/// at exit. Render bins never see the context itself, only the registry through
/// [`crate::render::RenderInfo`].
#[derive(Default)]
pub struct HapticContext {
    pub registry: HapticRegistry,
    pub sensors: SensorManager,
}

impl HapticContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a device together with a sensor tracking its proxy.
    pub fn add_tracked_device(&mut self, device: HapticDevice) -> (DeviceId, SensorId) {
        let id = self.registry.add_device(device);
        let sensor = self.sensors.register(DeviceSensor::new(id));
        (id, sensor)
    }

    /// Samples every sensor (and through them, every tracked device).
    pub fn update(&mut self) -> Result<()> {
        self.sensors.update(&mut self.registry)
    }

    /// Shuts down sensors, then any device they did not release.
    pub fn shutdown(&mut self) -> Result<()> {
        let sensors = self.sensors.shutdown(&mut self.registry);

        let mut devices = Ok(());
        for (id, device) in self.registry.devices_mut() {
            if let Err(err) = device.shutdown() {
                log::warn!("device {id:?} shutdown failed: {err:#}");
                if devices.is_ok() {
                    devices = Err(err);
                }
            }
        }

        sensors.and(devices)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::{Matrix4, Vec3};
    use crate::haptics::{DeviceDriver, DeviceSample, Shape};
    use crate::render::{
        DrawBin, Drawable, HapticRenderBin, Leaf, LeafId, RenderInfo, State,
    };
    use crate::sensor::{SensorCallback, TransformNode};
    use crate::time::FrameClock;

    struct Drifting {
        x: f32,
        shutdowns: Rc<Cell<u32>>,
    }

    impl DeviceDriver for Drifting {
        fn name(&self) -> &str {
            "drifting"
        }

        fn sample(&mut self) -> Result<DeviceSample> {
            self.x += 0.25;
            Ok(DeviceSample {
                position: Vec3::new(self.x, 0.0, 0.0),
                force: Vec3::new(0.0, 1.0, 0.0),
                orientation: Matrix4::identity(),
            })
        }

        fn shutdown(&mut self) -> Result<()> {
            self.shutdowns.set(self.shutdowns.get() + 1);
            Ok(())
        }
    }

    struct Count(Rc<Cell<u32>>);

    impl Drawable for Count {
        fn draw(&self, _info: &mut RenderInfo<'_>) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn sensor_and_bin_share_frame_semantics() {
        let shutdowns = Rc::new(Cell::new(0));
        let mut ctx = HapticContext::new();
        let (dev, sensor) = ctx.add_tracked_device(HapticDevice::new(Box::new(Drifting {
            x: 0.0,
            shutdowns: shutdowns.clone(),
        })));
        let shape = ctx.registry.add_shape(Shape::new("plane").with_device(dev));

        let renders = Rc::new(Cell::new(0));
        let mut bin = HapticRenderBin::new();
        bin.contents_mut()
            .add_leaf(Leaf::new(LeafId(0), Count(renders.clone())).with_shape(shape));

        let mut callback = SensorCallback::new(sensor);
        let mut proxy = TransformNode::new("proxy");
        let mut clock = FrameClock::new();

        for _ in 0..3 {
            let stamp = clock.tick();
            ctx.update().unwrap();

            // Update traversal and both stereo draws use the same frame number.
            for _eye in 0..2 {
                callback.update(&mut proxy, stamp.frame_number, &ctx.sensors);
                let mut state = State::new(stamp);
                let mut previous = None;
                bin.draw(&mut RenderInfo::new(&mut state, &ctx.registry), &mut previous);
            }
        }

        assert_eq!(renders.get(), 3);
        assert_eq!(proxy.matrix.get_translation(), Vec3::new(0.75, 0.0, 0.0));
        assert_eq!(ctx.registry.device(dev).unwrap().force(), Vec3::new(0.0, 1.0, 0.0));

        ctx.shutdown().unwrap();
        ctx.shutdown().unwrap();
        assert_eq!(shutdowns.get(), 1);
        assert!(ctx.update().is_ok(), "updates after shutdown are ignored");
    }
}
