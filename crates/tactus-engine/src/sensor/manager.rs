use anyhow::Result;

use crate::coords::Matrix4;
use crate::haptics::HapticRegistry;

use super::Sensor;

/// Handle to a sensor registered with a [`SensorManager`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SensorId(u32);

/// Owns every sensor of an application and updates them once per frame.
///
/// Explicitly constructed and passed around; there is no process-wide instance.
#[derive(Default)]
pub struct SensorManager {
    sensors: Vec<Box<dyn Sensor>>,
    shut_down: bool,
}

impl SensorManager {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sensor: impl Sensor + 'static) -> SensorId {
        let id = SensorId(self.sensors.len() as u32);
        log::debug!("registered sensor `{}` as {:?}", sensor.name(), id);
        self.sensors.push(Box::new(sensor));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn sensor(&self, id: SensorId) -> Option<&dyn Sensor> {
        self.sensors.get(id.0 as usize).map(|s| s.as_ref())
    }

    /// Latest matrix of a sensor, if it exists.
    pub fn matrix(&self, id: SensorId) -> Option<Matrix4> {
        self.sensor(id).map(Sensor::matrix)
    }

    /// Updates every sensor.
    ///
    /// All sensors are updated even if one fails; the first error is returned.
    pub fn update(&mut self, registry: &mut HapticRegistry) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }

        let mut first_err = None;
        for sensor in &mut self.sensors {
            if let Err(err) = sensor.update(registry) {
                log::warn!("sensor `{}` update failed: {err:#}", sensor.name());
                first_err.get_or_insert(err);
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Shuts every sensor down. Later calls (and updates) are no-ops.
    pub fn shutdown(&mut self, registry: &mut HapticRegistry) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;

        let mut first_err = None;
        for sensor in &mut self.sensors {
            if let Err(err) = sensor.shutdown(registry) {
                log::warn!("sensor `{}` shutdown failed: {err:#}", sensor.name());
                first_err.get_or_insert(err);
            }
        }
        log::info!("sensor manager shut down ({} sensors)", self.sensors.len());

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}
