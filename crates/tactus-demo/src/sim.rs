//! Simulated haptic hardware for running without a device attached.

use anyhow::Result;
use tactus_engine::coords::{Matrix4, Vec3};
use tactus_engine::haptics::{DeviceDriver, DeviceSample};

/// Stylus sweeping a circle through a virtual sphere at the device origin.
///
/// Inside the sphere a penalty spring pushes the stylus back to the surface.
pub struct SimulatedDriver {
    name: String,
    phase: f32,
    step: f32,
    sphere_radius: f32,
    stiffness: f32,
}

impl SimulatedDriver {
    pub fn new(name: impl Into<String>, sphere_radius: f32) -> Self {
        Self {
            name: name.into(),
            phase: 0.0,
            step: 0.15,
            sphere_radius,
            stiffness: 2.0,
        }
    }

    fn stylus_position(&self) -> Vec3 {
        // Ellipse dipping in and out of the sphere.
        Vec3::new(0.8 * self.phase.cos(), 0.3 * self.phase.sin(), 0.1)
    }
}

impl DeviceDriver for SimulatedDriver {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample(&mut self) -> Result<DeviceSample> {
        self.phase += self.step;

        let position = self.stylus_position();
        let depth = self.sphere_radius - position.length();
        let force = if depth > 0.0 {
            position.normalized() * (depth * self.stiffness)
        } else {
            Vec3::zero()
        };

        Ok(DeviceSample {
            position,
            force,
            orientation: Matrix4::identity(),
        })
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("simulated device `{}` released", self.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_pushes_out_of_the_sphere() {
        let mut d = SimulatedDriver::new("sim", 10.0);
        let s = d.sample().unwrap();
        assert!(s.force.length() > 0.0);
        assert!(s.force.dot(s.position) > 0.0);
    }

    #[test]
    fn no_force_outside() {
        let mut d = SimulatedDriver::new("sim", 0.01);
        let s = d.sample().unwrap();
        assert_eq!(s.force, Vec3::zero());
    }
}
