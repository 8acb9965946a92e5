use anyhow::{Context, Result};

use crate::coords::{BoundingBox, Matrix4, Vec3};

use super::{DeviceDriver, DeviceError};

/// How normalized device positions map into the scene.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WorkspaceMode {
    /// Device coordinates are used as-is (the host maps them through the view).
    #[default]
    View,
    /// Device coordinates are stretched over the workspace bounding box.
    BoundingBox,
}

/// One physical or logical haptic device.
///
/// Holds the last sampled state in scene coordinates. The device is owned by the
/// registry; shapes reference it by [`super::DeviceId`] only.
pub struct HapticDevice {
    driver: Box<dyn DeviceDriver>,

    force: Vec3,
    proxy_position: Vec3,
    proxy_transform: Matrix4,

    workspace: BoundingBox,
    workspace_mode: WorkspaceMode,
    touch_workspace: Matrix4,

    shut_down: bool,
}

impl std::fmt::Debug for HapticDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HapticDevice")
            .field("driver", &self.driver.name())
            .field("force", &self.force)
            .field("proxy_position", &self.proxy_position)
            .field("workspace", &self.workspace)
            .field("workspace_mode", &self.workspace_mode)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

impl HapticDevice {
    pub fn new(driver: Box<dyn DeviceDriver>) -> Self {
        Self {
            driver,
            force: Vec3::zero(),
            proxy_position: Vec3::zero(),
            proxy_transform: Matrix4::identity(),
            workspace: BoundingBox::empty(),
            workspace_mode: WorkspaceMode::default(),
            touch_workspace: Matrix4::identity(),
            shut_down: false,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.driver.name()
    }

    /// Force currently rendered by the device, in scene coordinates.
    #[inline]
    pub fn force(&self) -> Vec3 {
        self.force
    }

    /// Position of the on-screen proxy, in scene coordinates.
    #[inline]
    pub fn proxy_position(&self) -> Vec3 {
        self.proxy_position
    }

    /// Full proxy transform (orientation + position), suitable for a transform node.
    #[inline]
    pub fn proxy_transform(&self) -> Matrix4 {
        self.proxy_transform
    }

    #[inline]
    pub fn workspace(&self) -> BoundingBox {
        self.workspace
    }

    #[inline]
    pub fn workspace_mode(&self) -> WorkspaceMode {
        self.workspace_mode
    }

    #[inline]
    pub fn touch_workspace_matrix(&self) -> Matrix4 {
        self.touch_workspace
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Sets the haptic workspace and switches to [`WorkspaceMode::BoundingBox`].
    pub fn set_workspace(&mut self, min: Vec3, max: Vec3) -> Result<(), DeviceError> {
        let workspace = BoundingBox::new(min, max);
        if !workspace.is_valid() {
            return Err(DeviceError::InvalidWorkspace { name: self.name().to_string() });
        }
        self.workspace = workspace;
        self.workspace_mode = WorkspaceMode::BoundingBox;
        Ok(())
    }

    #[inline]
    pub fn set_workspace_mode(&mut self, mode: WorkspaceMode) {
        self.workspace_mode = mode;
    }

    /// Extra transform applied after workspace mapping.
    ///
    /// Scales, rotates and moves both the proxy and the rendered forces.
    #[inline]
    pub fn set_touch_workspace_matrix(&mut self, m: Matrix4) {
        self.touch_workspace = m;
    }

    /// Samples the driver and refreshes force and proxy state.
    pub fn update(&mut self) -> Result<()> {
        if self.shut_down {
            return Err(DeviceError::ShutDown(self.name().to_string()).into());
        }

        let sample = self
            .driver
            .sample()
            .with_context(|| format!("failed to sample haptic device `{}`", self.driver.name()))?;

        let local = self.map_to_workspace(sample.position);
        self.proxy_position = self.touch_workspace.transform_point(local);
        self.force = self.touch_workspace.transform_vector(sample.force);

        let mut transform = sample.orientation;
        transform.set_translation(self.proxy_position);
        self.proxy_transform = transform;

        Ok(())
    }

    /// Releases the driver. Further updates fail; repeated calls are no-ops.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;
        self.force = Vec3::zero();
        self.driver
            .shutdown()
            .with_context(|| format!("failed to shut down haptic device `{}`", self.driver.name()))
    }

    fn map_to_workspace(&self, p: Vec3) -> Vec3 {
        match self.workspace_mode {
            WorkspaceMode::BoundingBox if self.workspace.is_valid() => {
                let half = self.workspace.size() * 0.5;
                let c = self.workspace.center();
                Vec3::new(c.x + p.x * half.x, c.y + p.y * half.y, c.z + p.z * half.z)
            }
            _ => p,
        }
    }
}
