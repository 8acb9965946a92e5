use crate::coords::Matrix4;

use super::{SensorId, SensorManager};

/// Scene transform node driven by a sensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformNode {
    pub name: String,
    pub matrix: Matrix4,
}

impl TransformNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matrix: Matrix4::identity(),
        }
    }
}

/// Copies a sensor's matrix into a transform node during update traversals.
///
/// Runs at most once per traversal number, with the same marker semantics as the
/// haptic render bin's frame guard. While disabled the node keeps its last matrix.
#[derive(Debug, Clone)]
pub struct SensorCallback {
    sensor: SensorId,
    enable: bool,
    previous_traversal: Option<u64>,
}

impl SensorCallback {
    pub fn new(sensor: SensorId) -> Self {
        Self {
            sensor,
            enable: true,
            previous_traversal: None,
        }
    }

    #[inline]
    pub fn set_enable(&mut self, flag: bool) {
        self.enable = flag;
    }

    #[inline]
    pub fn enable(&self) -> bool {
        self.enable
    }

    #[inline]
    pub fn sensor(&self) -> SensorId {
        self.sensor
    }

    /// Called by the update traversal. Returns whether `node` was written.
    pub fn update(
        &mut self,
        node: &mut TransformNode,
        traversal_number: u64,
        sensors: &SensorManager,
    ) -> bool {
        if !self.enable || self.previous_traversal == Some(traversal_number) {
            return false;
        }
        self.previous_traversal = Some(traversal_number);

        match sensors.matrix(self.sensor) {
            Some(m) => {
                node.matrix = m;
                true
            }
            None => {
                log::warn!("sensor callback on `{}`: unknown sensor {:?}", node.name, self.sensor);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::coords::Vec3;
    use crate::haptics::HapticRegistry;
    use crate::sensor::Sensor;

    /// Sensor whose matrix is whatever the test last set.
    struct Manual(Rc<Cell<f32>>);

    impl Sensor for Manual {
        fn name(&self) -> &str {
            "manual"
        }

        fn update(&mut self, _registry: &mut HapticRegistry) -> anyhow::Result<()> {
            Ok(())
        }

        fn matrix(&self) -> Matrix4 {
            Matrix4::translation(Vec3::new(self.0.get(), 0.0, 0.0))
        }
    }

    fn setup() -> (SensorManager, SensorId, Rc<Cell<f32>>) {
        let x = Rc::new(Cell::new(1.0));
        let mut mgr = SensorManager::new();
        let id = mgr.register(Manual(x.clone()));
        (mgr, id, x)
    }

    fn x_of(node: &TransformNode) -> f32 {
        node.matrix.get_translation().x
    }

    #[test]
    fn copies_once_per_traversal() {
        let (mgr, id, x) = setup();
        let mut cb = SensorCallback::new(id);
        let mut node = TransformNode::new("proxy");

        assert!(cb.update(&mut node, 5, &mgr));
        assert_eq!(x_of(&node), 1.0);

        x.set(2.0);
        assert!(!cb.update(&mut node, 5, &mgr));
        assert_eq!(x_of(&node), 1.0);

        assert!(cb.update(&mut node, 6, &mgr));
        assert_eq!(x_of(&node), 2.0);
    }

    #[test]
    fn traversal_zero_is_honored() {
        let (mgr, id, _) = setup();
        let mut cb = SensorCallback::new(id);
        let mut node = TransformNode::new("proxy");
        assert!(cb.update(&mut node, 0, &mgr));
    }

    #[test]
    fn disabled_callback_leaves_node_alone() {
        let (mgr, id, x) = setup();
        let mut cb = SensorCallback::new(id);
        let mut node = TransformNode::new("proxy");
        cb.update(&mut node, 1, &mgr);

        cb.set_enable(false);
        assert!(!cb.enable());
        x.set(9.0);
        assert!(!cb.update(&mut node, 2, &mgr));
        assert_eq!(x_of(&node), 1.0);

        // Re-enabled within the same traversal it still runs, since it never ran there.
        cb.set_enable(true);
        assert!(cb.update(&mut node, 2, &mgr));
        assert_eq!(x_of(&node), 9.0);
    }
}
