//! Demo scene: a sphere and a floor felt through one device, plus visual-only parts.

use std::cell::Cell;
use std::rc::Rc;

use tactus_engine::HapticContext;
use tactus_engine::coords::Vec3;
use tactus_engine::haptics::{DeviceId, Shape};
use tactus_engine::render::{
    BinNumber, Drawable, HapticRenderBin, Leaf, LeafId, RenderBin, RenderInfo, StateGraph,
    StateSet,
};

/// Geometry that logs and counts every draw it receives.
///
/// For haptic leaves each draw stands for one haptic shape update.
pub struct Surface {
    name: &'static str,
    draws: Rc<Cell<u64>>,
}

impl Surface {
    fn new(name: &'static str) -> (Self, Rc<Cell<u64>>) {
        let draws = Rc::new(Cell::new(0));
        (Self { name, draws: draws.clone() }, draws)
    }
}

impl Drawable for Surface {
    fn draw(&self, info: &mut RenderInfo<'_>) {
        self.draws.set(self.draws.get() + 1);
        log::trace!(
            "frame {}: draw `{}` (state depth {})",
            info.state().frame_stamp().frame_number,
            self.name,
            info.state().state_set_stack_size(),
        );
    }
}

/// Line from the proxy along the rendered force.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ForceVector {
    pub start: Vec3,
    pub end: Vec3,
}

impl ForceVector {
    pub fn set(&mut self, proxy: Vec3, force: Vec3) {
        self.start = proxy;
        self.end = proxy + force.normalized() * force.length();
    }

    pub fn magnitude(&self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Draw counters the demo reports at exit.
pub struct SceneCounters {
    pub sphere_haptic: Rc<Cell<u64>>,
    pub floor_haptic: Rc<Cell<u64>>,
    pub visual: Rc<Cell<u64>>,
}

/// Builds the root bin.
///
/// ```text
/// root (plain)
/// ├── bin -1: background (plain)
/// ├── leaf: sphere, visual pass
/// └── bin  1: haptic
///     ├── leaf: sphere, haptic pass
///     ├── leaf: sphere, outline pass  (same shape, suppressed)
///     └── state graph "lit": floor, decal
/// ```
pub fn build(ctx: &mut HapticContext, device: DeviceId) -> (RenderBin, SceneCounters) {
    let sphere = ctx.registry.add_shape(Shape::new("sphere").with_device(device));
    let floor = ctx.registry.add_shape(Shape::new("floor").with_device(device));
    let decal = ctx.registry.add_shape(Shape::new("decal"));

    let (background, visual) = Surface::new("background");
    let mut pre = RenderBin::new();
    pre.contents_mut().add_leaf(Leaf::new(LeafId(0), background));

    let sphere_visual = Surface {
        name: "sphere/visual",
        draws: visual.clone(),
    };
    let (sphere_haptic, sphere_draws) = Surface::new("sphere/haptic");
    let sphere_outline = Surface {
        name: "sphere/outline",
        draws: sphere_draws.clone(),
    };
    let (floor_surface, floor_draws) = Surface::new("floor");
    let (decal_surface, _) = Surface::new("decal");

    let mut haptic = HapticRenderBin::new();
    {
        let contents = haptic.contents_mut();
        contents.set_state_set(Some(StateSet::new("haptic")));
        contents.add_leaf(Leaf::new(LeafId(2), sphere_haptic).with_shape(sphere));
        contents.add_leaf(
            Leaf::new(LeafId(3), sphere_outline)
                .with_shape(sphere)
                .with_state(StateSet::new("wireframe")),
        );
        contents.add_state_graph(
            StateGraph::new()
                .with_leaf(
                    Leaf::new(LeafId(4), floor_surface)
                        .with_shape(floor)
                        .with_state(StateSet::new("lit")),
                )
                .with_leaf(
                    Leaf::new(LeafId(5), decal_surface)
                        .with_shape(decal)
                        .with_state(StateSet::new("lit")),
                ),
        );
    }

    let mut root = RenderBin::new();
    root.contents_mut().add_bin(BinNumber(-1), pre);
    root.contents_mut().add_leaf(Leaf::new(LeafId(1), sphere_visual));
    root.contents_mut().add_bin(BinNumber(1), haptic);

    let counters = SceneCounters {
        sphere_haptic: sphere_draws,
        floor_haptic: floor_draws,
        visual,
    };
    (root, counters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_vector_spans_the_force() {
        let mut v = ForceVector::default();
        v.set(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(v.start, Vec3::new(1.0, 0.0, 0.0));
        assert!((v.magnitude() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn zero_force_collapses_to_the_proxy() {
        let mut v = ForceVector::default();
        v.set(Vec3::new(1.0, 2.0, 3.0), Vec3::zero());
        assert_eq!(v.start, v.end);
    }
}
