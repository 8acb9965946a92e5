use crate::haptics::ShapeId;

use super::{RenderInfo, StateSet};

/// Host-assigned identity of a render leaf.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LeafId(pub u32);

/// Trace of the previously drawn leaf, handed to the next one.
///
/// The host uses it for state-stack deltas: a leaf pops what the previous one pushed
/// before pushing its own state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawnLeaf {
    pub id: LeafId,
    /// Length of the leaf's state-graph path, counting the shared root set.
    pub state_depth: usize,
}

impl DrawnLeaf {
    /// Number of state sets the host counts for this leaf's state-graph path.
    #[inline]
    pub fn num_to_pop(self) -> usize {
        self.state_depth
    }
}

/// One resolved (drawable, state) unit produced by the host's cull traversal.
pub trait RenderLeaf {
    fn id(&self) -> LeafId;

    /// Haptic shape attached to this leaf's geometry, resolved by the host.
    fn shape(&self) -> Option<ShapeId> {
        None
    }

    /// See [`DrawnLeaf::state_depth`].
    fn state_depth(&self) -> usize;

    /// Applies the leaf's state (relative to `previous`) and draws it.
    fn render(&self, info: &mut RenderInfo<'_>, previous: Option<DrawnLeaf>);

    fn as_drawn(&self) -> DrawnLeaf {
        DrawnLeaf {
            id: self.id(),
            state_depth: self.state_depth(),
        }
    }
}

/// Host drawable: the part of a leaf that issues the actual draw.
pub trait Drawable {
    fn draw(&self, info: &mut RenderInfo<'_>);
}

/// Default host leaf: a drawable plus the state sets of its state-graph path.
///
/// `state_path` excludes the shared root set; [`RenderLeaf::state_depth`] adds it back.
pub struct Leaf<D> {
    id: LeafId,
    shape: Option<ShapeId>,
    state_path: Vec<StateSet>,
    drawable: D,
}

impl<D: Drawable> Leaf<D> {
    pub fn new(id: LeafId, drawable: D) -> Self {
        Self {
            id,
            shape: None,
            state_path: Vec::new(),
            drawable,
        }
    }

    #[inline]
    pub fn with_shape(mut self, shape: ShapeId) -> Self {
        self.shape = Some(shape);
        self
    }

    #[inline]
    pub fn with_state(mut self, set: StateSet) -> Self {
        self.state_path.push(set);
        self
    }

    #[inline]
    pub fn drawable(&self) -> &D {
        &self.drawable
    }
}

impl<D: Drawable> RenderLeaf for Leaf<D> {
    #[inline]
    fn id(&self) -> LeafId {
        self.id
    }

    #[inline]
    fn shape(&self) -> Option<ShapeId> {
        self.shape
    }

    #[inline]
    fn state_depth(&self) -> usize {
        self.state_path.len() + 1
    }

    fn render(&self, info: &mut RenderInfo<'_>, previous: Option<DrawnLeaf>) {
        let state = info.state_mut();

        // The root set is shared by every leaf and never popped here.
        let pop = previous.map_or(0, |p| p.num_to_pop().saturating_sub(1));
        state.pop_state_sets(pop);
        for set in &self.state_path {
            state.push_state_set(set.clone());
        }
        state.record_draw();

        self.drawable.draw(info);
    }
}

/// Leaves bucketed by shared render state (coarse-grained ordering).
#[derive(Default)]
pub struct StateGraph {
    leaves: Vec<Box<dyn RenderLeaf>>,
}

impl StateGraph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_leaf(&mut self, leaf: impl RenderLeaf + 'static) {
        self.leaves.push(Box::new(leaf));
    }

    #[inline]
    pub fn with_leaf(mut self, leaf: impl RenderLeaf + 'static) -> Self {
        self.add_leaf(leaf);
        self
    }

    #[inline]
    pub fn leaves(&self) -> &[Box<dyn RenderLeaf>] {
        &self.leaves
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::haptics::HapticRegistry;
    use crate::render::State;

    struct Probe(Rc<Cell<usize>>);

    impl Drawable for Probe {
        fn draw(&self, info: &mut RenderInfo<'_>) {
            self.0.set(info.state().state_set_stack_size());
        }
    }

    #[test]
    fn render_replaces_previous_leaf_state() {
        let registry = HapticRegistry::new();
        let mut state = State::default();
        state.push_state_set(StateSet::new("root"));

        let depth = Rc::new(Cell::new(0));
        let a = Leaf::new(LeafId(0), Probe(depth.clone()))
            .with_state(StateSet::new("lit"))
            .with_state(StateSet::new("textured"));
        let b = Leaf::new(LeafId(1), Probe(depth.clone())).with_state(StateSet::new("wire"));

        let mut info = RenderInfo::new(&mut state, &registry);
        a.render(&mut info, None);
        assert_eq!(depth.get(), 3);
        b.render(&mut info, Some(a.as_drawn()));
        assert_eq!(depth.get(), 2);

        let names: Vec<_> = state.state_sets().iter().map(StateSet::name).collect();
        assert_eq!(names, ["root", "wire"]);
        assert_eq!(state.draw_calls(), 2);
    }

    #[test]
    fn drawn_trace_counts_root_set() {
        let leaf = Leaf::new(LeafId(7), Probe(Rc::default())).with_state(StateSet::new("s"));
        assert_eq!(leaf.as_drawn(), DrawnLeaf { id: LeafId(7), state_depth: 2 });
    }
}
