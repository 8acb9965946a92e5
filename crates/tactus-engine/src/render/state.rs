use std::rc::Rc;

use crate::haptics::HapticRegistry;
use crate::time::FrameStamp;

/// A named bundle of render state pushed onto the host state stack.
///
/// Cloning is cheap; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateSet(Rc<str>);

impl StateSet {
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Host rendering state for one draw traversal.
///
/// Always carries a frame stamp; "once per frame" guards read it directly.
#[derive(Debug, Default)]
pub struct State {
    frame_stamp: FrameStamp,
    state_sets: Vec<StateSet>,
    draw_calls: u64,
}

impl State {
    #[inline]
    pub fn new(frame_stamp: FrameStamp) -> Self {
        Self {
            frame_stamp,
            ..Self::default()
        }
    }

    #[inline]
    pub fn frame_stamp(&self) -> FrameStamp {
        self.frame_stamp
    }

    /// Starts a new frame. The state-set stack is left untouched.
    #[inline]
    pub fn set_frame_stamp(&mut self, stamp: FrameStamp) {
        self.frame_stamp = stamp;
    }

    #[inline]
    pub fn state_set_stack_size(&self) -> usize {
        self.state_sets.len()
    }

    /// Bottom-to-top view of the state-set stack.
    #[inline]
    pub fn state_sets(&self) -> &[StateSet] {
        &self.state_sets
    }

    #[inline]
    pub fn push_state_set(&mut self, set: StateSet) {
        self.state_sets.push(set);
    }

    /// Pops up to `n` sets from the top of the stack.
    pub fn pop_state_sets(&mut self, n: usize) {
        let keep = self.state_sets.len().saturating_sub(n);
        self.state_sets.truncate(keep);
    }

    /// Empties the stack, e.g. at the end of a render stage.
    #[inline]
    pub fn pop_all_state_sets(&mut self) {
        self.state_sets.clear();
    }

    /// Inserts `set` at `pos` (clamped to the stack size).
    pub fn insert_state_set(&mut self, pos: usize, set: StateSet) {
        let pos = pos.min(self.state_sets.len());
        self.state_sets.insert(pos, set);
    }

    pub fn remove_state_set(&mut self, pos: usize) -> Option<StateSet> {
        (pos < self.state_sets.len()).then(|| self.state_sets.remove(pos))
    }

    /// Number of drawables actually drawn through this state.
    #[inline]
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    #[inline]
    pub fn record_draw(&mut self) {
        self.draw_calls += 1;
    }
}

/// Everything a bin or leaf needs while drawing.
///
/// The registry is read-only here: drawing never creates or removes devices or shapes.
pub struct RenderInfo<'a> {
    state: &'a mut State,
    registry: &'a HapticRegistry,
}

impl<'a> RenderInfo<'a> {
    #[inline]
    pub fn new(state: &'a mut State, registry: &'a HapticRegistry) -> Self {
        Self { state, registry }
    }

    #[inline]
    pub fn state(&self) -> &State {
        &*self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut State {
        &mut *self.state
    }

    #[inline]
    pub fn registry(&self) -> &HapticRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &State) -> Vec<&str> {
        state.state_sets().iter().map(StateSet::name).collect()
    }

    #[test]
    fn insert_is_clamped_to_stack_size() {
        let mut s = State::default();
        s.push_state_set(StateSet::new("root"));
        s.insert_state_set(10, StateSet::new("bin"));
        assert_eq!(names(&s), ["root", "bin"]);
    }

    #[test]
    fn insert_and_remove_in_the_middle() {
        let mut s = State::default();
        s.push_state_set(StateSet::new("root"));
        s.push_state_set(StateSet::new("leaf"));
        s.insert_state_set(1, StateSet::new("bin"));
        assert_eq!(names(&s), ["root", "bin", "leaf"]);
        assert_eq!(s.remove_state_set(1), Some(StateSet::new("bin")));
        assert_eq!(names(&s), ["root", "leaf"]);
        assert_eq!(s.remove_state_set(5), None);
    }

    #[test]
    fn pop_saturates() {
        let mut s = State::default();
        s.push_state_set(StateSet::new("root"));
        s.pop_state_sets(3);
        assert_eq!(s.state_set_stack_size(), 0);
    }

    #[test]
    fn pop_all_keeps_frame_stamp() {
        let mut s = State::new(FrameStamp::from_frame(4));
        s.push_state_set(StateSet::new("a"));
        s.push_state_set(StateSet::new("b"));
        s.pop_all_state_sets();
        assert!(s.state_sets().is_empty());
        assert_eq!(s.frame_stamp().frame_number, 4);
    }
}
