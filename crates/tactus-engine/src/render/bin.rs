use super::{BinContents, DrawnLeaf, RenderInfo};

/// Draw-dispatch interface between a bin and its parent.
pub trait DrawBin {
    /// Draws the bin's contents.
    ///
    /// `previous` is the last leaf drawn before this call and is updated to the last
    /// leaf this bin drew.
    fn draw(&mut self, info: &mut RenderInfo<'_>, previous: &mut Option<DrawnLeaf>);
}

/// Host default bin: draws every leaf, every time.
///
/// Used for nested pre/post bins and for scenes without haptic content.
#[derive(Default)]
pub struct RenderBin {
    contents: BinContents,
}

impl RenderBin {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contents(&self) -> &BinContents {
        &self.contents
    }

    #[inline]
    pub fn contents_mut(&mut self) -> &mut BinContents {
        &mut self.contents
    }
}

impl From<BinContents> for RenderBin {
    fn from(contents: BinContents) -> Self {
        Self { contents }
    }
}

impl DrawBin for RenderBin {
    fn draw(&mut self, info: &mut RenderInfo<'_>, previous: &mut Option<DrawnLeaf>) {
        self.contents.draw_with(info, previous, |leaf, info, prev| {
            leaf.render(info, prev);
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::haptics::HapticRegistry;
    use crate::render::{BinNumber, Drawable, Leaf, LeafId, State, StateGraph, StateSet};

    /// Appends its tag to a shared log when drawn.
    struct Tag(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Drawable for Tag {
        fn draw(&self, _info: &mut RenderInfo<'_>) {
            self.1.borrow_mut().push(self.0);
        }
    }

    fn leaf(id: u32, tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Leaf<Tag> {
        Leaf::new(LeafId(id), Tag(tag, log.clone()))
    }

    fn draw(bin: &mut impl DrawBin) -> State {
        let registry = HapticRegistry::new();
        let mut state = State::default();
        let mut previous = None;
        bin.draw(&mut RenderInfo::new(&mut state, &registry), &mut previous);
        state
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn lists_are_drawn_in_host_order() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut pre = RenderBin::new();
        pre.contents_mut().add_leaf(leaf(0, "pre", &log));
        let mut post = RenderBin::new();
        post.contents_mut().add_leaf(leaf(1, "post", &log));

        let mut bin = RenderBin::new();
        bin.contents_mut().add_bin(BinNumber(1), post);
        bin.contents_mut().add_bin(BinNumber(-1), pre);
        bin.contents_mut().add_leaf(leaf(2, "fine", &log));
        bin.contents_mut().add_state_graph(
            StateGraph::new()
                .with_leaf(leaf(3, "coarse-a", &log))
                .with_leaf(leaf(4, "coarse-b", &log)),
        );
        bin.contents_mut().add_state_graph(StateGraph::new().with_leaf(leaf(5, "coarse-c", &log)));

        let state = draw(&mut bin);

        assert_eq!(*log.borrow(), ["pre", "fine", "coarse-a", "coarse-b", "coarse-c", "post"]);
        assert_eq!(state.draw_calls(), 6);
    }

    #[test]
    fn equal_bin_numbers_keep_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bin = RenderBin::new();
        for (i, tag) in ["first", "second", "third"].into_iter().enumerate() {
            let mut child = RenderBin::new();
            child.contents_mut().add_leaf(leaf(i as u32, tag, &log));
            bin.contents_mut().add_bin(BinNumber(if i == 2 { -3 } else { 0 }), child);
        }
        let numbers: Vec<_> = bin.contents().bin_numbers().collect();
        assert_eq!(numbers, [BinNumber(-3), BinNumber(0), BinNumber(0)]);

        draw(&mut bin);
        assert_eq!(*log.borrow(), ["third", "first", "second"]);
    }

    #[test]
    fn default_bin_draws_duplicates() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bin = RenderBin::new();
        bin.contents_mut().add_leaf(leaf(0, "a", &log));
        bin.contents_mut().add_leaf(leaf(0, "a", &log));
        draw(&mut bin);
        draw(&mut bin);
        assert_eq!(log.borrow().len(), 4);
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[test]
    fn bin_state_set_is_inserted_and_removed() {
        let registry = HapticRegistry::new();
        let mut state = State::default();
        state.push_state_set(StateSet::new("root"));

        struct Snapshot(Rc<RefCell<Vec<String>>>);
        impl Drawable for Snapshot {
            fn draw(&self, info: &mut RenderInfo<'_>) {
                let names = info.state().state_sets().iter().map(|s| s.name().to_string());
                self.0.borrow_mut().extend(names);
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bin = RenderBin::new();
        bin.contents_mut().set_state_set(Some(StateSet::new("bin")));
        bin.contents_mut()
            .add_leaf(Leaf::new(LeafId(0), Snapshot(seen.clone())).with_state(StateSet::new("leaf")));

        let mut previous = None;
        bin.draw(&mut RenderInfo::new(&mut state, &registry), &mut previous);

        assert_eq!(*seen.borrow(), ["root", "bin", "leaf"]);
        let left: Vec<_> = state.state_sets().iter().map(StateSet::name).collect();
        assert_eq!(left, ["root", "leaf"]);
        assert_eq!(previous.map(|p| p.id), Some(LeafId(0)));
    }

    #[test]
    fn bin_state_goes_below_previous_leaf_state() {
        let registry = HapticRegistry::new();
        let mut state = State::default();
        state.push_state_set(StateSet::new("root"));
        state.push_state_set(StateSet::new("earlier-leaf"));
        let mut previous = Some(DrawnLeaf { id: LeafId(9), state_depth: 2 });

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bin = RenderBin::new();
        bin.contents_mut().set_state_set(Some(StateSet::new("bin")));
        bin.contents_mut().add_leaf(leaf(0, "x", &log));
        bin.draw(&mut RenderInfo::new(&mut state, &registry), &mut previous);

        // The leaf popped "earlier-leaf"; the bin set was removed afterwards.
        let left: Vec<_> = state.state_sets().iter().map(StateSet::name).collect();
        assert_eq!(left, ["root"]);
    }
}
