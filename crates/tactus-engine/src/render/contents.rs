use super::{BinKey, BinNumber, DrawBin, DrawnLeaf, RenderInfo, RenderLeaf, StateGraph, StateSet};

/// Draw-order lists shared by every bin kind.
///
/// Holds, in draw order:
/// 1) pre-bins (negative bin numbers)
/// 2) fine-grained leaves, in insertion order
/// 3) state graphs, each with its leaves, in insertion order
/// 4) post-bins (bin number >= 0)
///
/// Child bins are kept sorted by [`BinKey`] on insertion, so drawing never sorts.
#[derive(Default)]
pub struct BinContents {
    bins: Vec<(BinKey, Box<dyn DrawBin>)>,
    next_order: u32,

    leaves: Vec<Box<dyn RenderLeaf>>,
    state_graphs: Vec<StateGraph>,

    /// Bin-level state, inserted under the leaves' own state while the bin draws.
    state_set: Option<StateSet>,
}

impl BinContents {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child bin. Equal numbers keep insertion order.
    pub fn add_bin(&mut self, number: BinNumber, bin: impl DrawBin + 'static) {
        let key = BinKey::new(number, self.next_order);
        self.next_order = self.next_order.wrapping_add(1);

        let pos = self.bins.partition_point(|(k, _)| *k < key);
        self.bins.insert(pos, (key, Box::new(bin)));
    }

    #[inline]
    pub fn add_leaf(&mut self, leaf: impl RenderLeaf + 'static) {
        self.leaves.push(Box::new(leaf));
    }

    #[inline]
    pub fn add_state_graph(&mut self, graph: StateGraph) {
        self.state_graphs.push(graph);
    }

    #[inline]
    pub fn set_state_set(&mut self, set: Option<StateSet>) {
        self.state_set = set;
    }

    #[inline]
    pub fn state_set(&self) -> Option<&StateSet> {
        self.state_set.as_ref()
    }

    #[inline]
    pub fn leaves(&self) -> &[Box<dyn RenderLeaf>] {
        &self.leaves
    }

    #[inline]
    pub fn state_graphs(&self) -> &[StateGraph] {
        &self.state_graphs
    }

    /// Child bin numbers in draw order.
    pub fn bin_numbers(&self) -> impl Iterator<Item = BinNumber> + '_ {
        self.bins.iter().map(|(k, _)| k.number)
    }

    /// Drops leaves, state graphs and child bins. The bin-level state set is kept.
    pub fn clear(&mut self) {
        self.bins.clear();
        self.next_order = 0;
        self.leaves.clear();
        self.state_graphs.clear();
    }

    /// Walks the draw-order lists, handing every leaf to `render_leaf`.
    ///
    /// `render_leaf` returns whether the leaf was actually rendered; only rendered
    /// leaves become `previous`, so the state-stack delta always refers to state that
    /// was really pushed. Child bins draw themselves.
    pub(crate) fn draw_with<F>(
        &mut self,
        info: &mut RenderInfo<'_>,
        previous: &mut Option<DrawnLeaf>,
        mut render_leaf: F,
    ) where
        F: FnMut(&dyn RenderLeaf, &mut RenderInfo<'_>, Option<DrawnLeaf>) -> bool,
    {
        // The previous leaf's path includes the shared root set, which stays below us.
        let mut num_to_pop = previous.map_or(0, DrawnLeaf::num_to_pop);
        if num_to_pop > 1 {
            num_to_pop -= 1;
        }
        let insert_at = info.state().state_set_stack_size().saturating_sub(num_to_pop);

        if let Some(set) = &self.state_set {
            info.state_mut().insert_state_set(insert_at, set.clone());
        }

        let split = self.bins.partition_point(|(k, _)| k.number.is_pre_bin());
        let (pre_bins, post_bins) = self.bins.split_at_mut(split);

        for (_, bin) in pre_bins {
            bin.draw(info, previous);
        }

        let mut visit = |leaf: &dyn RenderLeaf, info: &mut RenderInfo<'_>| {
            if render_leaf(leaf, info, *previous) {
                *previous = Some(leaf.as_drawn());
            }
        };

        for leaf in &self.leaves {
            visit(leaf.as_ref(), info);
        }

        for graph in &self.state_graphs {
            for leaf in graph.leaves() {
                visit(leaf.as_ref(), info);
            }
        }

        for (_, bin) in post_bins {
            bin.draw(info, previous);
        }

        if self.state_set.is_some() {
            info.state_mut().remove_state_set(insert_at);
        }
    }
}
