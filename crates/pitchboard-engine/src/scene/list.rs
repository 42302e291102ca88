use super::{DrawCmd, SortKey, ZIndex};

/// A single recorded draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer,
/// so repeated frames allocate nothing once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Records a draw command on the given z-layer.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so the sort is total and stable.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn list_with_layers(layers: &[i32]) -> DrawList {
        let mut list = DrawList::new();
        for &z in layers {
            list.push_solid_circle(ZIndex::new(z), Vec2::zero(), 1.0, Color::BLACK);
        }
        list
    }

    #[test]
    fn paint_order_sorts_by_layer() {
        let mut list = list_with_layers(&[30, 10, 20]);
        let zs: Vec<i32> = list.iter_in_paint_order().map(|it| it.key.z.0).collect();
        assert_eq!(zs, vec![10, 20, 30]);
    }

    #[test]
    fn equal_layers_keep_insertion_order() {
        let mut list = list_with_layers(&[5, 5, 5]);
        let orders: Vec<u32> = list.iter_in_paint_order().map(|it| it.key.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn clear_resets_ordering_counter() {
        let mut list = list_with_layers(&[1, 2]);
        list.clear();
        assert!(list.is_empty());

        list.push_solid_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::BLACK);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
