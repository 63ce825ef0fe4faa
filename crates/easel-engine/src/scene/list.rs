use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for one frame.
///
/// `push()` is O(1). Paint-order iteration reuses an internal index buffer,
/// so a list that is cleared and refilled every redraw does not reallocate.
///
/// # Clipping
///
/// [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) scope commands
/// to a scissor rect. Nested clips are intersected with their parent.
///
/// ```ignore
/// draw_list.push_clip(canvas_rect);
/// // ... push canvas items ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region, intersected with any parent region.
    ///
    /// Calls must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect.normalized(),
            // No overlap collapses to a zero-area rect; renderers skip those items.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by(|&a, &b| items[a].key.cmp(&items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Stroke;

    fn line(list: &mut DrawList, z: i32, x: f32) {
        list.push_line(
            ZIndex(z),
            Vec2::new(x, 0.0),
            Vec2::new(x, 10.0),
            Stroke::new(1.0, Color::black()),
        );
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.from.x,
                _ => unreachable!(),
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn same_layer_keeps_insertion_order() {
        let mut list = DrawList::new();
        line(&mut list, 0, 1.0);
        line(&mut list, 0, 2.0);
        line(&mut list, 0, 3.0);
        assert_eq!(xs(&mut list), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn higher_layer_paints_last() {
        let mut list = DrawList::new();
        line(&mut list, 1, 1.0);
        line(&mut list, 0, 2.0);
        assert_eq!(xs(&mut list), vec![2.0, 1.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        line(&mut list, 0, 1.0);
        list.clear();
        assert!(list.is_empty());
        line(&mut list, 0, 5.0);
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(xs(&mut list), vec![5.0]);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn items_inherit_current_clip() {
        let mut list = DrawList::new();
        line(&mut list, 0, 1.0);
        list.push_clip(Rect::new(0.0, 0.0, 450.0, 300.0));
        line(&mut list, 0, 2.0);
        list.pop_clip();
        line(&mut list, 0, 3.0);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(clips, vec![None, Some(Rect::new(0.0, 0.0, 450.0, 300.0)), None]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        line(&mut list, 0, 1.0);
        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn disjoint_nested_clip_is_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        line(&mut list, 0, 1.0);
        let clip = list.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }
}
