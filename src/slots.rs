//! Pure rendering policy for the two icon grids.
//!
//! A grid shows at most [`MAX_SLOTS`] icons; anything beyond that is
//! summarized as a "+N more" line. The output depends only on its inputs,
//! so re-rendering with the same decomposition and load state is stable.

use crate::config::{
    FADE_MS, FULL_STACK_ICON_SIZE, ICON_INSET, LEFTOVER_ICON_SIZE, MAX_SLOTS, PLACEHOLDER_COLOR,
};
use crate::load_state::IconLoadState;
use crate::utils::cap_display;

/// Which image a slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// One full stack of 64 items.
    FullStack,
    /// One item that does not fill a stack.
    Leftover,
}

impl IconKind {
    pub fn default_size(self) -> u32 {
        match self {
            IconKind::FullStack => FULL_STACK_ICON_SIZE,
            IconKind::Leftover => LEFTOVER_ICON_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    pub index: usize,
    pub kind: IconKind,
    /// Outer box edge in pixels.
    pub size: u32,
    pub loaded: bool,
}

impl SlotDescriptor {
    /// Edge of the image inside the slot border.
    pub fn image_size(&self) -> u32 {
        self.size.saturating_sub(ICON_INSET)
    }

    pub fn box_style(&self) -> String {
        format!("width: {0}px; height: {0}px;", self.size)
    }

    /// Placeholder grey until loaded, then fades to full opacity.
    pub fn image_style(&self) -> String {
        format!(
            "width: {0}px; height: {0}px; background-color: {1}; opacity: {2}; transition: opacity {3}ms ease-in;",
            self.image_size(),
            PLACEHOLDER_COLOR,
            if self.loaded { 1 } else { 0 },
            FADE_MS,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotGrid {
    pub slots: Vec<SlotDescriptor>,
    /// Items past [`MAX_SLOTS`] that are counted but not drawn.
    pub overflow: Option<f64>,
}

impl SlotGrid {
    pub fn overflow_label(&self) -> Option<String> {
        self.overflow.map(|extra| format!("+{} more", extra))
    }
}

/// Build the slot list for `n` icons of one kind. `n` is a whole count.
pub fn render_slots(n: f64, kind: IconKind, size: u32, loads: &IconLoadState) -> SlotGrid {
    let (shown, overflow) = cap_display(n, MAX_SLOTS);
    let slots = (0..shown)
        .map(|index| SlotDescriptor {
            index,
            kind,
            size,
            loaded: loads.is_loaded(kind, index),
        })
        .collect();
    SlotGrid { slots, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn small_counts_render_every_slot() {
        let grid = render_slots(3.0, IconKind::Leftover, 36, &IconLoadState::new());
        assert_eq!(grid.slots.len(), 3);
        assert_eq!(grid.overflow_label(), None);
        assert_eq!(grid.slots[2].index, 2);
        assert_eq!(grid.slots[2].image_size(), 32);
    }

    #[test]
    fn zero_renders_nothing() {
        let grid = render_slots(0.0, IconKind::FullStack, 48, &IconLoadState::new());
        assert!(grid.slots.is_empty());
        assert_eq!(grid.overflow, None);
    }

    #[test]
    fn five_thousand_caps_full_stacks_only() {
        let d = decompose(5000.0);
        let loads = IconLoadState::new();
        let full = render_slots(d.full_stacks, IconKind::FullStack, 48, &loads);
        let left = render_slots(d.leftover as f64, IconKind::Leftover, 36, &loads);
        assert_eq!(full.slots.len(), 64);
        assert_eq!(full.overflow_label().as_deref(), Some("+14 more"));
        assert_eq!(left.slots.len(), 8);
        assert_eq!(left.overflow_label(), None);
    }

    #[test]
    fn huge_counts_still_cap_at_limit() {
        let d = decompose(1e20);
        let grid = render_slots(d.full_stacks, IconKind::FullStack, 48, &IconLoadState::new());
        assert_eq!(grid.slots.len(), MAX_SLOTS);
        assert_eq!(grid.slots.last().map(|s| s.index), Some(MAX_SLOTS - 1));
        assert!(grid.overflow.is_some_and(|extra| extra > 0.0));
    }

    #[test]
    fn loaded_flags_follow_kind_and_index() {
        let mut loads = IconLoadState::new();
        loads.mark_loaded(IconKind::FullStack, 1);
        let grid = render_slots(3.0, IconKind::FullStack, 48, &loads);
        let flags: Vec<bool> = grid.slots.iter().map(|s| s.loaded).collect();
        assert_eq!(flags, vec![false, true, false]);

        let other = render_slots(3.0, IconKind::Leftover, 36, &loads);
        assert!(other.slots.iter().all(|s| !s.loaded));
    }

    #[test]
    fn image_fades_in_once_loaded() {
        let mut slot = SlotDescriptor {
            index: 0,
            kind: IconKind::FullStack,
            size: 48,
            loaded: false,
        };
        assert_eq!(slot.box_style(), "width: 48px; height: 48px;");
        assert!(slot.image_style().contains("width: 44px; height: 44px;"));
        assert!(slot.image_style().contains("opacity: 0;"));
        assert!(slot.image_style().contains("transition: opacity 300ms ease-in;"));
        slot.loaded = true;
        assert!(slot.image_style().contains("opacity: 1;"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut loads = IconLoadState::new();
        loads.mark_loaded(IconKind::Leftover, 5);
        let first = render_slots(100.0, IconKind::Leftover, 36, &loads);
        let second = render_slots(100.0, IconKind::Leftover, 36, &loads);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn never_draws_past_limit(n in 0u64..10_000) {
            let grid = render_slots(n as f64, IconKind::FullStack, 48, &IconLoadState::new());
            prop_assert!(grid.slots.len() <= MAX_SLOTS);
            let drawn = grid.slots.len() as f64 + grid.overflow.unwrap_or(0.0);
            prop_assert_eq!(drawn, n as f64);
        }
    }
}
