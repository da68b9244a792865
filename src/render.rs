//! Boundary between the layout engine and whatever draws the cards.
//!
//! The engine hands out [`GridLayout`] as plain data. A renderer implements
//! [`GridRenderer`] and receives every card in item order; [`render`] drives
//! it. The `svg` feature ships one implementation.

use crate::grid::{CardPosition, GridLayout};

/// Receives a layout card by card.
pub trait GridRenderer {
    type Output;

    /// Called once before any card.
    fn begin(&mut self, _layout: &GridLayout) {}

    /// Called for card `index` in item order.
    fn card(&mut self, index: usize, position: &CardPosition);

    /// Called once after the last card.
    fn finish(self) -> Self::Output;
}

/// Feed `layout` to `renderer` and return its output.
pub fn render<R: GridRenderer>(layout: &GridLayout, mut renderer: R) -> R::Output {
    renderer.begin(layout);
    for (index, position) in layout.positions.iter().enumerate() {
        renderer.card(index, position);
    }
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::DeviceType;
    use crate::grid::LayoutConfig;
    use alloc::vec::Vec;

    /// Records what it is told.
    #[derive(Default)]
    struct Recorder {
        began: usize,
        cards: Vec<(usize, CardPosition)>,
    }

    impl GridRenderer for Recorder {
        type Output = Self;

        fn begin(&mut self, _layout: &GridLayout) {
            self.began += 1;
        }

        fn card(&mut self, index: usize, position: &CardPosition) {
            self.cards.push((index, *position));
        }

        fn finish(self) -> Self {
            self
        }
    }

    #[test]
    fn cards_arrive_in_item_order() {
        let layout = LayoutConfig::new(800.0, 600.0, 12, DeviceType::Desktop)
            .compute()
            .unwrap();
        let rec = render(&layout, Recorder::default());
        assert_eq!(rec.began, 1);
        assert_eq!(rec.cards.len(), 12);
        for (i, (index, position)) in rec.cards.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(*position, layout.positions[i]);
        }
    }
}
