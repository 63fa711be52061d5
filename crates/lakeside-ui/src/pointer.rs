//! Pointer routing: turns raw pointer positions into per-card events.

use lakeside_core::{Point, Rect};

/// Pointer event delivered to one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer moved to this position inside the card.
    Move(Point),
    /// The pointer left the card.
    Leave,
}

/// Tracks which card the pointer is over, so leaving a card can be reported.
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    hovered: Option<usize>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Route a pointer position over `targets`. Yields a `Leave` for the
    /// previously hovered card when the pointer is no longer on it, then a
    /// `Move` for the card now under the pointer, if any.
    pub fn route(&mut self, pointer: Point, targets: &[Rect]) -> Vec<(usize, PointerEvent)> {
        let under = targets.iter().position(|rect| rect.contains(pointer));
        let mut events = Vec::with_capacity(2);

        if let Some(previous) = self.hovered {
            if under != Some(previous) {
                events.push((previous, PointerEvent::Leave));
            }
        }
        if let Some(index) = under {
            events.push((index, PointerEvent::Move(pointer)));
        }

        self.hovered = under;
        events
    }

    /// Forget the hovered card, reporting a `Leave` for it. Used when the
    /// layout changes under the pointer.
    pub fn reset(&mut self) -> Option<(usize, PointerEvent)> {
        self.hovered.take().map(|index| (index, PointerEvent::Leave))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [Rect; 2] = [
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(120.0, 0.0, 100.0, 100.0),
    ];

    #[test]
    fn test_move_inside_card() {
        let mut router = PointerRouter::new();
        let events = router.route(Point::new(10.0, 10.0), &CARDS);
        assert_eq!(events, vec![(0, PointerEvent::Move(Point::new(10.0, 10.0)))]);
        assert_eq!(router.hovered(), Some(0));
    }

    #[test]
    fn test_leave_to_gap() {
        let mut router = PointerRouter::new();
        router.route(Point::new(10.0, 10.0), &CARDS);
        let events = router.route(Point::new(110.0, 10.0), &CARDS);
        assert_eq!(events, vec![(0, PointerEvent::Leave)]);
        assert_eq!(router.hovered(), None);
        assert!(router.route(Point::new(111.0, 10.0), &CARDS).is_empty());
    }

    #[test]
    fn test_cross_between_cards() {
        let mut router = PointerRouter::new();
        router.route(Point::new(10.0, 10.0), &CARDS);
        let events = router.route(Point::new(130.0, 10.0), &CARDS);
        assert_eq!(
            events,
            vec![
                (0, PointerEvent::Leave),
                (1, PointerEvent::Move(Point::new(130.0, 10.0))),
            ]
        );
    }

    #[test]
    fn test_reset_reports_leave() {
        let mut router = PointerRouter::new();
        assert_eq!(router.reset(), None);
        router.route(Point::new(130.0, 10.0), &CARDS);
        assert_eq!(router.reset(), Some((1, PointerEvent::Leave)));
        assert_eq!(router.hovered(), None);
    }
}
