//! Open/close state of the notification dropdown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space rectangle of the dropdown (bell button included).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DropdownState {
    open: bool,
    bounds: Option<Bounds>,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Records where the host rendered the dropdown.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    /// Closes the dropdown when `point` lies outside its bounds. Returns
    /// whether it closed. Without known bounds every interaction is outside.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !self.open {
            return false;
        }
        let inside = self.bounds.is_some_and(|b| b.contains(point));
        if !inside {
            self.open = false;
        }
        !inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_click_closes() {
        let mut dropdown = DropdownState::default();
        dropdown.set_bounds(Bounds::new(100.0, 0.0, 300.0, 400.0));
        assert!(dropdown.toggle());

        assert!(!dropdown.pointer_down(Point::new(150.0, 20.0)));
        assert!(dropdown.is_open());

        assert!(dropdown.pointer_down(Point::new(10.0, 20.0)));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_pointer_down_on_closed_dropdown_is_ignored() {
        let mut dropdown = DropdownState::default();
        assert!(!dropdown.pointer_down(Point::new(0.0, 0.0)));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_edges_are_inside() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(!bounds.contains(Point::new(10.1, 5.0)));
    }
}
