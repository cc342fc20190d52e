//! Screen regions recorded during drawing, used to route mouse clicks.

use ratatui::layout::{Position, Rect};

use crate::view::Target;

#[derive(Debug, Default)]
pub struct Regions {
    regions: Vec<(Rect, Target)>,
}

impl Regions {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        if area.area() > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Rect, Target)> {
        self.regions.iter()
    }
}
