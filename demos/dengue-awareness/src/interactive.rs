use awareness_engine::Viewport;
use glam::Vec2;

/// Half the scene extent; scene space is [-5, 5] on both axes.
const SCENE_HALF_EXTENT: f32 = 5.0;

/// Map a window-space point (pixels, y down) into scene space (y up).
/// Returns None for a degenerate viewport.
pub fn window_to_scene(x: f32, y: f32, viewport: Viewport) -> Option<Vec2> {
    if !viewport.is_valid() {
        return None;
    }
    let extent = SCENE_HALF_EXTENT * 2.0;
    Some(Vec2::new(
        x / viewport.width * extent - SCENE_HALF_EXTENT,
        SCENE_HALF_EXTENT - y / viewport.height * extent,
    ))
}

/// A hoverable, clickable box centred on `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveElement {
    pub label: &'static str,
    pub center: Vec2,
    pub size: Vec2,
    /// Scene that draws this element.
    pub scene: usize,
    pub hovered: bool,
    pub clicked: bool,
}

impl InteractiveElement {
    pub fn new(label: &'static str, center: Vec2, size: Vec2, scene: usize) -> Self {
        Self {
            label,
            center,
            size,
            scene,
            hovered: false,
            clicked: false,
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        let min = self.center - half;
        let max = self.center + half;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// The fixed element list and the current selection.
#[derive(Debug, Clone)]
pub struct InteractiveSet {
    elements: Vec<InteractiveElement>,
    selected: Option<usize>,
}

impl InteractiveSet {
    /// The clean-environment scene's three boxes.
    pub fn new() -> Self {
        let size = Vec2::ONE;
        Self {
            elements: vec![
                InteractiveElement::new("Water container", Vec2::new(-3.0, 1.0), size, 1),
                InteractiveElement::new("Person with net", Vec2::new(0.0, 0.0), size, 1),
                InteractiveElement::new("Mosquito repellent", Vec2::new(3.0, 1.0), size, 1),
            ],
            selected: None,
        }
    }

    pub fn elements(&self) -> &[InteractiveElement] {
        &self.elements
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Recompute every hover flag for a pointer at `point` (scene space).
    pub fn hover(&mut self, point: Vec2) {
        for element in &mut self.elements {
            element.hovered = element.contains(point);
        }
    }

    /// Select the first element containing `point`. A miss changes nothing.
    pub fn click(&mut self, point: Vec2) -> Option<usize> {
        let index = self.elements.iter().position(|e| e.contains(point))?;
        for (i, element) in self.elements.iter_mut().enumerate() {
            element.clicked = i == index;
        }
        self.selected = Some(index);
        Some(index)
    }
}

impl Default for InteractiveSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_corners_map_to_scene_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(window_to_scene(0.0, 0.0, vp), Some(Vec2::new(-5.0, 5.0)));
        assert_eq!(window_to_scene(800.0, 600.0, vp), Some(Vec2::new(5.0, -5.0)));
        assert_eq!(window_to_scene(400.0, 300.0, vp), Some(Vec2::ZERO));
    }

    #[test]
    fn degenerate_viewport_maps_nothing() {
        assert_eq!(window_to_scene(1.0, 1.0, Viewport::new(0.0, 600.0)), None);
    }

    #[test]
    fn boundary_is_inside() {
        let set = InteractiveSet::new();
        let water = &set.elements()[0];
        assert!(water.contains(Vec2::new(-3.5, 1.0)));
        assert!(water.contains(Vec2::new(-2.5, 1.5)));
        assert!(water.contains(Vec2::new(-3.5, 0.5)));
        assert!(!water.contains(Vec2::new(-2.49, 1.0)));
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut set = InteractiveSet::new();
        set.hover(Vec2::new(0.5, 0.5));
        let hovered: Vec<bool> = set.elements().iter().map(|e| e.hovered).collect();
        assert_eq!(hovered, vec![false, true, false]);
        set.hover(Vec2::new(4.9, -4.9));
        assert!(set.elements().iter().all(|e| !e.hovered));
    }

    #[test]
    fn click_selects_first_match_and_clears_others() {
        let mut set = InteractiveSet::new();
        assert_eq!(set.click(Vec2::new(3.0, 1.0)), Some(2));
        assert_eq!(set.click(Vec2::new(-3.0, 1.0)), Some(0));
        let clicked: Vec<bool> = set.elements().iter().map(|e| e.clicked).collect();
        assert_eq!(clicked, vec![true, false, false]);
        assert_eq!(set.selected(), Some(0));
    }

    #[test]
    fn missed_click_keeps_selection() {
        let mut set = InteractiveSet::new();
        set.click(Vec2::ZERO);
        assert_eq!(set.click(Vec2::new(-4.9, -4.9)), None);
        assert_eq!(set.selected(), Some(1));
        assert!(set.elements()[1].clicked);
    }
}
