use awareness_engine::Easing;

use crate::scenes::SCENE_COUNT;

/// Seconds for a new banner line to fade in.
const FADE_IN: f32 = 0.5;

/// Info lines per scene, shown one at a time in order.
pub const SCENE_INFO: [[&str; 4]; SCENE_COUNT] = [
    [
        "Mosquitoes go through four life stages: egg, larva, pupa, and adult",
        "Female Aedes aegypti mosquitoes lay eggs in stagnant water",
        "After hatching, they become larvae, then pupae, and finally adults",
        "This scene shows how unchecked water sources contribute to breeding",
    ],
    [
        "A clean environment is the first defense against dengue",
        "Remove stagnant water from plant pots, buckets, old tires, and drains",
        "Proper garbage disposal and cleaning roof gutters helps",
        "Using mosquito nets reduces breeding grounds for mosquitoes",
    ],
    [
        "Dengue Fighters are everyday heroes in our community",
        "They include community workers, health officials, and citizens",
        "They raise awareness and inspect areas for breeding grounds",
        "You can be a Dengue Fighter by inspecting your surroundings",
    ],
    [
        "Stagnant water is a mosquito's favorite breeding place",
        "Common spots: flowerpots, unused containers, air coolers",
        "Empty and clean these spots weekly",
        "Even a bottle cap full of water is enough for breeding",
    ],
    [
        "Regular home inspections help detect breeding areas early",
        "Check bathrooms, balconies, and rooftop tanks",
        "Don't forget refrigerator trays and water containers",
        "Do a weekly '10-Minute Check' to eliminate standing water",
    ],
    [
        "Common symptoms: High fever (up to 104°F)",
        "Severe headache, pain behind eyes, muscle and joint pain",
        "Nausea, vomiting, and skin rash may occur",
        "Bleeding (gums, nose) in severe cases - Seek help immediately",
    ],
    [
        "Prevent dengue by using repellents and mosquito nets",
        "Wear long-sleeved clothes and install window screens",
        "Cover water containers and apply larvicides",
        "Raise community awareness about prevention",
    ],
    [
        "No specific cure, but early diagnosis saves lives",
        "Treatment includes rest and plenty of fluids",
        "Use paracetamol for fever (avoid aspirin/NSAIDs)",
        "Hospital care needed for severe dengue - Don't self-medicate",
    ],
    [
        "Dengue cases are rising globally due to urbanization",
        "Climate change increases mosquito breeding areas",
        "Urban areas are at higher risk of outbreaks",
        "Stay informed through health department updates",
    ],
];

#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub text: &'static str,
    pub active: bool,
    /// Seconds since this line became active.
    pub shown_for: f32,
}

impl InfoMessage {
    /// Banner opacity, easing in over the first half second.
    pub fn fade(&self) -> f32 {
        Easing::QuadOut.apply(self.shown_for / FADE_IN)
    }
}

/// The current scene's info lines; exactly one is active when non-empty.
#[derive(Debug, Clone)]
pub struct MessageRotation {
    messages: Vec<InfoMessage>,
    timer: f32,
    duration: f32,
}

impl MessageRotation {
    pub fn new(duration: f32) -> Self {
        Self {
            messages: Vec::new(),
            timer: 0.0,
            duration,
        }
    }

    /// Replace the pool with `scene`'s lines and activate the first.
    /// Unknown scenes leave the pool empty.
    pub fn rebuild(&mut self, scene: usize) {
        self.messages.clear();
        self.timer = 0.0;
        if let Some(lines) = SCENE_INFO.get(scene) {
            self.messages.extend(lines.iter().enumerate().map(|(i, &text)| InfoMessage {
                text,
                active: i == 0,
                shown_for: 0.0,
            }));
        }
    }

    /// Accumulate `dt`; after the message duration, move to the next line.
    /// Returns true when the active line changed.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(current) = self.active_index() else {
            return false;
        };
        let dt = dt.max(0.0);
        self.messages[current].shown_for += dt;
        self.timer += dt;
        if self.timer < self.duration {
            return false;
        }

        self.timer = 0.0;
        let next = (current + 1) % self.messages.len();
        self.messages[current].active = false;
        self.messages[next].active = true;
        self.messages[next].shown_for = 0.0;
        true
    }

    pub fn active_index(&self) -> Option<usize> {
        self.messages.iter().position(|m| m.active)
    }

    pub fn active(&self) -> Option<&InfoMessage> {
        self.messages.iter().find(|m| m.active)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoMessage> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_activates_first_line() {
        let mut rotation = MessageRotation::new(5.0);
        rotation.rebuild(3);
        assert_eq!(rotation.len(), 4);
        assert_eq!(rotation.active_index(), Some(0));
        assert_eq!(rotation.iter().filter(|m| m.active).count(), 1);
        assert_eq!(rotation.active().map(|m| m.text), Some(SCENE_INFO[3][0]));
    }

    #[test]
    fn rebuild_replaces_instead_of_appending() {
        let mut rotation = MessageRotation::new(5.0);
        rotation.rebuild(0);
        rotation.advance(5.0);
        rotation.rebuild(1);
        assert_eq!(rotation.len(), 4);
        assert_eq!(rotation.active_index(), Some(0));
    }

    #[test]
    fn full_cycle_returns_to_first() {
        let mut rotation = MessageRotation::new(5.0);
        rotation.rebuild(2);
        let mut seen = Vec::new();
        for _ in 0..4 {
            assert!(rotation.advance(5.0));
            seen.push(rotation.active_index());
            assert_eq!(rotation.iter().filter(|m| m.active).count(), 1);
        }
        assert_eq!(seen, vec![Some(1), Some(2), Some(3), Some(0)]);
    }

    #[test]
    fn rebuild_resets_the_timer() {
        let mut rotation = MessageRotation::new(5.0);
        rotation.rebuild(0);
        rotation.advance(4.0);
        rotation.rebuild(1);
        assert!(!rotation.advance(4.0));
        assert_eq!(rotation.active_index(), Some(0));
    }

    #[test]
    fn empty_pool_short_circuits() {
        let mut rotation = MessageRotation::new(5.0);
        assert!(!rotation.advance(10.0));
        assert!(rotation.active().is_none());
        rotation.rebuild(42);
        assert!(rotation.is_empty());
        assert!(!rotation.advance(10.0));
    }

    #[test]
    fn new_line_fades_in() {
        let mut rotation = MessageRotation::new(5.0);
        rotation.rebuild(0);
        assert_eq!(rotation.active().map(|m| m.fade()), Some(0.0));
        rotation.advance(0.25);
        let half = rotation.active().map(|m| m.fade()).unwrap();
        assert!(half > 0.5 && half < 1.0);
        rotation.advance(1.0);
        assert_eq!(rotation.active().map(|m| m.fade()), Some(1.0));
        rotation.advance(3.75);
        assert_eq!(rotation.active().map(|m| m.fade()), Some(0.0));
    }
}
