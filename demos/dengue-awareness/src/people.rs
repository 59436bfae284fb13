use glam::Vec2;

/// Patrol speed in units per second.
const PATROL_SPEED: f32 = 0.3;
/// How far a patrolling person strays from home.
const PATROL_RANGE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Fighter,
    Cleaner,
    Inspector,
    Patient,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub role: Role,
    pub pos: Vec2,
    /// Patrol centre.
    pub home: Vec2,
    pub scale: f32,
    pub moving: bool,
    /// +1 walks right, -1 walks left.
    pub direction: f32,
    /// Seconds of animation so far; drives the limb swing.
    pub phase: f32,
}

impl Person {
    pub fn new(role: Role, pos: Vec2, moving: bool, direction: f32) -> Self {
        Self {
            role,
            pos,
            home: pos,
            scale: 1.0,
            moving,
            direction,
            phase: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.moving || dt <= 0.0 {
            return;
        }
        self.phase += dt;
        self.pos.x += self.direction * PATROL_SPEED * dt;

        let offset = self.pos.x - self.home.x;
        if offset.abs() >= PATROL_RANGE {
            self.pos.x = self.home.x + offset.clamp(-PATROL_RANGE, PATROL_RANGE);
            self.direction = -offset.signum();
        }
    }
}

/// The fixed cast: three fighters, two cleaners, two inspectors and three
/// patients.
pub fn roster() -> Vec<Person> {
    let mut people = Vec::with_capacity(10);
    for x in [-3.0, 0.0, 3.0] {
        people.push(Person::new(Role::Fighter, Vec2::new(x, 0.0), true, 1.0));
    }
    for x in [-2.0, 2.0] {
        people.push(Person::new(Role::Cleaner, Vec2::new(x, -1.0), true, -1.0));
    }
    for x in [-3.0, 3.0] {
        people.push(Person::new(Role::Inspector, Vec2::new(x, 0.0), true, 1.0));
    }
    for x in [-2.0, 0.0, 2.0] {
        people.push(Person::new(Role::Patient, Vec2::new(x, 0.0), false, 0.0));
    }
    people
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_counts_by_role() {
        let people = roster();
        let count = |role| people.iter().filter(|p| p.role == role).count();
        assert_eq!(people.len(), 10);
        assert_eq!(count(Role::Fighter), 3);
        assert_eq!(count(Role::Cleaner), 2);
        assert_eq!(count(Role::Inspector), 2);
        assert_eq!(count(Role::Patient), 3);
        assert!(people.iter().filter(|p| p.role == Role::Patient).all(|p| !p.moving));
    }

    #[test]
    fn patrol_stays_near_home_and_turns() {
        let mut p = Person::new(Role::Fighter, Vec2::new(-3.0, 0.0), true, 1.0);
        let mut turned = false;
        for _ in 0..600 {
            p.update(0.05);
            assert!((p.pos.x - p.home.x).abs() <= PATROL_RANGE + 1e-5);
            if p.direction < 0.0 {
                turned = true;
            }
        }
        assert!(turned);
        assert!((p.phase - 30.0).abs() < 1e-2);
    }

    #[test]
    fn patients_stand_still() {
        let mut p = Person::new(Role::Patient, Vec2::new(2.0, 0.0), false, 0.0);
        p.update(1.0);
        assert_eq!(p.pos, Vec2::new(2.0, 0.0));
        assert_eq!(p.phase, 0.0);
    }
}
