//! Zone geometry - green zone sizing, distance, and pointer-to-angle mapping
//!
//! Everything here is pure math over degrees. The green zone is the angular
//! band in which a full turn opens the lock; all difficulty feel comes from
//! how wide that band is and how the pick resists rotation away from it.

use tui_lockpick_types::{
    Difficulty, MAX_SKILL, MAX_ZONE_DEG, MIN_ZONE_DEG, PIN_ANGLE_LIMIT_DEG,
};

/// Green zone base width in degrees for a given skill rating.
///
/// Monotonic non-decreasing in skill, saturating at [`MAX_SKILL`]. The square
/// root gives early skill points more value than late ones. The floor happens
/// here, at the base-size stage only; the difficulty modifier is applied to
/// the floored base without further rounding.
///
/// # Examples
///
/// ```
/// use tui_lockpick_core::zone::base_size_from_skill;
///
/// assert_eq!(base_size_from_skill(0), 8.0);
/// assert_eq!(base_size_from_skill(80), 30.0);
/// assert_eq!(base_size_from_skill(100), base_size_from_skill(80));
/// ```
pub fn base_size_from_skill(skill: u32) -> f32 {
    let normalized = skill.min(MAX_SKILL) as f32 / MAX_SKILL as f32;
    (MIN_ZONE_DEG + (MAX_ZONE_DEG - MIN_ZONE_DEG) * normalized.sqrt()).floor()
}

/// The angular success band.
///
/// `start` is rolled once per engine lifetime; `size` is derived from the
/// skill rating and lock difficulty at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreenZone {
    start: f32,
    size: f32,
}

impl GreenZone {
    /// Build a zone from a rolled start angle, a skill rating, and a difficulty.
    pub fn new(start: f32, skill: u32, difficulty: Difficulty) -> Self {
        Self {
            start,
            size: base_size_from_skill(skill) * difficulty.modifier(),
        }
    }

    /// Zone with an explicit width (used by tests and the width display).
    pub fn with_size(start: f32, size: f32) -> Self {
        Self { start, size }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn end(&self) -> f32 {
        self.start + self.size
    }

    /// Whether an angle sits inside the zone (inclusive at both boundaries).
    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.start && angle <= self.end()
    }

    /// Shortest gap from an angle to the zone: zero inside, positive outside.
    ///
    /// ```
    /// use tui_lockpick_core::zone::GreenZone;
    ///
    /// let zone = GreenZone::with_size(0.0, 10.0);
    /// assert_eq!(zone.distance(5.0), 0.0);
    /// assert_eq!(zone.distance(-3.0), 3.0);
    /// assert_eq!(zone.distance(14.0), 4.0);
    /// ```
    pub fn distance(&self, angle: f32) -> f32 {
        if angle < self.start {
            self.start - angle
        } else if angle > self.end() {
            angle - self.end()
        } else {
            0.0
        }
    }

    /// Turning strength at an angle: 1 inside the zone, falling off linearly
    /// to 0 at 90° away.
    pub fn turn_strength(&self, angle: f32) -> f32 {
        (1.0 - self.distance(angle) / PIN_ANGLE_LIMIT_DEG).max(0.0)
    }
}

/// Raw pointer angle in degrees from a delta relative to the dial center.
///
/// `atan2` runs in screen coordinates (y grows downward), offset by +90° so
/// that straight up maps to 0° and clockwise is positive.
///
/// ```
/// use tui_lockpick_core::zone::pointer_degrees;
///
/// // Straight above the center.
/// assert_eq!(pointer_degrees(0.0, -1.0), 0.0);
/// // Directly right of the center.
/// assert_eq!(pointer_degrees(1.0, 0.0), 90.0);
/// ```
pub fn pointer_degrees(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx).to_degrees() + 90.0
}

/// Clamp a raw pointer angle to the deflection the pick allows.
///
/// The pick resists rotating far from the zone: the further the raw angle is
/// from the success band, the narrower the allowed deflection. Inside the
/// zone the full ±90° range is available.
pub fn resisted_pin_angle(raw_degrees: f32, zone: &GreenZone) -> f32 {
    let strength = zone.turn_strength(raw_degrees);
    let allowed = strength * PIN_ANGLE_LIMIT_DEG;
    raw_degrees.clamp(-allowed, allowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_size_endpoints_and_saturation() {
        assert_eq!(base_size_from_skill(0), 8.0);
        assert_eq!(base_size_from_skill(80), 30.0);
        assert_eq!(base_size_from_skill(100), 30.0);
        assert_eq!(base_size_from_skill(u32::MAX), 30.0);
    }

    #[test]
    fn base_size_monotonic_non_decreasing() {
        let mut prev = base_size_from_skill(0);
        for skill in 1..=80 {
            let cur = base_size_from_skill(skill);
            assert!(cur >= prev, "skill {} shrank the zone: {} < {}", skill, cur, prev);
            prev = cur;
        }
    }

    #[test]
    fn zone_width_at_max_skill_per_difficulty() {
        let width = |d: Difficulty| GreenZone::new(0.0, 80, d).size();
        assert_eq!(width(Difficulty::Easy), 24.0);
        assert_eq!(width(Difficulty::Medium), 15.0);
        assert!((width(Difficulty::Hard) - 6.0).abs() < 1e-4);
    }

    #[test]
    fn skill_40_medium_scenario() {
        // floor(8 + 22*sqrt(0.5)) = floor(23.556) = 23, width = 11.5.
        let zone = GreenZone::new(0.0, 40, Difficulty::Medium);
        assert_eq!(zone.size(), 11.5);
        assert_eq!(zone.distance(5.0), 0.0);
        assert!(zone.contains(5.0));
    }

    #[test]
    fn distance_zero_inside_and_increasing_outside() {
        let zone = GreenZone::with_size(-10.0, 20.0);
        for a in [-10.0, -5.0, 0.0, 10.0] {
            assert_eq!(zone.distance(a), 0.0);
        }
        assert!(zone.distance(-11.0) > 0.0);
        assert!(zone.distance(-20.0) > zone.distance(-11.0));
        assert!(zone.distance(11.0) > 0.0);
        assert!(zone.distance(30.0) > zone.distance(11.0));
    }

    #[test]
    fn turn_strength_falls_off_linearly() {
        let zone = GreenZone::with_size(0.0, 10.0);
        assert_eq!(zone.turn_strength(5.0), 1.0);
        assert!((zone.turn_strength(55.0) - 0.5).abs() < 1e-5);
        assert_eq!(zone.turn_strength(100.0 + 10.0), 0.0);
    }

    #[test]
    fn pointer_degrees_up_is_zero_clockwise_positive() {
        assert!((pointer_degrees(0.0, -1.0) - 0.0).abs() < 1e-4);
        assert!((pointer_degrees(1.0, 0.0) - 90.0).abs() < 1e-4);
        assert!((pointer_degrees(-1.0, 0.0) - -90.0).abs() < 1e-4);
        // 45° to the upper right.
        assert!((pointer_degrees(1.0, -1.0) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn resisted_angle_unclamped_inside_zone() {
        let zone = GreenZone::with_size(20.0, 10.0);
        // Inside the zone: strength 1, so the raw angle passes through.
        assert_eq!(resisted_pin_angle(25.0, &zone), 25.0);
    }

    #[test]
    fn resisted_angle_clamps_far_from_zone() {
        let zone = GreenZone::with_size(-45.0, 5.0);
        // Raw angle 80° is 120° past the zone end at -40°, strength is 0 at
        // >=90° away, so the pick barely deflects.
        let clamped = resisted_pin_angle(80.0, &zone);
        assert!(clamped < 80.0);
        assert!(clamped >= 0.0);

        // At >= 90° from the zone the pick refuses to move at all.
        let frozen = resisted_pin_angle(60.0, &GreenZone::with_size(-89.0, 1.0));
        assert_eq!(frozen, 0.0);
    }
}
