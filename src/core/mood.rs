//! Mood classification: time of day and the scalar layout parameters.

use crate::core::layout::lerp;
use crate::schema::mood::Mood;
use crate::schema::scene::TimeOfDay;

/// Orb count never drops below this.
pub const MIN_ORBS: usize = 4;

/// Step function over arousal, checked in ascending threshold order.
pub fn time_of_day(arousal: f64) -> TimeOfDay {
    if arousal < -0.25 {
        TimeOfDay::Dawn
    } else if arousal < 0.35 {
        TimeOfDay::Day
    } else if arousal < 0.75 {
        TimeOfDay::Dusk
    } else {
        TimeOfDay::Night
    }
}

/// Scalars derived from the mood that shape the scene layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub time_of_day: TimeOfDay,
    /// Higher arousal brings the camera closer.
    pub camera_distance: f64,
    pub totem_height: f64,
    pub orb_count: usize,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub pulse_amplitude: f64,
    pub pulse_speed: f64,
    pub water_radius: f64,
}

impl LayoutParams {
    pub fn from_mood(mood: &Mood) -> Self {
        let a01 = mood.arousal01();
        Self {
            time_of_day: time_of_day(mood.arousal),
            camera_distance: lerp(10.0, 6.0, a01),
            totem_height: lerp(1.2, 3.8, a01),
            orb_count: orb_count(mood.nostalgia),
            orbit_radius: lerp(6.0, 12.0, a01),
            orbit_speed: 0.25 + 0.55 * a01,
            pulse_amplitude: 0.1 + 0.2 * a01,
            pulse_speed: 0.35 + 0.35 * a01,
            water_radius: lerp(8.0, 14.0, a01),
        }
    }
}

/// `lerp(6, 16, nostalgia)` truncated toward zero, floored at [`MIN_ORBS`].
pub fn orb_count(nostalgia: f64) -> usize {
    // `as` saturates: NaN and negatives become 0 before the floor applies.
    let raw = lerp(6.0, 16.0, nostalgia).trunc() as usize;
    raw.max(MIN_ORBS)
}
