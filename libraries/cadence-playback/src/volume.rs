//! Output level and mute
//!
//! The level is what the user sees (0-100). The primitive gets a linear gain
//! on a decibel curve, so equal steps on the slider sound like equal steps.

/// Attenuation at level 1; level 0 is silence
pub const FLOOR_DB: f32 = -60.0;

/// Highest user-facing level
pub const MAX_LEVEL: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    level: u8,
    muted: bool,
}

impl Volume {
    /// Levels above [`MAX_LEVEL`] are clamped
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(MAX_LEVEL),
            muted: false,
        }
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(MAX_LEVEL);
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Attenuation in dB, `None` when nothing should be heard
    pub fn decibels(&self) -> Option<f32> {
        if self.muted || self.level == 0 {
            return None;
        }
        let fraction = f32::from(self.level) / f32::from(MAX_LEVEL);
        Some((1.0 - fraction) * FLOOR_DB)
    }

    /// Linear gain for the primitive
    pub fn gain(&self) -> f32 {
        self.decibels()
            .map_or(0.0, |db| 10.0_f32.powf(db / 20.0))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_clamped() {
        assert_eq!(Volume::new(150).level(), MAX_LEVEL);

        let mut volume = Volume::new(10);
        volume.set_level(u8::MAX);
        assert_eq!(volume.level(), MAX_LEVEL);
    }

    #[test]
    fn decibel_curve() {
        assert_eq!(Volume::new(0).decibels(), None);
        assert_eq!(Volume::new(100).decibels(), Some(0.0));
        assert!((Volume::new(50).decibels().unwrap() - -30.0).abs() < 1e-4);
        assert!((Volume::new(80).gain() - 0.251).abs() < 1e-3);
    }

    #[test]
    fn gain_rises_with_level() {
        let gains: Vec<f32> = (0..=MAX_LEVEL).map(|l| Volume::new(l).gain()).collect();
        assert_eq!(gains[0], 0.0);
        assert!((gains[100] - 1.0).abs() < 1e-6);
        assert!(gains.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn mute_keeps_level() {
        let mut volume = Volume::new(60);
        volume.mute();
        assert_eq!(volume.gain(), 0.0);
        assert_eq!(volume.decibels(), None);
        assert_eq!(volume.level(), 60);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert!(volume.gain() > 0.0);
    }
}
