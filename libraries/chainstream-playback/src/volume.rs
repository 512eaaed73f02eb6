//! Volume control
//!
//! Level is 0-100 and maps linearly onto the sink's 0.0-1.0 gain.

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller, clamping `level` to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level, clamped to 100
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
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

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Gain handed to the audio sink
    ///
    /// Returns 0.0 if muted
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            f32::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_volume_level() {
        let mut vol = Volume::new(50);
        vol.set_level(75);
        assert_eq!(vol.level(), 75);

        // Clamp to 100
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn new_clamps_too() {
        assert_eq!(Volume::new(255).level(), 100);
    }

    #[test]
    fn mute_preserves_level() {
        let mut vol = Volume::new(80);

        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 80);
        assert_eq!(vol.gain(), 0.0);

        vol.unmute();
        assert!((vol.gain() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn gain_is_linear() {
        assert_eq!(Volume::new(0).gain(), 0.0);
        assert!((Volume::new(100).gain() - 1.0).abs() < f32::EPSILON);
        assert!((Volume::new(50).gain() - 0.5).abs() < f32::EPSILON);
    }
}
