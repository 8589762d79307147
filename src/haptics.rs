// Haptic feedback capability
// Best effort only: a missing or failing vibrator never stops playback

use std::time::Duration;

use crate::error::CapabilityUnavailable;

pub trait Haptics: Send + Sync {
    fn vibrate(&self, duration: Duration) -> Result<(), CapabilityUnavailable>;

    /// Pulse if possible; returns whether it happened
    fn try_vibrate(&self, duration: Duration) -> bool {
        match self.vibrate(duration) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("[Haptics] {}", e);
                false
            }
        }
    }
}

/// For platforms without a vibrator
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, _duration: Duration) -> Result<(), CapabilityUnavailable> {
        Err(CapabilityUnavailable("vibrator"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_haptics_reports_unavailable() {
        let haptics = NoHaptics;
        assert_eq!(
            haptics.vibrate(Duration::from_millis(40)),
            Err(CapabilityUnavailable("vibrator"))
        );
        assert!(!haptics.try_vibrate(Duration::from_millis(40)));
    }
}
