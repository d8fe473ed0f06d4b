use minmins_common::{HapticDriver, VibePattern, info};

pub struct SimulatorHaptic;

impl HapticDriver for SimulatorHaptic {
    type Error = core::convert::Infallible;

    async fn vibrate(&mut self, pattern: VibePattern) -> Result<(), Self::Error> {
        info!(
            "[Simulator Haptic] {:?}, segments {:?} ms",
            pattern,
            pattern.segments()
        );
        Ok(())
    }
}
