/// Haptic collaborator: fires one discrete pulse per call.
pub trait ImpactFeedback {
    fn impact_occurred(&mut self, intensity: f64);
}

/// Stand-in for hosts without a haptic engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl ImpactFeedback for LogFeedback {
    fn impact_occurred(&mut self, intensity: f64) {
        log::info!("Impact feedback at intensity {:.2}", intensity);
    }
}

impl<F: FnMut(f64)> ImpactFeedback for F {
    fn impact_occurred(&mut self, intensity: f64) {
        self(intensity)
    }
}
