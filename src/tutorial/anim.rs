use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Easing curve applied to normalized animation progress in `[0, 1]`.
pub type EasingFn = fn(f32) -> f32;

pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic accelerate curve: slow start, fast finish.
pub fn accel(t: f32) -> f32 {
    t * t
}

/// Shared mutable float driven by animations and observable by the host's
/// renderer. Clones refer to the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct AnimatedFloat {
    value: Arc<Mutex<f32>>,
}

impl AnimatedFloat {
    pub fn new(value: f32) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
        }
    }

    pub fn value(&self) -> f32 {
        self.value.lock().map(|v| *v).unwrap_or_default()
    }

    pub fn set(&self, value: f32) {
        if let Ok(mut v) = self.value.lock() {
            *v = value;
        }
    }
}

#[derive(Debug, Clone)]
struct FloatDrive {
    value: AnimatedFloat,
    // Captured when the animation starts, so the drive always runs from the
    // value's current position rather than a fixed origin.
    from: f32,
    to: f32,
    easing: EasingFn,
}

/// Builder for a timed property animation, mirroring a pending-animation
/// collect-then-build flow: accumulate float drives, then `build` a startable
/// animation.
#[derive(Debug, Clone)]
pub struct PendingAnimation {
    duration: Duration,
    drives: Vec<FloatDrive>,
}

impl PendingAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            drives: Vec::new(),
        }
    }

    pub fn set_float(mut self, value: &AnimatedFloat, to: f32, easing: EasingFn) -> Self {
        self.drives.push(FloatDrive {
            value: value.clone(),
            from: 0.0,
            to,
            easing,
        });
        self
    }

    pub fn build(self) -> TutorialAnim {
        TutorialAnim {
            duration: self.duration,
            drives: self.drives,
            started: None,
            finished: false,
        }
    }
}

/// A timed animation advanced by explicit `tick(now)` calls from the host's
/// event queue.
#[derive(Debug, Clone)]
pub struct TutorialAnim {
    duration: Duration,
    drives: Vec<FloatDrive>,
    started: Option<Instant>,
    finished: bool,
}

impl TutorialAnim {
    pub fn start(&mut self, now: Instant) {
        if self.started.is_some() {
            return;
        }
        for drive in &mut self.drives {
            drive.from = drive.value.value();
        }
        self.started = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `now`. Returns `true` on the tick that completes the
    /// animation; later ticks return `false`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }
        let started = match self.started {
            Some(started) => started,
            None => return false,
        };
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started);
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        for drive in &self.drives {
            let eased = (drive.easing)(progress);
            drive.value.set(drive.from + (drive.to - drive.from) * eased);
        }
        if progress >= 1.0 {
            self.finished = true;
            return true;
        }
        false
    }
}

/// Handle owning the controller's single in-flight animation.
///
/// Cancelling stops all further value updates; the drive values stay wherever
/// the last tick left them and the completion tick never fires.
#[derive(Debug, Clone)]
pub struct RunningAnim {
    anim: TutorialAnim,
    cancelled: bool,
}

impl RunningAnim {
    pub fn wrap(anim: TutorialAnim) -> Self {
        Self {
            anim,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.anim.is_finished()
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        if self.cancelled {
            return false;
        }
        self.anim.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accel_curve_shape() {
        assert_eq!(accel(0.0), 0.0);
        assert_eq!(accel(1.0), 1.0);
        assert!(accel(0.5) < linear(0.5));
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            assert!(accel(t) > prev);
            prev = accel(t);
        }
    }

    #[test]
    fn drives_from_current_value_to_target() {
        let shift = AnimatedFloat::new(0.25);
        let mut anim = PendingAnimation::new(Duration::from_millis(300))
            .set_float(&shift, 1.0, linear)
            .build();
        let start = Instant::now();
        anim.start(start);

        assert!(!anim.tick(start + Duration::from_millis(150)));
        let midway = shift.value();
        assert!(midway > 0.25 && midway < 1.0);

        assert!(anim.tick(start + Duration::from_millis(300)));
        assert_eq!(shift.value(), 1.0);
        assert!(anim.is_finished());
        assert!(!anim.tick(start + Duration::from_millis(400)));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let shift = AnimatedFloat::new(0.0);
        let mut anim = PendingAnimation::new(Duration::ZERO)
            .set_float(&shift, 1.0, accel)
            .build();
        let start = Instant::now();
        anim.start(start);
        assert!(anim.tick(start));
        assert_eq!(shift.value(), 1.0);
    }

    #[test]
    fn cancelled_handle_stops_updating() {
        let shift = AnimatedFloat::new(0.0);
        let mut anim = PendingAnimation::new(Duration::from_millis(300))
            .set_float(&shift, 1.0, linear)
            .build();
        let start = Instant::now();
        anim.start(start);
        let mut running = RunningAnim::wrap(anim);

        running.tick(start + Duration::from_millis(150));
        let at_cancel = shift.value();
        running.cancel();

        assert!(!running.tick(start + Duration::from_millis(300)));
        assert_eq!(shift.value(), at_cancel);
        assert!(!running.is_finished());
    }
}
