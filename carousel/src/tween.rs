/// An eased move of the proxy offset from `from` to `to`.
///
/// The host clock drives it: nothing advances until the surface is ticked. The duration is at
/// least 1ms so that progress is always defined.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms).min(self.duration_ms);
        elapsed as f32 / self.duration_ms as f32
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.remaining_ms(now_ms) == 0
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        (self.start_ms + self.duration_ms).saturating_sub(now_ms)
    }

    /// The offset at `now_ms`; exactly `to` once done, so a settled proxy lands on the page.
    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Continues from the current sample toward `new_to`, keeping the easing.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), new_to, now_ms, duration_ms, self.easing);
    }
}

/// Easing curves for programmatic scrolls and release deceleration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Fast start, gentle landing. Reads like a scroll view coming to rest.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` to eased progress. Both ends are fixed: 0 → 0, 1 → 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t.powi(3),
            Self::EaseInOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}
