/// Intro burst sequencing
///
/// On launch the portfolio plays a one-shot "firework": a handful of
/// artwork thumbnails fly out from the window center to a circle, spinning
/// and scaling up as they go, over a black overlay that then fades away
/// for good. The sequencing lives in an explicit state machine polled from
/// a tick subscription, so teardown is just dropping the subscription and
/// no stale timer can fire into a dead view.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Delay before the overlay appears, guarding against a flash before the
/// first layout pass has run.
pub const SHOW_DELAY: Duration = Duration::from_millis(100);

/// How long the burst stays up once shown. Chosen to outlast the last
/// item's staggered start plus its own flight time.
pub const VISIBLE_FOR: Duration = Duration::from_secs(5);

/// Flight time of a single thumbnail, center to circle.
pub const ITEM_DURATION: Duration = Duration::from_secs(2);

/// Start delay between consecutive thumbnails.
pub const ITEM_STAGGER: Duration = Duration::from_millis(200);

/// Overlay fade-in and fade-out time.
pub const FADE: Duration = Duration::from_millis(500);

/// Lifecycle of the intro overlay. One-directional; never replayed
/// within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Mounted, overlay not shown yet
    Pending,
    /// Burst on screen
    Playing,
    /// Burst over, overlay fading out or gone
    Finished,
}

/// Animated pose of one burst thumbnail, relative to the window center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstFrame {
    /// Offset from center, logical pixels
    pub x: f32,
    pub y: f32,
    /// 0.0 at launch, 1.0 at rest
    pub scale: f32,
    /// Radians, reaches one full turn at rest
    pub rotation: f32,
}

/// The one-shot intro state machine.
pub struct IntroSequencer {
    mounted_at: Instant,
    phase: IntroPhase,
    cancelled: bool,
}

impl IntroSequencer {
    /// Arm the sequencer at mount time. Nothing happens until `poll`.
    pub fn new(mounted_at: Instant) -> Self {
        Self {
            mounted_at,
            phase: IntroPhase::Pending,
            cancelled: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// When the overlay appears.
    fn show_at(&self) -> Instant {
        self.mounted_at + SHOW_DELAY
    }

    /// When the overlay starts its final fade.
    fn hide_at(&self) -> Instant {
        self.show_at() + VISIBLE_FOR
    }

    /// Advance the state machine to `now`.
    ///
    /// Called from the tick subscription. A single late poll may cross
    /// both thresholds at once; the phase only ever moves forward.
    pub fn poll(&mut self, now: Instant) {
        if self.cancelled {
            return;
        }

        if now >= self.hide_at() {
            self.phase = IntroPhase::Finished;
        } else if now >= self.show_at() {
            self.phase = IntroPhase::Playing;
        }
    }

    /// Tear the sequencer down. Every later `poll` is a no-op, so a tick
    /// already in flight cannot mutate state after the view is gone.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Opacity of the black overlay backdrop, 0.0 to 1.0.
    pub fn overlay_alpha(&self, now: Instant) -> f32 {
        match self.phase {
            IntroPhase::Pending => 0.0,
            IntroPhase::Playing => ramp(self.show_at(), now),
            IntroPhase::Finished => 1.0 - ramp(self.hide_at(), now),
        }
    }

    /// True once the fade-out has completed and the overlay can unmount.
    /// The tick subscription is dropped at this point.
    pub fn is_retired(&self, now: Instant) -> bool {
        self.cancelled
            || (self.phase == IntroPhase::Finished && now >= self.hide_at() + FADE)
    }

    /// Pose of burst item `index` at `now`.
    ///
    /// Items launch `ITEM_STAGGER` apart and ease out from the center
    /// (scale 0, no rotation) to their slot on the circle (scale 1, one
    /// full turn). `divisor` is the number of angular slots the circle is
    /// divided into.
    pub fn item_frame(
        &self,
        now: Instant,
        index: usize,
        divisor: usize,
        radius: f32,
    ) -> BurstFrame {
        let progress = match self.phase {
            IntroPhase::Pending => 0.0,
            _ => {
                let start = self.show_at() + ITEM_STAGGER * index as u32;
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / ITEM_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        };

        let eased = ease_out_cubic(progress);
        let angle = target_angle(index, divisor);

        BurstFrame {
            x: angle.cos() * radius * eased,
            y: angle.sin() * radius * eased,
            scale: eased,
            rotation: TAU * eased,
        }
    }
}

/// Resting angle of burst item `index` on a circle split into `divisor`
/// slots.
pub fn target_angle(index: usize, divisor: usize) -> f32 {
    index as f32 * (TAU / divisor.max(1) as f32)
}

/// Linear 0-to-1 ramp over `FADE`, starting at `from`.
fn ramp(from: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(from);
    (elapsed.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> (IntroSequencer, Instant) {
        let mount = Instant::now();
        (IntroSequencer::new(mount), mount)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_phase_transitions_in_order() {
        let (mut intro, mount) = sequencer();
        assert_eq!(intro.phase(), IntroPhase::Pending);

        intro.poll(mount + Duration::from_millis(99));
        assert_eq!(intro.phase(), IntroPhase::Pending);

        intro.poll(mount + Duration::from_millis(100));
        assert_eq!(intro.phase(), IntroPhase::Playing);

        intro.poll(mount + Duration::from_millis(5099));
        assert_eq!(intro.phase(), IntroPhase::Playing);

        intro.poll(mount + Duration::from_millis(5100));
        assert_eq!(intro.phase(), IntroPhase::Finished);
    }

    #[test]
    fn test_late_poll_jumps_straight_to_finished() {
        let (mut intro, mount) = sequencer();
        intro.poll(mount + Duration::from_secs(60));
        assert_eq!(intro.phase(), IntroPhase::Finished);
    }

    #[test]
    fn test_cancel_before_show_freezes_the_machine() {
        let (mut intro, mount) = sequencer();
        intro.cancel();

        // Both scheduled transitions are already "armed"; neither fires
        intro.poll(mount + Duration::from_millis(100));
        intro.poll(mount + Duration::from_secs(10));
        assert_eq!(intro.phase(), IntroPhase::Pending);
        assert!(intro.is_retired(mount));
    }

    #[test]
    fn test_overlay_fades_in_and_out() {
        let (mut intro, mount) = sequencer();
        assert_close(intro.overlay_alpha(mount), 0.0);

        intro.poll(mount + Duration::from_millis(100));
        assert_close(intro.overlay_alpha(mount + Duration::from_millis(100)), 0.0);
        assert_close(intro.overlay_alpha(mount + Duration::from_millis(350)), 0.5);
        assert_close(intro.overlay_alpha(mount + Duration::from_millis(1000)), 1.0);

        intro.poll(mount + Duration::from_millis(5100));
        assert_close(intro.overlay_alpha(mount + Duration::from_millis(5100)), 1.0);
        assert_close(intro.overlay_alpha(mount + Duration::from_millis(5350)), 0.5);
        assert!(!intro.is_retired(mount + Duration::from_millis(5599)));
        assert!(intro.is_retired(mount + Duration::from_millis(5600)));
    }

    #[test]
    fn test_target_angles_for_six_slots() {
        let sixth = TAU / 6.0;
        for index in 0..6 {
            assert_close(target_angle(index, 6), index as f32 * sixth);
        }
    }

    #[test]
    fn test_resting_positions_on_desktop_circle() {
        let (mut intro, mount) = sequencer();
        intro.poll(mount + Duration::from_millis(100));

        // Well past the last item's flight: everything is at rest
        let done = mount + Duration::from_secs(5);
        let expected = [
            (200.0, 0.0),
            (100.0, 173.205),
            (-100.0, 173.205),
            (-200.0, 0.0),
            (-100.0, -173.205),
            (100.0, -173.205),
        ];
        for (index, (x, y)) in expected.iter().enumerate() {
            let frame = intro.item_frame(done, index, 6, 200.0);
            assert_close(frame.x, *x);
            assert_close(frame.y, *y);
            assert_close(frame.scale, 1.0);
            assert_close(frame.rotation, TAU);
        }
    }

    #[test]
    fn test_items_launch_staggered_from_center() {
        let (mut intro, mount) = sequencer();
        intro.poll(mount + Duration::from_millis(100));

        // Item 3 starts 600 ms after the overlay shows
        let at_launch = mount + Duration::from_millis(700);
        let frame = intro.item_frame(at_launch, 3, 6, 200.0);
        assert_close(frame.scale, 0.0);
        assert_close(frame.x, 0.0);
        assert_close(frame.y, 0.0);

        // Item 0 is already 30% through its flight by then
        let frame = intro.item_frame(at_launch, 0, 6, 200.0);
        assert!(frame.scale > 0.0);
    }

    #[test]
    fn test_nothing_moves_while_pending() {
        let (intro, mount) = sequencer();
        let frame = intro.item_frame(mount + Duration::from_millis(50), 0, 6, 200.0);
        assert_close(frame.scale, 0.0);
        assert_close(frame.rotation, 0.0);
    }
}
