//! The dice control: a slot-machine style picker.
//!
//! ## State Machine
//!
//! ```text
//!            press (eligible empty) ──► Idle (unchanged)
//!   Idle ──► press ──► Animating ──tick (interval < max)──► Animating
//!                          │
//!                          └──tick (interval >= max)──► Idle (reveal)
//! ```
//!
//! The final map is drawn when the animation starts and only shown once
//! the timer has slowed down past the maximum interval. Flicker frames are
//! separate draws and may land on the committed map early; that is only
//! cosmetic.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::item::MapId;
use crate::pool::MapPool;
use crate::timer::Timer;
use crate::{CoreError, CoreResult};

/// Deceleration policy for the animation, in milliseconds.
///
/// Only built through [`AnimationSchedule::new`] or `Default`, so a
/// schedule always reaches its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSchedule {
    min_ms: u32,
    step_ms: u32,
    max_ms: u32,
}

impl Default for AnimationSchedule {
    fn default() -> Self {
        Self {
            min_ms: 50,
            step_ms: 20,
            max_ms: 500,
        }
    }
}

impl AnimationSchedule {
    /// Creates a schedule that is guaranteed to terminate.
    pub fn new(min_ms: u32, step_ms: u32, max_ms: u32) -> CoreResult<Self> {
        if min_ms == 0 {
            return Err(CoreError::InvalidSchedule("minimum interval must be positive".into()));
        }
        if step_ms == 0 {
            return Err(CoreError::InvalidSchedule("step must be positive".into()));
        }
        if min_ms > max_ms {
            return Err(CoreError::InvalidSchedule(format!(
                "minimum interval {} exceeds maximum {}",
                min_ms, max_ms
            )));
        }
        Ok(Self {
            min_ms,
            step_ms,
            max_ms,
        })
    }

    pub fn min_ms(&self) -> u32 {
        self.min_ms
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    pub fn max_ms(&self) -> u32 {
        self.max_ms
    }

    /// Every interval the timer is armed with, in order.
    ///
    /// The last value is the delay before the reveal tick. With the
    /// defaults this is 50, 70, ..., 490, 510.
    pub fn intervals(&self) -> impl Iterator<Item = u32> + '_ {
        std::iter::successors(Some(self.min_ms), move |&ms| {
            (ms < self.max_ms).then(|| ms.saturating_add(self.step_ms))
        })
    }

    /// Number of ticks that show a flicker frame before the reveal.
    pub fn flicker_ticks(&self) -> usize {
        self.intervals().count() - 1
    }

    /// Wall time from the press to the reveal.
    pub fn total_duration(&self) -> Duration {
        self.intervals().map(|ms| Duration::from_millis(ms as u64)).sum()
    }
}

/// What a press on an idle picker does while it shows a revealed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealClick {
    /// Go back to the ready glyph; the next press animates.
    #[default]
    Reset,
    /// Start another animation straight away.
    Reroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    Idle,
    Animating,
}

/// What the picker control currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// The static dice glyph.
    Ready,
    /// A random frame during the animation.
    Flicker(MapId),
    /// The committed result after the animation.
    Revealed(MapId),
}

/// Result of pressing the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// An animation started with this committed result.
    Started { committed: MapId, eligible: usize },
    /// Every map is excluded; nothing changed.
    NoEligible,
    /// An animation is already running.
    Busy,
    /// The revealed map was cleared back to the ready glyph.
    Reset,
}

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A flicker frame was shown; the timer was re-armed.
    Flicker { shown: MapId, next: Duration },
    /// The animation finished on the committed map.
    Revealed(MapId),
    /// No animation is running.
    Stale,
}

#[derive(Debug, Clone)]
struct Animation {
    eligible: Vec<MapId>,
    committed: MapId,
    interval_ms: u32,
}

/// Picker state owned by the application.
#[derive(Debug, Clone)]
pub struct Picker {
    schedule: AnimationSchedule,
    reveal_click: RevealClick,
    animation: Option<Animation>,
    last_pick: Option<MapId>,
    display: Display,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(AnimationSchedule::default(), RevealClick::default())
    }
}

impl Picker {
    pub fn new(schedule: AnimationSchedule, reveal_click: RevealClick) -> Self {
        Self {
            schedule,
            reveal_click,
            animation: None,
            last_pick: None,
            display: Display::Ready,
        }
    }

    pub fn schedule(&self) -> AnimationSchedule {
        self.schedule
    }

    pub fn mode(&self) -> PickerMode {
        if self.animation.is_some() {
            PickerMode::Animating
        } else {
            PickerMode::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn display(&self) -> Display {
        self.display
    }

    /// The committed result of the running animation, or the last revealed map.
    pub fn committed(&self) -> Option<MapId> {
        self.animation.as_ref().map(|a| a.committed).or(self.last_pick)
    }

    /// Interval the timer is currently armed with.
    pub fn interval_ms(&self) -> Option<u32> {
        self.animation.as_ref().map(|a| a.interval_ms)
    }

    /// Handles a press on the picker control.
    pub fn press<R, T>(&mut self, pool: &MapPool, rng: &mut R, timer: &mut T) -> PressOutcome
    where
        R: Rng + ?Sized,
        T: Timer + ?Sized,
    {
        if self.animation.is_some() {
            return PressOutcome::Busy;
        }

        if matches!(self.display, Display::Revealed(_)) && self.reveal_click == RevealClick::Reset {
            self.display = Display::Ready;
            tracing::debug!("Picker reset to ready");
            return PressOutcome::Reset;
        }

        let eligible = pool.eligible();
        let Some(&committed) = eligible.choose(rng) else {
            tracing::debug!("Picker pressed with every map excluded");
            return PressOutcome::NoEligible;
        };

        let interval_ms = self.schedule.min_ms;
        timer.arm(millis(interval_ms));

        let count = eligible.len();
        self.animation = Some(Animation {
            eligible,
            committed,
            interval_ms,
        });
        tracing::debug!("Animation started over {} maps, committed {}", count, committed);

        PressOutcome::Started {
            committed,
            eligible: count,
        }
    }

    /// Handles one timer tick.
    pub fn tick<R, T>(&mut self, rng: &mut R, timer: &mut T) -> TickOutcome
    where
        R: Rng + ?Sized,
        T: Timer + ?Sized,
    {
        let Some(animation) = self.animation.as_mut() else {
            return TickOutcome::Stale;
        };

        if animation.interval_ms < self.schedule.max_ms {
            let shown = animation.eligible[rng.gen_range(0..animation.eligible.len())];
            animation.interval_ms = animation.interval_ms.saturating_add(self.schedule.step_ms);
            let next = millis(animation.interval_ms);
            timer.arm(next);
            self.display = Display::Flicker(shown);
            return TickOutcome::Flicker { shown, next };
        }

        let committed = animation.committed;
        timer.disarm();
        self.animation = None;
        self.last_pick = Some(committed);
        self.display = Display::Revealed(committed);
        tracing::debug!("Animation finished on {}", committed);

        TickOutcome::Revealed(committed)
    }
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(ms as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualTimer, TimerCall};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOP: [&str; 6] = ["Abyss", "Ascent", "Bind", "Breeze", "Corrode", "Fracture"];
    const BOTTOM: [&str; 6] = ["Haven", "Icebox", "Lotus", "Pearl", "Split", "Sunset"];

    fn twelve_maps() -> MapPool {
        MapPool::from_rows([TOP, BOTTOM]).unwrap()
    }

    /// Ticks until the reveal, collecting flicker frames.
    fn run_to_reveal(
        picker: &mut Picker,
        rng: &mut StdRng,
        timer: &mut ManualTimer,
    ) -> (Vec<MapId>, MapId) {
        let mut frames = Vec::new();
        for _ in 0..1000 {
            match picker.tick(rng, timer) {
                TickOutcome::Flicker { shown, .. } => frames.push(shown),
                TickOutcome::Revealed(id) => return (frames, id),
                TickOutcome::Stale => panic!("tick while idle"),
            }
        }
        panic!("animation never finished");
    }

    #[test]
    fn test_default_schedule_sequence() {
        let schedule = AnimationSchedule::default();
        let intervals: Vec<u32> = schedule.intervals().collect();
        assert_eq!(intervals.first(), Some(&50));
        assert_eq!(intervals[1], 70);
        assert_eq!(intervals[intervals.len() - 2], 490);
        assert_eq!(intervals.last(), Some(&510));
        assert_eq!(schedule.flicker_ticks(), 23);
        assert_eq!(schedule.total_duration(), Duration::from_millis(6720));
    }

    #[test]
    fn test_invalid_schedules_rejected() {
        assert!(AnimationSchedule::new(0, 20, 500).is_err());
        assert!(AnimationSchedule::new(50, 0, 500).is_err());
        assert!(AnimationSchedule::new(600, 20, 500).is_err());
        assert!(AnimationSchedule::new(500, 20, 500).is_ok());
    }

    #[test]
    fn test_schedule_from_new_keeps_values() {
        let schedule = AnimationSchedule::new(30, 10, 90).unwrap();
        assert_eq!(
            (schedule.min_ms(), schedule.step_ms(), schedule.max_ms()),
            (30, 10, 90)
        );
        assert_eq!(AnimationSchedule::default().step_ms(), 20);
    }

    #[test]
    fn test_zero_step_never_reaches_picker() {
        let err = AnimationSchedule::new(50, 0, 500).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSchedule(_)));

        // The only schedules a picker can hold are bounded.
        let pool = twelve_maps();
        let schedule = AnimationSchedule::new(50, 1, 500).unwrap();
        let mut picker = Picker::new(schedule, RevealClick::Reset);
        let mut rng = StdRng::seed_from_u64(8);
        let mut timer = ManualTimer::new();
        picker.press(&pool, &mut rng, &mut timer);
        let (frames, _) = run_to_reveal(&mut picker, &mut rng, &mut timer);
        assert_eq!(frames.len(), schedule.flicker_ticks());
        assert_eq!(frames.len(), 450);
    }

    #[test]
    fn test_full_run_reveals_committed() {
        let pool = twelve_maps();
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut timer = ManualTimer::new();

        let outcome = picker.press(&pool, &mut rng, &mut timer);
        let PressOutcome::Started { committed, eligible } = outcome else {
            panic!("animation did not start");
        };
        assert_eq!(eligible, 12);
        assert_eq!(picker.mode(), PickerMode::Animating);
        assert_eq!(picker.committed(), Some(committed));

        let (frames, revealed) = run_to_reveal(&mut picker, &mut rng, &mut timer);
        assert_eq!(frames.len(), 23);
        assert!(frames.iter().all(|id| pool.get(*id).is_some()));
        assert_eq!(revealed, committed);
        assert_eq!(picker.mode(), PickerMode::Idle);
        assert_eq!(picker.display(), Display::Revealed(committed));
        assert_eq!(timer.armed(), None);
    }

    #[test]
    fn test_timer_follows_schedule() {
        let pool = twelve_maps();
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        run_to_reveal(&mut picker, &mut rng, &mut timer);

        let mut expected: Vec<TimerCall> = picker
            .schedule()
            .intervals()
            .map(|ms| TimerCall::Arm(Duration::from_millis(ms as u64)))
            .collect();
        expected.push(TimerCall::Disarm);
        assert_eq!(timer.calls(), expected.as_slice());
    }

    #[test]
    fn test_single_eligible_map() {
        let mut pool = twelve_maps();
        for i in 0..11 {
            pool.toggle(MapId(i));
        }
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut timer = ManualTimer::new();

        assert_eq!(
            picker.press(&pool, &mut rng, &mut timer),
            PressOutcome::Started {
                committed: MapId(11),
                eligible: 1
            }
        );
        let (frames, revealed) = run_to_reveal(&mut picker, &mut rng, &mut timer);
        assert!(frames.iter().all(|id| *id == MapId(11)));
        assert_eq!(revealed, MapId(11));
    }

    #[test]
    fn test_all_excluded_is_noop() {
        let mut pool = twelve_maps();
        for i in 0..12 {
            pool.toggle(MapId(i));
        }
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut timer = ManualTimer::new();

        assert_eq!(picker.press(&pool, &mut rng, &mut timer), PressOutcome::NoEligible);
        assert_eq!(picker.mode(), PickerMode::Idle);
        assert_eq!(picker.display(), Display::Ready);
        assert!(timer.calls().is_empty());
        assert_eq!(picker.tick(&mut rng, &mut timer), TickOutcome::Stale);
    }

    #[test]
    fn test_all_excluded_keeps_previous_reveal() {
        let mut pool = twelve_maps();
        let mut picker = Picker::new(AnimationSchedule::default(), RevealClick::Reroll);
        let mut rng = StdRng::seed_from_u64(9);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        let (_, revealed) = run_to_reveal(&mut picker, &mut rng, &mut timer);

        for i in 0..12 {
            pool.toggle(MapId(i));
        }
        assert_eq!(picker.press(&pool, &mut rng, &mut timer), PressOutcome::NoEligible);
        assert_eq!(picker.display(), Display::Revealed(revealed));
    }

    #[test]
    fn test_press_while_animating_is_busy() {
        let pool = twelve_maps();
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        let committed = picker.committed();
        assert_eq!(picker.press(&pool, &mut rng, &mut timer), PressOutcome::Busy);
        assert_eq!(picker.committed(), committed);
        assert_eq!(picker.interval_ms(), Some(50));
    }

    #[test]
    fn test_exclusion_mid_animation_uses_start_subset() {
        let mut pool = twelve_maps();
        for i in 1..12 {
            pool.toggle(MapId(i));
        }
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        pool.toggle(MapId(0));
        let (frames, revealed) = run_to_reveal(&mut picker, &mut rng, &mut timer);
        assert!(frames.iter().all(|id| *id == MapId(0)));
        assert_eq!(revealed, MapId(0));
    }

    #[test]
    fn test_reveal_click_reset() {
        let pool = twelve_maps();
        let mut picker = Picker::new(AnimationSchedule::default(), RevealClick::Reset);
        let mut rng = StdRng::seed_from_u64(2);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        run_to_reveal(&mut picker, &mut rng, &mut timer);

        assert_eq!(picker.press(&pool, &mut rng, &mut timer), PressOutcome::Reset);
        assert_eq!(picker.display(), Display::Ready);
        assert!(matches!(
            picker.press(&pool, &mut rng, &mut timer),
            PressOutcome::Started { .. }
        ));
    }

    #[test]
    fn test_default_press_after_reveal_resets() {
        let pool = twelve_maps();
        let mut picker = Picker::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        run_to_reveal(&mut picker, &mut rng, &mut timer);
        let calls = timer.calls().len();

        assert_eq!(picker.press(&pool, &mut rng, &mut timer), PressOutcome::Reset);
        assert_eq!(picker.display(), Display::Ready);
        assert_eq!(picker.mode(), PickerMode::Idle);
        assert_eq!(timer.calls().len(), calls);
    }

    #[test]
    fn test_reveal_click_reroll() {
        let pool = twelve_maps();
        let mut picker = Picker::new(AnimationSchedule::default(), RevealClick::Reroll);
        let mut rng = StdRng::seed_from_u64(2);
        let mut timer = ManualTimer::new();

        picker.press(&pool, &mut rng, &mut timer);
        run_to_reveal(&mut picker, &mut rng, &mut timer);
        assert!(matches!(
            picker.press(&pool, &mut rng, &mut timer),
            PressOutcome::Started { .. }
        ));
        assert_eq!(picker.interval_ms(), Some(50));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let pool = twelve_maps();
        let run = |seed| {
            let mut picker = Picker::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut timer = ManualTimer::new();
            picker.press(&pool, &mut rng, &mut timer);
            run_to_reveal(&mut picker, &mut rng, &mut timer)
        };
        assert_eq!(run(1234), run(1234));
    }

    proptest! {
        #[test]
        fn intervals_increase_and_terminate(
            min in 1u32..400,
            step in 1u32..100,
            extra in 0u32..600,
        ) {
            let schedule = AnimationSchedule::new(min, step, min + extra).unwrap();
            let intervals: Vec<u32> = schedule.intervals().collect();

            prop_assert!(intervals.windows(2).all(|w| w[0] < w[1]));
            let max = schedule.max_ms();
            prop_assert!(*intervals.last().unwrap() >= max);
            prop_assert!(intervals[..intervals.len() - 1].iter().all(|ms| *ms < max));
            prop_assert_eq!(schedule.flicker_ticks() as u32, extra.div_ceil(step));
        }

        #[test]
        fn reveal_matches_committed(seed in any::<u64>(), mask in 1u16..(1 << 12)) {
            let mut pool = twelve_maps();
            for i in 0..12 {
                if mask & (1 << i) == 0 {
                    pool.toggle(MapId(i));
                }
            }
            let eligible = pool.eligible();
            let mut picker = Picker::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut timer = ManualTimer::new();

            let outcome = picker.press(&pool, &mut rng, &mut timer);
            let PressOutcome::Started { committed, .. } = outcome else {
                panic!("animation did not start");
            };
            let (frames, revealed) = run_to_reveal(&mut picker, &mut rng, &mut timer);
            prop_assert_eq!(revealed, committed);
            prop_assert!(eligible.contains(&revealed));
            prop_assert!(frames.iter().all(|id| eligible.contains(id)));
        }
    }
}
