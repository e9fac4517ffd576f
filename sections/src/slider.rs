//! Carousel core shared by the server-rendered markup and the wasm client.
//!
//! The slider is split the same way the page is: a [`ScrollController`]
//! owns the [`CarouselState`] and talks to a [`Viewport`], an
//! [`AutoplayTimer`] decides when an automatic advance is due, and
//! [`Slider`] ties both together behind the public `mount` / `next` /
//! `prev` / `go_to` contract.
//!
//! Nothing here reads a clock. Time is fed in through [`Slider::tick`],
//! so the browser client drives it from `setInterval` and tests drive it
//! with plain [`Duration`]s.
//!
//! ```rust
//! use std::time::Duration;
//! use renu_sections::slider::{Slider, SliderOptions};
//!
//! let mut slider = Slider::mount((), 5, SliderOptions {
//!     infinite: true,
//!     interval: Some(Duration::from_secs(5)),
//!     root_id: "depoimentos".into(),
//! });
//!
//! slider.tick(Duration::from_secs(12));
//! assert_eq!(slider.current_index(), 2);
//!
//! slider.prev();
//! slider.prev();
//! slider.prev();
//! assert_eq!(slider.current_index(), 4);
//! ```

use std::time::Duration;

use tracing::debug;

/// Direction of the last transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices (or wrapping from the last slide to the first)
    #[default]
    Forward,
    /// Towards lower indices (or wrapping from the first slide to the last)
    Backward,
}

/// Mutable state of one mounted carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the slide currently in view
    pub current_index: usize,
    /// Direction of the last transition
    pub direction: Direction,
    /// Whether the autoplay timer may advance the carousel
    pub autoplay_enabled: bool,
}

/// Options accepted by [`Slider::mount`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SliderOptions {
    /// Wrap around at the ends instead of stopping
    pub infinite: bool,
    /// Autoplay period; `None` or zero disables autoplay
    pub interval: Option<Duration>,
    /// DOM id of the carousel root, used to address slides and controls
    pub root_id: String,
}

/// Whatever displays the slides.
///
/// The server side has nothing to scroll and uses `()`. The wasm client
/// scrolls the carousel element; tests record the calls.
pub trait Viewport {
    /// Bring the slide at `index` into view.
    fn scroll_to(&mut self, index: usize, direction: Direction);

    /// Stop any scroll animation still in flight.
    fn cancel(&mut self) {}

    /// The slide at `index` came into view without a `scroll_to`, e.g.
    /// after a swipe. Only controls need updating.
    fn settled(&mut self, _index: usize) {}
}

impl Viewport for () {
    fn scroll_to(&mut self, _index: usize, _direction: Direction) {}
}

/// Owns the current index and performs transitions on the viewport.
#[derive(Debug)]
pub struct ScrollController<V> {
    len: usize,
    infinite: bool,
    state: CarouselState,
    viewport: V,
}

impl<V: Viewport> ScrollController<V> {
    /// Create a controller over `len` slides, starting at index 0.
    pub fn new(viewport: V, len: usize, infinite: bool) -> Self {
        Self {
            len,
            infinite,
            state: CarouselState::default(),
            viewport,
        }
    }

    /// Number of registered slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no slides are registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether navigation wraps around.
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Index of the slide in view.
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Map any requested index onto a valid slide index.
    ///
    /// Wraps modulo `len` in infinite mode, clamps otherwise. Returns
    /// `None` when there are no slides.
    pub fn resolve(&self, index: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let len = self.len as isize;
        let resolved = if self.infinite {
            index.rem_euclid(len)
        } else {
            index.clamp(0, len - 1)
        };
        Some(resolved as usize)
    }

    /// Move to `index` (wrapped or clamped). Returns whether the carousel moved.
    ///
    /// The direction compares the resolved target with the current index,
    /// so a request that wraps past the end counts as backward.
    pub fn go_to(&mut self, index: isize) -> bool {
        let Some(target) = self.resolve(index) else {
            return false;
        };
        let direction = direction_between(self.state.current_index, target);
        self.transition(target as isize, direction)
    }

    /// Move forward by `steps` slides with a single transition.
    ///
    /// Wraps modulo `len` in infinite mode, stops on the last slide otherwise.
    pub fn advance(&mut self, steps: usize) -> bool {
        if self.len == 0 || steps == 0 {
            return false;
        }
        let offset = if self.infinite {
            steps % self.len
        } else {
            steps.min(self.len)
        };
        self.transition(
            (self.state.current_index + offset) as isize,
            Direction::Forward,
        )
    }

    /// Record that `index` is already in view (user scroll, swipe).
    ///
    /// Updates the state and tells the viewport, but never scrolls it.
    /// Out-of-range indices are ignored.
    pub fn sync_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.state.current_index {
            return false;
        }
        let direction = direction_between(self.state.current_index, index);
        debug!(
            from = self.state.current_index,
            to = index,
            ?direction,
            "slider synced to scroll position"
        );
        self.state.current_index = index;
        self.state.direction = direction;
        self.viewport.settled(index);
        true
    }

    /// Advance by one slide.
    pub fn next(&mut self) -> bool {
        self.transition(self.state.current_index as isize + 1, Direction::Forward)
    }

    /// Go back by one slide.
    pub fn prev(&mut self) -> bool {
        self.transition(self.state.current_index as isize - 1, Direction::Backward)
    }

    /// Whether the "previous" arrow should be enabled.
    pub fn can_go_prev(&self) -> bool {
        !self.is_empty() && (self.infinite || self.state.current_index > 0)
    }

    /// Whether the "next" arrow should be enabled.
    pub fn can_go_next(&self) -> bool {
        !self.is_empty() && (self.infinite || self.state.current_index + 1 < self.len)
    }

    /// Borrow the viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutably borrow the viewport.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub(crate) fn set_autoplay_enabled(&mut self, enabled: bool) {
        self.state.autoplay_enabled = enabled;
    }

    fn transition(&mut self, requested: isize, direction: Direction) -> bool {
        let Some(target) = self.resolve(requested) else {
            return false;
        };
        if target == self.state.current_index {
            return false;
        }

        debug!(
            from = self.state.current_index,
            to = target,
            ?direction,
            "slider transition"
        );
        self.state.current_index = target;
        self.state.direction = direction;
        self.viewport.scroll_to(target, direction);
        true
    }
}

fn direction_between(from: usize, to: usize) -> Direction {
    if to >= from {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// Phase of the autoplay state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// Counting towards the next advance
    Running,
    /// Held while the user interacts with the carousel
    Paused,
    /// Switched off or cleared on unmount; can be restarted
    Stopped,
    /// No interval configured (terminal)
    Disabled,
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Periodic trigger for automatic advances.
#[derive(Clone, Debug)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
    phase: AutoplayPhase,
}

impl AutoplayTimer {
    /// Running timer when `interval` is non-zero, otherwise disabled.
    pub fn new(interval: Option<Duration>) -> Self {
        match interval {
            Some(interval) if !interval.is_zero() => Self {
                interval,
                elapsed: Duration::ZERO,
                phase: AutoplayPhase::Running,
            },
            _ => Self::disabled(),
        }
    }

    /// Timer that never fires.
    pub fn disabled() -> Self {
        Self {
            interval: Duration::ZERO,
            elapsed: Duration::ZERO,
            phase: AutoplayPhase::Disabled,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    /// Configured period, `None` when disabled.
    pub fn interval(&self) -> Option<Duration> {
        (self.phase != AutoplayPhase::Disabled).then_some(self.interval)
    }

    /// Time left until the next advance while running.
    pub fn remaining(&self) -> Option<Duration> {
        (self.phase == AutoplayPhase::Running).then(|| self.interval.saturating_sub(self.elapsed))
    }

    /// Let `dt` pass and return how many advances became due.
    ///
    /// A long gap (frozen tab, huge `dt`) is folded into one count; the
    /// leftover carries into the next period.
    pub fn tick(&mut self, dt: Duration) -> u64 {
        if self.phase != AutoplayPhase::Running {
            return 0;
        }
        let elapsed = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        let rest = elapsed % interval;
        // rest < interval, so its seconds fit in u64
        self.elapsed = Duration::new(
            (rest / NANOS_PER_SEC) as u64,
            (rest % NANOS_PER_SEC) as u32,
        );
        u64::try_from(elapsed / interval).unwrap_or(u64::MAX)
    }

    /// Start the current period over.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Hold the timer while the user interacts.
    pub fn pause(&mut self) {
        if self.phase == AutoplayPhase::Running {
            self.phase = AutoplayPhase::Paused;
        }
    }

    /// Resume after the interaction settled, with a fresh period.
    pub fn resume(&mut self) {
        if self.phase == AutoplayPhase::Paused {
            self.phase = AutoplayPhase::Running;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Clear the timer.
    pub fn cancel(&mut self) {
        if self.phase != AutoplayPhase::Disabled {
            self.phase = AutoplayPhase::Stopped;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Re-arm a stopped timer.
    pub fn restart(&mut self) {
        if self.phase == AutoplayPhase::Stopped {
            self.phase = AutoplayPhase::Running;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Running or paused, i.e. not cleared.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, AutoplayPhase::Running | AutoplayPhase::Paused)
    }
}

/// One dot of the navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Slide index the dot jumps to
    pub index: usize,
    /// Whether this is the slide in view
    pub active: bool,
}

/// A mounted carousel.
#[derive(Debug)]
pub struct Slider<V> {
    controller: ScrollController<V>,
    autoplay: AutoplayTimer,
    root_id: String,
    mounted: bool,
}

impl<V: Viewport> Slider<V> {
    /// Mount a carousel over `slide_count` slides shown in `viewport`.
    ///
    /// An empty carousel mounts inert: no navigation, no autoplay.
    pub fn mount(viewport: V, slide_count: usize, options: SliderOptions) -> Self {
        let autoplay = if slide_count == 0 {
            AutoplayTimer::disabled()
        } else {
            AutoplayTimer::new(options.interval)
        };
        let mut controller = ScrollController::new(viewport, slide_count, options.infinite);
        controller.set_autoplay_enabled(autoplay.is_active());

        debug!(
            root_id = %options.root_id,
            slide_count,
            infinite = options.infinite,
            autoplay = ?autoplay.interval(),
            "slider mounted"
        );

        Self {
            controller,
            autoplay,
            root_id: options.root_id,
            mounted: true,
        }
    }

    /// DOM id of the carousel root.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// False once [`Slider::unmount`] ran.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.controller.len()
    }

    /// True for an inert, empty carousel.
    pub fn is_empty(&self) -> bool {
        self.controller.is_empty()
    }

    /// Index of the slide in view.
    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CarouselState {
        self.controller.state()
    }

    /// The autoplay timer.
    pub fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    /// Borrow the viewport.
    pub fn viewport(&self) -> &V {
        self.controller.viewport()
    }

    /// User asked for the next slide.
    pub fn next(&mut self) -> bool {
        self.manual(|controller| controller.next())
    }

    /// User asked for the previous slide.
    pub fn prev(&mut self) -> bool {
        self.manual(|controller| controller.prev())
    }

    /// User asked for a specific slide (clamped or wrapped).
    pub fn go_to(&mut self, index: isize) -> bool {
        self.manual(|controller| controller.go_to(index))
    }

    /// Let `dt` pass; returns how many automatic advances happened.
    ///
    /// Several due advances collapse into one transition, so a long gap
    /// costs a single scroll.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.mounted {
            return 0;
        }
        let due = usize::try_from(self.autoplay.tick(dt)).unwrap_or(usize::MAX);
        let steps = if self.controller.is_infinite() {
            due
        } else {
            let left = self
                .len()
                .saturating_sub(self.current_index())
                .saturating_sub(1);
            due.min(left)
        };
        if steps > 0 {
            self.controller.advance(steps);
        }
        steps
    }

    /// The user scrolled slide `index` into view.
    ///
    /// Updates state and controls without scrolling, and restarts the
    /// autoplay period when the index changed.
    pub fn sync_to(&mut self, index: usize) -> bool {
        if !self.mounted {
            return false;
        }
        let moved = self.controller.sync_to(index);
        if moved {
            self.autoplay.reset();
        }
        moved
    }

    /// Hold autoplay while the user interacts.
    pub fn pause(&mut self) {
        if self.mounted {
            self.autoplay.pause();
        }
    }

    /// Resume autoplay once the interaction settled.
    pub fn resume(&mut self) {
        if self.mounted {
            self.autoplay.resume();
        }
    }

    /// Switch autoplay off (clears the timer) or back on.
    pub fn set_autoplay(&mut self, enabled: bool) {
        if !self.mounted {
            return;
        }
        if enabled {
            self.autoplay.restart();
        } else {
            self.autoplay.cancel();
        }
        self.controller.set_autoplay_enabled(self.autoplay.is_active());
    }

    /// One indicator per slide, the current one marked active.
    pub fn indicators(&self) -> Vec<Indicator> {
        let current = self.current_index();
        (0..self.len())
            .map(|index| Indicator {
                index,
                active: index == current,
            })
            .collect()
    }

    /// Whether the "previous" arrow should be enabled.
    pub fn can_go_prev(&self) -> bool {
        self.mounted && self.controller.can_go_prev()
    }

    /// Whether the "next" arrow should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.mounted && self.controller.can_go_next()
    }

    /// Tear down: clear the timer and stop any scroll in flight.
    ///
    /// Every operation afterwards is a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.autoplay.cancel();
        self.controller.set_autoplay_enabled(false);
        self.controller.viewport_mut().cancel();
        debug!(root_id = %self.root_id, "slider unmounted");
    }

    fn manual(&mut self, navigate: impl FnOnce(&mut ScrollController<V>) -> bool) -> bool {
        if !self.mounted {
            return false;
        }
        let moved = navigate(&mut self.controller);
        self.autoplay.reset();
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        scrolls: Vec<(usize, Direction)>,
        settled: Vec<usize>,
        cancelled: usize,
    }

    impl Viewport for Recorder {
        fn scroll_to(&mut self, index: usize, direction: Direction) {
            self.scrolls.push((index, direction));
        }

        fn cancel(&mut self) {
            self.cancelled += 1;
        }

        fn settled(&mut self, index: usize) {
            self.settled.push(index);
        }
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn slider(len: usize, infinite: bool, interval: Option<u64>) -> Slider<Recorder> {
        Slider::mount(
            Recorder::default(),
            len,
            SliderOptions {
                infinite,
                interval: interval.map(Duration::from_secs),
                root_id: "test".into(),
            },
        )
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut s = slider(0, true, Some(5));
        assert!(!s.next());
        assert!(!s.prev());
        assert!(!s.go_to(3));
        assert_eq!(s.tick(secs(60.0)), 0);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.autoplay().phase(), AutoplayPhase::Disabled);
        assert!(!s.state().autoplay_enabled);
        assert!(s.indicators().is_empty());
        assert!(!s.can_go_prev());
        assert!(!s.can_go_next());
        assert!(s.viewport().scrolls.is_empty());
    }

    #[test]
    fn infinite_mode_wraps_both_ends() {
        let mut s = slider(4, true, None);
        assert!(s.prev());
        assert_eq!(s.current_index(), 3);
        assert_eq!(s.state().direction, Direction::Backward);

        assert!(s.next());
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.state().direction, Direction::Forward);
        assert_eq!(
            s.viewport().scrolls,
            vec![(3, Direction::Backward), (0, Direction::Forward)]
        );
    }

    #[test]
    fn finite_mode_stops_at_boundaries() {
        let mut s = slider(3, false, None);
        assert!(!s.can_go_prev());
        assert!(!s.prev());
        assert_eq!(s.current_index(), 0);

        s.next();
        s.next();
        assert_eq!(s.current_index(), 2);
        assert!(!s.can_go_next());
        assert!(!s.next());
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.viewport().scrolls.len(), 2);
    }

    #[test]
    fn go_to_clamps_or_wraps_out_of_range_requests() {
        let mut finite = slider(5, false, None);
        finite.go_to(99);
        assert_eq!(finite.current_index(), 4);
        finite.go_to(-3);
        assert_eq!(finite.current_index(), 0);

        let mut infinite = slider(5, true, None);
        infinite.go_to(7);
        assert_eq!(infinite.current_index(), 2);
        infinite.go_to(-1);
        assert_eq!(infinite.current_index(), 4);
    }

    #[test]
    fn go_to_current_index_does_not_scroll() {
        let mut s = slider(5, true, None);
        s.go_to(2);
        assert!(!s.go_to(2));
        assert!(!s.go_to(7));
        assert_eq!(s.viewport().scrolls, vec![(2, Direction::Forward)]);
    }

    #[test]
    fn go_to_direction_follows_resolved_target() {
        let mut s = slider(5, true, None);
        s.go_to(3);
        assert!(s.go_to(6));
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.state().direction, Direction::Backward);
        assert_eq!(s.viewport().scrolls.last(), Some(&(1, Direction::Backward)));
    }

    #[test]
    fn sync_to_moves_index_without_scrolling() {
        let mut s = slider(5, false, Some(5));
        s.tick(secs(4.0));

        assert!(s.sync_to(2));
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.state().direction, Direction::Forward);
        assert!(s.viewport().scrolls.is_empty());
        assert_eq!(s.viewport().settled, vec![2]);
        assert!(s.can_go_prev());

        // period restarted by the swipe
        assert_eq!(s.tick(secs(4.0)), 0);
        assert_eq!(s.tick(secs(1.0)), 1);
        assert_eq!(s.current_index(), 3);

        // next continues from the synced index
        s.sync_to(0);
        assert!(s.next());
        assert_eq!(s.viewport().scrolls.last(), Some(&(1, Direction::Forward)));
    }

    #[test]
    fn sync_to_ignores_same_or_out_of_range_index() {
        let mut s = slider(3, true, None);
        assert!(!s.sync_to(0));
        assert!(!s.sync_to(3));
        assert!(s.viewport().settled.is_empty());

        s.unmount();
        assert!(!s.sync_to(1));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn huge_tick_does_not_overflow() {
        let mut s = slider(5, true, Some(5));
        s.tick(secs(1.0));
        s.tick(Duration::MAX);
        assert!(s.current_index() < 5);
        assert!(s.viewport().scrolls.len() <= 1);
        assert!(s.autoplay().remaining().is_some());
    }

    #[test]
    fn missed_periods_collapse_into_one_scroll() {
        let mut s = slider(5, true, Some(5));
        assert_eq!(s.tick(secs(35.0)), 7);
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.viewport().scrolls, vec![(2, Direction::Forward)]);

        let mut finite = slider(4, false, Some(1));
        assert_eq!(finite.tick(secs(100.0)), 3);
        assert_eq!(finite.current_index(), 3);
        assert_eq!(finite.viewport().scrolls.len(), 1);
    }

    #[test]
    fn autoplay_twelve_seconds_at_five_second_interval() {
        let mut s = slider(5, true, Some(5));
        assert_eq!(s.tick(secs(12.0)), 2);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn autoplay_advances_once_per_interval_then_wraps() {
        let mut s = slider(5, true, Some(5));
        let mut seen = Vec::new();
        for _ in 0..6 {
            assert_eq!(s.tick(secs(5.0)), 1);
            seen.push(s.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn autoplay_in_finite_mode_stops_on_last_slide() {
        let mut s = slider(3, false, Some(2));
        assert_eq!(s.tick(secs(10.0)), 2);
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.tick(secs(10.0)), 0);
    }

    #[test]
    fn manual_navigation_resets_the_period() {
        let mut s = slider(5, true, Some(5));
        s.tick(secs(4.0));
        s.next();
        assert_eq!(s.current_index(), 1);

        // 4s after the click: the old period would have fired at 1s
        assert_eq!(s.tick(secs(4.0)), 0);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.tick(secs(1.0)), 1);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn paused_timer_holds_until_resumed() {
        let mut s = slider(5, true, Some(5));
        s.pause();
        assert_eq!(s.autoplay().phase(), AutoplayPhase::Paused);
        assert_eq!(s.tick(secs(30.0)), 0);

        s.resume();
        assert_eq!(s.tick(secs(4.5)), 0);
        assert_eq!(s.tick(secs(0.5)), 1);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn switching_autoplay_off_clears_the_timer() {
        let mut s = slider(5, true, Some(5));
        s.set_autoplay(false);
        assert!(!s.state().autoplay_enabled);
        assert_eq!(s.tick(secs(30.0)), 0);

        s.set_autoplay(true);
        assert!(s.state().autoplay_enabled);
        assert_eq!(s.tick(secs(5.0)), 1);
    }

    #[test]
    fn zero_interval_disables_autoplay() {
        let mut s = slider(5, true, Some(0));
        assert_eq!(s.autoplay().phase(), AutoplayPhase::Disabled);
        s.set_autoplay(true);
        assert_eq!(s.autoplay().phase(), AutoplayPhase::Disabled);
        assert_eq!(s.tick(secs(30.0)), 0);
    }

    #[test]
    fn unmount_cancels_timer_and_scroll() {
        let mut s = slider(5, true, Some(5));
        s.next();
        s.unmount();
        s.unmount();

        assert!(!s.is_mounted());
        assert_eq!(s.viewport().cancelled, 1);
        assert_eq!(s.autoplay().phase(), AutoplayPhase::Stopped);
        assert!(!s.next());
        assert_eq!(s.tick(secs(60.0)), 0);
        assert_eq!(s.current_index(), 1);
        assert!(!s.can_go_next());
    }

    #[test]
    fn indicators_mark_current_slide() {
        let mut s = slider(3, false, None);
        s.go_to(1);
        let active: Vec<bool> = s.indicators().iter().map(|i| i.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn remaining_time_tracks_elapsed() {
        let mut timer = AutoplayTimer::new(Some(secs(5.0)));
        timer.tick(secs(2.0));
        assert_eq!(timer.remaining(), Some(secs(3.0)));
        timer.pause();
        assert_eq!(timer.remaining(), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Next,
            Prev,
            GoTo(isize),
            Tick(u64),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Next),
                Just(Op::Prev),
                (-20isize..20).prop_map(Op::GoTo),
                (0u64..20_000).prop_map(Op::Tick),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_index_stays_in_range(
                len in 0usize..12,
                infinite in any::<bool>(),
                ops in prop::collection::vec(op_strategy(), 0..64),
            ) {
                let mut s = slider(len, infinite, Some(3));
                for op in ops {
                    match op {
                        Op::Next => { s.next(); }
                        Op::Prev => { s.prev(); }
                        Op::GoTo(i) => { s.go_to(i); }
                        Op::Tick(ms) => { s.tick(Duration::from_millis(ms)); }
                    }
                    if len == 0 {
                        prop_assert_eq!(s.current_index(), 0);
                    } else {
                        prop_assert!(s.current_index() < len);
                    }
                }
            }

            #[test]
            fn prop_infinite_next_then_prev_is_identity(len in 1usize..12, start in 0isize..12) {
                let mut s = slider(len, true, None);
                s.go_to(start);
                let before = s.current_index();
                s.next();
                s.prev();
                prop_assert_eq!(s.current_index(), before);
            }
        }
    }
}
