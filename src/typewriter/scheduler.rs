//! `Typewriter`: The pacing state machine behind the on-screen reveal.
//!
//! The machine owns a FIFO of pending grapheme clusters and reveals
//! them in short runs, decoupling display cadence from network arrival.
//! It never sleeps itself: each pump step returns the freshly drawn
//! inter-step delay and the caller owns the timeline, which is what
//! makes the machine testable with zero real delay.

use super::DisplaySink;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Configuration for the typewriter cadence.
#[derive(Debug, Clone)]
pub struct TypewriterConfig {
    /// Minimum inter-step delay.
    pub min_delay: Duration,
    /// Maximum inter-step delay.
    pub max_delay: Duration,
    /// Minimum clusters revealed per step.
    pub min_run: usize,
    /// Maximum clusters revealed per step.
    pub max_run: usize,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(24),
            max_delay: Duration::from_millis(40),
            min_run: 1,
            max_run: 2,
        }
    }
}

/// Lifecycle states of the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterState {
    /// Nothing queued, input still open.
    Idle,
    /// Revealing queued content. Draining (input closed, queue emptying)
    /// is this state with no further input pending.
    Pumping,
    /// Input closed and queue fully revealed; completion resolved.
    Ended,
    /// Canceled; pending content discarded, completion resolved.
    Canceled,
}

/// Outcome of one pump step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pump {
    /// A run was revealed; call again after the drawn delay.
    Ran {
        /// Freshly drawn inter-step delay.
        delay: Duration,
    },
    /// Queue is empty and input is still open; wait for a push.
    Waiting,
    /// The machine reached `Ended` or `Canceled`; completion is due.
    Settled,
}

/// Pacing state machine revealing queued text to a display sink.
///
/// One instance serves one generation; nothing is shared across
/// concurrent sessions.
#[derive(Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    /// Pending clusters, mutated only by push and pump.
    queue: VecDeque<String>,
    state: TypewriterState,
    input_closed: bool,
    pushed: usize,
    revealed: usize,
    discarded: usize,
}

impl Typewriter {
    /// Create an idle typewriter.
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            queue: VecDeque::new(),
            state: TypewriterState::Idle,
            input_closed: false,
            pushed: 0,
            revealed: 0,
            discarded: 0,
        }
    }

    /// Current state.
    #[inline]
    pub const fn state(&self) -> TypewriterState {
        self.state
    }

    /// Whether the completion signal is due (Ended or Canceled).
    #[inline]
    pub const fn is_settled(&self) -> bool {
        matches!(self.state, TypewriterState::Ended | TypewriterState::Canceled)
    }

    /// Clusters currently queued.
    #[inline]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Clusters ever pushed, including any rejected after close.
    #[inline]
    pub const fn pushed(&self) -> usize {
        self.pushed
    }

    /// Clusters revealed to the sink.
    #[inline]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    /// Clusters discarded on cancel or after input closed.
    #[inline]
    pub const fn discarded(&self) -> usize {
        self.discarded
    }

    /// Append text to the queue; from `Idle` this starts pumping.
    ///
    /// Text arriving after `finish` or `cancel` is dropped and counted
    /// as discarded, keeping revealed + discarded == pushed exact.
    pub fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let count = text.graphemes(true).count();
        self.pushed += count;

        if self.is_settled() || self.input_closed {
            self.discarded += count;
            return;
        }

        self.queue.extend(text.graphemes(true).map(str::to_owned));
        if self.state == TypewriterState::Idle {
            self.state = TypewriterState::Pumping;
        }
    }

    /// Mark that no further input will arrive.
    ///
    /// Settles immediately when already idle with an empty queue;
    /// otherwise the pump step that empties the queue settles.
    pub fn finish(&mut self) {
        if self.is_settled() {
            return;
        }
        self.input_closed = true;
        if self.queue.is_empty() {
            self.state = TypewriterState::Ended;
        }
    }

    /// Discard all pending content and suppress further reveals.
    ///
    /// Idempotent and safe in any state; a cancel after natural
    /// completion leaves the machine `Ended`.
    pub fn cancel(&mut self) {
        if self.is_settled() {
            return;
        }
        self.discarded += self.queue.len();
        self.queue.clear();
        self.input_closed = true;
        self.state = TypewriterState::Canceled;
    }

    /// Execute one pump step.
    ///
    /// Pops a run of `min_run..=max_run` clusters (uniform, redrawn each
    /// step), appends it to the sink as one indivisible unit, and draws
    /// the delay before the next step. Run length and delay are both
    /// fresh draws every step.
    pub fn pump<S, R>(&mut self, sink: &mut S, rng: &mut R) -> Pump
    where
        S: DisplaySink + ?Sized,
        R: Rng + ?Sized,
    {
        match self.state {
            TypewriterState::Ended | TypewriterState::Canceled => Pump::Settled,
            TypewriterState::Idle => Pump::Waiting,
            TypewriterState::Pumping => {
                if self.queue.is_empty() {
                    // Can only happen if finish raced ahead; same
                    // settle/idle decision as after a run.
                    return self.settle_or_idle();
                }

                let top = self.config.max_run.max(self.config.min_run);
                let span = rng.gen_range(self.config.min_run..=top);
                let span = span.min(self.queue.len()).max(1);

                let mut run = String::new();
                for _ in 0..span {
                    if let Some(cluster) = self.queue.pop_front() {
                        run.push_str(&cluster);
                    }
                }
                sink.append(&run);
                self.revealed += span;

                if self.queue.is_empty() {
                    return self.settle_or_idle();
                }
                Pump::Ran {
                    delay: self.draw_delay(rng),
                }
            }
        }
    }

    /// Decide what an empty queue means: settle if input is closed,
    /// otherwise go idle and wait for the next push.
    fn settle_or_idle(&mut self) -> Pump {
        if self.input_closed {
            self.state = TypewriterState::Ended;
            return Pump::Settled;
        }
        self.state = TypewriterState::Idle;
        Pump::Waiting
    }

    /// Draw the next inter-step delay uniformly from the window.
    #[allow(clippy::cast_possible_truncation)]
    fn draw_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.config.min_delay.as_millis() as u64;
        let max = (self.config.max_delay.as_millis() as u64).max(min);
        Duration::from_millis(rng.gen_range(min..=max))
    }

    /// Pump to quiescence, ignoring delays.
    ///
    /// Convenience for synchronous callers and tests that do not pace.
    pub fn drain<S, R>(&mut self, sink: &mut S, rng: &mut R)
    where
        S: DisplaySink + ?Sized,
        R: Rng + ?Sized,
    {
        while matches!(self.pump(sink, rng), Pump::Ran { .. }) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn machine() -> (Typewriter, String, StdRng) {
        (
            Typewriter::new(TypewriterConfig::default()),
            String::new(),
            StdRng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_reveals_pushes_in_order() {
        let (mut tw, mut sink, mut rng) = machine();
        tw.push("Hello");
        tw.push(" world");
        tw.finish();
        tw.drain(&mut sink, &mut rng);
        assert_eq!(sink, "Hello world");
        assert_eq!(tw.state(), TypewriterState::Ended);
    }

    #[test]
    fn test_batching_does_not_change_output() {
        let text = "the quick brown fox jumps over the lazy dog";
        let (mut tw, mut sink, mut rng) = machine();
        for word in text.split_inclusive(' ') {
            tw.push(word);
        }
        tw.finish();
        tw.drain(&mut sink, &mut rng);
        assert_eq!(sink, text);
    }

    #[test]
    fn test_finish_on_idle_settles_immediately() {
        let (mut tw, _sink, _rng) = machine();
        tw.finish();
        assert_eq!(tw.state(), TypewriterState::Ended);
    }

    #[test]
    fn test_cancel_discards_pending_content() {
        let (mut tw, mut sink, mut rng) = machine();
        tw.push("abc");
        // Reveal at most one run, then cancel mid-queue.
        let _ = tw.pump(&mut sink, &mut rng);
        tw.cancel();
        assert_eq!(tw.state(), TypewriterState::Canceled);
        assert!("abc".starts_with(&sink));

        // A subsequent push is never revealed.
        tw.push("xyz");
        tw.drain(&mut sink, &mut rng);
        assert!("abc".starts_with(&sink));
        assert_eq!(tw.pushed(), 6);
        assert_eq!(tw.revealed() + tw.discarded(), tw.pushed());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (mut tw, mut sink, mut rng) = machine();
        tw.push("abc");
        tw.cancel();
        tw.cancel();
        tw.finish();
        assert_eq!(tw.state(), TypewriterState::Canceled);
        assert_eq!(tw.pump(&mut sink, &mut rng), Pump::Settled);
    }

    #[test]
    fn test_cancel_after_natural_completion_is_safe() {
        let (mut tw, mut sink, mut rng) = machine();
        tw.push("hi");
        tw.finish();
        tw.drain(&mut sink, &mut rng);
        assert_eq!(tw.state(), TypewriterState::Ended);
        tw.cancel();
        assert_eq!(tw.state(), TypewriterState::Ended);
    }

    #[test]
    fn test_completeness_invariant_holds() {
        let (mut tw, mut sink, mut rng) = machine();
        tw.push("一二三四五六七八");
        let _ = tw.pump(&mut sink, &mut rng);
        let _ = tw.pump(&mut sink, &mut rng);
        tw.cancel();
        assert_eq!(tw.revealed() + tw.discarded(), tw.pushed());
        assert_eq!(tw.pushed(), 8);
    }

    #[test]
    fn test_runs_are_bounded_and_atomic() {
        let (mut tw, mut sink, mut rng) = machine();
        tw.push("abcdefgh");
        let mut last_len = 0;
        loop {
            match tw.pump(&mut sink, &mut rng) {
                Pump::Ran { delay } => {
                    let grown = sink.chars().count() - last_len;
                    assert!((1..=2).contains(&grown));
                    let window = Duration::from_millis(24)..=Duration::from_millis(40);
                    assert!(window.contains(&delay));
                    last_len = sink.chars().count();
                }
                Pump::Waiting => break,
                Pump::Settled => unreachable!("finish was never signaled"),
            }
        }
        // The final run emptied the queue without settling: input open.
        assert_eq!(tw.state(), TypewriterState::Idle);
        assert_eq!(sink, "abcdefgh");
    }

    #[test]
    fn test_grapheme_clusters_stay_whole() {
        let (mut tw, mut sink, mut rng) = machine();
        // Family emoji is one cluster of several scalars.
        tw.push("a👨‍👩‍👧b");
        tw.finish();
        tw.drain(&mut sink, &mut rng);
        assert_eq!(sink, "a👨‍👩‍👧b");
        assert_eq!(tw.pushed(), 3);
    }

    #[test]
    fn test_settles_on_the_step_that_empties_the_queue() {
        let (mut tw, mut sink, _rng) = machine();
        tw.push("ab");
        tw.finish();
        let mut fixed = StdRng::seed_from_u64(0);
        let mut steps = 0;
        loop {
            match tw.pump(&mut sink, &mut fixed) {
                Pump::Ran { .. } => steps += 1,
                Pump::Settled => break,
                Pump::Waiting => unreachable!("input was closed"),
            }
            assert!(steps < 8, "never settled");
        }
        assert_eq!(sink, "ab");
        assert_eq!(tw.state(), TypewriterState::Ended);
    }
}
