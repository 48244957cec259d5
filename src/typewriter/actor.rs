//! Typewriter Actor: Dedicated thread for paced text reveal.
//!
//! The actor owns the display sink and the pacing machine, so `push`,
//! `finish`, and `cancel` are plain channel sends that are safe from
//! any thread at any time. The inter-step delay doubles as the command
//! poll window, which is how a cancel lands mid-delay.

use super::scheduler::{Pump, Typewriter, TypewriterConfig, TypewriterState};
use super::DisplaySink;
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Commands accepted by the pacing thread.
enum Command {
    Push(String),
    Finish,
    Cancel,
}

/// Handle to a typewriter running on its own pacing thread.
///
/// One actor serves one generation. The completion signal resolves
/// exactly once, for both natural completion and cancellation.
pub struct TypewriterActor {
    /// Handle to the pacing thread.
    handle: Option<JoinHandle<()>>,
    /// Command sender.
    cmd_tx: Sender<Command>,
    /// Completion receiver.
    done_rx: Receiver<()>,
}

impl TypewriterActor {
    /// Spawn a pacing thread that reveals into the given sink.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the pacing thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn<S>(sink: S, config: TypewriterConfig) -> Self
    where
        S: DisplaySink + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = unbounded();
        // Capacity 1: the signal is sent once and never queued behind.
        let (done_tx, done_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("lifeloom-typewriter".to_string())
            .spawn(move || {
                run_loop(sink, config, &cmd_rx, &done_tx);
            })
            .expect("Failed to spawn typewriter thread");

        Self {
            handle: Some(handle),
            cmd_tx,
            done_rx,
        }
    }

    /// Queue text for reveal. Safe at any time; content pushed after
    /// finish or cancel is silently discarded.
    pub fn push(&self, text: &str) {
        let _ = self.cmd_tx.send(Command::Push(text.to_owned()));
    }

    /// Signal that no further input will arrive.
    pub fn finish(&self) {
        let _ = self.cmd_tx.send(Command::Finish);
    }

    /// Discard pending content and suppress further reveals.
    ///
    /// Idempotent; the completion signal still resolves.
    pub fn cancel(&self) {
        let _ = self.cmd_tx.send(Command::Cancel);
    }

    /// Block until the completion signal resolves.
    ///
    /// Returns immediately if it already has.
    pub fn wait(&self) {
        // A disconnect also means the thread settled and exited.
        let _ = self.done_rx.recv();
    }

    /// Close input, wait for the reveal to complete, and join the thread.
    pub fn join(mut self) {
        self.finish();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TypewriterActor {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(Command::Cancel);
    }
}

/// Pacing loop: pump, then absorb commands for the drawn delay.
fn run_loop<S: DisplaySink>(
    mut sink: S,
    config: TypewriterConfig,
    cmd_rx: &Receiver<Command>,
    done_tx: &Sender<()>,
) {
    let mut machine = Typewriter::new(config);
    let mut rng = StdRng::from_entropy();

    loop {
        match machine.pump(&mut sink, &mut rng) {
            Pump::Settled => {
                let _ = done_tx.try_send(());
                break;
            }
            Pump::Waiting => match cmd_rx.recv() {
                Ok(cmd) => apply(&mut machine, cmd),
                // All handles gone: nothing more can arrive.
                Err(_) => machine.cancel(),
            },
            Pump::Ran { delay } => {
                let deadline = Instant::now() + delay;
                loop {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    match cmd_rx.recv_timeout(deadline - now) {
                        Ok(cmd) => {
                            apply(&mut machine, cmd);
                            if machine.state() == TypewriterState::Canceled {
                                break;
                            }
                        }
                        Err(RecvTimeoutError::Timeout) => break,
                        Err(RecvTimeoutError::Disconnected) => {
                            machine.cancel();
                            break;
                        }
                    }
                }
            }
        }
    }
}

fn apply(machine: &mut Typewriter, cmd: Command) {
    match cmd {
        Command::Push(text) => machine.push(&text),
        Command::Finish => machine.finish(),
        Command::Cancel => machine.cancel(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded as channel;
    use std::time::Duration;

    /// Sink that forwards every appended run to a channel.
    struct ChannelSink(Sender<String>);

    impl DisplaySink for ChannelSink {
        fn append(&mut self, text: &str) {
            let _ = self.0.send(text.to_owned());
        }
    }

    fn fast_config() -> TypewriterConfig {
        TypewriterConfig {
            min_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
            ..TypewriterConfig::default()
        }
    }

    fn drain_sink(rx: &Receiver<String>) -> String {
        let mut out = String::new();
        while let Ok(run) = rx.try_recv() {
            out.push_str(&run);
        }
        out
    }

    #[test]
    fn test_reveals_in_order_and_signals_once() {
        let (tx, rx) = channel();
        let actor = TypewriterActor::spawn(ChannelSink(tx), fast_config());
        actor.push("Hello");
        actor.push(" world");
        actor.finish();
        actor.wait();
        assert_eq!(drain_sink(&rx), "Hello world");
        // A second wait returns immediately instead of hanging.
        actor.wait();
        actor.join();
    }

    #[test]
    fn test_finish_on_idle_resolves_immediately() {
        let (tx, _rx) = channel();
        let actor = TypewriterActor::spawn(ChannelSink(tx), fast_config());
        actor.finish();
        actor.wait();
        actor.join();
    }

    #[test]
    fn test_cancel_resolves_completion_and_drops_later_pushes() {
        let (tx, rx) = channel();
        let actor = TypewriterActor::spawn(ChannelSink(tx), fast_config());
        actor.push("abcdefghij");
        actor.cancel();
        actor.wait();
        let shown = drain_sink(&rx);
        assert!("abcdefghij".starts_with(&shown));

        actor.push("xyz");
        thread::sleep(Duration::from_millis(20));
        assert_eq!(rx.try_recv().ok(), None);
        actor.join();
    }

    #[test]
    fn test_cancel_is_idempotent_across_the_lifecycle() {
        let (tx, _rx) = channel();
        let actor = TypewriterActor::spawn(ChannelSink(tx), fast_config());
        actor.cancel();
        actor.cancel();
        actor.wait();
        actor.cancel();
        actor.join();
    }
}
