//! Line input for the interactive session.
//!
//! Production input merges two producers onto one channel: a thread reading
//! stdin and a thread waiting for Ctrl-C. The session only ever sees `Input`.

use crossbeam::channel::{self, Receiver, Sender};
use std::io::{self, BufRead};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line with its trailing newline removed
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// End of input
    Closed,
}

/// Anything the session can read lines from
pub trait LineSource {
    fn next_line(&mut self) -> Input;
}

pub struct ChannelInput {
    rx: Receiver<Input>,
}

impl ChannelInput {
    pub fn new(rx: Receiver<Input>) -> Self {
        Self { rx }
    }
}

impl LineSource for ChannelInput {
    fn next_line(&mut self) -> Input {
        // Every producer gone means nothing more can arrive
        self.rx.recv().unwrap_or(Input::Closed)
    }
}

/// Read stdin on a background thread and turn Ctrl-C into `Input::Interrupted`
pub fn stdin_with_interrupt() -> io::Result<ChannelInput> {
    let (tx, rx) = channel::unbounded::<Input>();
    spawn_interrupt_watcher(tx.clone())?;
    spawn_stdin_reader(tx)?;
    Ok(ChannelInput::new(rx))
}

fn spawn_stdin_reader(tx: Sender<Input>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => {
                        tx.send(Input::Closed).ok();
                        break;
                    }
                    Ok(_) => {
                        let line = line.trim_end_matches(['\n', '\r']).to_string();
                        if tx.send(Input::Line(line)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read stdin: {}", e);
                        tx.send(Input::Closed).ok();
                        break;
                    }
                }
            }
        })?;
    Ok(())
}

/// Install the Ctrl-C handler now, then wait for it on a background thread.
///
/// The handler is registered before this returns, so an early Ctrl-C is
/// still delivered as `Input::Interrupted` instead of killing the process.
fn spawn_interrupt_watcher(tx: Sender<Input>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut interrupt = {
        let _guard = runtime.enter();
        InterruptSignal::install()?
    };

    thread::Builder::new()
        .name("interrupt-watcher".to_string())
        .spawn(move || {
            if runtime.block_on(interrupt.recv()) {
                tracing::debug!("Received interrupt");
                tx.send(Input::Interrupted).ok();
            }
        })?;
    Ok(())
}

#[cfg(unix)]
struct InterruptSignal(tokio::signal::unix::Signal);

#[cfg(unix)]
impl InterruptSignal {
    fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self(signal(SignalKind::interrupt())?))
    }

    async fn recv(&mut self) -> bool {
        self.0.recv().await.is_some()
    }
}

#[cfg(windows)]
struct InterruptSignal(tokio::signal::windows::CtrlC);

#[cfg(windows)]
impl InterruptSignal {
    fn install() -> io::Result<Self> {
        Ok(Self(tokio::signal::windows::ctrl_c()?))
    }

    async fn recv(&mut self) -> bool {
        self.0.recv().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_input_in_order() {
        let (tx, rx) = channel::unbounded();
        let mut input = ChannelInput::new(rx);

        tx.send(Input::Line("1".to_string())).unwrap();
        tx.send(Input::Interrupted).unwrap();

        assert_eq!(input.next_line(), Input::Line("1".to_string()));
        assert_eq!(input.next_line(), Input::Interrupted);
    }

    #[cfg(unix)]
    #[test]
    fn test_interrupt_delivered_once_watcher_returns() {
        use std::time::Duration;

        let (tx, rx) = channel::unbounded();
        spawn_interrupt_watcher(tx).unwrap();

        // Signal ourselves right away, before the watcher thread is polled
        let status = std::process::Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), Input::Interrupted);
    }

    #[test]
    fn test_channel_input_closed_when_senders_dropped() {
        let (tx, rx) = channel::unbounded::<Input>();
        let mut input = ChannelInput::new(rx);
        drop(tx);

        assert_eq!(input.next_line(), Input::Closed);
    }
}
