use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

/// Poll interval cap so the shutdown flag is noticed promptly.
const MAX_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

impl AppEvent {
    /// Terminal events the UI cares about; focus and paste are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(Self::Key(key)),
            Event::Mouse(mouse) => Some(Self::Mouse(mouse)),
            Event::Resize(cols, rows) => Some(Self::Resize(cols, rows)),
            _ => None,
        }
    }
}

/// Merges keyboard, mouse, resize and tick events into one ordered channel.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                let timeout = tick_rate.saturating_sub(last_tick.elapsed()).min(MAX_POLL);

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(event) => {
                            if let Some(app_event) = AppEvent::from_terminal(event) {
                                if tx.send(app_event).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {
                        // No event before the timeout
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn key_mouse_and_resize_are_forwarded() {
        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(
            AppEvent::from_terminal(Event::Key(key)),
            Some(AppEvent::Key(key))
        );
        assert_eq!(
            AppEvent::from_terminal(Event::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        );
    }

    #[test]
    fn focus_and_paste_are_dropped() {
        assert_eq!(AppEvent::from_terminal(Event::FocusGained), None);
        assert_eq!(AppEvent::from_terminal(Event::Paste("12".to_string())), None);
    }
}
