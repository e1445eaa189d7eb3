//! Transient user notifications and the in-window output log.

use std::time::{Duration, Instant};

use chrono::Local;

pub const INFO_DURATION: Duration = Duration::from_secs(3);
pub const ERROR_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub text: String,
    pub level: Level,
    pub expires_at: Instant,
}

#[derive(Default)]
pub struct Notifier {
    current: Option<Notification>,
    logs: Vec<String>,
}

impl Notifier {
    pub fn info(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{}", text);
        self.show(text, Level::Info, INFO_DURATION);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("{}", text);
        self.show(text, Level::Error, ERROR_DURATION);
    }

    /// Append to the output log without a popup.
    pub fn log(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("{}", text);
        self.push_log(&text);
    }

    fn show(&mut self, text: String, level: Level, duration: Duration) {
        let prefix = match level {
            Level::Info => "[System]",
            Level::Error => "[Error]",
        };
        self.push_log(&format!("{} {}", prefix, text));
        self.current = Some(Notification {
            text,
            level,
            expires_at: Instant::now() + duration,
        });
    }

    fn push_log(&mut self, line: &str) {
        self.logs
            .push(format!("{} {}", Local::now().format("%H:%M:%S"), line));
    }

    /// The notification still on screen at `now`, if any.
    pub fn active(&self, now: Instant) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.expires_at > now)
    }

    /// Time until the active notification should disappear.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.active(now).map(|n| n.expires_at - now)
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }
}
