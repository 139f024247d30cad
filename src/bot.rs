use crate::notify::Notifier;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The bot's running flag. Nothing runs yet; the flag only gates deletion.
pub struct BotState {
    running: AtomicBool,
    notifier: Arc<Notifier>,
}

impl BotState {
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self {
            running: AtomicBool::new(false),
            notifier,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
        tracing::info!("bot started");
        self.notifier.success("Bot started successfully");
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        tracing::info!("bot stopped");
        self.notifier.success("Bot stopped successfully");
    }

    pub fn toggle(&self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }
}
