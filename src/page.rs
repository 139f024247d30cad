use crate::bot::BotState;
use crate::data::accounts::{Account, AccountError, AccountService};
use crate::form::Submission;
use crate::grid::{self, AccountCard};
use crate::notify::{Notification, Notifier};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Stop the bot before deleting accounts")]
    BotRunning,
    #[error("nothing to reorder")]
    NothingMoved,
    #[error(transparent)]
    Account(#[from] AccountError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotStatus {
    pub running: bool,
    pub status: &'static str,
    pub connection: &'static str,
    pub account_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<&'static str>,
}

/// The accounts page: the running flag, the account service and the list
/// currently on screen.
pub struct Dashboard {
    service: AccountService,
    bot: BotState,
    accounts: Mutex<Vec<Account>>,
    // Held across bot start/stop and across the delete check plus removal.
    run_gate: Mutex<()>,
}

impl Dashboard {
    pub fn new(service: AccountService) -> Self {
        let bot = BotState::new(service.notifier().clone());
        let accounts = service.get_accounts();
        Self {
            service,
            bot,
            accounts: Mutex::new(accounts),
            run_gate: Mutex::new(()),
        }
    }

    pub fn notifier(&self) -> &Arc<Notifier> {
        self.service.notifier()
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find(&self, account_id: &str) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
    }

    pub fn refresh(&self) {
        self.set_accounts(self.service.get_accounts());
    }

    fn set_accounts(&self, accounts: Vec<Account>) {
        *self.accounts.lock().unwrap_or_else(PoisonError::into_inner) = accounts;
    }

    pub fn cards(&self) -> Vec<AccountCard> {
        grid::cards(&self.accounts(), self.bot.is_running())
    }

    pub fn status(&self) -> BotStatus {
        let running = self.bot.is_running();
        let account_count = self.accounts().len();
        BotStatus {
            running,
            status: if running {
                "Bot is running"
            } else {
                "Bot is stopped"
            },
            connection: "The WOLF connection will be implemented in the next phase.",
            account_count,
            empty_state: (account_count == 0)
                .then_some("No accounts added yet. Add your WOLF account to get started."),
        }
    }

    pub fn start_bot(&self) {
        let _gate = self.run_gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.bot.start();
    }

    pub fn stop_bot(&self) {
        let _gate = self.run_gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.bot.stop();
    }

    pub fn take_notifications(&self) -> Vec<Notification> {
        self.notifier().drain()
    }

    pub fn handle_delete_account(&self, account_id: &str) -> Result<(), PageError> {
        let _gate = self.run_gate.lock().unwrap_or_else(PoisonError::into_inner);
        if self.bot.is_running() {
            tracing::warn!(id = %account_id, "delete refused while bot is running");
            self.notifier()
                .destructive("Cannot delete account", PageError::BotRunning.to_string());
            return Err(PageError::BotRunning);
        }

        self.service.remove(account_id)?;
        self.refresh();
        Ok(())
    }

    pub fn handle_save_account(&self, submission: Submission) -> Result<Account, PageError> {
        let saved = match submission {
            Submission::Update(account) => self.service.update(account)?,
            Submission::Create(draft) => self.service.create(draft)?,
        };
        self.refresh();
        Ok(saved)
    }

    /// Persists `accounts` as given and, on success, shows them in that order.
    pub fn handle_reorder_accounts(&self, accounts: Vec<Account>) -> Result<(), PageError> {
        self.service.reorder(&accounts)?;
        self.set_accounts(accounts);
        Ok(())
    }

    pub fn handle_drag_end(
        &self,
        active_id: &str,
        over_id: Option<&str>,
    ) -> Result<Vec<Account>, PageError> {
        let reordered = grid::handle_drag_end(&self.accounts(), active_id, over_id)
            .ok_or(PageError::NothingMoved)?;
        self.handle_reorder_accounts(reordered.clone())?;
        Ok(reordered)
    }
}
