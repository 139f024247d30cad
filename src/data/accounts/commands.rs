/// Storage-facing account operations that report every outcome to the user.
///
/// Each operation logs failures and pushes a transient notification. The
/// `save_account` family returns the plain success value; the `create` family
/// returns the underlying error as well, for callers that need to tell
/// failures apart.
pub struct AccountService {
    store: AccountStore,
    notifier: Arc<Notifier>,
}

impl AccountService {
    pub fn new(store: AccountStore, notifier: Arc<Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn notifier(&self) -> &Arc<Notifier> {
        &self.notifier
    }

    pub fn get_accounts(&self) -> Vec<Account> {
        match self.store.load() {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::error!(error = %e, key = self.store.key(), "failed to get accounts");
                self.notifier.error("Failed to load accounts");
                Vec::new()
            }
        }
    }

    pub fn save_account(&self, draft: NewAccount) -> Option<Account> {
        self.create(draft).ok()
    }

    pub fn update_account(&self, account: Account) -> bool {
        self.update(account).is_ok()
    }

    pub fn delete_account(&self, account_id: &str) -> bool {
        self.remove(account_id).is_ok()
    }

    pub fn reorder_accounts(&self, accounts: &[Account]) -> bool {
        self.reorder(accounts).is_ok()
    }

    pub fn create(&self, draft: NewAccount) -> Result<Account, AccountError> {
        let result = self.store.create(draft);
        if let Ok(account) = &result {
            tracing::info!(id = %account.id, alias = %account.alias, "account created");
        }
        self.settle(
            result,
            Some("Account created successfully"),
            "Failed to save account",
        )
    }

    pub fn update(&self, account: Account) -> Result<Account, AccountError> {
        let id = account.id.clone();
        let result = self.store.update(account);
        if result.is_ok() {
            tracing::info!(%id, "account updated");
        }
        self.settle(
            result,
            Some("Account updated successfully"),
            "Failed to update account",
        )
    }

    pub fn remove(&self, account_id: &str) -> Result<(), AccountError> {
        let result = self.store.remove(account_id);
        if result.is_ok() {
            tracing::info!(id = %account_id, "account deleted");
        }
        self.settle(
            result,
            Some("Account deleted successfully"),
            "Failed to delete account",
        )
    }

    pub fn reorder(&self, accounts: &[Account]) -> Result<(), AccountError> {
        let result = self.store.reorder(accounts);
        if result.is_ok() {
            tracing::debug!(count = accounts.len(), "accounts reordered");
        }
        self.settle(result, None, "Failed to reorder accounts")
    }

    fn settle<T>(
        &self,
        result: Result<T, AccountError>,
        success: Option<&str>,
        failure: &str,
    ) -> Result<T, AccountError> {
        match &result {
            Ok(_) => {
                if let Some(message) = success {
                    self.notifier.success(message);
                }
            }
            Err(e) if e.is_rejection() => {
                tracing::warn!(reason = %e, "account operation rejected");
                self.notifier.error(e.to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "{}", failure);
                self.notifier.error(failure);
            }
        }
        result
    }
}
