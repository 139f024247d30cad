#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("An account with this alias already exists")]
    DuplicateAlias,
    #[error("An account with this email already exists")]
    DuplicateEmail,
    #[error("Account not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored account data is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to serialize accounts: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("account store lock poisoned")]
    Poisoned,
}

impl AccountError {
    /// Rejections caused by the request itself rather than by storage.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AccountError::DuplicateAlias | AccountError::DuplicateEmail | AccountError::NotFound
        )
    }
}

/// The account collection, kept as one JSON array under a single storage key.
///
/// Every mutation reads the whole collection, edits a copy and overwrites the
/// key. Mutations hold `write_lock` so concurrent requests in one process do
/// not interleave their read-modify-write cycles.
pub struct AccountStore {
    storage: Box<dyn KeyValueStorage>,
    key: String,
    write_lock: Mutex<()>,
}

impl AccountStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, ACCOUNTS_STORAGE_KEY)
    }

    pub fn with_key(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Result<Vec<Account>, AccountError> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(AccountError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, accounts: &[Account]) -> Result<(), AccountError> {
        let json = serde_json::to_string(accounts).map_err(AccountError::Serialize)?;
        self.storage.set_item(&self.key, &json)?;
        Ok(())
    }

    pub fn create(&self, draft: NewAccount) -> Result<Account, AccountError> {
        let _guard = self.write_lock.lock().map_err(|_| AccountError::Poisoned)?;
        let mut accounts = self.load()?;

        if accounts.iter().any(|a| a.alias == draft.alias) {
            return Err(AccountError::DuplicateAlias);
        }
        if accounts.iter().any(|a| a.email == draft.email) {
            return Err(AccountError::DuplicateEmail);
        }

        let account = Account::from_draft(draft, accounts.len());
        accounts.push(account.clone());
        self.persist(&accounts)?;

        Ok(account)
    }

    pub fn update(&self, account: Account) -> Result<Account, AccountError> {
        let _guard = self.write_lock.lock().map_err(|_| AccountError::Poisoned)?;
        let mut accounts = self.load()?;

        let index = accounts
            .iter()
            .position(|a| a.id == account.id)
            .ok_or(AccountError::NotFound)?;

        if accounts
            .iter()
            .any(|a| a.alias == account.alias && a.id != account.id)
        {
            return Err(AccountError::DuplicateAlias);
        }
        if accounts
            .iter()
            .any(|a| a.email == account.email && a.id != account.id)
        {
            return Err(AccountError::DuplicateEmail);
        }

        accounts[index] = account.clone();
        self.persist(&accounts)?;

        Ok(account)
    }

    pub fn remove(&self, account_id: &str) -> Result<(), AccountError> {
        let _guard = self.write_lock.lock().map_err(|_| AccountError::Poisoned)?;
        let accounts = self.load()?;
        let initial_len = accounts.len();

        let remaining: Vec<Account> = accounts
            .into_iter()
            .filter(|a| a.id != account_id)
            .enumerate()
            .map(|(index, mut account)| {
                account.order = index;
                account
            })
            .collect();

        if remaining.len() == initial_len {
            return Err(AccountError::NotFound);
        }

        self.persist(&remaining)
    }

    /// Stores `accounts` exactly as given; callers own the order values.
    pub fn reorder(&self, accounts: &[Account]) -> Result<(), AccountError> {
        let _guard = self.write_lock.lock().map_err(|_| AccountError::Poisoned)?;
        self.persist(accounts)
    }
}
