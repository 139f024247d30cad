use crate::data::accounts::{Account, AccountColor};
use serde::Serialize;

/// Moves the element at `from` to `to`, shifting the elements in between.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Resolves a drag that ended with `active_id` dropped over `over_id`.
///
/// Returns the new sequence with `order` renumbered, or `None` when nothing
/// moved.
pub fn handle_drag_end(
    accounts: &[Account],
    active_id: &str,
    over_id: Option<&str>,
) -> Option<Vec<Account>> {
    let over_id = over_id?;
    if active_id == over_id {
        return None;
    }

    let old_index = accounts.iter().position(|a| a.id == active_id)?;
    let new_index = accounts.iter().position(|a| a.id == over_id)?;

    let reordered = array_move(accounts, old_index, new_index)
        .into_iter()
        .enumerate()
        .map(|(index, mut account)| {
            account.order = index;
            account
        })
        .collect();

    Some(reordered)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCard {
    pub id: String,
    pub alias: String,
    pub color: AccountColor,
    pub color_class: String,
    pub can_delete: bool,
    pub delete_title: &'static str,
}

impl AccountCard {
    pub fn new(account: &Account, running: bool) -> Self {
        Self {
            id: account.id.clone(),
            alias: account.alias.clone(),
            color: account.color,
            color_class: format!("bg-account-{}", account.color),
            can_delete: !running,
            delete_title: if running {
                "Cannot delete the account while the bot is running"
            } else {
                "Delete account"
            },
        }
    }
}

pub fn cards(accounts: &[Account], running: bool) -> Vec<AccountCard> {
    accounts
        .iter()
        .map(|account| AccountCard::new(account, running))
        .collect()
}
