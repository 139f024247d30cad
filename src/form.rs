//! Create/edit form for a single account.
//!
//! The form keeps its own field values and per-field errors. Submitting it
//! either yields a draft for a new account or the edited copy of the account
//! it was opened for.

use crate::data::accounts::{Account, AccountColor, NewAccount};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Alias,
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.alias.is_none() && self.email.is_none() && self.password.is_none()
    }

    fn slot(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Alias => &mut self.alias,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewAccount),
    Update(Account),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub alias: String,
    pub email: String,
    pub password: String,
    pub color: AccountColor,
    errors: FormErrors,
}

impl AccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_account(account: &Account) -> Self {
        Self {
            alias: account.alias.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
            color: account.color,
            errors: FormErrors::default(),
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Sets a field and clears any error shown for it.
    pub fn handle_change(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Alias => self.alias = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
        self.errors.slot(field).take();
    }

    pub fn set_color(&mut self, color: AccountColor) {
        self.color = color;
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::default();

        if self.alias.is_empty() {
            errors.alias = Some("Alias is required".to_string());
        }
        if self.email.is_empty() {
            errors.email = Some("Email is required".to_string());
        }
        // Also hit for an empty email, so the format message wins there.
        if !self.email.contains('@') {
            errors.email = Some("Invalid email format".to_string());
        }
        if self.password.is_empty() {
            errors.password = Some("Password is required".to_string());
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Validates and builds the submission; `editing` is the account the form
    /// was opened for, if any.
    pub fn submit(&mut self, editing: Option<&Account>) -> Option<Submission> {
        if !self.validate() {
            return None;
        }

        let submission = match editing {
            Some(account) => Submission::Update(Account {
                alias: self.alias.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                color: self.color,
                ..account.clone()
            }),
            None => Submission::Create(NewAccount {
                alias: self.alias.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                color: self.color,
                token: None,
            }),
        };

        Some(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> AccountForm {
        let mut form = AccountForm::new();
        form.handle_change(FormField::Alias, "Racer");
        form.handle_change(FormField::Email, "racer@wolf.live");
        form.handle_change(FormField::Password, "secret");
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = AccountForm::new();
        assert!(!form.validate());
        assert_eq!(
            form.errors(),
            &FormErrors {
                alias: Some("Alias is required".to_string()),
                email: Some("Invalid email format".to_string()),
                password: Some("Password is required".to_string()),
            }
        );
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut form = filled();
        form.handle_change(FormField::Email, "racer.wolf.live");
        assert!(form.submit(None).is_none());
        assert_eq!(form.errors().email.as_deref(), Some("Invalid email format"));
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut form = AccountForm::new();
        form.validate();
        form.handle_change(FormField::Alias, "R");

        assert_eq!(form.errors().alias, None);
        assert!(form.errors().password.is_some());
    }

    #[test]
    fn new_form_defaults_to_blue_and_creates_draft() {
        let mut form = filled();
        assert_eq!(form.color, AccountColor::Blue);

        let submission = form.submit(None).unwrap();
        assert_eq!(
            submission,
            Submission::Create(NewAccount {
                alias: "Racer".to_string(),
                email: "racer@wolf.live".to_string(),
                password: "secret".to_string(),
                color: AccountColor::Blue,
                token: None,
            })
        );
    }

    #[test]
    fn editing_keeps_identity_order_and_token() {
        let existing = Account {
            id: "abc".to_string(),
            alias: "Old".to_string(),
            email: "old@wolf.live".to_string(),
            password: "pw".to_string(),
            color: AccountColor::Red,
            order: 4,
            token: Some("tok".to_string()),
        };
        let mut form = AccountForm::for_account(&existing);
        form.handle_change(FormField::Alias, "New");
        form.set_color(AccountColor::Lime);

        let Some(Submission::Update(updated)) = form.submit(Some(&existing)) else {
            panic!("expected an update submission");
        };
        assert_eq!(updated.id, "abc");
        assert_eq!(updated.order, 4);
        assert_eq!(updated.token.as_deref(), Some("tok"));
        assert_eq!(updated.alias, "New");
        assert_eq!(updated.color, AccountColor::Lime);
    }
}
