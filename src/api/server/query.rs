#[derive(Debug, Deserialize)]
struct MoveRequest {
    #[serde(alias = "overId", alias = "Over")]
    over: Option<String>,
}

/// Create payload; a missing color falls back to `[General] DefaultColor`.
#[derive(Debug, Default, Deserialize)]
struct CreateRequest {
    #[serde(default)]
    alias: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    color: Option<AccountColor>,
}

impl CreateRequest {
    fn into_form(self, default_color: AccountColor) -> AccountForm {
        let mut form = AccountForm::new();
        form.alias = self.alias;
        form.email = self.email;
        form.password = self.password;
        form.color = self.color.unwrap_or(default_color);
        form
    }
}

/// Edit payload: every field optional, unset fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
struct EditRequest {
    alias: Option<String>,
    email: Option<String>,
    password: Option<String>,
    color: Option<AccountColor>,
}

impl EditRequest {
    fn apply_to(self, account: &Account) -> AccountForm {
        let mut form = AccountForm::for_account(account);
        if let Some(alias) = self.alias {
            form.alias = alias;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(password) = self.password {
            form.password = password;
        }
        if let Some(color) = self.color {
            form.color = color;
        }
        form
    }
}
