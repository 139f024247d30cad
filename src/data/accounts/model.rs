pub const ACCOUNTS_STORAGE_KEY: &str = "sequential-race-bot-accounts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountColor {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    #[default]
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl AccountColor {
    pub const ALL: [AccountColor; 17] = [
        AccountColor::Red,
        AccountColor::Orange,
        AccountColor::Amber,
        AccountColor::Yellow,
        AccountColor::Lime,
        AccountColor::Green,
        AccountColor::Emerald,
        AccountColor::Teal,
        AccountColor::Cyan,
        AccountColor::Sky,
        AccountColor::Blue,
        AccountColor::Indigo,
        AccountColor::Violet,
        AccountColor::Purple,
        AccountColor::Fuchsia,
        AccountColor::Pink,
        AccountColor::Rose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccountColor::Red => "red",
            AccountColor::Orange => "orange",
            AccountColor::Amber => "amber",
            AccountColor::Yellow => "yellow",
            AccountColor::Lime => "lime",
            AccountColor::Green => "green",
            AccountColor::Emerald => "emerald",
            AccountColor::Teal => "teal",
            AccountColor::Cyan => "cyan",
            AccountColor::Sky => "sky",
            AccountColor::Blue => "blue",
            AccountColor::Indigo => "indigo",
            AccountColor::Violet => "violet",
            AccountColor::Purple => "purple",
            AccountColor::Fuchsia => "fuchsia",
            AccountColor::Pink => "pink",
            AccountColor::Rose => "rose",
        }
    }
}

impl fmt::Display for AccountColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for AccountColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AccountColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub alias: String,
    pub email: String,
    pub password: String,
    pub color: AccountColor,
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Account fields supplied by the user; `id` and `order` are assigned on save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub alias: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub color: AccountColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Account {
    pub fn from_draft(draft: NewAccount, order: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            alias: draft.alias,
            email: draft.email,
            password: draft.password,
            color: draft.color,
            order,
            token: draft.token,
        }
    }
}
