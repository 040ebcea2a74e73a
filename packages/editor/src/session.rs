//! # Application State
//!
//! Account and UI flags surrounding the editor.
//!
//! AppState is passed explicitly to whatever needs it. Only the slice
//! returned by [`AppState::persisted`] survives a reload; transient flags
//! such as `is_loading` start fresh.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Identity of the signed-in account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub preferences: BTreeMap<String, Value>,
}

impl Account {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Subscriber being edited in the subscriber modal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscriber {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_active: bool,
    pub subscribed_on: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub account: Option<Account>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub email_config_modal_open: bool,
    pub email_config_modal_id: Option<String>,
    pub subscriber_modal_open: bool,
    pub subscriber: Option<Subscriber>,
}

/// The part of [`AppState`] written to storage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub account: Option<Account>,
    pub is_authenticated: bool,
    pub email_config_modal_open: bool,
    pub email_config_modal_id: Option<String>,
    pub subscriber_modal_open: bool,
    pub subscriber: Option<Subscriber>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, account: Account) {
        self.account = Some(account);
        self.is_authenticated = true;
        self.is_loading = false;
    }

    pub fn logout(&mut self) {
        self.account = None;
        self.is_authenticated = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Apply `update` to the signed-in account; no-op when signed out
    pub fn update_account(&mut self, update: impl FnOnce(&mut Account)) {
        if let Some(account) = self.account.as_mut() {
            update(account);
        }
    }

    pub fn set_email_config_modal(&mut self, open: bool, id: Option<String>) {
        self.email_config_modal_open = open;
        self.email_config_modal_id = id;
    }

    pub fn set_subscriber_modal(&mut self, open: bool, subscriber: Option<Subscriber>) {
        self.subscriber_modal_open = open;
        self.subscriber = subscriber;
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            account: self.account.clone(),
            is_authenticated: self.is_authenticated,
            email_config_modal_open: self.email_config_modal_open,
            email_config_modal_id: self.email_config_modal_id.clone(),
            subscriber_modal_open: self.subscriber_modal_open,
            subscriber: self.subscriber.clone(),
        }
    }

    pub fn restore(slice: PersistedState) -> Self {
        Self {
            account: slice.account,
            is_authenticated: slice.is_authenticated,
            is_loading: false,
            email_config_modal_open: slice.email_config_modal_open,
            email_config_modal_id: slice.email_config_modal_id,
            subscriber_modal_open: slice.subscriber_modal_open,
            subscriber: slice.subscriber,
        }
    }
}
