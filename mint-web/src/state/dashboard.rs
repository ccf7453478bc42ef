//! Operator dashboard state: the registration list, status counts and CSV export.

use std::borrow::Cow;
use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use leptos::prelude::*;
use shared::dto::registration::{EntryStats, RegistrationEntry};

use crate::error::StoreError;
use crate::services::store::RegistrationStore;
use crate::utils::constants::CSV_FILE_PREFIX;

pub const CSV_HEADERS: [&str; 6] = [
    "Wallet Address",
    "Email",
    "Twitter",
    "Status",
    "Created At",
    "TX Hash",
];

/// A generated CSV file, ready for a download sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
    /// Data rows, excluding the header
    pub rows: usize,
}

/// Quote a field if it holds a delimiter, quote or line break.
pub fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Serialize entries with a fixed column order. Missing optional fields are
/// empty; lines end with `\n`.
pub fn entries_to_csv<F>(entries: &[RegistrationEntry], format_time: F) -> String
where
    F: Fn(&DateTime<Utc>) -> String,
{
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for entry in entries {
        let created_at = format_time(&entry.created_at);
        let fields = [
            entry.wallet_address.as_str(),
            entry.email.as_deref().unwrap_or(""),
            entry.twitter_handle.as_deref().unwrap_or(""),
            entry.status.as_str(),
            created_at.as_str(),
            entry.tx_hash.as_deref().unwrap_or(""),
        ];
        let row: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_csv_field(f)).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// `nft-entries-2024-05-01T10:00:00.000Z.csv`
pub fn export_filename(exported_at: DateTime<Utc>) -> String {
    format!(
        "{}-{}.csv",
        CSV_FILE_PREFIX,
        exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

#[derive(Clone, Copy)]
pub struct Dashboard {
    store: StoredValue<Rc<dyn RegistrationStore>, LocalStorage>,
    entries: RwSignal<Vec<RegistrationEntry>>,
    stats: RwSignal<EntryStats>,
    loading: RwSignal<bool>,
    last_error: RwSignal<Option<String>>,
}

impl Dashboard {
    pub fn new(store: Rc<dyn RegistrationStore>) -> Self {
        Self {
            store: StoredValue::new_local(store),
            entries: RwSignal::new(vec![]),
            stats: RwSignal::new(EntryStats::default()),
            loading: RwSignal::new(false),
            last_error: RwSignal::new(None),
        }
    }

    pub fn entries(&self) -> Vec<RegistrationEntry> {
        self.entries.get()
    }

    pub fn stats(&self) -> EntryStats {
        self.stats.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Reason the last refresh failed, for the operator banner.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.get()
    }

    /// Reload every entry, newest first.
    ///
    /// On failure the previous list and counts are kept and the error is logged
    /// and shown in the banner.
    pub async fn refresh(&self) -> Result<usize, StoreError> {
        self.loading.set(true);
        let store = self.store.get_value();
        let result = store.fetch_all().await;

        let outcome = match result {
            Ok(entries) => {
                let count = entries.len();
                log::info!("Dashboard loaded {} entries", count);
                self.stats.try_set(EntryStats::tally(&entries));
                self.entries.try_set(entries);
                self.last_error.try_set(None);
                Ok(count)
            }
            Err(e) => {
                log::error!("Failed to load entries: {}", e);
                self.last_error.try_set(Some(e.to_string()));
                Err(e)
            }
        };

        self.loading.try_set(false);
        outcome
    }

    /// Serialize the list currently in memory (no fetch).
    pub fn export_csv<F>(&self, exported_at: DateTime<Utc>, format_time: F) -> CsvExport
    where
        F: Fn(&DateTime<Utc>) -> String,
    {
        self.entries.with_untracked(|entries| CsvExport {
            filename: export_filename(exported_at),
            contents: entries_to_csv(entries, format_time),
            rows: entries.len(),
        })
    }
}
