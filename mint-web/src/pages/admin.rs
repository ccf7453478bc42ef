//! Operator dashboard: registration counts, entry table and CSV export.

use chrono::Utc;
use leptos::prelude::*;
use shared::dto::registration::{EntryStatus, RegistrationEntry};

use crate::services::download::{BrowserDownload, DownloadSink};
use crate::state::dashboard::Dashboard;
use crate::utils::constants::{BRAND_NAME, CSV_MIME};
use crate::utils::format::{locale_date, locale_datetime};

fn status_icon(status: &EntryStatus) -> &'static str {
    match status {
        EntryStatus::Pending => "◷",
        EntryStatus::Sent => "✓",
        EntryStatus::Failed => "✕",
        EntryStatus::Other(_) => "?",
    }
}

/// What the entry table shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TableBody {
    Loading,
    Empty,
    Rows,
}

/// A refresh in flight replaces the rows, even when some are already loaded.
fn table_body(loading: bool, entries: usize) -> TableBody {
    if loading {
        TableBody::Loading
    } else if entries == 0 {
        TableBody::Empty
    } else {
        TableBody::Rows
    }
}

fn export(dashboard: Dashboard) {
    let export = dashboard.export_csv(Utc::now(), locale_datetime);
    match BrowserDownload.save(&export.filename, CSV_MIME, &export.contents) {
        Ok(()) => log::info!("Exported {} entries to {}", export.rows, export.filename),
        Err(e) => log::error!("CSV export failed: {}", e),
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<usize>, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-{}", tone)>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
fn EntryRow(entry: RegistrationEntry) -> impl IntoView {
    let status = entry.status.as_str().to_string();
    view! {
        <tr>
            <td class="mono" title=entry.wallet_address.clone()>
                {shared::utils::format_address(&entry.wallet_address, 8, 6)}
            </td>
            <td>{entry.email.unwrap_or_else(|| "-".to_string())}</td>
            <td>{entry.twitter_handle.unwrap_or_else(|| "-".to_string())}</td>
            <td>
                <span class=format!("status status-{}", status)>
                    {status_icon(&entry.status)} " " {status.clone()}
                </span>
            </td>
            <td>{locale_date(&entry.created_at)}</td>
        </tr>
    }
}

#[component]
pub fn AdminPage(dashboard: Dashboard) -> impl IntoView {
    let refresh = move || {
        leptos::task::spawn_local(async move {
            if dashboard.refresh().await.is_err() {
                log::debug!("Keeping previously loaded entries");
            }
        });
    };
    refresh();

    let stat = move |pick: fn(&shared::dto::registration::EntryStats) -> usize| {
        Signal::derive(move || pick(&dashboard.stats()))
    };

    view! {
        <div class="admin">
            <header class="admin-header">
                <div>
                    <h1>{format!("{} Admin", BRAND_NAME)}</h1>
                    <p class="admin-subtitle">"Free mint registrations"</p>
                </div>
                <div class="admin-actions">
                    <button
                        class="btn btn-secondary"
                        disabled=move || dashboard.is_loading()
                        on:click=move |_| refresh()
                    >
                        <span class="spinner" class:spinning=move || dashboard.is_loading()></span>
                        "Refresh"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| export(dashboard)>
                        "Export CSV"
                    </button>
                </div>
            </header>

            {move || dashboard.last_error().map(|message| view! {
                <div class="error-banner">{format!("Could not load entries: {}", message)}</div>
            })}

            <div class="stat-grid">
                <StatCard label="Total Entries" value=stat(|s| s.total) tone="total"/>
                <StatCard label="Pending" value=stat(|s| s.pending) tone="pending"/>
                <StatCard label="Sent" value=stat(|s| s.sent) tone="sent"/>
                <StatCard label="Failed" value=stat(|s| s.failed) tone="failed"/>
            </div>

            <table class="entries">
                <thead>
                    <tr>
                        <th>"Wallet"</th>
                        <th>"Email"</th>
                        <th>"Twitter"</th>
                        <th>"Status"</th>
                        <th>"Submitted"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let entries = dashboard.entries();
                        match table_body(dashboard.is_loading(), entries.len()) {
                            TableBody::Loading => {
                                view! { <tr><td colspan="5" class="table-note">"Loading..."</td></tr> }.into_any()
                            }
                            TableBody::Empty => {
                                view! { <tr><td colspan="5" class="table-note">"No entries yet"</td></tr> }.into_any()
                            }
                            TableBody::Rows => entries
                                .into_iter()
                                .map(|entry| view! { <EntryRow entry=entry/> })
                                .collect_view()
                                .into_any(),
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_hides_loaded_rows() {
        assert_eq!(table_body(true, 12), TableBody::Loading);
        assert_eq!(table_body(true, 0), TableBody::Loading);
    }

    #[test]
    fn test_idle_table() {
        assert_eq!(table_body(false, 0), TableBody::Empty);
        assert_eq!(table_body(false, 3), TableBody::Rows);
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(status_icon(&EntryStatus::Sent), "✓");
        assert_eq!(status_icon(&EntryStatus::Other("queued".to_string())), "?");
    }
}
