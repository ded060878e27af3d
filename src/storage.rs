// sessionStorage snapshot: survives a reload of the tab, not a closed tab.
use web_sys::Storage;

use crate::config::SNAPSHOT_KEY;
use crate::error::BrowserError;
use crate::model::Snapshot;

fn session_storage() -> Result<Storage, BrowserError> {
    let win = web_sys::window().ok_or(BrowserError::NoWindow)?;
    win.session_storage()?.ok_or(BrowserError::Unavailable)
}

pub fn save_snapshot(snapshot: &Snapshot) -> Result<(), BrowserError> {
    let raw = snapshot.to_json()?;
    session_storage()?.set_item(SNAPSHOT_KEY, &raw)?;
    Ok(())
}

/// Reads the saved snapshot and removes it, so it is consumed by exactly one
/// start-up.
pub fn take_snapshot() -> Result<Option<Snapshot>, BrowserError> {
    let store = session_storage()?;
    let Some(raw) = store.get_item(SNAPSHOT_KEY)? else {
        return Ok(None);
    };
    store.remove_item(SNAPSHOT_KEY)?;
    Ok(Some(Snapshot::from_json(&raw)?))
}

/// `take_snapshot` for callers that fall back to a fresh game on any failure.
pub fn take_snapshot_or_log() -> Option<Snapshot> {
    match take_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Ignoring saved game: {}", e);
            None
        }
    }
}
