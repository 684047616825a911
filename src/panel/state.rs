//! Snapshot store.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. The Web Worker keeps the WASM module alive, so the last successfully
//! loaded snapshot persists across `handle_request` calls for the entire
//! browser session.
//!
//! Replacement is all-or-nothing: a failed load (bad status, unparsable body)
//! leaves the previous snapshot untouched. There is no diffing and no partial
//! update — each reload tears down and rebuilds every rendered section.

use crate::model::GameSnapshot;
use std::cell::RefCell;

thread_local! {
    static SNAPSHOT: RefCell<GameSnapshot> = RefCell::new(GameSnapshot::default());
}

/// Execute a closure with read access to the current snapshot.
pub fn with_snapshot<F, R>(f: F) -> R
where
    F: FnOnce(&GameSnapshot) -> R,
{
    SNAPSHOT.with(|s| f(&s.borrow()))
}

/// Replace the entire snapshot (used by import and by tests).
pub fn replace_snapshot(new_snapshot: GameSnapshot) {
    SNAPSHOT.with(|s| {
        *s.borrow_mut() = new_snapshot;
    });
}

/// Ingest an upstream `GET /api/game_state` response.
///
/// `status` is the upstream HTTP status as reported by the bridge (0 for a
/// network-level failure). Only a 2xx status with a parsable body replaces
/// the stored snapshot; everything else is the single RequestFailed case.
pub fn import_snapshot(status: u16, body: &str) -> Result<(), String> {
    if !(200..300).contains(&status) {
        return Err(format!("game state request failed with status {}", status));
    }
    let snapshot: GameSnapshot =
        serde_json::from_str(body).map_err(|e| format!("invalid game state payload: {}", e))?;
    replace_snapshot(snapshot);
    Ok(())
}
