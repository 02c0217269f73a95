// ABOUTME: CLI clear command - the form's Clear action without starting the UI

use crate::app::{AppState, StateOptions};
use crate::storage::Storage;
use anyhow::Result;
use std::sync::Arc;

/// Execute the clear command
pub fn execute(storage: Arc<dyn Storage>, options: StateOptions) -> Result<()> {
    let mut state = AppState::load(storage, options);
    state.clear();
    println!("Cleared saved answers and the latest submission.");
    Ok(())
}
