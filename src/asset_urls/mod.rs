//! Turning manifest output paths into public URLs.
//!
//! Joining a public base with an output path and walking an entry's import graph are kept in
//! separate submodules so that each can be tested on its own. Both are used by the accessor
//! and are available to callers that hold a [`crate::Manifest`] directly.

mod entry;
mod public;

pub use entry::{EntryAssets, collect_entry_assets};
pub use public::public_asset_path;
