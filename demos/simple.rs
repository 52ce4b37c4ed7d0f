//! Simple standalone example of dynamic array usage.
//!
//! Walks through every operation and logs capacity transitions as they
//! happen. Control verbosity with `RUST_LOG`, e.g. `RUST_LOG=dynarray=trace`.
//!
//! Run with: cargo run --example simple

use dynarray::DynamicArray;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dynarray=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("=== Simple DynamicArray Example ===");

    let mut array = DynamicArray::new();
    info!(len = array.len(), capacity = array.capacity(), "created empty array");

    // Single appends double capacity as the array fills
    for word in ["alpha", "beta", "gamma", "delta"] {
        array.append_val(word);
        info!(len = array.len(), capacity = array.capacity(), "appended {word}");
    }

    // A bulk insert may need several doublings at once
    array.append_vals(["e", "f", "g", "h", "i", "j", "k", "l", "m"]);
    info!(len = array.len(), capacity = array.capacity(), "appended nine more");

    array.prepend_val("zero");
    array.prepend_vals(["minus two", "minus one"]);
    if let Err(err) = array.insert_val("middle", 8) {
        warn!("insert failed: {err}");
    }
    info!("content: {:?}", array.elements());

    match array.range(0, 3) {
        Ok(head) => info!("first three: {:?}", head),
        Err(err) => warn!("range failed: {err}"),
    }

    // Out-of-range reads and bad insert positions are reported, never panicked on
    if let Err(err) = array.get(100) {
        warn!("get failed: {err}");
    }
    if let Err(err) = array.insert_val("nowhere", 100) {
        warn!("insert failed: {err}");
    }

    // Draining halves capacity at every quarter mark
    while let Ok(value) = array.remove_right() {
        info!(len = array.len(), capacity = array.capacity(), "removed {value}");
    }

    if let Err(err) = array.remove_left() {
        warn!("remove failed: {err}");
    }

    info!("final state: {:?}", array);
}
