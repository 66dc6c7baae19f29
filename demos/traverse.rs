//! Grid Traverse
//!
//! Walks a tracker from the start corner to the exit corner, shows the
//! rules that refuse moves along the way, then exits and starts over.
//!
//! Key concepts:
//! - Moves are refused at the grid boundary
//! - The same direction is never allowed twice in a row
//! - Exit only works from the far corner and resets the tracker
//!
//! Run with: RUST_LOG=gridtrack=debug cargo run --example traverse

use gridtrack::{PositionTracker, TransitionError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TransitionError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    println!("=== Grid Traverse Example ===\n");

    let mut tracker = PositionTracker::new();
    println!("{tracker}");

    println!("\nRefused moves:");
    if let Err(e) = tracker.move_up() {
        println!("  ✗ {e}");
    }
    tracker.move_right()?;
    if let Err(e) = tracker.move_right() {
        println!("  ✗ {e}");
        for violation in e.violations() {
            println!("    - {violation}");
        }
    }

    println!("\nStaircase to the exit corner:");
    tracker.move_down()?;
    println!("  {tracker}");
    while (tracker.row(), tracker.col()) != tracker.bounds().exit_corner() {
        tracker.move_right()?;
        tracker.move_down()?;
        println!("  {tracker}");
    }

    tracker.exit()?;
    println!("\nAfter exit: {tracker}");

    let history = tracker.history();
    println!("Transitions recorded: {}", history.len());
    println!("Exits recorded: {}", history.exits());

    println!("\n=== Example Complete ===");
    Ok(())
}
