//! Integration tests for the synchronizer core
//!
//! Tests are organized by topic:
//! - `scenarios` - End-to-end update-cycle sequences through the full
//!   scroll-then-focus state machine
//! - `handle` - Synchronizer driven the way a widget adapter drives it,
//!   spotlight flags included

mod handle;
