//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and state
//! logic.

pub mod storage;
