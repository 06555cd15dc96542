//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `login_form` owns the per-page form model; `session` owns the signed-in
//! identity that outlives any one page.

pub mod login_form;
pub mod session;
