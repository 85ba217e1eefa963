//! Intake form state machine
//!
//! Split the same way as an Elm-style UI:
//! - `model`: fields, state and last result
//! - `message`: what the host can send ([`FormMessage`]) and what it gets back ([`FormEffect`])
//! - `update`: [`FormController`], the only place the model changes

mod message;
mod model;
mod update;

pub use message::{FormEffect, FormMessage};
pub use model::{FormFields, FormModel, FormState};
pub use update::FormController;
