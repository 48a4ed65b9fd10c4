//! Interactive quiz-taking client.

mod client;
mod state;
mod ui;

pub use client::run;
pub use state::{ClientApp, Popup, View};
