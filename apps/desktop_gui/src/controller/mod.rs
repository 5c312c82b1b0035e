//! Controller layer: interaction state, reducer transitions, presentation, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod presentation;
pub mod reducer;
pub mod state;
