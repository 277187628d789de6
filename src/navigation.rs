//! Navigation between the landing screen and the quiz screen
//!
//! The landing screen builds a `QuizConfig`; the quiz screen is entered by
//! decoding that configuration's descriptor.

mod descriptor;
mod landing;
pub mod landing_render;

pub use descriptor::{QUIZ_VIEW, QuizConfig};
pub use landing::LandingState;
