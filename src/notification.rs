//! Notification module for quizr
//!
//! Transient messages layered over the active screen.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
