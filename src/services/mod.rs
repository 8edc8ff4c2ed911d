pub mod email;

pub use email::{build_dispatcher, LogDispatcher, NotificationDispatcher, SmtpDispatcher};
