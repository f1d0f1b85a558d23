pub mod dispatch;
pub mod email;
pub mod listings;
