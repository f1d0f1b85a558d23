pub mod health;
pub mod search;
pub mod webhook;
pub mod wsroute;
