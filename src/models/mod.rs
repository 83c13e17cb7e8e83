pub mod auth;
pub mod claim;
pub mod common;
pub mod course;
pub mod customer;
pub mod event;
pub mod notification;
pub mod payment;
pub mod player;
pub mod special;
pub mod tournament;
pub mod transaction;

pub use auth::*;
pub use claim::*;
pub use common::*;
pub use course::*;
pub use customer::*;
pub use event::*;
pub use notification::*;
pub use payment::*;
pub use player::*;
pub use special::*;
pub use tournament::*;
pub use transaction::*;
