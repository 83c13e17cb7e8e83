pub mod accounting;
pub mod auth;
pub mod claim;
pub mod course;
pub mod crm;
pub mod event;
pub mod notification;
pub mod payment;
pub mod player;
pub mod special;
pub mod tournament;

pub use accounting::accounting_config;
pub use auth::auth_config;
pub use claim::claim_config;
pub use course::course_config;
pub use crm::crm_config;
pub use event::event_config;
pub use notification::notification_config;
pub use payment::payment_config;
pub use player::player_config;
pub use special::special_config;
pub use tournament::tournament_config;
