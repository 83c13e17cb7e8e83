pub mod claims;
pub mod courses;
pub mod customers;
pub mod events;
pub mod notifications;
pub mod players;
pub mod specials;
pub mod tournaments;
pub mod transactions;

pub use claims as claim_entity;
pub use courses as course_entity;
pub use customers as customer_entity;
pub use events as event_entity;
pub use notifications as notification_entity;
pub use players as player_entity;
pub use specials as special_entity;
pub use tournaments as tournament_entity;
pub use transactions as transaction_entity;
