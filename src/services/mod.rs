pub mod accounting_service;
pub mod auth_service;
pub mod claim_service;
pub mod course_service;
pub mod customer_service;
pub mod event_service;
pub mod notification_service;
pub mod payment_service;
pub mod player_service;
pub mod special_service;
pub mod tournament_service;

pub use accounting_service::AccountingService;
pub use auth_service::AuthService;
pub use claim_service::ClaimService;
pub use course_service::CourseService;
pub use customer_service::CustomerService;
pub use event_service::EventService;
pub use notification_service::NotificationService;
pub use payment_service::PaymentService;
pub use player_service::PlayerService;
pub use special_service::SpecialService;
pub use tournament_service::TournamentService;
