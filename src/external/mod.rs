pub mod sendgrid;
pub mod stripe;

pub use sendgrid::SendGridService;
pub use stripe::StripeService;
