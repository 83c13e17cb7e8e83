use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::claim::submit_claim,
        handlers::claim::list_claims,
        handlers::claim::get_claim,
        handlers::claim::decide_claim,
        handlers::claim::delete_claim,
        handlers::player::upsert_player,
        handlers::player::list_players,
        handlers::player::get_player,
        handlers::player::delete_player,
        handlers::course::create_course,
        handlers::course::list_courses,
        handlers::tournament::latest_tournament,
        handlers::tournament::save_tournament,
        handlers::crm::create_customer,
        handlers::crm::list_customers,
        handlers::accounting::accounting_summary,
        handlers::accounting::list_transactions,
        handlers::accounting::create_transaction,
        handlers::special::create_special,
        handlers::special::list_specials,
        handlers::event::record_event,
        handlers::event::list_events,
        handlers::payment::create_payment_intent,
        handlers::notification::send_email,
        handlers::notification::list_notifications,
    ),
    components(
        schemas(
            LoginRequest,
            RefreshTokenRequest,
            AuthResponse,
            ClaimType,
            ClaimStatus,
            SubmitClaimRequest,
            DecideClaimRequest,
            ClaimResponse,
            SubmitClaimResponse,
            UpsertPlayerRequest,
            DeletePlayerRequest,
            PlayerResponse,
            CompactPlayerResponse,
            CreateCourseRequest,
            CourseResponse,
            SaveTournamentRequest,
            TournamentResponse,
            CreateCustomerRequest,
            CustomerResponse,
            TransactionStatus,
            TransactionType,
            TransactionCategory,
            CreateTransactionRequest,
            TransactionResponse,
            AccountingSummary,
            DiscountType,
            SpecialStatus,
            CreateSpecialRequest,
            SpecialResponse,
            RecordEventRequest,
            EventResponse,
            NotificationStatus,
            SendEmailRequest,
            NotificationResponse,
            CreatePaymentIntentRequest,
            CreatePaymentIntentResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "claims", description = "Claim intake and verification"),
        (name = "players", description = "Player registry and points ledger"),
        (name = "courses", description = "Course directory"),
        (name = "tournaments", description = "Tournament settings"),
        (name = "crm", description = "Customer relationship management"),
        (name = "accounting", description = "Transactions and summary"),
        (name = "specials", description = "Promotional specials"),
        (name = "events", description = "Event capture"),
        (name = "payments", description = "Stripe payments"),
        (name = "notifications", description = "Outbound email"),
    ),
    info(
        title = "Par-3 Challenge Backend API",
        version = "1.0.0",
        description = "Par-3 Challenge admin backend REST API documentation"
    ),
    servers(
        (url = "/", description = "This server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
