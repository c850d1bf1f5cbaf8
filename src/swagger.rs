use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{BookingStatus, PackageTier};
use crate::handlers;
use crate::ledger::{BookingForm, PaymentStatus};
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::user::get_profile,
        handlers::package::get_packages,
        handlers::booking::create_booking,
        handlers::booking::list_bookings,
        handlers::booking::get_booking,
        handlers::booking::cancel_booking,
        handlers::payment::create_order,
        handlers::payment::confirm_payment,
        handlers::payment::get_history,
        handlers::demo_request::create_demo_request,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UserResponse,
            AuthResponse,
            PackageTier,
            PackageInfo,
            BookingForm,
            BookingStatus,
            BookingResponse,
            BookingWithPayments,
            BookingStats,
            BookingListResponse,
            PaymentStatus,
            PaymentResponse,
            CreateOrderRequest,
            CreateOrderResponse,
            ConfirmPaymentRequest,
            ConfirmPaymentResponse,
            PaymentHistoryQuery,
            DemoRequestForm,
            DemoRequestResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication API"),
        (name = "user", description = "User management API"),
        (name = "package", description = "Package catalogue API"),
        (name = "booking", description = "Booking management API"),
        (name = "payment", description = "Payment and top-up API"),
        (name = "demo", description = "Demo request API"),
    ),
    info(
        title = "Zecardia Events Backend API",
        version = "1.0.0",
        description = "Zecardia Events Backend REST API documentation",
        contact(
            name = "API Support",
            email = "support@zecardia.events"
        )
    ),
    servers(
        (url = "/api/v1", description = "Local server")
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
