use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{Connectivity, SimProvider, SimStatus};
use crate::handlers;
use crate::models::*;
use crate::utils::renewal::LifecycleStatus;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::device::create_dispatch,
        handlers::device::list_dispatches,
        handlers::device::dispatch_options,
        handlers::device::get_dispatch,
        handlers::sim_card::add_sim,
        handlers::sim_card::list_sims,
        handlers::sim_card::available_sims,
        handlers::client::create_client,
        handlers::client::list_clients,
        handlers::client::update_client,
        handlers::dashboard::overview,
        handlers::dashboard::industries,
        handlers::dashboard::expiring,
        handlers::dashboard::partners,
    ),
    components(
        schemas(
            CreateDispatchRequest,
            DeviceResponse,
            DispatchOptionsResponse,
            CreateSimRequest,
            SimResponse,
            CreateClientRequest,
            UpdateClientRequest,
            ClientResponse,
            DashboardOverviewResponse,
            StatusTally,
            IndustrySlice,
            PartnerPerformance,
            LifecycleStatus,
            Connectivity,
            SimProvider,
            SimStatus,
            ApiError,
        )
    ),
    tags(
        (name = "dispatch", description = "Device dispatch API"),
        (name = "sim", description = "SIM inventory API"),
        (name = "client", description = "Client master API"),
        (name = "dashboard", description = "Analytics API"),
    ),
    info(
        title = "PMS Backend API",
        version = "1.0.0",
        description = "Product management system REST API documentation"
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
