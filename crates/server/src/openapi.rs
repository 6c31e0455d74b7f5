use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::get,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::working_processes::list,
        crate::routes::working_processes::create,
        crate::routes::working_processes::get,
        crate::routes::working_processes::update,
        crate::routes::working_processes::delete,
        crate::routes::team_members::list,
        crate::routes::team_members::create,
        crate::routes::team_members::get,
        crate::routes::team_members::update,
        crate::routes::team_members::delete,
        crate::routes::testimonials::list,
        crate::routes::testimonials::create,
        crate::routes::testimonials::get,
        crate::routes::testimonials::update,
        crate::routes::testimonials::delete,
        crate::routes::case_studies::list,
        crate::routes::case_studies::create,
        crate::routes::case_studies::get,
        crate::routes::case_studies::update,
        crate::routes::case_studies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            crate::routes::services::ServiceInput,
            crate::routes::working_processes::WorkingProcessInput,
            crate::routes::team_members::TeamMemberInput,
            crate::routes::testimonials::TestimonialInput,
            crate::routes::case_studies::CaseStudyInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "working-processes"),
        (name = "team-members"),
        (name = "testimonials"),
        (name = "case-studies")
    )
)]
pub struct ApiDoc;
