use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A stored user account.
#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[schema(format = Date, example = "1990-01-01")]
    pub date_of_birth: String,
    pub postcode: String,
}

/// Body of create and update requests; every field is required.
#[derive(ToSchema)]
pub struct UserInputDoc {
    pub email: String,
    pub name: String,
    #[schema(format = Date, example = "1990-01-01")]
    pub date_of_birth: String,
    pub postcode: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    info(title = "User Account API", version = "1.0.0", description = "API for managing user accounts with standard CRUD operations."),
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            UserInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
