use crate::guardian::{
    handlers::{features::Feature, user_login::UserLogin, user_register::UserRegister},
    session::Identity,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health::health,
        super::handlers::user_register::register,
        super::handlers::user_login::login,
        super::handlers::me::me,
        super::handlers::features::features,
    ),
    components(schemas(UserRegister, UserLogin, Identity, Feature)),
    tags(
        (name = "user", description = "Registration, authentication and identity"),
        (name = "features", description = "Dashboard feature catalog"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for route in [
            "/health",
            "/user/register",
            "/user/login",
            "/user/me",
            "/features",
        ] {
            assert!(paths.contains_key(route), "missing route: {route}");
        }
    }
}
