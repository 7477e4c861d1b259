//! App Router

use salvo::Router;

use crate::{auth, categories, dashboard, orders, products, uploads, views};

/// Storefront routes, readable without a session.
fn storefront_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .push(Router::with_path("related").get(products::related::handler)),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(Router::with_path("names").get(categories::names::handler))
                .push(Router::with_path("{category}").get(categories::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(
            Router::with_path("views")
                .post(views::create::handler)
                .delete(views::delete::handler),
        )
}

/// Admin routes. Everything except login sits behind the session gate.
fn dashboard_router() -> Router {
    Router::with_path("dashboard")
        .push(
            Router::with_path("login")
                .get(auth::login::hint)
                .post(auth::login::handler),
        )
        .push(
            Router::new()
                .hoop(auth::gate::handler)
                .get(dashboard::overview::handler)
                .push(Router::with_path("logout").post(auth::logout::handler))
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("categories")
                        .post(categories::create::handler)
                        .push(
                            Router::with_path("{category}")
                                .put(categories::update::handler)
                                .delete(categories::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("orders").get(orders::index::handler).push(
                        Router::with_path("{order}")
                            .put(orders::update::handler)
                            .delete(orders::delete::handler),
                    ),
                )
                .push(Router::with_path("upload").post(uploads::image::handler)),
        )
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(storefront_router())
        .push(dashboard_router())
}

#[cfg(test)]
mod tests {
    use salvo::{http::header::LOCATION, prelude::*, test::TestClient};

    use crate::{auth::LOGIN_PATH, test_helpers::strict_context};

    use super::*;

    fn make_service() -> Service {
        crate::test_helpers::service(strict_context(), app_router())
    }

    #[tokio::test]
    async fn dashboard_routes_redirect_without_session() {
        for (method, path) in [
            ("GET", "/dashboard"),
            ("GET", "/dashboard/orders"),
            ("POST", "/dashboard/upload"),
            ("POST", "/dashboard/logout"),
        ] {
            let url = format!("http://example.com{path}");

            let client = match method {
                "POST" => TestClient::post(url),
                _ => TestClient::get(url),
            };

            let res = client.send(&make_service()).await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::FOUND),
                "{method} {path} should redirect"
            );
            assert_eq!(
                res.headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok()),
                Some(LOGIN_PATH),
                "{method} {path} should redirect to login"
            );
        }
    }

    #[tokio::test]
    async fn redirect_target_answers_get_without_session() {
        let res = TestClient::get(format!("http://example.com{LOGIN_PATH}"))
            .send(&make_service())
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::OK),
            "login page should be reachable after the redirect"
        );
    }
}
