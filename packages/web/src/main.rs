use dioxus::prelude::*;

use ui::{AdminAuthProvider, NavItem, SiteFooter, SiteHeader};
use views::{AdminDashboard, AdminLogin, Contact, Home, Loans};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/loans")]
        Loans {},
        #[route("/contact")]
        Contact {},
        #[route("/admin")]
        AdminLogin {},
    #[end_layout]
    #[route("/admin/dashboard")]
    AdminDashboard {},
}

impl Route {
    fn nav_item(&self) -> NavItem {
        match self {
            Route::Home {} => NavItem::Home,
            Route::Loans {} => NavItem::Loans,
            Route::Contact {} => NavItem::Contact,
            Route::AdminLogin {} | Route::AdminDashboard {} => NavItem::Admin,
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Failed to start tokio runtime: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info`.
#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    let config = api::config::config().await?;

    let pool = api::db::get_pool().await?;

    sqlx::migrate!("../api/migrations").run(pool).await?;

    if let Some(path) = &config.site_content_seed {
        let content = api::db::PgContentStore::new(pool.clone());
        match content.seed_if_empty(path).await {
            Ok(true) => tracing::info!("Seeded site content from {}", path),
            Ok(false) => {}
            Err(e) => tracing::warn!("Could not seed site content from {}: {}", path, e),
        }
    }

    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    // Set secure cookies when serving over HTTPS.
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(config.session_ttl.try_into()?));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "{ui::COMPANY_NAME}" }
        document::Link { rel: "stylesheet", href: ui::SITE_CSS }

        AdminAuthProvider {
            Router::<Route> {}
        }
    }
}

/// Header and footer around the public pages.
#[component]
fn PublicLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        SiteHeader { active: route.nav_item() }
        main {
            Outlet::<Route> {}
        }
        SiteFooter {}
    }
}
