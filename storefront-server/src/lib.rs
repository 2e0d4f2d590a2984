//! Storefront Server - HTTP surface over the remote product catalog
//!
//! # Module structure
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # config, state, server, errors
//! ├── services/      # catalog snapshot
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logger, cookies
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod utils;

pub use api::{build_app, build_router};
pub use core::{Config, Server, ServerError, ServerState, SharedSource};
pub use services::CatalogSnapshot;
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{ApiResponse, AppError, AppResult};

/// Load `.env` before anything reads configuration
pub fn setup_environment() {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
