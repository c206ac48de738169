//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Admin login, admin session and admin creation
//! - `products` - Catalog management and sample data
//! - `orders` - Orders across all clients, status updates
//! - `clients` - Customer account suspension
//! - `tickets` - Support ticket responses
//! - `dashboard` - Store-wide aggregates

pub mod auth;
pub mod clients;
pub mod dashboard;
mod error;
pub mod orders;
pub mod products;
pub mod samples;
pub mod tickets;

pub use auth::AdminAuthService;
pub use clients::ClientService;
pub use dashboard::{DashboardService, DashboardStats};
pub use error::AdminError;
pub use orders::OrderAdminService;
pub use products::{ProductAdminService, ProductInput};
pub use samples::sample_products;
pub use tickets::TicketAdminService;
