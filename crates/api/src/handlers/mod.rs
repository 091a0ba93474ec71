pub mod check_domain;
pub mod health;

pub use check_domain::check_domain;
pub use health::health_check;
