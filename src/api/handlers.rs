#[path = "handlers/evaluate.rs"]
mod evaluate;

#[path = "handlers/grade.rs"]
mod grade;

#[path = "handlers/health.rs"]
mod health;

#[path = "handlers/helpers.rs"]
mod helpers;

pub use evaluate::handle_evaluate;
pub use grade::handle_grade;
pub use health::handle_health;
