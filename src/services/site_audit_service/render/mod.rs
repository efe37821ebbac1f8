pub mod details;

pub use details::{render_audit, render_details, AuditPanel, Bullet, Cell, DetailView};
