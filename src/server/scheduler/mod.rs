//! Cron jobs running alongside the HTTP server.

pub mod battery_audit;
