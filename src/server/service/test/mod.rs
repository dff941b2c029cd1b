//! Service tests run against in-memory store fakes that record every write.

mod battery_audit;
mod media;
