mod battery_audit;
mod drone;
mod media;
mod medication;
