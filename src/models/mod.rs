pub mod day_log;
pub mod duty_category;
pub mod duty_event;
pub mod trip;
