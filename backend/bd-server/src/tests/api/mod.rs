mod burndown;
mod error;
