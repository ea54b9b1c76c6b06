pub mod app_state_builder;
pub mod fakes;
pub mod stubs;
