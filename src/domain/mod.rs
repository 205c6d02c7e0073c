pub mod agent_state;
pub mod company;
pub mod page;
pub mod selector_strategy;
pub mod step;
