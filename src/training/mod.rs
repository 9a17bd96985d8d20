mod cost_history;
mod trainer;

pub use cost_history::CostHistory;
pub use trainer::BatchTrainer;
