//! Goals module - class target allocations.

mod goals_model;


pub use goals_model::{
    default_investment_goals, goals_total, validate_investment_goals, with_missing_classes,
    InvestmentGoal,
};
