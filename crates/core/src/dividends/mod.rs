//! Dividends module - recorded distributions and their summaries.

mod dividends_model;


pub use dividends_model::{Dividend, DividendFilter, DividendSummary, DividendType, NewDividend};
