//! Financial summary: total cost, total revenue and net profit.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::SummaryService;
pub use types::FinancialSummary;
