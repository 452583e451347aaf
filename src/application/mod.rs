// Application layer: text mapping and the solve use case

pub mod knapsack_service;
pub mod mappers;

pub use knapsack_service::{AppError, KnapsackService};
pub use mappers::{format_solution, parse_problem, ParseError};
