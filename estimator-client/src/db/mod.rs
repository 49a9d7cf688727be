pub mod simulation_queries;
