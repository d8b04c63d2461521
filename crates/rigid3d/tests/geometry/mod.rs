mod bvh_queries;
mod contacts;
mod joints;
mod mass_properties;
mod solver_stability;
mod time_accumulator;
