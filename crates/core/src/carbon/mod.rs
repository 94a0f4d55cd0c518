//! Carbon footprint estimation over fixed emission-factor tables.

mod carbon_calculator;
mod carbon_model;

pub use carbon_calculator::{
    energy_emissions_kg, food_emissions_kg, total_emissions_kg, transport_emissions_kg,
    waste_emissions_kg,
};
pub use carbon_model::{EnergyInput, Flight, FlightLeg, FoodInput, TransportInput, WasteInput};
