//! Footprint arithmetic over EPA-style average emission factors.
//!
//! All results are kilograms of CO2. Waste handling returns a negative
//! number: recycling and composting are modeled as savings, not
//! emissions.

use super::carbon_model::{
    EnergyInput, FlightLeg, FoodInput, TransportInput, WasteInput,
};

// Transportation, kg CO2 per mile.
const CAR_KG_PER_MILE: f64 = 0.411;
const TRANSIT_KG_PER_MILE: f64 = 0.177;
const FLIGHT_SHORT_KG_PER_MILE: f64 = 0.254;
const FLIGHT_MEDIUM_KG_PER_MILE: f64 = 0.195;
const FLIGHT_LONG_KG_PER_MILE: f64 = 0.15;

// Energy, kg CO2 per unit.
const ELECTRICITY_KG_PER_KWH: f64 = 0.429;
const GAS_KG_PER_THERM: f64 = 5.31;

// Food, kg CO2 per meal.
const MEAT_KG_PER_MEAL: f64 = 3.3;
const VEGETARIAN_KG_PER_MEAL: f64 = 1.4;
const VEGAN_KG_PER_MEAL: f64 = 0.7;

// Waste diversion, kg CO2 saved per pound.
const RECYCLE_KG_PER_LB: f64 = 0.5;
const COMPOST_KG_PER_LB: f64 = 0.3;
const REDUCE_KG_PER_LB: f64 = 0.4;

pub fn transport_emissions_kg(input: &TransportInput) -> f64 {
    let mut total = input.car_miles * CAR_KG_PER_MILE
        + input.public_transit_miles * TRANSIT_KG_PER_MILE;
    // Bike and walk miles are zero-emission by definition.
    for flight in &input.flights {
        let factor = match flight.leg {
            FlightLeg::Short => FLIGHT_SHORT_KG_PER_MILE,
            FlightLeg::Medium => FLIGHT_MEDIUM_KG_PER_MILE,
            FlightLeg::Long => FLIGHT_LONG_KG_PER_MILE,
        };
        total += flight.miles * factor;
    }
    total
}

pub fn energy_emissions_kg(input: &EnergyInput) -> f64 {
    input.electricity_kwh * ELECTRICITY_KG_PER_KWH + input.gas_therms * GAS_KG_PER_THERM
}

pub fn food_emissions_kg(input: &FoodInput) -> f64 {
    let total = input.meat_meals * MEAT_KG_PER_MEAL
        + input.vegetarian_meals * VEGETARIAN_KG_PER_MEAL
        + input.vegan_meals * VEGAN_KG_PER_MEAL;
    // Locally sourced food trims up to 10% off the food total.
    let local_share = (input.local_food_percentage / 100.0).clamp(0.0, 1.0);
    total * (1.0 - local_share * 0.1)
}

pub fn waste_emissions_kg(input: &WasteInput) -> f64 {
    -(input.recycled_pounds * RECYCLE_KG_PER_LB
        + input.composted_pounds * COMPOST_KG_PER_LB
        + input.waste_reduced_pounds * REDUCE_KG_PER_LB)
}

pub fn total_emissions_kg(
    transport: &TransportInput,
    energy: &EnergyInput,
    food: &FoodInput,
    waste: &WasteInput,
) -> f64 {
    transport_emissions_kg(transport)
        + energy_emissions_kg(energy)
        + food_emissions_kg(food)
        + waste_emissions_kg(waste)
}
