pub mod activities;
pub mod conditions;
pub mod crops;
pub mod days;
pub mod harvests;
pub mod houses;
