//! Geothermal resource models.
//!
//! This module contains models that estimate the electrical capacity of
//! geothermal reservoirs.

pub mod reservoir;
