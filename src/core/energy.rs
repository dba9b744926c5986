use crate::{
    core::validate::validate,
    error::ValidationError,
    journal::Journal,
    quantity::{energy::Joules, power::Watts, time::Seconds},
};

/// Compute the energy from power and time.
///
/// The inputs are validated first, power before time, and the first failure
/// propagates. The product itself is exact, no rounding happens here.
pub fn calculate_energy(
    power: Watts,
    time: Seconds,
    journal: &dyn Journal,
) -> Result<Joules, ValidationError> {
    validate(power.0, "Power")?;
    validate(time.0, "Time")?;
    let energy = power * time;
    journal.info(format!("computed energy: {energy}"));
    Ok(energy)
}
