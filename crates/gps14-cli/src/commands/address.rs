//! Reverse geocoding.

use crate::cli::AddressArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

/// Run the address command
pub async fn run_address(ctx: &Context, args: AddressArgs) -> Result<(), CliError> {
    validate_coordinates(args.lat, args.lng)?;
    ctx.authenticate().await?;

    let address = with_spinner(
        "Looking up address...",
        ctx.json,
        ctx.client.get_address(args.lat, args.lng),
    )
    .await?;

    println!(
        "{}",
        get_formatter(ctx.json).format_address(args.lat, args.lng, address.as_deref())
    );

    Ok(())
}

fn validate_coordinates(lat: f64, lng: f64) -> Result<(), CliError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(CliError::InvalidArgument(format!("Latitude out of range: {}", lat)));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(CliError::InvalidArgument(format!("Longitude out of range: {}", lng)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(48.85, 2.35).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }
}
