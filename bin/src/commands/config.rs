//! Equivalence constant commands.

use crate::commands::Context;
use crate::display::render_constants;
use anyhow::{Context as _, Result, bail};
use inquire::CustomType;
use inquire::validator::Validation;
use mailco2_lib::{ConfigStore, ConstantKey, EquivalenceConstants, Overrides, parse_override};
use serde_json::Value;

/// Show the effective constants. Overridden ones are starred.
pub(crate) async fn show(ctx: &Context) -> Result<()> {
    let overrides = ctx.host.read_overrides().await?;
    let constants = EquivalenceConstants::from_overrides(&overrides);
    print!(
        "{}",
        render_constants(&constants, |key| is_overridden(&overrides, key))
    );
    Ok(())
}

/// Override one constant.
pub(crate) async fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let key: ConstantKey = key.parse()?;
    let Some(number) = parse_override(key, &Value::String(value.to_string()))? else {
        bail!("No value given for {key}");
    };
    ctx.host.write_override(key.as_str(), Value::from(number)).await?;
    println!("{key} = {number} {}", key.unit());
    Ok(())
}

/// Restore one constant, or all of them, to the default.
pub(crate) async fn reset(ctx: &Context, key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => {
            let key: ConstantKey = key.parse()?;
            ctx.host.clear_overrides(Some(key.as_str())).await?;
            println!("{key} reset to {}.", key.default_value());
        }
        None => {
            ctx.host.clear_overrides(None).await?;
            println!("All constants reset to their defaults.");
        }
    }
    Ok(())
}

/// Prompt for every constant in turn.
pub(crate) async fn edit(ctx: &Context) -> Result<()> {
    let overrides = ctx.host.read_overrides().await?;
    let constants = EquivalenceConstants::from_overrides(&overrides);

    for key in ConstantKey::all() {
        let current = constants.get(*key);
        let value = CustomType::<f64>::new(&format!("{key} ({}):", key.unit()))
            .with_default(current)
            .with_help_message(key.description())
            .with_error_message("Please enter a number")
            .with_validator(|value: &f64| {
                Ok(if value.is_finite() && *value > 0.0 {
                    Validation::Valid
                } else {
                    Validation::Invalid("The value must be strictly positive".into())
                })
            })
            .prompt()
            .context("Edit cancelled")?;

        if (value - key.default_value()).abs() <= f64::EPSILON * value.abs() {
            ctx.host.clear_overrides(Some(key.as_str())).await?;
        } else if (value - current).abs() > f64::EPSILON * value.abs() {
            ctx.host.write_override(key.as_str(), Value::from(value)).await?;
            tracing::info!(%key, value, "constant updated");
        }
    }

    println!("Preferences saved to {}", ctx.host.preferences_path().display());
    Ok(())
}

fn is_overridden(overrides: &Overrides, key: ConstantKey) -> bool {
    overrides
        .get(key.as_str())
        .is_some_and(|raw| matches!(parse_override(key, raw), Ok(Some(_))))
}
