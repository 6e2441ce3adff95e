use crate::models::ValidationResult;
use crate::services::slug::validate_for_submit;
use anyhow::Result;

pub fn run(candidate: &str, json: bool) -> Result<()> {
    let result = validate_for_submit(candidate);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        match &result {
            ValidationResult::Valid(slug) => println!("ok: {}", slug),
            ValidationResult::Invalid(violations) => {
                for violation in violations {
                    println!("{}", violation);
                }
            }
        }
    }

    if let ValidationResult::Invalid(violations) = &result {
        anyhow::bail!(
            "'{}' rejected, {} rule(s) violated",
            candidate,
            violations.len()
        );
    }
    Ok(())
}
