use colored::*;
use serde_json::json;
use validation_engine::ValidationError;

pub fn print_outcome(outcome: &Result<(), ValidationError>, format: &str) {
    match format {
        "json" => print_json_outcome(outcome),
        _ => print_text_outcome(outcome),
    }
}

fn print_text_outcome(outcome: &Result<(), ValidationError>) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION RESULT".bold());
    println!("{}", "═".repeat(60));

    match outcome {
        Ok(()) => {
            println!(
                "\n{} {}",
                "✓".green().bold(),
                "Validation PASSED".green().bold()
            );
        }
        Err(error) => {
            println!(
                "\n{} {}",
                "✗".red().bold(),
                "Validation FAILED".red().bold()
            );
            println!("\n{}", "Error:".red().bold());
            println!("  {}", error.to_string().red());
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_json_outcome(outcome: &Result<(), ValidationError>) {
    let output = match outcome {
        Ok(()) => json!({ "passed": true, "error": null }),
        Err(error) => json!({
            "passed": false,
            "error": {
                "field": error.field(),
                "message": error.to_string(),
            }
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
