//! List-checks command implementation.

use firelint_rules::all_checks;

/// Runs the `list-checks` command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<28} {:<10} Description", "Name", "Category");
    println!("{}", "-".repeat(80));

    for check in all_checks() {
        println!(
            "{:<28} {:<10} {}",
            check.name, check.severity, check.description
        );
    }

    println!("\nExit codes:");
    println!("  0 success, 1 security, 2 naming, 3 structure, 4 index");
    println!("\nA project run folds per-artifact exit codes with the maximum.");
}
