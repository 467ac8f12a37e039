//! Demo driver: builds two fixed trees, runs the default rules over them,
//! and checks that each result folded to the expected value.

use std::process::ExitCode;

use colored::Colorize;
use opt_ast::{Expr, ExprKind};
use opt_engine::Optimizer;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // RUST_LOG=optimize=debug surfaces per-rewrite engine logs.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let optimizer = Optimizer::with_default_rules();

    let mut all_passed = true;
    all_passed &= run_scenario(
        &optimizer,
        "left zero",
        Expr::add(Expr::num(0), Expr::num(1)),
    );
    all_passed &= run_scenario(
        &optimizer,
        "right zero",
        Expr::add(Expr::num(1), Expr::num(0)),
    );

    if all_passed {
        println!("{}", "all scenarios passed".green().bold());
        ExitCode::SUCCESS
    } else {
        println!("{}", "scenario failures".red().bold());
        ExitCode::FAILURE
    }
}

fn run_scenario(optimizer: &Optimizer, name: &str, input: Expr) -> bool {
    let expected = input.evaluate();
    let (optimized, steps) = optimizer.optimize_with_steps(&input);

    println!("{} {}", "scenario:".bold(), name);
    println!("  input:  {}", input);
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}  [{}]", i + 1, step.description, step.rule_name);
    }
    println!("  output: {}", optimized);
    println!("  value:  {}", optimized.evaluate());

    let folded = optimized.kind() == ExprKind::Number;
    let preserved = optimized.evaluate() == expected;
    let passed = folded && preserved;
    if passed {
        println!("  {}", "PASS".green());
    } else {
        println!(
            "  {} (folded: {}, value {} vs expected {})",
            "FAIL".red(),
            folded,
            optimized.evaluate(),
            expected
        );
    }
    passed
}
