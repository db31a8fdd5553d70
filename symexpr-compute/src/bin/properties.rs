use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use symexpr_compute::numerical::{ctxt::{Ctxt, TrigMode}, eval::Eval};
use symexpr_compute::symbolic::{expr::build::*, simplify_with_steps, Node};

/// Prints the structural properties of an expression, then simplifies and evaluates it.
fn show(expr: &Node, ctxt: &Ctxt) {
    let mut vars = expr.variables().into_iter().collect::<Vec<_>>();
    vars.sort_unstable();

    println!("{}", expr);
    println!("  variables:  {:?}", vars);
    println!("  constant:   {}", expr.is_constant());
    println!("  polynomial: {}", expr.is_polynomial());
    println!("  degree:     {}", expr.polynomial_degree());

    let (simplified, steps) = simplify_with_steps(expr);
    println!("  simplified: {} ({} step(s))", simplified, steps.len());
    info!("steps for `{}`: {:?}", expr, steps);

    match expr.eval(ctxt) {
        Ok(value) => println!("  value:      {}", value),
        Err(err) => {
            println!("  value:      <error>");
            let rendered = expr.to_string();
            if let Err(io_err) = err.report_to_stderr("expr", &rendered) {
                eprintln!("failed to print report: {}", io_err);
            }
        },
    }
    println!();
}

fn main() {
    // `SYMEXPR_LOG` enables trace output from the simplifier and evaluator
    let level = if std::env::var_os("SYMEXPR_LOG").is_some() {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    if TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("a logger is already installed");
    }

    let c = num(3.0);
    let x = var("x");
    let mut ctxt = Ctxt::new();
    ctxt.add_var("x", 2.0);
    ctxt.add_var("y", 0.5);

    show(&((5 - 3 * c.clone()) * sqrt(16 + c.clone() * c)), &ctxt);
    show(&(x.clone() * x.clone() - 3 * x.clone() + 1), &ctxt);
    show(&(sqrt(x.clone() * x.clone()) + div(var("y"), 2)), &ctxt);
    show(&(mul(1, sin(x.clone())) + 0), &ctxt);

    // evaluation errors, rendered as reports
    show(&div(x.clone(), x.clone() - 2), &ctxt);
    show(&sqrt(num(1.0) - var("y") * 4), &ctxt);
    show(&(var("xx") + 1), &ctxt);

    let degrees = Ctxt::with_trig_mode(TrigMode::Degrees);
    show(&sin(num(90.0)), &degrees);
}
