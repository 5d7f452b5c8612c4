// Worked examples for each algorithm, printed to stdout.
//
//   cargo run --example walkthrough

use numkit::diff::{backward_difference, central_difference, forward_difference, DEFAULT_STEP};
use numkit::linalg::gaussian_elimination;
use numkit::quad::{simpson, trapezoid, DEFAULT_SUBINTERVALS};
use numkit::root::{bisection, newton_raphson, RootSettings};

fn main() {
    let settings = RootSettings::default();
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;

    println!("Numerical methods:");

    match newton_raphson(f, df, 1.0, &settings) {
        Ok(r) => println!(
            "   Root of x² - 4 = 0 using Newton-Raphson: {:.6} ({} iterations)",
            r.x, r.iterations
        ),
        Err(e) => println!("   Newton-Raphson failed: {e}"),
    }

    match bisection(f, 0.0, 5.0, &settings) {
        Ok(r) => println!(
            "   Root of x² - 4 = 0 using Bisection: {:.6} ({} iterations)",
            r.x, r.iterations
        ),
        Err(e) => println!("   Bisection failed: {e}"),
    }

    let exact = 8.0 / 3.0;
    let t = trapezoid(|x| x * x, 0.0, 2.0, DEFAULT_SUBINTERVALS);
    println!("   ∫₀² x² dx using Trapezoidal rule: {t:.6} (exact: {exact:.6})");
    match simpson(|x| x * x, 0.0, 2.0, DEFAULT_SUBINTERVALS) {
        Ok(s) => println!("   ∫₀² x² dx using Simpson's rule: {s:.6} (exact: {exact:.6})"),
        Err(e) => println!("   Simpson's rule failed: {e}"),
    }

    let cube = |x: f64| x * x * x;
    println!(
        "   d/dx(x³) at x=2: forward {:.6}, backward {:.6}, central {:.6} (exact: 12)",
        forward_difference(cube, 2.0, DEFAULT_STEP),
        backward_difference(cube, 2.0, DEFAULT_STEP),
        central_difference(cube, 2.0, DEFAULT_STEP),
    );
    println!();

    println!("Linear system:");
    let mut aug = [[2.0, 3.0, 7.0], [4.0, 1.0, 6.0]];
    match gaussian_elimination(&mut aug) {
        Ok(x) => {
            println!("   System: 2x + 3y = 7, 4x + y = 6");
            println!("   Solution: x = {:.2}, y = {:.2}", x[0], x[1]);
            println!(
                "   Verification: 2({:.2}) + 3({:.2}) = {:.2}",
                x[0],
                x[1],
                2.0 * x[0] + 3.0 * x[1]
            );
            println!(
                "   Verification: 4({:.2}) + ({:.2}) = {:.2}",
                x[0],
                x[1],
                4.0 * x[0] + x[1]
            );
        }
        Err(e) => println!("   Linear system solution failed: {e}"),
    }
}
