// Client code: works with factories and products only through their traits,
// so any factory can be passed in without touching this module.

use std::io::Write;

use crate::error::Result;
use crate::factory::{AbstractFactory, Family};

/// Builds one A and one B from `factory` and returns B's own result
/// followed by B's collaboration with that A.
pub fn describe(factory: &dyn AbstractFactory) -> [String; 2] {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    [
        product_b.useful_function_b(),
        product_b.another_useful_function_b(&*product_a),
    ]
}

pub fn client_method<W: Write>(factory: &dyn AbstractFactory, out: &mut W) -> Result<()> {
    for line in describe(factory) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Runs the client once per family. Banners go to the log, product lines
/// go to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    for family in Family::ALL {
        log::info!("{}", family.banner());
        client_method(&*family.factory(), out)?;
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
