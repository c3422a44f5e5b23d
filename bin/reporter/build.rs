//! Used for generating build information for the version reporter.

use std::{env, error::Error};
use vergen::{BuildBuilder, CargoBuilder, Emitter};

fn main() -> Result<(), Box<dyn Error>> {
    let mut emitter = Emitter::default();

    let build_builder = BuildBuilder::default().build_timestamp(true).build()?;

    // Add build timestamp information.
    emitter.add_instructions(&build_builder)?;

    let cargo_builder = CargoBuilder::default().features(true).target_triple(true).build()?;

    // Add cargo features and target information.
    emitter.add_instructions(&cargo_builder)?;

    emitter.emit_and_set()?;

    // OUT_DIR is `target/<profile>/build/<crate>-<hash>/out`.
    let out_dir = env::var("OUT_DIR")?;
    let profile =
        out_dir.rsplit(std::path::MAIN_SEPARATOR).nth(3).ok_or("unexpected OUT_DIR layout")?;
    println!("cargo:rustc-env=VERSION_REPORTER_BUILD_PROFILE={profile}");

    Ok(())
}
