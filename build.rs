use anyhow::Result;
use vergen::EmitBuilder;

// VERGEN_GIT_SHA is printed in the --debug banner
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
