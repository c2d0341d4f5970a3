use std::process;

use selfcalc::{config::Config, init, output, pipeline};

fn main() {
    init();

    if let Err(err) = run() {
        output::error_chain(&err);
        process::exit(1);
    }
}

fn run() -> selfcalc::Result<()> {
    let config = Config::load()?;
    output::info(format!(
        "Generating {} line items in {}",
        config.item_count,
        config.output_dir().display()
    ));
    let report = pipeline::run(&config)?;
    output::success(format!(
        "Compiled {} ({} passes)",
        report.artifact.display(),
        report.passes
    ));
    Ok(())
}
