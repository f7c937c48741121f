extern crate parser;
extern crate logger;

use std::io::{self, Write};

use parser::{Cli, Commands::*, Figure, PairingArgs, PlotArgs};
use inheritance::InheritanceModel;
use surface::{Figures, SurfacePlot};

#[macro_use]
extern crate log;

use anyhow::{Context, Result};

/// Print the rarity of the counterparty, followed by the family success probability of each requested
/// number of kids.
///
/// # Errors
/// if `out` cannot be written to.
pub fn summary<W: Write>(model: &InheritanceModel, pairing: &PairingArgs, kids: &[u32], out: &mut W) -> Result<()> {
    writeln!(out, "Counterparty Rarity: {}", model.counterparty_rarity(pairing.counterparty))?;
    for &n in kids {
        let probability = model.evaluate(&pairing.pairing(n));
        writeln!(out, "Success Probability, {n} kid(s): {probability}")?;
    }
    Ok(())
}

/// Print the family success probability of a single pairing, as a percentage.
///
/// # Errors
/// if `out` cannot be written to.
pub fn odds<W: Write>(model: &InheritanceModel, pairing: &PairingArgs, kids: u32, out: &mut W) -> Result<()> {
    writeln!(out, "{}", model.format(&pairing.pairing(kids)))?;
    Ok(())
}

/// Evaluate and render the requested figure into `plot.output_dir`.
///
/// # Errors
/// - if the output file already exists, and `--overwrite` was not requested.
/// - if any grid step is invalid, or if rendering fails.
pub fn plot(model: InheritanceModel, plot: &PlotArgs) -> Result<()> {
    let output_file = plot.output_file()?;
    let figures = Figures::new(model, plot.iq_step, plot.kids_step);
    let [target_rows, kids_rows, rarity_rows] = figures.rows()?;

    info!("Plotting: {}", plot.figure);
    let surface: SurfacePlot = match plot.figure {
        Figure::Targets => {
            let progress = logger::Logger::progress_bar(target_rows, "Evaluating target IQ planes");
            figures.attainment_by_target(&progress)?
        },
        Figure::Kids => {
            let progress = logger::Logger::progress_bar(kids_rows, "Evaluating family size plane");
            figures.attainment_by_kids(&progress)?
        },
        Figure::Rarity => {
            let progress = logger::Logger::progress_bar(rarity_rows, "Evaluating rarity-weighted plane");
            figures.attainment_with_rarity(&progress)?
        },
    };

    surface.render_svg(&output_file)
        .with_context(|| format!("While plotting '{}'", surface.title))
}

/// Unpack the command line arguments, and run the requested module.
///
/// Callers should only serialize `cli` (see [`Cli::serialize`]) once this returned successfully.
///
/// # Errors
/// if the population constants are unusable, or if the requested module fails.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.commands {
        Summary {pairing, kids, population} => {
            // ----------------------------- Validate population constants
            let model = InheritanceModel::new(population.params())?;
            // ----------------------------- Parse requested kid counts.
            let kids: Vec<u32> = parser::parse_user_ranges(kids, "kids")?;
            summary(&model, pairing, &kids, &mut io::stdout().lock())?;
        },

        Odds {pairing, kids, population} => {
            let model = InheritanceModel::new(population.params())?;
            odds(&model, pairing, *kids, &mut io::stdout().lock())?;
        },

        Plot {plot: plot_args, population} => {
            let model = InheritanceModel::new(population.params())?;
            plot(model, plot_args)?;
        },

        FromYaml{yaml} => {
            let cli = Cli::deserialize(yaml)?;
            self::run(&cli)?;
        },
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairing(counterparty: f64, genders: i64) -> PairingArgs {
        PairingArgs{counterparty, target: 150.0, genders}
    }

    #[test]
    fn summary_report() -> Result<()> {
        let model = InheritanceModel::default();
        let mut out = Vec::new();
        summary(&model, &pairing(105.0, 1), &[1, 2], &mut out)?;

        let report = String::from_utf8(out)?;
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Counterparty Rarity: 0.5");
        assert!(lines[1].starts_with("Success Probability, 1 kid(s): 0.0"));
        assert!(lines[2].starts_with("Success Probability, 2 kid(s): 0.0"));
        Ok(())
    }

    #[test]
    fn odds_report() -> Result<()> {
        let model = InheritanceModel::default();
        let mut out = Vec::new();
        odds(&model, &pairing(160.0, 1), 1, &mut out)?;
        assert_eq!(String::from_utf8(out)?, "16.6%\n");
        Ok(())
    }
}
