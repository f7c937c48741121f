use std::{
    fs::File,
    path::{Path, PathBuf},
    str::FromStr,
    ops::{Add, RangeInclusive},
    fmt::{self, Display, Formatter}, ffi::OsStr
};

use clap::{Parser, Subcommand, Args, ArgEnum};
use serde::{Serialize, Deserialize};
use log::debug;
use num::One;
use anyhow::{anyhow, Context, Result};

use inheritance::{Genders, Pairing, PopulationParams};

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="iqodds", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// iqodds: odds of raising a gifted child, under a regression-to-the-mean model of IQ inheritance.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Serialize command line arguments within a `.yaml` file.
    ///
    /// # Behavior
    /// - Only the `plot` module is serialized, since it is the only one with an output directory.
    /// - File naming follows the convention '{current time}-{module name}.yaml'. current time follows the format
    ///   `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written at the root of the user-provided `--output-dir` folder.
    /// - Only call this once the command succeeded: failed or refused runs must not leave a replayable file.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to serialize `Self` to a string.
    /// - if the yaml file cannot be written.
    pub fn serialize(&self) -> Result<()> {
        // Parse arguments to yaml and print to console.
        let serialized = serde_yaml::to_string(&self)
            .context("Failed to serialize command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let output_dir = match &self.commands {
            Commands::Plot{plot, ..} => &plot.output_dir,
            Commands::Summary{..} | Commands::Odds{..} | Commands::FromYaml{..} => return Ok(()),
        };

        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file = output_dir.join(format!("{current_time}-plot.yaml"));

        std::fs::write(&output_file, serialized)
            .with_context(|| format!("Unable to serialize arguments into {}", output_file.display()))
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` does not exist, or does not carry read permissions.
    /// - if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let file = File::open(yaml)
            .with_context(|| format!("Failed to open {}", yaml.display()))?;
        serde_yaml::from_reader(file)
            .with_context(|| format!("Unable to deserialize arguments from {}", yaml.display()))
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Print the rarity of a counterparty, and the attainment probability for a range of family sizes.
    Summary {
        #[clap(flatten)]
        pairing: PairingArgs,

        /// Number of kids to consider.
        ///
        /// Argument may accept slices (inclusive) such as '--kids 1-5' and/or discrete integers such as '--kids 1 3 8'.{n}
        /// Example:{n}
        ///   specifying          : '--kids 1-3 5 '{n}
        ///   ...will be parsed as: [1, 2, 3, 5]
        #[clap(short, long, multiple_values(true), default_values(&["1-5"]))]
        kids: Vec<String>,

        #[clap(flatten)]
        population: Population,
    },

    /// Print the probability of raising at least one child reaching the target IQ, as a percentage.
    Odds {
        #[clap(flatten)]
        pairing: PairingArgs,

        /// Number of kids.
        #[clap(short, long)]
        kids: u32,

        #[clap(flatten)]
        population: Population,
    },

    /// Render 3D attainment probability surfaces.
    Plot {
        #[clap(flatten)]
        plot: PlotArgs,

        #[clap(flatten)]
        population: Population,
    },

    /// Run iqodds using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply an iqodds command using the exact same parameters
    /// and arguments.
    FromYaml {
        yaml: PathBuf,
    },
}

/// Population-wide constants of the inheritance model.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Population {
    /// Mean number of kids per family.
    ///
    /// Only used when weighting attainment probabilities by rarity.
    #[clap(long, default_value_t=PopulationParams::default().mean_kids_per_family)]
    pub mean_kids: f64,

    /// Standard deviation of the number of kids per family.
    #[clap(long, default_value_t=PopulationParams::default().std_dev_kids_per_family, parse(try_from_str=parse_positive))]
    pub sd_kids: f64,

    /// IQ of the reference parent.
    #[clap(long, default_value_t=PopulationParams::default().base_parent_iq)]
    pub base_parent_iq: f64,

    /// Standard deviation of IQ within the population.
    ///
    /// Also used as the standard deviation of the offspring's IQ distribution.
    #[clap(long, default_value_t=PopulationParams::default().population_std_dev, parse(try_from_str=parse_positive))]
    pub population_sd: f64,

    /// Mean IQ of the reference cohort.
    #[clap(long, default_value_t=PopulationParams::default().population_mean_iq)]
    pub population_mean: f64,

    /// Regression to the mean factor.
    ///
    /// Weight pulling the expected offspring IQ toward the population mean. Must lie within [0, 1].
    /// 0 means offspring are expected to match their parents' average. 1 means offspring are expected to
    /// match the population mean, whatever their parents.
    #[clap(long, default_value_t=PopulationParams::default().mean_regression, parse(try_from_str=parse_unit_ratio))]
    pub mean_regression: f64,
}

impl Default for Population {
    fn default() -> Self {
        Self::from(PopulationParams::default())
    }
}

impl From<PopulationParams> for Population {
    fn from(params: PopulationParams) -> Self {
        Self {
            mean_kids      : params.mean_kids_per_family,
            sd_kids        : params.std_dev_kids_per_family,
            base_parent_iq : params.base_parent_iq,
            population_sd  : params.population_std_dev,
            population_mean: params.population_mean_iq,
            mean_regression: params.mean_regression,
        }
    }
}

impl Population {
    pub fn params(&self) -> PopulationParams {
        PopulationParams {
            mean_kids_per_family   : self.mean_kids,
            std_dev_kids_per_family: self.sd_kids,
            base_parent_iq         : self.base_parent_iq,
            population_std_dev     : self.population_sd,
            population_mean_iq     : self.population_mean,
            mean_regression        : self.mean_regression,
        }
    }
}

/// Counterparty and target of an evaluation.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairingArgs {
    /// IQ of the counterparty (i.e. the second parent).
    #[clap(short, long, allow_hyphen_values(true))]
    pub counterparty: f64,

    /// Minimal IQ an offspring must reach to be considered a success.
    #[clap(short, long, default_value_t=Pairing::DEFAULT_TARGET_IQ, allow_hyphen_values(true))]
    pub target: f64,

    /// Number of genders considered.
    ///
    /// 1: only offspring of a single gender may count as a success.{n}
    /// 2: every offspring may count as a success.{n}
    ///
    /// Any other value is invalid, and will fall back to 1 with a warning.
    #[clap(short, long, default_value("1"), allow_hyphen_values(true))]
    pub genders: i64,
}

impl PairingArgs {
    /// Convert to a `Pairing` for `kids` children. Invalid gender counts fall back to
    /// `Genders::Single`, with a warning.
    pub fn pairing(&self, kids: u32) -> Pairing {
        Pairing::new(self.counterparty, kids)
            .target_iq(self.target)
            .genders(Genders::from_count_lossy(self.genders))
    }
}

/// Predefined surface figures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum, Serialize, Deserialize)]
pub enum Figure {
    Targets,
    Kids,
    Rarity,
}

impl Figure {
    pub fn filestem(&self) -> &'static str {
        match self {
            Self::Targets => "attainment-by-target",
            Self::Kids    => "attainment-by-kids",
            Self::Rarity  => "attainment-with-rarity",
        }
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Targets => write!(f, "Attainment probability x counterparty IQ x target IQ, for 1 to 5 kids"),
            Self::Kids    => write!(f, "Attainment probability x counterparty IQ x number of kids"),
            Self::Rarity  => write!(f, "Rarity-weighted attainment x counterparty IQ x number of kids"),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct PlotArgs {
    /// Select the figure to render.
    ///
    /// targets: counterparty IQ x target IQ. One surface per number of kids (1 to 5). Both genders.{n}
    /// kids   : counterparty IQ x number of kids, for a target IQ of 145. Both genders.{n}
    /// rarity : same as 'kids', weighted by the rarity of the counterparty and of the family size.{n}
    #[clap(short, long, arg_enum, default_value("rarity"))]
    pub figure: Figure,

    /// Output directory where figures will be written.
    ///
    /// Note that iqodds will create the specified leaf directory if it is not present, but does not
    /// allow itself from creating parent directories.
    #[clap(short, long, default_value("iqodds-output"), parse(try_from_os_str=valid_output_dir))]
    pub output_dir: PathBuf,

    /// Overwrite existing output files.
    #[clap(short='w', long)]
    pub overwrite: bool,

    /// Grid resolution along IQ axes.
    ///
    /// Lower values produce smoother surfaces, at the cost of larger output files.
    #[clap(long, default_value("2.0"), parse(try_from_str=parse_positive))]
    pub iq_step: f64,

    /// Grid resolution along the number of kids axis.
    #[clap(long, default_value("0.25"), parse(try_from_str=parse_positive))]
    pub kids_step: f64,
}

impl PlotArgs {
    /// Path of the `.svg` file where the requested figure should be rendered.
    ///
    /// # Errors
    /// - If the file already exists and the user did not specifically allow for file overwrite using
    ///   the `--overwrite` argument
    pub fn output_file(&self) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{}.svg", self.figure.filestem()));
        if !self.overwrite && path.exists() {
            return Err(ParserError::CannotOverwrite(path.display().to_string()))
                .context("While parsing command line arguments")
        }
        Ok(path)
    }
}

fn valid_output_dir(s: &OsStr) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        std::fs::create_dir(path)
            .with_context(|| format!("Failed to create output directory {}", path.display()))?;
    }

    if !path.is_dir() {
        return Err(anyhow!(ParserError::NotADirectory(path.display().to_string())))
    }
    Ok(path.to_path_buf())
}

fn parse_positive(s: &str) -> Result<f64> {
    let value = s.parse::<f64>().with_context(|| format!("While parsing {s}"))?;
    match value.is_finite() && value > 0.0 {
        true  => Ok(value),
        false => Err(anyhow!(ParserError::NonPositive(value))),
    }
}

fn parse_unit_ratio(s: &str) -> Result<f64> {
    const MIN_RATIO: f64 = 0.0;
    const MAX_RATIO: f64 = 1.0;

    let ratio = s.parse::<f64>().with_context(|| format!("While parsing {s}"))?;
    match (MIN_RATIO..=MAX_RATIO).contains(&ratio) {
        true  => Ok(ratio),
        false => Err(anyhow!(ParserError::ParseRatio(MIN_RATIO, MAX_RATIO))).with_context(|| format!("While parsing {s}"))
    }
}

/// Convert a user-defined string "range" into a vector of integers.
/// "2-5" thus becomes [2, 3, 4, 5]
/// Note that the range is fully inclusive.
fn parse_user_range<T>(s: &str) -> Result<Vec<T>, <T as FromStr>::Err>
where   T                     : FromStr + Add<Output = T> + Ord + One + Copy,
        RangeInclusive<T>     : Iterator<Item = T>,
{
    match s.split_once('-') {
        Some((start, end)) => Ok((start.parse::<T>()?..=end.parse::<T>()?).collect()),
        None               => Ok(vec![s.parse::<T>()?])
    }
}

/// Convert a vector of Strings with user-input ranges to a single, sorted and deduplicated vector of integers.
///
/// ```text
/// --> ["1-3", "5", "2"] for the user, becomes [1, 2, 3, 5] for our program.
/// ```
///
/// # Example
///```
///use parser::parse_user_ranges;
///let user_input   = vec![String::from("5"), String::from("1-3"), String::from("2")];
///let parsed_input = parse_user_ranges::<u32>(&user_input, "kids").expect("error");
///assert_eq!(parsed_input, vec![1, 2, 3, 5])
///```
///
/// # Errors
///  returns a `ParseArg` error if the provided ranges cannot be parsed into integers.
pub fn parse_user_ranges<T>(ranges: &[String], arg: &str) -> Result<Vec<T>, ParserError>
where   T                   : FromStr + Add<Output = T> + Ord + One + Copy,
        RangeInclusive<T>   : Iterator<Item = T>,
        <T as FromStr>::Err : ToString,
{
    let mut parsed = Vec::new();
    for range in ranges {
        let values = parse_user_range(range)
            .map_err(|err| ParserError::ParseArg{arg: arg.to_string(), err: err.to_string()})?;
        parsed.extend(values);
    }
    parsed.sort_unstable();
    parsed.dedup();
    Ok(parsed)
}
