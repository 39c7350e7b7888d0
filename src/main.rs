use std::collections::BTreeMap;
use std::io::IsTerminal;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qualpal_core::{analyze_palette, CvdConfig, Metric, PaletteAnalysis, Qualpal, Rgb};

mod output;

#[derive(Parser)]
#[command(name = "qualpal")]
#[command(about = "Automatic generation of qualitative color palettes")]
#[command(
    after_help = "Examples:\n\
    \x20 Generate 5 colors from hex inputs:\n\
    \x20   qualpal -n 5 -i hex \"#ff0000\" \"#00ff00\" \"#0000ff\"\n\n\
    \x20 Generate a palette from HSL ranges:\n\
    \x20   qualpal -n 8 -i colorspace \"0:360\" \"0.5:1\" \"0.3:0.7\"\n\n\
    \x20 Generate from a built-in palette:\n\
    \x20   qualpal -n 3 -i palette \"ColorBrewer:Set1\""
)]
struct Cli {
    /// Number of colors to generate
    #[arg(short, long, default_value_t = 8)]
    number: usize,

    /// Input type
    #[arg(short, long, value_enum, default_value_t = InputKind::Hex)]
    input: InputKind,

    /// Background color in hex (e.g. #ffffff)
    #[arg(short, long)]
    background: Option<String>,

    /// Number of candidate points for colorspace search
    #[arg(short = 'p', long, default_value_t = 1000)]
    points: usize,

    /// Color difference metric
    #[arg(short, long, value_enum, default_value_t = MetricKind::Din99d)]
    metric: MetricKind,

    /// Maximum memory usage in GB
    #[arg(long, default_value_t = 1.0)]
    max_memory: f64,

    /// Degree of deutan CVD simulation (0.0-1.0)
    #[arg(long, default_value_t = 0.0)]
    deutan: f64,

    /// Degree of protan CVD simulation (0.0-1.0)
    #[arg(long, default_value_t = 0.0)]
    protan: f64,

    /// Degree of tritan CVD simulation (0.0-1.0)
    #[arg(long, default_value_t = 0.0)]
    tritan: f64,

    /// Colorize hex output
    #[arg(long, value_enum, default_value_t = Colorize::Auto)]
    colorize: Colorize,

    /// Delimiter for output
    #[arg(long = "output-delim", value_enum, default_value_t = Delim::Newline)]
    output_delim: Delim,

    /// Input values (depends on input type)
    values: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a color palette by computing color difference matrices
    Analyze {
        /// Input type (colorspace input is not supported here)
        #[arg(short, long, value_enum, default_value_t = InputKind::Hex)]
        input: InputKind,

        /// Emit the analysis as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Input values (depends on input type)
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// List all available built-in palettes
    ListPalettes,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum InputKind {
    /// Hex color values (#ff0000)
    Hex,
    /// HSL ranges (h1:h2 s1:s2 l1:l2)
    Colorspace,
    /// Built-in palette name
    Palette,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricKind {
    /// Perceptual color difference (default)
    Din99d,
    /// CIEDE2000 color difference
    Ciede2000,
    /// CIE76 color difference
    Cie76,
}

impl From<MetricKind> for Metric {
    fn from(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Din99d => Metric::default(),
            MetricKind::Ciede2000 => Metric::Ciede2000,
            MetricKind::Cie76 => Metric::Cie76,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Colorize {
    Auto,
    Always,
    Never,
}

impl Colorize {
    fn enabled(self) -> bool {
        match self {
            Colorize::Always => true,
            Colorize::Never => false,
            Colorize::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Delim {
    Newline,
    Space,
    Comma,
}

impl Delim {
    fn as_str(self) -> &'static str {
        match self {
            Delim::Newline => "\n",
            Delim::Space => " ",
            Delim::Comma => ",",
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qualpal=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            input,
            json,
            ref values,
        }) => run_analyze(&cli, input, json, values),
        Some(Commands::ListPalettes) => run_list_palettes(),
        None => run_generate(&cli),
    }
}

fn cvd_config(cli: &Cli) -> anyhow::Result<CvdConfig> {
    // All three severities go through validation; zero is equivalent to
    // leaving the type out, so nothing needs filtering here.
    Ok(CvdConfig::from_named(&[
        ("deutan", cli.deutan),
        ("protan", cli.protan),
        ("tritan", cli.tritan),
    ])?)
}

fn parse_range(value: &str) -> anyhow::Result<[f64; 2]> {
    let (lo, hi) = value
        .split_once(':')
        .with_context(|| format!("range '{value}' must be of the form lo:hi"))?;
    Ok([
        lo.trim().parse().with_context(|| format!("bad number in range '{value}'"))?,
        hi.trim().parse().with_context(|| format!("bad number in range '{value}'"))?,
    ])
}

fn parse_colors(input: InputKind, values: &[String]) -> anyhow::Result<Vec<Rgb>> {
    match input {
        InputKind::Hex => values
            .iter()
            .map(|v| {
                v.parse::<Rgb>()
                    .with_context(|| format!("invalid hex color '{v}'"))
            })
            .collect(),
        InputKind::Palette => {
            let [name] = values else {
                bail!("palette input requires exactly one palette name");
            };
            Ok(qualpal_core::get_palette(name)?)
        }
        InputKind::Colorspace => bail!("colorspace input is not supported for analyze"),
    }
}

fn run_generate(cli: &Cli) -> anyhow::Result<()> {
    if cli.values.is_empty() {
        bail!("no input values provided; use --help for usage information");
    }

    let mut qp = Qualpal::new()
        .metric(Metric::from(cli.metric))
        .cvd(cvd_config(cli)?)
        .max_memory_gb(cli.max_memory)
        .colorspace_size(cli.points);

    if let Some(bg) = &cli.background {
        let bg = bg
            .parse::<Rgb>()
            .with_context(|| format!("invalid background color '{bg}'"))?;
        qp = qp.background(bg);
    }

    qp = match cli.input {
        InputKind::Hex => qp.input_hex(&cli.values)?,
        InputKind::Palette => {
            let [name] = &cli.values[..] else {
                bail!("palette input requires exactly one palette name");
            };
            qp.input_palette(name)?
        }
        InputKind::Colorspace => {
            let [h, s, l] = &cli.values[..] else {
                bail!("colorspace input requires exactly 3 ranges (hue, saturation, lightness)");
            };
            qp.input_colorspace(parse_range(h)?, parse_range(s)?, parse_range(l)?)?
        }
    };

    let palette = qp.generate(cli.number)?;

    let mut stdout = std::io::stdout().lock();
    output::write_palette(
        &mut stdout,
        &palette,
        cli.output_delim.as_str(),
        cli.colorize.enabled(),
    )?;
    Ok(())
}

fn run_analyze(cli: &Cli, input: InputKind, json: bool, values: &[String]) -> anyhow::Result<()> {
    let colors = parse_colors(input, values)?;
    let background = cli
        .background
        .as_ref()
        .map(|bg| {
            bg.parse::<Rgb>()
                .with_context(|| format!("invalid background color '{bg}'"))
        })
        .transpose()?;

    let report: BTreeMap<&'static str, PaletteAnalysis> = analyze_palette(
        &colors,
        Metric::from(cli.metric),
        &cvd_config(cli)?,
        background,
        cli.max_memory,
    )?;

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &output::analysis_json(&colors, &report))?;
        use std::io::Write;
        writeln!(stdout)?;
    } else {
        use std::io::Write;
        writeln!(stdout, "Colors analyzed: {}", colors.len())?;
        writeln!(stdout)?;
        let colorize = cli.colorize.enabled();
        for (label, analysis) in &report {
            output::write_analysis(&mut stdout, label, &colors, analysis, colorize)?;
        }
    }
    Ok(())
}

fn run_list_palettes() -> anyhow::Result<()> {
    use std::io::Write;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Available palettes:")?;
    let mut by_package: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (package, palettes) in qualpal_core::available_palettes() {
        by_package.entry(package).or_default().extend(palettes);
    }
    for (package, palettes) in by_package {
        writeln!(stdout, "  {package}:")?;
        for palette in palettes {
            writeln!(stdout, "    {palette}")?;
        }
    }
    Ok(())
}
