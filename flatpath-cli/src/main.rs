//! Command line front end: flatten SVG path data into embeddable polygon arrays.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use flatpath_codegen::{
    emit, preview_to_string, summary, Language, SourceOptions, DEFAULT_PRECISION,
};
use flatpath_core::{normalize, parse, Flattener, ViewBox, DEFAULT_CURVE_STEPS};

mod samples;

#[derive(Parser)]
#[command(
    version,
    about = "flatpath \u{2014} flatten SVG path data into embeddable polygon arrays"
)]
struct Cli {
    /// File containing path data (the contents of a d attribute)
    file: Option<String>,

    /// Inline path data instead of reading a file
    #[arg(short = 'd', long = "path", value_name = "DATA", conflicts_with = "file")]
    path_data: Option<String>,

    /// Process an embedded sample icon: "lock" or "unlock"
    #[arg(long, value_name = "NAME", conflicts_with_all = ["file", "path_data"])]
    icon: Option<String>,

    /// viewBox width of the source image (required for file and inline input)
    #[arg(long, value_name = "W")]
    width: Option<f64>,

    /// viewBox height of the source image (required for file and inline input)
    #[arg(long, value_name = "H")]
    height: Option<f64>,

    /// Straight segments per cubic curve
    #[arg(long, default_value_t = DEFAULT_CURVE_STEPS)]
    steps: usize,

    /// Output language for the emitted arrays: "rust" or "go"
    #[arg(long, default_value = "rust", value_parser = parse_language)]
    lang: Language,

    /// Name of the emitted constant (default depends on input and language)
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Write the arrays to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also write an SVG preview of the raw outlines (single input only)
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Fail on the first parse diagnostic instead of continuing
    #[arg(long)]
    strict: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    match s.to_lowercase().as_str() {
        "rust" => Ok(Language::Rust),
        "go" => Ok(Language::Go),
        _ => Err(format!(
            "unknown language \"{s}\": expected \"rust\" or \"go\""
        )),
    }
}

const fn default_variable(lang: Language) -> &'static str {
    match lang {
        Language::Rust => "PATH_POLYGONS",
        Language::Go => "pathPolygons",
    }
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

/// One unit of work: a path string plus everything needed to label and
/// scale its output.
struct Job {
    label: String,
    variable: String,
    data: String,
    view_box: ViewBox,
}

/// The text a finished job contributes to the output file.
struct JobOutput {
    summary: String,
    array: String,
}

fn sample_job(icon: &samples::SampleIcon, cli: &Cli) -> Result<Job, String> {
    let view_box = ViewBox::new(icon.width, icon.height).map_err(|e| e.to_string())?;
    let variable = cli.name.clone().unwrap_or_else(|| match cli.lang {
        Language::Rust => icon.rust_name.to_owned(),
        Language::Go => icon.go_name.to_owned(),
    });
    Ok(Job {
        label: icon.label.to_owned(),
        variable,
        data: icon.path_data.to_owned(),
        view_box,
    })
}

fn build_jobs(cli: &Cli) -> Result<Vec<Job>, String> {
    if let Some(ref name) = cli.icon {
        let icon = samples::find(name).ok_or_else(|| {
            format!("unknown sample icon \"{name}\": expected \"lock\" or \"unlock\"")
        })?;
        return Ok(vec![sample_job(icon, cli)?]);
    }

    let input = match (&cli.path_data, &cli.file) {
        (Some(data), _) => Some((data.clone(), "Path".to_owned())),
        (None, Some(file)) => {
            let data =
                fs::read_to_string(file).map_err(|e| format!("cannot read {file}: {e}"))?;
            let label = Path::new(file)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("path")
                .to_owned();
            Some((data, label))
        }
        (None, None) => None,
    };

    match input {
        Some((data, label)) => {
            let (Some(width), Some(height)) = (cli.width, cli.height) else {
                return Err("--width and --height are required unless --icon is used".to_owned());
            };
            let view_box = ViewBox::new(width, height).map_err(|e| e.to_string())?;
            let variable = cli
                .name
                .clone()
                .unwrap_or_else(|| default_variable(cli.lang).to_owned());
            Ok(vec![Job {
                label,
                variable,
                data,
                view_box,
            }])
        }
        // No input at all: process every embedded sample
        None => samples::SAMPLES
            .iter()
            .map(|icon| sample_job(icon, cli))
            .collect(),
    }
}

fn run_job(job: &Job, cli: &Cli) -> Result<JobOutput, String> {
    let (commands, diagnostics) = parse(&job.data);
    for diagnostic in &diagnostics {
        eprintln!("Warning: {diagnostic}");
    }
    if cli.strict {
        if let Some(first) = diagnostics.first() {
            return Err(first.to_string());
        }
    }

    let mut flattener = Flattener::with_curve_steps(cli.steps);
    for command in &commands {
        flattener.apply(command);
    }
    let outlines = flattener.finish();

    if let Some(ref path) = cli.preview {
        let svg = preview_to_string(&outlines, job.view_box);
        write_file(path, &svg)?;
    }

    let normalized = normalize(&outlines, job.view_box);
    let options = SourceOptions {
        language: cli.lang,
        variable: job.variable.clone(),
        precision: DEFAULT_PRECISION,
    };
    Ok(JobOutput {
        summary: summary(&job.label, &outlines),
        array: emit(&normalized, &options),
    })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    let jobs = match build_jobs(&cli) {
        Ok(jobs) => jobs,
        Err(message) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    };

    if cli.preview.is_some() && jobs.len() > 1 {
        eprintln!("Error: --preview needs a single input (a file, --path, or --icon)");
        process::exit(1);
    }

    let mut outputs = Vec::new();
    for job in &jobs {
        match run_job(job, &cli) {
            Ok(output) => outputs.push(output),
            Err(message) => {
                eprintln!("Error: {message}");
                process::exit(1);
            }
        }
    }

    // Counts first, then the arrays
    let mut text = String::new();
    for output in &outputs {
        text.push_str(&output.summary);
        text.push('\n');
    }
    for (i, output) in outputs.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&output.array);
    }

    match cli.output {
        Some(ref path) => {
            if let Err(message) = write_file(path, &text) {
                eprintln!("Error: {message}");
                process::exit(1);
            }
        }
        None => print!("{text}"),
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, content).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
