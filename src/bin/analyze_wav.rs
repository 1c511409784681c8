use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};

use ridgeline::signal_processing::{find_peaks, morphology};
use ridgeline::vecmath;

#[derive(Parser, Debug)]
#[command(name = "analyze_wav")]
#[command(about = "Detect peaks in WAV file channels", long_about = None)]
struct Args {
    /// WAV files to analyze
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Channel index to analyze
    #[arg(short, long, default_value = "0")]
    channel: usize,

    /// Minimum distance between peaks, in samples
    #[arg(short = 'd', long, default_value = "0")]
    min_distance: usize,

    /// Minimum peak prominence, in full-scale units
    #[arg(short = 'p', long, default_value = "0.0")]
    min_prominence: f64,

    /// Remove the baseline with a morphological opening of this window length
    #[arg(short = 'b', long)]
    baseline_window: Option<usize>,

    /// Output format: text, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
struct FileAnalysis {
    filename: String,
    sample_rate: u32,
    sample_count: usize,
    mean: f64,
    std_dev: f64,
    peak_count: usize,
    peak_indices: Vec<usize>,
    /// Mean peak repetition rate in Hz, when at least two peaks were found
    #[serde(skip_serializing_if = "Option::is_none")]
    peak_rate_hz: Option<f64>,
}

fn read_channel(path: &Path, channel: usize) -> anyhow::Result<(Vec<f64>, u32)> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let spec = reader.spec();

    if channel >= spec.channels as usize {
        anyhow::bail!(
            "Channel {} out of range: {} has {} channels",
            channel,
            path.display(),
            spec.channels
        );
    }

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<_, _>>()
            .context("Failed to read float samples")?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()
                .context("Failed to read integer samples")?
        }
    };

    let samples = interleaved
        .iter()
        .skip(channel)
        .step_by(spec.channels as usize)
        .copied()
        .collect();

    Ok((samples, spec.sample_rate))
}

fn analyze(path: &Path, args: &Args) -> anyhow::Result<FileAnalysis> {
    let (samples, sample_rate) = read_channel(path, args.channel)?;
    log::info!(
        "{}: {} samples at {} Hz",
        path.display(),
        samples.len(),
        sample_rate
    );

    let signal = match args.baseline_window {
        Some(m) => {
            log::debug!("Removing baseline with opening window of {}", m);
            let baseline = morphology::open(&samples, m);
            let mut detrended = vec![0.0; samples.len()];
            vecmath::subtract_into(&samples, &baseline, &mut detrended)
                .context("Baseline subtraction failed")?;
            detrended
        }
        None => samples.clone(),
    };

    let peaks = find_peaks(&signal, args.min_distance, args.min_prominence);
    log::debug!("{} peaks survived filtering", peaks.len());

    let peak_rate_hz = if peaks.len() >= 2 {
        let positions: Vec<f64> = peaks.iter().map(|&i| i as f64).collect();
        let spacing = vecmath::reductions::mean(&vecmath::reductions::diff(&positions));
        Some(sample_rate as f64 / spacing)
    } else {
        None
    };

    Ok(FileAnalysis {
        filename: path.display().to_string(),
        sample_rate,
        sample_count: samples.len(),
        mean: vecmath::reductions::mean(&samples),
        std_dev: vecmath::reductions::std(&samples, true),
        peak_count: peaks.len(),
        peak_indices: peaks,
        peak_rate_hz,
    })
}

fn print_text(analysis: &FileAnalysis) {
    println!("{}", analysis.filename);
    println!(
        "  {} samples at {} Hz, mean {:.5}, std {:.5}",
        analysis.sample_count, analysis.sample_rate, analysis.mean, analysis.std_dev
    );
    match analysis.peak_rate_hz {
        Some(rate) => println!("  {} peaks, ~{:.2} Hz", analysis.peak_count, rate),
        None => println!("  {} peaks", analysis.peak_count),
    }
    for chunk in analysis.peak_indices.chunks(12) {
        let line: Vec<String> = chunk.iter().map(|i| i.to_string()).collect();
        println!("    {}", line.join(" "));
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut analyses = Vec::new();
    for path in &args.files {
        analyses.push(analyze(path, &args)?);
    }

    match args.format {
        OutputFormat::Text => {
            for analysis in &analyses {
                print_text(analysis);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&analyses).context("Failed to serialize analyses")?;
            println!("{}", json);
        }
    }

    Ok(())
}
