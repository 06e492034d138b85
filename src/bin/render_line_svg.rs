use std::fs;
use std::io::Read;
use std::path::PathBuf;

use brush_line::api::{LineChart, LineChartConfig};
use brush_line::core::{DatumValue, Series};
use brush_line::render::SvgStringRenderer;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChartDocument {
    config: LineChartConfig,
    #[serde(default)]
    data: Vec<Series>,
}

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    brush: Option<(DatumValue, DatumValue)>,
}

fn main() {
    let _ = brush_line::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            raw
        }
    };
    let document: ChartDocument =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let mut chart = LineChart::new(SvgStringRenderer::default(), document.config)
        .map_err(|err| format!("invalid chart config: {err}"))?;
    chart
        .set_data(document.data)
        .map_err(|err| format!("invalid chart data: {err}"))?;
    if let Some((start, end)) = &args.brush {
        chart
            .brush_to_range(start, end)
            .map_err(|err| format!("brush failed: {err}"))?;
    }
    chart.render().map_err(|err| format!("render failed: {err}"))?;
    let svg = chart.into_renderer().into_output();

    match &args.output {
        Some(path) => fs::write(path, svg)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{svg}"),
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut brush_start: Option<DatumValue> = None;
    let mut brush_end: Option<DatumValue> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--brush-start" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --brush-start".to_owned())?;
                brush_start = Some(parse_value(&value));
            }
            "--brush-end" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --brush-end".to_owned())?;
                brush_end = Some(parse_value(&value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: render-line-svg [--input <chart.json>] [--output <chart.svg>] [--brush-start <value> --brush-end <value>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    parsed.brush = match (brush_start, brush_end) {
        (Some(start), Some(end)) => Some((start, end)),
        (None, None) => None,
        _ => return Err("--brush-start and --brush-end must be given together".to_owned()),
    };
    Ok(parsed)
}

fn parse_value(text: &str) -> DatumValue {
    text.parse::<f64>()
        .map_or_else(|_| DatumValue::from(text), DatumValue::Number)
}
