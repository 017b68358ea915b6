use std::io::Read;
use std::path::PathBuf;
use std::{env, fs, io, process};

use prospekt::{Catalog, Generator, Submission};

const USAGE: &str = "\
Usage: prospekt [OPTIONS] [SUBMISSION]

Renders a Leistungsbeschreibung PDF from a submission JSON file
(stdin when omitted or '-').

Options:
  -c, --catalog <FILE>  Product catalog JSON (default: catalog.json)
  -a, --assets <DIR>    Root for catalog-relative asset paths (default: .)
  -o, --output <FILE>   Output path (default: Leistungsbeschreibung_<id>.pdf)
  -h, --help            Show this help
";

struct Args {
    catalog: PathBuf,
    assets: PathBuf,
    output: Option<PathBuf>,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        catalog: PathBuf::from("catalog.json"),
        assets: PathBuf::from("."),
        output: None,
        input: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--catalog" => {
                args.catalog = iter.next().map(PathBuf::from).ok_or("missing value for --catalog")?;
            }
            "-a" | "--assets" => {
                args.assets = iter.next().map(PathBuf::from).ok_or("missing value for --assets")?;
            }
            "-o" | "--output" => {
                args.output = Some(iter.next().map(PathBuf::from).ok_or("missing value for --output")?);
            }
            "-h" | "--help" => {
                print!("{}", USAGE);
                process::exit(0);
            }
            "-" => args.input = None,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {}", other));
            }
            other => args.input = Some(PathBuf::from(other)),
        }
    }
    Ok(args)
}

/// Brand heading faces, looked up relative to the asset root. Missing files
/// are fine; the layout falls back to Helvetica-Bold.
fn register_heading_fonts(generator: &mut Generator, assets: &std::path::Path) {
    let faces = [("Montserrat-Bold.ttf", 700), ("Montserrat-SemiBold.ttf", 600)];
    for (file, weight) in faces {
        let path = assets.join("assets").join("fonts").join(file);
        if let Ok(data) = fs::read(&path) {
            generator.register_font("Heading", weight, false, data);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    let submission_json = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let submission = Submission::from_json(&submission_json)?;
    let catalog = Catalog::load(&args.catalog)?;

    let mut generator = Generator::new(catalog, args.assets.clone());
    register_heading_fonts(&mut generator, &args.assets);

    let pdf = generator.generate(&submission)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("Leistungsbeschreibung_{}.pdf", submission.id)));
    fs::write(&output, pdf)?;
    eprintln!("{}", output.display());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
