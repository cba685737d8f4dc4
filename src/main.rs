use std::fs;

use anyhow::{bail, Context};

use boxforge::{
    arrange, gcode, init_logging, svg, BoxAssembler, BoxSpec, LaserParameters, RecordingBackend,
    SheetParameters,
};

struct Args {
    spec_path: Option<String>,
    svg_out: Option<String>,
    gcode_out: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        spec_path: None,
        svg_out: None,
        gcode_out: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--svg" => {
                args.svg_out = Some(iter.next().context("--svg requires a file path")?);
            }
            "--gcode" => {
                args.gcode_out = Some(iter.next().context("--gcode requires a file path")?);
            }
            "--help" | "-h" => {
                bail!("usage: boxforge [spec.json] [--svg out.svg] [--gcode out.nc]");
            }
            other if args.spec_path.is_none() && !other.starts_with('-') => {
                args.spec_path = Some(other.to_string());
            }
            other => bail!("unrecognized argument: {other}"),
        }
    }

    Ok(args)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = parse_args()?;

    let spec: BoxSpec = match &args.spec_path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => BoxSpec::default(),
    };

    let assembler = BoxAssembler::new(spec)?;
    let mut backend = RecordingBackend::new();
    let (set, report) = assembler.generate(&mut backend)?;

    print!("{report}");

    if args.svg_out.is_some() || args.gcode_out.is_some() {
        let sheet = SheetParameters::default();
        let placed = arrange(&set, &sheet);
        if let Some(path) = &args.svg_out {
            svg::write(path, &placed, &sheet).with_context(|| format!("writing {path}"))?;
            println!("wrote {path}");
        }
        if let Some(path) = &args.gcode_out {
            gcode::write(path, &placed, &LaserParameters::default())
                .with_context(|| format!("writing {path}"))?;
            println!("wrote {path}");
        }
    }

    Ok(())
}
