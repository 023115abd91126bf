use super::{load_table, make_resolver};
use crate::cli::RotateArgs;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::Vector3;
use peptigen::assembly::ChainAssembler;
use peptigen::core::io::traits::MolecularFile;
use peptigen::core::io::xyz::XyzFile;
use peptigen::core::utils::geometry::rotation_from_scaled_axis;
use tracing::info;

pub fn run(args: RotateArgs) -> Result<()> {
    let axis = parse_axis(&args.axis)?;
    let table = load_table(&args.source)?;
    let resolver = make_resolver(&table, &args.source);
    let assembler = ChainAssembler::new(resolver);

    let mut chain = assembler.combine(&args.peptide)?;
    let targets = chain
        .last_residue_atoms()
        .map(<[_]>::to_vec)
        .unwrap_or_default();
    info!(
        "Rotating {} atom(s) of the last residue for {} cycle(s).",
        targets.len(),
        args.cycles
    );

    let rotation = rotation_from_scaled_axis(&axis);
    let style = ProgressStyle::with_template("{bar:40} {pos}/{len} cycles")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let bar = ProgressBar::new(args.cycles as u64).with_style(style);
    for _ in 0..args.cycles {
        for &id in &targets {
            if let Some(atom) = chain.atom_mut(id) {
                atom.position = rotation * atom.position;
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    match &args.output {
        Some(path) => {
            chain.set_descr(&args.peptide);
            XyzFile::write_molecule_to_path(&chain, path).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            println!(
                "Wrote rotated chain ({} atoms) to '{}'.",
                chain.num_atoms(),
                path.display()
            );
        }
        None => println!(
            "Applied {} rotation cycle(s) to {} atom(s).",
            args.cycles,
            targets.len()
        ),
    }
    Ok(())
}

fn parse_axis(value: &str) -> Result<Vector3<f64>> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CliError::Argument(format!(
            "axis must be three comma-separated numbers, got '{value}'"
        )));
    }
    let mut components = [0.0f64; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| {
            CliError::Argument(format!("invalid axis component '{part}' in '{value}'"))
        })?;
    }
    Ok(Vector3::new(components[0], components[1], components[2]))
}
