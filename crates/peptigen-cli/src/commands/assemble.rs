use super::{load_table, make_resolver};
use crate::cli::AssembleArgs;
use crate::error::{CliError, Result};
use peptigen::assembly::ChainAssembler;
use peptigen::core::io::traits::MolecularFile;
use peptigen::core::io::xyz::XyzFile;
use tracing::{debug, info};

pub fn run(args: AssembleArgs) -> Result<()> {
    let table = load_table(&args.source)?;
    let resolver = make_resolver(&table, &args.source);
    debug!(
        "Resolving {} residue code(s) against '{}'.",
        args.peptide.chars().count(),
        resolver.xyz_dir().display()
    );

    let assembler = ChainAssembler::new(resolver);
    let mut chain = assembler.combine(&args.peptide)?;
    chain.set_descr(&args.peptide);
    info!(
        "Assembled '{}': {} residues, {} atoms, {} bonds.",
        args.peptide,
        chain.num_residues(),
        chain.num_atoms(),
        chain.bonds().len()
    );

    XyzFile::write_molecule_to_path(&chain, &args.output).map_err(|source| CliError::Output {
        path: args.output.clone(),
        source,
    })?;
    println!(
        "Wrote {} atoms to '{}'.",
        chain.num_atoms(),
        args.output.display()
    );
    Ok(())
}
