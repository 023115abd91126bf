use super::{load_table, make_resolver};
use crate::cli::ResiduesArgs;
use crate::error::Result;

pub fn run(args: ResiduesArgs) -> Result<()> {
    let table = load_table(&args.source)?;
    let resolver = make_resolver(&table, &args.source);

    println!("{} residue(s) in table:", table.len());
    for (&code, amino_acid) in table.iter() {
        // Codes iterated out of the table always resolve.
        if let Ok(path) = resolver.code_to_file(code) {
            println!("  {}  {:<16} {}", code, amino_acid.name, path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SourceArgs;

    #[test]
    fn listing_the_standard_table_succeeds() {
        let args = ResiduesArgs {
            source: SourceArgs {
                geometry_dir: None,
                table: None,
            },
        };
        run(args).unwrap();
    }

    #[test]
    fn listing_a_custom_table_reads_the_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.toml");
        std::fs::write(&path, "X = { name = \"Unobtainium\" }\n").unwrap();

        let args = ResiduesArgs {
            source: SourceArgs {
                geometry_dir: None,
                table: Some(path),
            },
        };
        run(args).unwrap();
    }
}
