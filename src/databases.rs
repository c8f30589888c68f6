//! Fixed on-disk layout of the AlphaFold genetic and template databases.

use std::path::{Path, PathBuf};

/// A database path under the data directory. `name` doubles as the mount
/// name and as the flag passed to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Database {
    pub name: &'static str,
    /// Segments below the data directory. Empty means the directory itself.
    pub relative: &'static [&'static str],
}

impl Database {
    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        self.relative
            .iter()
            .fold(data_dir.to_path_buf(), |acc, seg| acc.join(seg))
    }
}

/// Every database flag, in the order it is passed.
pub const DATABASES: &[Database] = &[
    // JackHMMER
    Database {
        name: "uniref90_database_path",
        relative: &["uniref90", "uniref90.fasta"],
    },
    Database {
        name: "mgnify_database_path",
        relative: &["mgnify", "mgy_clusters.fa"],
    },
    // HHblits
    Database {
        name: "uniclust30_database_path",
        relative: &["uniclust30", "uniclust30_2018_08", "uniclust30_2018_08"],
    },
    Database {
        name: "bfd_database_path",
        relative: &[
            "bfd",
            "bfd_metaclust_clu_complete_id30_c90_final_seq.sorted_opt",
        ],
    },
    // HHsearch
    Database {
        name: "pdb70_database_path",
        relative: &["pdb70", "pdb70"],
    },
    Database {
        name: "data_dir",
        relative: &[],
    },
    // Directory of <pdb_id>.cif files.
    Database {
        name: "template_mmcif_dir",
        relative: &["pdb_mmcif", "mmcif_files"],
    },
    Database {
        name: "obsolete_pdbs_path",
        relative: &["pdb_mmcif", "obsolete.dat"],
    },
];

/// Resolve every database against `data_dir`, preserving order.
pub fn resolve_all(data_dir: &Path) -> Vec<(&'static str, PathBuf)> {
    DATABASES
        .iter()
        .map(|db| (db.name, db.resolve(data_dir)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_fixed() {
        let paths = resolve_all(Path::new("/db"));
        let expected = [
            ("uniref90_database_path", "/db/uniref90/uniref90.fasta"),
            ("mgnify_database_path", "/db/mgnify/mgy_clusters.fa"),
            (
                "uniclust30_database_path",
                "/db/uniclust30/uniclust30_2018_08/uniclust30_2018_08",
            ),
            (
                "bfd_database_path",
                "/db/bfd/bfd_metaclust_clu_complete_id30_c90_final_seq.sorted_opt",
            ),
            ("pdb70_database_path", "/db/pdb70/pdb70"),
            ("data_dir", "/db"),
            ("template_mmcif_dir", "/db/pdb_mmcif/mmcif_files"),
            ("obsolete_pdbs_path", "/db/pdb_mmcif/obsolete.dat"),
        ];
        assert_eq!(paths.len(), expected.len());
        for ((name, path), (want_name, want_path)) in paths.iter().zip(expected) {
            assert_eq!(*name, want_name);
            assert_eq!(path, Path::new(want_path));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = DATABASES.iter().map(|d| d.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DATABASES.len());
    }
}
