use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::mount::MountSpec;

/// AlphaFold model parameter sets shipped in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    #[value(name = "model_1")]
    Model1,
    #[value(name = "model_2")]
    Model2,
    #[value(name = "model_3")]
    Model3,
    #[value(name = "model_4")]
    Model4,
    #[value(name = "model_5")]
    Model5,
}

impl Model {
    pub const ALL: [Model; 5] = [
        Model::Model1,
        Model::Model2,
        Model::Model3,
        Model::Model4,
        Model::Model5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Model1 => "model_1",
            Model::Model2 => "model_2",
            Model::Model3 => "model_3",
            Model::Model4 => "model_4",
            Model::Model5 => "model_5",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model/database configuration bundle, forwarded as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// No ensembling, uniref90 + bfd + uniclust30.
    #[default]
    #[value(name = "full_dbs")]
    FullDbs,
    /// 8 model ensemblings, uniref90 + bfd + uniclust30.
    #[value(name = "casp14")]
    Casp14,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::FullDbs => "full_dbs",
            Preset::Casp14 => "casp14",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing options for one prediction run.
#[derive(Debug, Clone)]
pub struct PlanInput {
    pub fasta_paths: Vec<PathBuf>,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub models: Vec<Model>,
    pub max_template_date: NaiveDate,
    pub preset: Preset,
    pub benchmark: bool,
}

/// A fully resolved container invocation, built once and run once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPlan {
    pub runtime: String,
    pub gpu: bool,
    pub mounts: Vec<MountSpec>,
    pub env: BTreeMap<String, String>,
    pub image: String,
    pub entrypoint: String,
    /// Flags for the entry point, already rewritten to container paths.
    pub flags: Vec<String>,
}
