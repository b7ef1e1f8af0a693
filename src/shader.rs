//! Shader program sources
//!
//! A [`ShaderProgramDesc`] names the source file of every stage together with
//! the attribute names bound to vertex inputs and fragment outputs.
//! [`load_program`] reads the sources and returns them in the order the stages
//! are attached to the program, ready to hand to the graphics API.

use crate::filesystem::FileSystem;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info_span, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
}

impl ShaderStage {
    pub fn gl_enum(&self) -> u32 {
        match self {
            ShaderStage::Vertex => 0x8B31,
            ShaderStage::Fragment => 0x8B30,
            ShaderStage::Geometry => 0x8DD9,
            ShaderStage::TessControl => 0x8E88,
            ShaderStage::TessEvaluation => 0x8E87,
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Geometry => "geometry",
            ShaderStage::TessControl => "tessellation control",
            ShaderStage::TessEvaluation => "tessellation evaluation",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum ShaderError {
    Io { path: PathBuf, source: io::Error },
    MissingStage(ShaderStage),
    Empty(PathBuf),
}

impl Error for ShaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            ShaderError::MissingStage(_) => None,
            ShaderError::Empty(_) => None,
        }
    }
}

impl Display for ShaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderError::Io { path, source } => {
                write!(f, "Unable to read shader {}: {source}", path.display())
            }
            ShaderError::MissingStage(stage) => write!(f, "Missing {stage} shader"),
            ShaderError::Empty(path) => write!(f, "Shader {} is empty", path.display()),
        }
    }
}

/// Which files make up a program and how its attributes are bound
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderProgramDesc {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    pub geometry: Option<PathBuf>,
    pub tess_control: Option<PathBuf>,
    pub tess_evaluation: Option<PathBuf>,
    /// Vertex attributes, bound to locations 0, 1, ...
    pub input_attributes: Vec<String>,
    /// Fragment outputs, bound to color numbers 0, 1, ...
    pub output_attributes: Vec<String>,
}

impl ShaderProgramDesc {
    pub fn new<V: Into<PathBuf>, F: Into<PathBuf>>(vertex: V, fragment: F) -> Self {
        ShaderProgramDesc {
            vertex: vertex.into(),
            fragment: fragment.into(),
            ..Default::default()
        }
    }

    pub fn with_geometry<P: Into<PathBuf>>(mut self, geometry: P) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    pub fn with_tessellation<C: Into<PathBuf>, E: Into<PathBuf>>(
        mut self,
        control: C,
        evaluation: E,
    ) -> Self {
        self.tess_control = Some(control.into());
        self.tess_evaluation = Some(evaluation.into());
        self
    }

    pub fn with_inputs<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.input_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outputs<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.output_attributes = names.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub path: PathBuf,
    pub source: String,
}

/// The loaded sources of a program
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderProgramSource {
    pub sources: Vec<ShaderSource>,
    pub input_attributes: Vec<String>,
    pub output_attributes: Vec<String>,
}

impl ShaderProgramSource {
    /// Stages in attach order: vertex, fragment, geometry, tessellation control and evaluation
    pub fn stages(&self) -> impl Iterator<Item = (ShaderStage, &str)> {
        self.sources.iter().map(|s| (s.stage, s.source.as_str()))
    }

    pub fn stage(&self, stage: ShaderStage) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.source.as_str())
    }

    pub fn attribute_locations(&self) -> impl Iterator<Item = (u32, &str)> {
        (0u32..).zip(self.input_attributes.iter().map(String::as_str))
    }

    pub fn fragment_outputs(&self) -> impl Iterator<Item = (u32, &str)> {
        (0u32..).zip(self.output_attributes.iter().map(String::as_str))
    }
}

/// Reads a whole shader file as text.
pub fn read_source(path: &Path, fs: &dyn FileSystem) -> Result<String, ShaderError> {
    let source = fs.read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if source.is_empty() {
        return Err(ShaderError::Empty(path.to_path_buf()));
    }
    Ok(source)
}

fn required(stage: ShaderStage, path: &Path) -> Result<&Path, ShaderError> {
    if path.as_os_str().is_empty() {
        Err(ShaderError::MissingStage(stage))
    } else {
        Ok(path)
    }
}

#[instrument(skip(desc, fs), fields(vertex = %desc.vertex.display()))]
pub fn load_program(
    desc: &ShaderProgramDesc,
    fs: &dyn FileSystem,
) -> Result<ShaderProgramSource, ShaderError> {
    let mut stages: Vec<(ShaderStage, &Path)> = vec![
        (ShaderStage::Vertex, required(ShaderStage::Vertex, &desc.vertex)?),
        (
            ShaderStage::Fragment,
            required(ShaderStage::Fragment, &desc.fragment)?,
        ),
    ];
    if let Some(geometry) = &desc.geometry {
        stages.push((ShaderStage::Geometry, geometry.as_path()));
    }
    match (&desc.tess_control, &desc.tess_evaluation) {
        (Some(control), Some(evaluation)) => {
            stages.push((ShaderStage::TessControl, control.as_path()));
            stages.push((ShaderStage::TessEvaluation, evaluation.as_path()));
        }
        (Some(path), None) | (None, Some(path)) => {
            warn!(
                "Ignoring tessellation shader {}, both control and evaluation stages are needed",
                path.display()
            );
        }
        (None, None) => {}
    }

    let mut sources = Vec::with_capacity(stages.len());
    for (stage, path) in stages {
        let _span = info_span!("read_stage", %stage).entered();
        let source = read_source(path, fs)?;
        sources.push(ShaderSource {
            stage,
            path: path.to_path_buf(),
            source,
        });
    }
    info!(
        "Loaded shader program with {} stages from {}",
        sources.len(),
        desc.vertex.display()
    );

    Ok(ShaderProgramSource {
        sources,
        input_attributes: desc.input_attributes.clone(),
        output_attributes: desc.output_attributes.clone(),
    })
}
