//! Loading a [DistributedFileSystem] from a YAML description.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    dfs::{DistributedFileSystem, LayoutError},
    host_info::HostInfo,
};

/// Errors which can occur while loading a layout.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Host of the filesystem.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HostLayout {
    pub name: String,
    /// Space available on the host before any file is registered.
    pub available_space: u64,
}

/// File stored in the filesystem.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileLayout {
    pub path: String,
    pub size: u64,
    /// Hosts storing each chunk of the file, see [DistributedFileSystem::add_file].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<Vec<String>>,
}

/// YAML representation of a [DistributedFileSystem].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FsLayout {
    pub chunk_size: u64,
    pub hosts: Vec<HostLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileLayout>,
}

impl FsLayout {
    /// Reads [FsLayout] from YAML file.
    pub fn from_yaml<P: AsRef<Path>>(file: P) -> Result<Self, LoadError> {
        Self::from_yaml_str(&std::fs::read_to_string(file)?)
    }

    /// Parses [FsLayout] from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Creates the filesystem with all described hosts and files.
    pub fn build(&self) -> Result<DistributedFileSystem, LayoutError> {
        if self.chunk_size == 0 {
            return Err(LayoutError::InvalidChunkSize);
        }
        let hosts = self
            .hosts
            .iter()
            .map(|host| (host.name.clone(), HostInfo::with_free_space(host.available_space)))
            .collect::<BTreeMap<_, _>>();
        let mut dfs = DistributedFileSystem::new(hosts, self.chunk_size);
        for file in self.files.iter() {
            dfs.add_file(&file.path, file.size, &file.chunks)?;
        }
        Ok(dfs)
    }
}
