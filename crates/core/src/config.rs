//! Configuration system for the simulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** The classic geometry (256 × 256-byte pages, 256 frames, 16-entry TLB).
//! 2. **Structures:** Sectioned config for general, memory, TLB, and input settings.
//! 3. **Enums:** Replacement policy and malformed-line policy.
//! 4. **Validation:** Rejects geometries the address layout cannot express.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built from `Config::default()`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants;
use crate::common::{Result, VmError};

/// Replacement policy algorithms.
///
/// Selects which occupied slot (physical frame or TLB entry) is reclaimed when
/// a new one is needed and none are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// First In First Out replacement policy.
    ///
    /// Evicts the slot that was filled longest ago, regardless of use.
    #[default]
    #[serde(alias = "Fifo", alias = "fifo")]
    Fifo,
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the slot whose contents were translated least recently.
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
}

impl FromStr for ReplacementPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            other => Err(format!("unknown replacement policy '{other}' (expected fifo or lru)")),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
        })
    }
}

/// What the address reader does with a line that is not a valid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum MalformedLinePolicy {
    /// Stop the run with [`VmError::MalformedAddress`].
    #[default]
    #[serde(alias = "abort")]
    Abort,
    /// Log a warning and continue with the next line.
    #[serde(alias = "skip")]
    Skip,
}

impl FromStr for MalformedLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown malformed-line policy '{other}' (expected abort or skip)")),
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Config, ReplacementPolicy};
///
/// let json = r#"{
///     "memory": { "num_frames": 128, "policy": "LRU" },
///     "tlb": { "capacity": 8 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory.num_frames, 128);
/// assert_eq!(config.memory.page_size, 256);
/// assert_eq!(config.memory.policy, ReplacementPolicy::Lru);
/// assert_eq!(config.tlb.capacity, 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Address space, physical memory and frame replacement.
    pub memory: MemoryConfig,
    /// Translation lookaside buffer.
    pub tlb: TlbConfig,
    /// Address trace handling.
    pub input: InputConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a `debug` log event for every translation.
    pub trace_translations: bool,
}

/// Address space and physical memory geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Bytes per page and per frame (power of two).
    pub page_size: usize,
    /// Number of logical pages (power of two).
    pub num_pages: usize,
    /// Number of physical frames.
    pub num_frames: usize,
    /// Width of a logical address in the trace.
    pub address_bits: u32,
    /// Frame replacement policy used once every frame is occupied.
    pub policy: ReplacementPolicy,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            page_size: constants::PAGE_SIZE,
            num_pages: constants::NUM_PAGES,
            num_frames: constants::NUM_FRAMES,
            address_bits: constants::ADDRESS_BITS,
            policy: ReplacementPolicy::Fifo,
        }
    }
}

/// TLB configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TlbConfig {
    /// Number of entries; `0` disables the TLB.
    pub capacity: usize,
    /// Entry replacement policy.
    pub policy: ReplacementPolicy,
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            capacity: constants::TLB_CAPACITY,
            policy: ReplacementPolicy::Fifo,
        }
    }
}

/// Address trace handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Policy for lines that do not parse as an address.
    pub on_malformed: MalformedLinePolicy,
}

impl Config {
    /// Parses a JSON configuration; missing sections and fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| VmError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that the geometry is expressible by the address layout.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::InvalidConfig`] when the page size or page count is not a
    /// power of two, when there are no frames, or when page number and offset do not
    /// fit in `address_bits`.
    pub fn validate(&self) -> Result<()> {
        let mem = &self.memory;
        if !mem.page_size.is_power_of_two() {
            return Err(VmError::InvalidConfig(format!(
                "page_size must be a power of two, got {}",
                mem.page_size
            )));
        }
        if !mem.num_pages.is_power_of_two() {
            return Err(VmError::InvalidConfig(format!(
                "num_pages must be a power of two, got {}",
                mem.num_pages
            )));
        }
        if mem.num_frames == 0 {
            return Err(VmError::InvalidConfig("num_frames must be at least 1".into()));
        }
        if mem.address_bits == 0 || mem.address_bits > 64 {
            return Err(VmError::InvalidConfig(format!(
                "address_bits must be in 1..=64, got {}",
                mem.address_bits
            )));
        }
        let used = mem.page_size.trailing_zeros() + mem.num_pages.trailing_zeros();
        if used > mem.address_bits {
            return Err(VmError::InvalidConfig(format!(
                "page number and offset need {used} bits but addresses are {} bits wide",
                mem.address_bits
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address space contains {} pages of {} bytes.", self.memory.num_pages, self.memory.page_size)?;
        writeln!(f, "Physical memory contains {} frames.", self.memory.num_frames)?;
        writeln!(f, "Frames are replaced with {}.", self.memory.policy)?;
        if self.tlb.capacity == 0 {
            writeln!(f, "TLB is disabled in this configuration.")
        } else {
            writeln!(f, "TLB contains {} entries replaced with {}.", self.tlb.capacity, self.tlb.policy)
        }
    }
}
