//! Runtime names for the four ownership policies.
//!
//! The buffer types are selected statically everywhere except at the
//! command line, where a [`Policy`] value picks the monomorphised code path.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the four buffer ownership disciplines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// [`DeepCopyBuffer`](crate::DeepCopyBuffer): exclusive, deep copies.
    DeepCopy,
    /// [`UniqueBuffer`](crate::UniqueBuffer): exclusive, move only.
    Unique,
    /// [`SharedBuffer`](crate::SharedBuffer): reference counted.
    Shared,
    /// [`ManualBuffer`](crate::ManualBuffer): exclusive, hand-managed.
    Manual,
}

/// What copying a buffer of a given policy produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopySemantics {
    /// A new block with equal contents.
    Deep,
    /// Another handle to the same block.
    Aliased,
    /// Copying does not compile.
    Forbidden,
}

impl Policy {
    /// All policies, in declaration order.
    pub const ALL: [Policy; 4] = [
        Policy::DeepCopy,
        Policy::Unique,
        Policy::Shared,
        Policy::Manual,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DeepCopy => "deep-copy",
            Self::Unique => "unique",
            Self::Shared => "shared",
            Self::Manual => "manual",
        }
    }

    /// What a copy of this policy's buffer means.
    pub fn copy_semantics(self) -> CopySemantics {
        match self {
            Self::DeepCopy | Self::Manual => CopySemantics::Deep,
            Self::Shared => CopySemantics::Aliased,
            Self::Unique => CopySemantics::Forbidden,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that names no [`Policy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePolicyError {
    input: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown buffer policy '{}': expected one of deep-copy, unique, shared, manual",
            self.input
        )
    }
}

impl Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deep-copy" | "deepcopy" | "deep" => Ok(Self::DeepCopy),
            "unique" | "move-only" => Ok(Self::Unique),
            "shared" | "rc" => Ok(Self::Shared),
            "manual" | "raw" => Ok(Self::Manual),
            _ => Err(ParsePolicyError {
                input: s.to_string(),
            }),
        }
    }
}
