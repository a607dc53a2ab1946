// Archsim
// Copyright (C) 2026 Archsim contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enum representing the instruction-set architectures a simulation binary
/// can be built for. Exactly one of these is expected to be compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Isa {
    Sparc,
    Mips,
    Null,
    Arm,
    X86,
    Power,
    Riscv,
}

impl Isa {
    /// All supported ISAs in declaration order. Resolver output preserves
    /// this order regardless of how the build environment was populated.
    pub const ALL: [Isa; 7] = [Isa::Sparc, Isa::Mips, Isa::Null, Isa::Arm, Isa::X86, Isa::Power, Isa::Riscv];

    /// Converts a lowercase ISA name to an `Isa`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sparc" => Some(Self::Sparc),
            "mips" => Some(Self::Mips),
            "null" => Some(Self::Null),
            "arm" => Some(Self::Arm),
            "x86" => Some(Self::X86),
            "power" => Some(Self::Power),
            "riscv" => Some(Self::Riscv),
            _ => None,
        }
    }

    /// Converts an `Isa` to its lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Isa::Sparc => "sparc",
            Isa::Mips => "mips",
            Isa::Null => "null",
            Isa::Arm => "arm",
            Isa::X86 => "x86",
            Isa::Power => "power",
            Isa::Riscv => "riscv",
        }
    }

    /// The build-environment flag that marks this ISA as compiled in.
    pub fn build_flag(&self) -> &'static str {
        match self {
            Isa::Sparc => "USE_SPARC_ISA",
            Isa::Mips => "USE_MIPS_ISA",
            Isa::Null => "USE_NULL_ISA",
            Isa::Arm => "USE_ARM_ISA",
            Isa::X86 => "USE_X86_ISA",
            Isa::Power => "USE_POWER_ISA",
            Isa::Riscv => "USE_RISCV_ISA",
        }
    }
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
