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

/// Enum representing the cache-coherence protocols a simulation binary can
/// be built with. The build system selects exactly one via `PROTOCOL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoherenceProtocol {
    MiExample,
    ArmMoesiHammer,
    GarnetStandalone,
    MoesiCmpToken,
    MesiTwoLevel,
    MoesiAmdBase,
    MesiThreeLevelHtm,
    MesiThreeLevel,
    GpuViper,
    Chi,
}

impl CoherenceProtocol {
    /// Converts a lowercase protocol name to a `CoherenceProtocol`.
    ///
    /// Note the registered name for `ArmMoesiHammer` is `moesi_hammer`; the
    /// build system never prefixes it.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mi_example" => Some(Self::MiExample),
            "moesi_hammer" => Some(Self::ArmMoesiHammer),
            "garnet_standalone" => Some(Self::GarnetStandalone),
            "moesi_cmp_token" => Some(Self::MoesiCmpToken),
            "mesi_two_level" => Some(Self::MesiTwoLevel),
            "moesi_amd_base" => Some(Self::MoesiAmdBase),
            "mesi_three_level_htm" => Some(Self::MesiThreeLevelHtm),
            "mesi_three_level" => Some(Self::MesiThreeLevel),
            "gpu_viper" => Some(Self::GpuViper),
            "chi" => Some(Self::Chi),
            _ => None,
        }
    }

    /// Converts a `CoherenceProtocol` to its registered lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            CoherenceProtocol::MiExample => "mi_example",
            CoherenceProtocol::ArmMoesiHammer => "moesi_hammer",
            CoherenceProtocol::GarnetStandalone => "garnet_standalone",
            CoherenceProtocol::MoesiCmpToken => "moesi_cmp_token",
            CoherenceProtocol::MesiTwoLevel => "mesi_two_level",
            CoherenceProtocol::MoesiAmdBase => "moesi_amd_base",
            CoherenceProtocol::MesiThreeLevelHtm => "mesi_three_level_htm",
            CoherenceProtocol::MesiThreeLevel => "mesi_three_level",
            CoherenceProtocol::GpuViper => "gpu_viper",
            CoherenceProtocol::Chi => "chi",
        }
    }
}

impl fmt::Display for CoherenceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CoherenceProtocol; 10] = [
        CoherenceProtocol::MiExample,
        CoherenceProtocol::ArmMoesiHammer,
        CoherenceProtocol::GarnetStandalone,
        CoherenceProtocol::MoesiCmpToken,
        CoherenceProtocol::MesiTwoLevel,
        CoherenceProtocol::MoesiAmdBase,
        CoherenceProtocol::MesiThreeLevelHtm,
        CoherenceProtocol::MesiThreeLevel,
        CoherenceProtocol::GpuViper,
        CoherenceProtocol::Chi,
    ];

    #[test]
    fn test_from_name_valid() {
        assert_eq!(CoherenceProtocol::from_name("mi_example"), Some(CoherenceProtocol::MiExample));
        assert_eq!(CoherenceProtocol::from_name("moesi_hammer"), Some(CoherenceProtocol::ArmMoesiHammer));
        assert_eq!(CoherenceProtocol::from_name("mesi_two_level"), Some(CoherenceProtocol::MesiTwoLevel));
        assert_eq!(CoherenceProtocol::from_name("mesi_three_level"), Some(CoherenceProtocol::MesiThreeLevel));
        assert_eq!(CoherenceProtocol::from_name("mesi_three_level_htm"), Some(CoherenceProtocol::MesiThreeLevelHtm));
        assert_eq!(CoherenceProtocol::from_name("chi"), Some(CoherenceProtocol::Chi));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(CoherenceProtocol::from_name("CHI"), Some(CoherenceProtocol::Chi));
        assert_eq!(CoherenceProtocol::from_name("Mesi_Two_Level"), Some(CoherenceProtocol::MesiTwoLevel));
        assert_eq!(CoherenceProtocol::from_name("GPU_VIPER"), Some(CoherenceProtocol::GpuViper));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(CoherenceProtocol::from_name(""), None);
        assert_eq!(CoherenceProtocol::from_name("unknown_proto"), None);
        assert_eq!(CoherenceProtocol::from_name("mesi"), None);
        assert_eq!(CoherenceProtocol::from_name("arm_moesi_hammer"), None);
        assert_eq!(CoherenceProtocol::from_name("mesi_three_level_h"), None);
    }

    #[test]
    fn test_name_round_trip() {
        for protocol in ALL {
            assert_eq!(CoherenceProtocol::from_name(protocol.name()), Some(protocol));
        }
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(CoherenceProtocol::ArmMoesiHammer.to_string(), "moesi_hammer");
        assert_eq!(CoherenceProtocol::Chi.to_string(), "chi");
    }
}
